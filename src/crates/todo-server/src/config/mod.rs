//! Configuration module for todo-server
//!
//! TOML file plus environment overrides; see [`ServerConfig::load`].

pub mod server;

pub use server::{CorsConfig, DatabaseConfig, ServerConfig, ServerConfigError, ServerSection};
