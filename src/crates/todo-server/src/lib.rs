//! REST API for the todo tracker
//!
//! Serves paginated listing and CRUD over a [`db::TodoStore`]. The HTTP layer
//! in [`api`] only parses and renders; [`services`] owns validation and the
//! single store call behind each operation.

pub mod api;
pub mod config;
pub mod db;
pub mod services;
pub mod version;

pub use api::{build_app, create_router, ApiError, AppState};
pub use config::ServerConfig;
pub use db::{open_store, MemoryTodoStore, SharedStore, SqliteTodoStore, TodoStore};
pub use services::{ListingService, MutationService, ServiceError};
