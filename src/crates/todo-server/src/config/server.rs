//! Server configuration for todo-server
//!
//! Loads an optional `todo-server.toml`, then applies environment overrides.
//! Every field has a default, so the server starts with no file at all.

use serde::{Deserialize, Serialize};
use std::net::Ipv6Addr;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Listener and runtime settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// Bind address
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Environment name reported by the liveness endpoint
    pub environment: String,
    /// Insert sample records into an empty store at startup
    pub seed_sample_data: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            environment: "development".to_string(),
            seed_sample_data: false,
        }
    }
}

/// Store settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite URL, or `memory` for the in-process store
    pub url: String,
    /// Pool size for file-backed SQLite
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://todos.db".to_string(),
            max_connections: 5,
        }
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Origins allowed to call the API with credentials
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:80".to_string(),
                "http://localhost:5173".to_string(),
            ],
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub server: ServerSection,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ServerConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ServerConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ServerConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from the default location, then the environment
    ///
    /// Searches for a file in:
    /// 1. `explicit` (the `--config` flag)
    /// 2. CONFIG_PATH environment variable
    /// 3. ./config/todo-server.toml
    /// 4. ./todo-server.toml
    ///
    /// Falls back to defaults when none exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ServerConfigError> {
        let from_env = std::env::var_os("CONFIG_PATH").map(PathBuf::from);
        let config = match explicit.map(Path::to_path_buf).or(from_env) {
            Some(path) => Self::from_file(path)?,
            None => {
                let candidates = [
                    PathBuf::from("config/todo-server.toml"),
                    PathBuf::from("todo-server.toml"),
                ];
                match candidates.iter().find(|p| p.exists()) {
                    Some(path) => Self::from_file(path)?,
                    None => Self::default(),
                }
            }
        };

        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup` (normally the process environment)
    ///
    /// Recognised keys: HOST, PORT, APP_ENV, SEED_SAMPLE_DATA, DATABASE_URL,
    /// CORS_ORIGIN (comma-separated).
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ServerConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| ServerConfigError::InvalidConfig(format!("PORT must be a valid u16, got '{}'", port)))?;
        }
        if let Some(env) = lookup("APP_ENV") {
            self.server.environment = env;
        }
        if let Some(seed) = lookup("SEED_SAMPLE_DATA") {
            self.server.seed_sample_data = parse_bool(&seed).ok_or_else(|| {
                ServerConfigError::InvalidConfig(format!("SEED_SAMPLE_DATA must be a boolean, got '{}'", seed))
            })?;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(origins) = lookup("CORS_ORIGIN") {
            self.cors.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect();
        }

        self.validate()?;
        Ok(self)
    }

    /// Reject settings the server cannot start with
    pub fn validate(&self) -> Result<(), ServerConfigError> {
        if self.database.url.trim().is_empty() {
            return Err(ServerConfigError::InvalidConfig("database.url cannot be empty".to_string()));
        }
        if self.database.max_connections == 0 {
            return Err(ServerConfigError::InvalidConfig(
                "database.max_connections must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Socket address string to bind
    ///
    /// IPv6 literals are bracketed; hostnames are left for the resolver.
    pub fn bind_address(&self) -> String {
        let host = self.server.host.trim();
        let bare = host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(host);
        if bare.parse::<Ipv6Addr>().is_ok() {
            format!("[{}]:{}", bare, self.server.port)
        } else {
            format!("{}:{}", host, self.server.port)
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
