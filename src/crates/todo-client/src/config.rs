//! Client configuration
//!
//! ```rust,ignore
//! use todo_client::ClientConfig;
//!
//! let config = ClientConfig::from_env()
//!     .with_timeout(Duration::from_secs(5));
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{ClientError, ClientResult};

/// API root used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Environment variable that overrides the base URL
pub const BASE_URL_ENV: &str = "TODO_API_URL";

/// Configuration for [`crate::TodoApiClient`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API root, e.g. `http://localhost:3000/api`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout
    #[serde(default = "default_timeout")]
    pub timeout: Duration,

    /// User agent string
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            user_agent: Some(format!("todo-client/{}", env!("CARGO_PKG_VERSION"))),
        }
    }

    /// Defaults plus the `TODO_API_URL` override
    pub fn from_env() -> Self {
        Self::new().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`
    pub fn with_overrides<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(BASE_URL_ENV).filter(|url| !url.trim().is_empty()) {
            Some(url) => self.with_base_url(url),
            None => self,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Check that the base URL is an absolute http(s) URL
    pub fn validate(&self) -> ClientResult<()> {
        let url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| ClientError::Config(format!("invalid base URL '{}': {}", self.base_url, e)))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ClientError::Config(format!(
                "unsupported URL scheme '{}'",
                other
            ))),
        }
    }

    /// Join `path` onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_override() {
        let config = ClientConfig::new().with_overrides(|key| {
            (key == BASE_URL_ENV).then(|| "http://api.example.com/api/".to_string())
        });
        assert_eq!(config.endpoint("/todos"), "http://api.example.com/api/todos");
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let config = ClientConfig::new().with_overrides(|_| Some("  ".to_string()));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        assert!(ClientConfig::new().with_base_url("not a url").validate().is_err());
        assert!(ClientConfig::new()
            .with_base_url("ftp://example.com")
            .validate()
            .is_err());
    }
}
