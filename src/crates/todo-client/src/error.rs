//! Error types for the client

use thiserror::Error;

/// Result type for client operations
pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Errors a client call can end with
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure: connection refused, timeout, broken body
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP error! status: {status}: {message}")]
    Status { status: u16, message: String },

    /// The body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        ClientError::Status {
            status,
            message: message.into(),
        }
    }

    /// HTTP status of a `Status` error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = ClientError::status(404, "Todo not found");
        assert_eq!(err.to_string(), "HTTP error! status: 404: Todo not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_decode_from_serde() {
        let err: ClientError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ClientError::Decode(_)));
        assert_eq!(err.status_code(), None);
    }
}
