//! Service-layer error taxonomy

use thiserror::Error;

use crate::db::DatabaseError;

/// Errors returned by the listing and mutation services
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Missing or invalid field; the caller can fix the request
    #[error("{0}")]
    Validation(String),

    /// Identifier does not resolve to a record (malformed ids included)
    #[error("Todo not found: {0}")]
    NotFound(String),

    /// Store failure or other unexpected condition
    #[error("Internal error: {0}")]
    Internal(#[from] DatabaseError),
}

impl ServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        ServiceError::Validation(message.into())
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        ServiceError::NotFound(id.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::NotFound(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ServiceError::Validation(_))
    }
}

/// Result type for service operations
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
