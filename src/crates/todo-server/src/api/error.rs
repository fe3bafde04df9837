//! API error types and HTTP response conversion
//!
//! Every failure leaving a handler goes through [`ApiError`], which renders the
//! JSON error body. Internal details are logged, never sent to the caller.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use todo_core::ErrorBody;

use crate::services::ServiceError;

/// Message returned for every internal failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

/// Custom API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    /// Malformed request (bad id, unreadable JSON)
    #[error("{0}")]
    BadRequest(String),

    /// Field validation failed
    #[error("{0}")]
    ValidationError(String),

    /// Internal server error; the payload is for logs only
    #[error("{0}")]
    InternalError(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code identifier
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::ValidationError(_) => "VALIDATION_ERROR",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the error type name
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "NotFound",
            ApiError::BadRequest(_) => "BadRequest",
            ApiError::ValidationError(_) => "ValidationError",
            ApiError::InternalError(_) => "InternalError",
        }
    }

    /// Message safe to show the caller
    pub fn public_message(&self) -> String {
        match self {
            ApiError::InternalError(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.error_type().to_string(),
            message: self.public_message(),
            code: self.code().to_string(),
        };

        if status.is_server_error() {
            tracing::error!(code = %body.code, "API Error: {}", self);
        } else {
            tracing::debug!(code = %body.code, "API Error: {}", self);
        }

        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(message) => ApiError::ValidationError(message),
            ServiceError::NotFound(_) => ApiError::NotFound("Todo not found".to_string()),
            ServiceError::Internal(source) => ApiError::InternalError(source.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DatabaseError;

    #[test]
    fn test_not_found_error() {
        let err = ApiError::NotFound("Todo not found".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "NOT_FOUND");
        assert_eq!(err.error_type(), "NotFound");
    }

    #[test]
    fn test_validation_error_is_bad_request() {
        let err: ApiError = ServiceError::validation("Title is required").into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(err.public_message(), "Title is required");
    }

    #[test]
    fn test_internal_error_hides_details() {
        let err: ApiError =
            ServiceError::Internal(DatabaseError::Unavailable("pool closed".to_string())).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), INTERNAL_ERROR_MESSAGE);
        assert!(err.to_string().contains("pool closed"));
    }

    #[test]
    fn test_service_not_found_maps_to_fixed_message() {
        let err: ApiError = ServiceError::not_found("abc").into();
        assert_eq!(err.public_message(), "Todo not found");
    }
}
