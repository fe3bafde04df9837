//! Request validation helpers

use uuid::Uuid;

use crate::api::error::{ApiError, ApiResult};

/// Validate a path identifier before it reaches a service
pub fn validate_todo_id(value: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(value).map_err(|_| ApiError::BadRequest("Invalid todo ID".to_string()))
}
