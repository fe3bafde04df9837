//! API response helpers
//!
//! Small constructors so handlers return the documented bodies with the right
//! status codes.

use axum::{http::StatusCode, Json};
use todo_core::{MessageResponse, Todo, TodoMessageResponse};

/// `{message, todo}` with the given status
pub fn todo_message(
    status: StatusCode,
    message: impl Into<String>,
    todo: Todo,
) -> (StatusCode, Json<TodoMessageResponse>) {
    (
        status,
        Json(TodoMessageResponse {
            message: message.into(),
            todo,
        }),
    )
}

/// 200 OK with `{message}`
pub fn message(message: impl Into<String>) -> (StatusCode, Json<MessageResponse>) {
    (StatusCode::OK, Json(MessageResponse::new(message)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_response() {
        let (status, Json(body)) = message("Todo deleted successfully");
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.message, "Todo deleted successfully");
    }
}
