//! HTTP response bodies
//!
//! Field names are part of the public API; every struct here serializes to
//! the camelCase JSON that the endpoints return.

use serde::{Deserialize, Serialize};

use crate::model::Todo;

/// Body of `GET /api/gettodos`
///
/// Decoding is lenient: missing fields fall back to empty/zero so a client can
/// still render something from a partial response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoListResponse {
    #[serde(default)]
    pub todo_list: Vec<Todo>,
    #[serde(default)]
    pub num_of_pages: u64,
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub total_items: u64,
}

/// Body of a successful create or update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoMessageResponse {
    pub message: String,
    pub todo: Todo,
}

/// Body that carries only a message (delete)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of the liveness endpoint `GET /`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub message: String,
    pub timestamp: String,
    pub environment: String,
}

/// Body of `GET /api/health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status
    pub status: String,

    /// Store status
    pub database: String,

    /// Server version
    pub version: String,

    /// Current timestamp
    pub timestamp: String,
}

/// JSON body of every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error type identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Error code for programmatic handling
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_field_names() {
        let body = TodoListResponse {
            todo_list: vec![],
            num_of_pages: 2,
            current_page: 2,
            total_items: 15,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["numOfPages"], 2);
        assert_eq!(value["currentPage"], 2);
        assert_eq!(value["totalItems"], 15);
        assert!(value["todoList"].is_array());
    }

    #[test]
    fn test_list_response_lenient_decode() {
        let body: TodoListResponse = serde_json::from_str("{}").unwrap();
        assert!(body.todo_list.is_empty());
        assert_eq!(body.num_of_pages, 0);
    }
}
