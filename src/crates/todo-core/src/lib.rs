//! Shared building blocks for the todo tracker
//!
//! This crate holds everything the server and the client must agree on:
//! - The task record and its status enum (`model`)
//! - Request and response bodies exchanged over HTTP (`wire`)
//! - Page/limit/skip arithmetic used by the list endpoint and the client (`pagination`)

pub mod model;
pub mod pagination;
pub mod wire;

pub use model::{NewTodo, ParseStatusError, Todo, TodoPatch, TodoStatus};
pub use pagination::{PageRequest, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use wire::{
    ErrorBody, HealthResponse, MessageResponse, StatusResponse, TodoListResponse,
    TodoMessageResponse,
};

/// Today's calendar date in UTC as `YYYY-MM-DD`
pub fn today() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}
