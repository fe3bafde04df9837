//! API request handlers

pub mod health;
pub mod todos;

pub use health::{health_check, root};
pub use todos::{create_todo, delete_todo, list_todos, update_todo};
