//! Database models
//!
//! The domain record lives in `todo_core`; this module only holds the
//! row shape and the timestamp encoding used by SQLite.

pub mod todo_row;

pub use todo_row::{format_timestamp, now, parse_timestamp, TodoRow};
