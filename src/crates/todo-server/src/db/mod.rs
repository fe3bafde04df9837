//! Persistence layer
//!
//! Provides the `TodoStore` contract, its SQLite and in-memory
//! implementations, connection management, and error handling.

pub mod connection;
pub mod error;
pub mod models;
pub mod repositories;
pub mod seed;
pub mod store;

pub use connection::{DatabaseConnection, DatabasePool};
pub use error::{DatabaseError, DbResult};
pub use repositories::{MemoryTodoStore, SqliteTodoStore};
pub use store::{SharedStore, TodoStore};

use std::sync::Arc;

/// Open the store named by `database_url`
///
/// `memory` selects [`MemoryTodoStore`]; anything else is handed to SQLite
/// and migrated.
pub async fn open_store(database_url: &str, max_connections: u32) -> DbResult<SharedStore> {
    if database_url.eq_ignore_ascii_case("memory") {
        tracing::info!("Using in-memory todo store");
        return Ok(Arc::new(MemoryTodoStore::new()));
    }

    let store = SqliteTodoStore::connect(database_url, max_connections).await?;
    Ok(Arc::new(store))
}
