//! Persistence adapter contract
//!
//! Services only see this trait. The handle is passed in explicitly
//! (`Arc<dyn TodoStore>`), so tests swap in [`MemoryTodoStore`] without
//! touching any global state.
//!
//! [`MemoryTodoStore`]: crate::db::repositories::MemoryTodoStore

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use todo_core::{Todo, TodoPatch};
use uuid::Uuid;

use crate::db::error::DbResult;

/// Shared store handle
pub type SharedStore = Arc<dyn TodoStore>;

/// Document-store style operations over the single `todos` collection
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Number of stored records
    async fn count(&self) -> DbResult<u64>;

    /// One page of records, newest first
    ///
    /// Records are ordered by `created_at` descending; records created at the
    /// same instant come back in reverse insertion order.
    async fn find_page(&self, skip: u64, limit: u32) -> DbResult<Vec<Todo>>;

    /// Persist a fully built record and return it as stored
    async fn insert(&self, todo: Todo) -> DbResult<Todo>;

    /// Merge `patch` into the record with `id` in a single write
    ///
    /// Returns the updated record, or `None` if no record has that id.
    async fn find_and_update(
        &self,
        id: Uuid,
        patch: &TodoPatch,
        now: DateTime<Utc>,
    ) -> DbResult<Option<Todo>>;

    /// Remove the record with `id`, returning it if it existed
    async fn find_and_delete(&self, id: Uuid) -> DbResult<Option<Todo>>;

    /// Cheap round trip to check the store is reachable
    async fn health_check(&self) -> DbResult<()> {
        self.count().await.map(|_| ())
    }
}
