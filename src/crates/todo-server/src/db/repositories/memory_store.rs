//! In-process task store
//!
//! Same ordering and merge semantics as the SQLite store. Used by tests and by
//! `DATABASE_URL=memory` for throwaway servers.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use todo_core::{Todo, TodoPatch};
use uuid::Uuid;

use crate::db::error::{DatabaseError, DbResult};
use crate::db::store::TodoStore;

#[derive(Debug, Default)]
struct Inner {
    next_seq: u64,
    records: Vec<(u64, Todo)>,
}

/// Task store kept in memory behind a lock
#[derive(Debug, Default)]
pub struct MemoryTodoStore {
    inner: RwLock<Inner>,
    unavailable: AtomicBool,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every operation fail as if the store were unreachable
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn ensure_available(&self) -> DbResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DatabaseError::Unavailable(
                "in-memory store marked unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn count(&self) -> DbResult<u64> {
        self.ensure_available()?;
        Ok(self.inner.read().records.len() as u64)
    }

    async fn find_page(&self, skip: u64, limit: u32) -> DbResult<Vec<Todo>> {
        self.ensure_available()?;
        let inner = self.inner.read();

        let mut ordered: Vec<&(u64, Todo)> = inner.records.iter().collect();
        ordered.sort_by(|(seq_a, a), (seq_b, b)| {
            b.created_at.cmp(&a.created_at).then(seq_b.cmp(seq_a))
        });

        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        Ok(ordered
            .into_iter()
            .skip(skip)
            .take(limit as usize)
            .map(|(_, todo)| todo.clone())
            .collect())
    }

    async fn insert(&self, todo: Todo) -> DbResult<Todo> {
        self.ensure_available()?;
        let mut inner = self.inner.write();

        if inner.records.iter().any(|(_, existing)| existing.id == todo.id) {
            return Err(DatabaseError::constraint(format!(
                "UNIQUE constraint failed: todos.id ({})",
                todo.id
            )));
        }

        inner.next_seq += 1;
        let seq = inner.next_seq;
        inner.records.push((seq, todo.clone()));
        Ok(todo)
    }

    async fn find_and_update(
        &self,
        id: Uuid,
        patch: &TodoPatch,
        now: DateTime<Utc>,
    ) -> DbResult<Option<Todo>> {
        self.ensure_available()?;
        let mut inner = self.inner.write();

        Ok(inner
            .records
            .iter_mut()
            .find(|(_, todo)| todo.id == id)
            .map(|(_, todo)| {
                patch.apply(todo, now);
                todo.clone()
            }))
    }

    async fn find_and_delete(&self, id: Uuid) -> DbResult<Option<Todo>> {
        self.ensure_available()?;
        let mut inner = self.inner.write();

        let position = inner.records.iter().position(|(_, todo)| todo.id == id);
        Ok(position.map(|index| inner.records.remove(index).1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::now;
    use todo_core::TodoStatus;

    fn todo_at(title: &str, created_at: DateTime<Utc>) -> Todo {
        Todo {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: "desc".to_string(),
            activity: None,
            date: "2025-01-15".to_string(),
            status: TodoStatus::Pending,
            is_completed: false,
            created_at,
            updated_at: created_at,
        }
    }

    #[tokio::test]
    async fn test_same_timestamp_newest_insert_first() {
        let store = MemoryTodoStore::new();
        let ts = now();
        store.insert(todo_at("first", ts)).await.unwrap();
        store.insert(todo_at("second", ts)).await.unwrap();

        let page = store.find_page(0, 10).await.unwrap();
        assert_eq!(page[0].title, "second");
        assert_eq!(page[1].title, "first");
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let store = MemoryTodoStore::new();
        let todo = todo_at("dup", now());
        store.insert(todo.clone()).await.unwrap();
        let err = store.insert(todo).await.unwrap_err();
        assert!(err.is_constraint_violation());
    }

    #[tokio::test]
    async fn test_unavailable_store_fails_every_call() {
        let store = MemoryTodoStore::new();
        store.set_unavailable(true);
        assert!(store.count().await.is_err());
        assert!(store.find_page(0, 10).await.is_err());
        assert!(store.health_check().await.is_err());

        store.set_unavailable(false);
        assert_eq!(store.count().await.unwrap(), 0);
    }
}
