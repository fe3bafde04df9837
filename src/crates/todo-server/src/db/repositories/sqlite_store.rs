//! SQLite-backed task store

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use todo_core::{Todo, TodoPatch};
use uuid::Uuid;

use crate::db::connection::DatabaseConnection;
use crate::db::error::{DatabaseError, DbResult};
use crate::db::models::{format_timestamp, TodoRow};
use crate::db::store::TodoStore;

const COLUMNS: &str =
    "seq, id, title, description, activity, date, str_status, is_completed, created_at, updated_at";

/// Task store over a SQLite connection pool
#[derive(Clone, Debug)]
pub struct SqliteTodoStore {
    db: DatabaseConnection,
}

impl SqliteTodoStore {
    /// Wrap an existing connection; the schema must already be migrated
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Open `database_url` and run migrations
    pub async fn connect(database_url: &str, max_connections: u32) -> DbResult<Self> {
        let db = DatabaseConnection::with_max_connections(database_url, max_connections).await?;
        db.run_migrations().await?;
        Ok(Self::new(db))
    }

    /// Underlying connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl TodoStore for SqliteTodoStore {
    async fn count(&self) -> DbResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM todos")
            .fetch_one(self.db.pool())
            .await?;
        u64::try_from(count).map_err(|e| DatabaseError::type_error(e.to_string()))
    }

    async fn find_page(&self, skip: u64, limit: u32) -> DbResult<Vec<Todo>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM todos ORDER BY created_at DESC, seq DESC LIMIT ? OFFSET ?"
        );
        let rows = sqlx::query_as::<_, TodoRow>(&sql)
            .bind(i64::from(limit))
            .bind(i64::try_from(skip).unwrap_or(i64::MAX))
            .fetch_all(self.db.pool())
            .await?;

        rows.into_iter().map(Todo::try_from).collect()
    }

    async fn insert(&self, todo: Todo) -> DbResult<Todo> {
        let sql = format!(
            "INSERT INTO todos (id, title, description, activity, date, str_status, is_completed, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, TodoRow>(&sql)
            .bind(todo.id.to_string())
            .bind(&todo.title)
            .bind(&todo.description)
            .bind(&todo.activity)
            .bind(&todo.date)
            .bind(todo.status.as_str())
            .bind(todo.is_completed)
            .bind(format_timestamp(todo.created_at))
            .bind(format_timestamp(todo.updated_at))
            .fetch_one(self.db.pool())
            .await?;

        Todo::try_from(row)
    }

    async fn find_and_update(
        &self,
        id: Uuid,
        patch: &TodoPatch,
        now: DateTime<Utc>,
    ) -> DbResult<Option<Todo>> {
        let sql = format!(
            "UPDATE todos SET
                title = COALESCE(?, title),
                description = COALESCE(?, description),
                activity = CASE WHEN ? THEN ? ELSE activity END,
                date = COALESCE(?, date),
                str_status = COALESCE(?, str_status),
                is_completed = COALESCE(?, is_completed),
                updated_at = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, TodoRow>(&sql)
            .bind(patch.title.as_deref())
            .bind(patch.description.as_deref())
            .bind(patch.activity.is_some())
            .bind(patch.activity.as_ref().and_then(|a| a.as_deref()))
            .bind(patch.date.as_deref())
            .bind(patch.status.map(|s| s.as_str()))
            .bind(patch.is_completed)
            .bind(format_timestamp(now))
            .bind(id.to_string())
            .fetch_optional(self.db.pool())
            .await?;

        row.map(Todo::try_from).transpose()
    }

    async fn find_and_delete(&self, id: Uuid) -> DbResult<Option<Todo>> {
        let sql = format!("DELETE FROM todos WHERE id = ? RETURNING {COLUMNS}");
        let row = sqlx::query_as::<_, TodoRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(self.db.pool())
            .await?;

        row.map(Todo::try_from).transpose()
    }

    async fn health_check(&self) -> DbResult<()> {
        self.db.health_check().await
    }
}
