//! Row model for the `todos` table

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use sqlx::FromRow;
use todo_core::{Todo, TodoStatus};
use uuid::Uuid;

use crate::db::error::DatabaseError;

/// Raw `todos` row as SQLite returns it
///
/// # Timestamps
/// Stored as fixed-width RFC 3339 strings with microsecond precision, so
/// lexical order in SQL matches chronological order.
#[derive(Debug, Clone, FromRow)]
pub struct TodoRow {
    pub seq: i64,
    pub id: String,
    pub title: String,
    pub description: String,
    pub activity: Option<String>,
    pub date: String,
    pub str_status: String,
    pub is_completed: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl TryFrom<TodoRow> for Todo {
    type Error = DatabaseError;

    fn try_from(row: TodoRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| DatabaseError::type_error(format!("Invalid id '{}': {}", row.id, e)))?;
        let status = row
            .str_status
            .parse::<TodoStatus>()
            .map_err(|e| DatabaseError::type_error(e.to_string()))?;

        Ok(Todo {
            id,
            title: row.title,
            description: row.description,
            activity: row.activity,
            date: row.date,
            status,
            is_completed: row.is_completed,
            created_at: parse_timestamp(&row.created_at)?,
            updated_at: parse_timestamp(&row.updated_at)?,
        })
    }
}

/// Current time at storage precision
///
/// Anything handed to a store should come from here, so the record returned
/// by a write equals the record read back later.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Storage representation of a timestamp
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a stored timestamp
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, DatabaseError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| DatabaseError::type_error(format!("Invalid timestamp '{}': {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> TodoRow {
        TodoRow {
            seq: 1,
            id: Uuid::new_v4().to_string(),
            title: "Title".to_string(),
            description: "Description".to_string(),
            activity: None,
            date: "2025-01-15".to_string(),
            str_status: "in-progress".to_string(),
            is_completed: true,
            created_at: "2025-01-15T09:30:00.000000Z".to_string(),
            updated_at: "2025-01-15T10:00:00.123456Z".to_string(),
        }
    }

    #[test]
    fn test_row_converts_to_todo() {
        let todo = Todo::try_from(row()).unwrap();
        assert_eq!(todo.status, TodoStatus::InProgress);
        assert!(todo.is_completed);
        assert_eq!(format_timestamp(todo.updated_at), "2025-01-15T10:00:00.123456Z");
    }

    #[test]
    fn test_row_with_unknown_status_is_rejected() {
        let mut bad = row();
        bad.str_status = "archived".to_string();
        assert!(Todo::try_from(bad).is_err());
    }

    #[test]
    fn test_timestamp_round_trip_at_storage_precision() {
        let ts = now();
        assert_eq!(parse_timestamp(&format_timestamp(ts)).unwrap(), ts);
    }

    #[test]
    fn test_formatted_timestamps_sort_chronologically() {
        let earlier = now();
        let later = earlier + chrono::Duration::milliseconds(1);
        assert!(format_timestamp(earlier) < format_timestamp(later));
    }
}
