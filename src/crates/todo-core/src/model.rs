//! Task record model
//!
//! JSON field names follow the public wire contract (`_id`, `strStatus`,
//! `isCompleted`, camelCase timestamps), so the same types serialize on the
//! server and deserialize on the client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Workflow status of a task
///
/// Independent of [`Todo::is_completed`]; nothing keeps the two in sync.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TodoStatus {
    /// Not started
    #[default]
    Pending,
    /// Being worked on
    InProgress,
    /// Finished
    Completed,
}

impl TodoStatus {
    /// Every accepted status, in display order
    pub const ALL: [TodoStatus; 3] = [
        TodoStatus::Pending,
        TodoStatus::InProgress,
        TodoStatus::Completed,
    ];

    /// Wire/storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Pending => "pending",
            TodoStatus::InProgress => "in-progress",
            TodoStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the three status values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid status '{0}', expected one of: pending, in-progress, completed")]
pub struct ParseStatusError(pub String);

impl FromStr for TodoStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TodoStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

/// A stored task record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Store-assigned identifier, never changes
    #[serde(rename = "_id")]
    pub id: Uuid,

    /// Trimmed title, 1-200 characters
    pub title: String,

    /// Trimmed description, 1-1000 characters
    pub description: String,

    /// Optional activity label, at most 100 characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,

    /// Calendar date string, `YYYY-MM-DD` unless the caller supplied something else
    pub date: String,

    /// Workflow status
    #[serde(rename = "strStatus", default)]
    pub status: TodoStatus,

    /// Completion flag
    #[serde(default)]
    pub is_completed: bool,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Copy of this record with the completion flag flipped
    ///
    /// Timestamps are left alone: this is what a client assumes the server did,
    /// not what the server reported.
    pub fn toggled(&self) -> Self {
        Self {
            is_completed: !self.is_completed,
            ..self.clone()
        }
    }
}

/// Candidate record for creation
///
/// Title and description are optional here so that a missing field reaches
/// validation instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(rename = "strStatus", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TodoStatus>,
}

impl NewTodo {
    /// Create a candidate with the two required fields
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            ..Self::default()
        }
    }

    /// Builder method to set the activity label
    pub fn with_activity(mut self, activity: impl Into<String>) -> Self {
        self.activity = Some(activity.into());
        self
    }

    /// Builder method to set the date
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Builder method to set the status
    pub fn with_status(mut self, status: TodoStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Partial field set for an update
///
/// Absent fields are left untouched by [`TodoPatch::apply`]. Unknown JSON
/// fields are ignored on deserialization. `activity` is the one nullable
/// field: an explicit `null` clears it, which is why it nests two options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub activity: Option<Option<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(rename = "strStatus", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TodoStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

// Only called for keys present in the input, so `null` becomes `Some(None)`
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl TodoPatch {
    /// Patch that flips only the completion flag of `todo`
    pub fn toggle(todo: &Todo) -> Self {
        Self {
            is_completed: Some(!todo.is_completed),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_activity(mut self, activity: impl Into<String>) -> Self {
        self.activity = Some(Some(activity.into()));
        self
    }

    /// Remove the activity label on apply
    pub fn clear_activity(mut self) -> Self {
        self.activity = Some(None);
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_status(mut self, status: TodoStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_completed(mut self, is_completed: bool) -> Self {
        self.is_completed = Some(is_completed);
        self
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.activity.is_none()
            && self.date.is_none()
            && self.status.is_none()
            && self.is_completed.is_none()
    }

    /// Shallow merge of the provided fields over `todo`
    ///
    /// Always refreshes `updated_at`, even for an empty patch.
    pub fn apply(&self, todo: &mut Todo, now: DateTime<Utc>) {
        if let Some(title) = &self.title {
            todo.title = title.clone();
        }
        if let Some(description) = &self.description {
            todo.description = description.clone();
        }
        if let Some(activity) = &self.activity {
            todo.activity = activity.clone();
        }
        if let Some(date) = &self.date {
            todo.date = date.clone();
        }
        if let Some(status) = self.status {
            todo.status = status;
        }
        if let Some(is_completed) = self.is_completed {
            todo.is_completed = is_completed;
        }
        todo.updated_at = now;
    }
}
