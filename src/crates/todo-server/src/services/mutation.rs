//! Create, update, toggle, and delete
//!
//! Every operation issues exactly one write against the store.

use todo_core::{NewTodo, Todo, TodoPatch};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::db::models::now;
use crate::db::SharedStore;
use crate::services::error::{ServiceError, ServiceResult};
use crate::services::validation::{
    optional_text, required_text, ACTIVITY_MAX, DESCRIPTION_MAX, TITLE_MAX,
};

/// Validated writes against the task store
#[derive(Clone)]
pub struct MutationService {
    store: SharedStore,
}

impl MutationService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Validate and persist a new record
    pub async fn create(&self, input: NewTodo) -> ServiceResult<Todo> {
        let title = required_text(input.title.as_deref(), "Title", TITLE_MAX)?;
        let description = required_text(input.description.as_deref(), "Description", DESCRIPTION_MAX)?;
        let activity = optional_text(input.activity.as_deref(), "Activity", ACTIVITY_MAX)?;
        let date = input
            .date
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(todo_core::today);

        let ts = now();
        let todo = Todo {
            id: Uuid::new_v4(),
            title,
            description,
            activity,
            date,
            status: input.status.unwrap_or_default(),
            is_completed: false,
            created_at: ts,
            updated_at: ts,
        };

        let created = self.store.insert(todo).await.map_err(|e| {
            error!("Error creating todo: {}", e);
            e
        })?;

        info!("Created todo: {}", created.id);
        Ok(created)
    }

    /// Shallow-merge `patch` into the record with `id`
    ///
    /// Malformed ids are reported as not found. Status and completion flag are
    /// written independently of each other.
    pub async fn update(&self, id: &str, patch: TodoPatch) -> ServiceResult<Todo> {
        let todo_id = parse_id(id)?;
        let patch = normalize_patch(patch)?;

        let updated = self
            .store
            .find_and_update(todo_id, &patch, now())
            .await
            .map_err(|e| {
                error!("Error updating todo {}: {}", todo_id, e);
                e
            })?
            .ok_or_else(|| {
                warn!("Todo not found for update: {}", id);
                ServiceError::not_found(id)
            })?;

        info!("Updated todo: {}", updated.id);
        Ok(updated)
    }

    /// Flip the completion flag of `todo` as the caller last saw it
    pub async fn toggle(&self, todo: &Todo) -> ServiceResult<Todo> {
        self.update(&todo.id.to_string(), TodoPatch::toggle(todo)).await
    }

    /// Remove the record with `id` and return it
    pub async fn delete(&self, id: &str) -> ServiceResult<Todo> {
        let todo_id = parse_id(id)?;

        let deleted = self
            .store
            .find_and_delete(todo_id)
            .await
            .map_err(|e| {
                error!("Error deleting todo {}: {}", todo_id, e);
                e
            })?
            .ok_or_else(|| {
                warn!("Todo not found for delete: {}", id);
                ServiceError::not_found(id)
            })?;

        info!("Deleted todo: {}", deleted.id);
        Ok(deleted)
    }
}

fn parse_id(id: &str) -> ServiceResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| ServiceError::not_found(id))
}

/// Apply the create-time field rules to whichever fields the patch carries
fn normalize_patch(patch: TodoPatch) -> ServiceResult<TodoPatch> {
    let title = patch
        .title
        .as_deref()
        .map(|t| required_text(Some(t), "Title", TITLE_MAX))
        .transpose()?;
    let description = patch
        .description
        .as_deref()
        .map(|d| required_text(Some(d), "Description", DESCRIPTION_MAX))
        .transpose()?;
    let activity = patch
        .activity
        .map(|a| optional_text(a.as_deref(), "Activity", ACTIVITY_MAX))
        .transpose()?;

    Ok(TodoPatch {
        title,
        description,
        activity,
        date: patch.date.map(|d| d.trim().to_string()),
        status: patch.status,
        is_completed: patch.is_completed,
    })
}
