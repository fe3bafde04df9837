//! Sample records for a fresh store

use todo_core::{Todo, TodoStatus};
use tracing::info;
use uuid::Uuid;

use crate::db::error::DbResult;
use crate::db::models::now;
use crate::db::store::TodoStore;

const SAMPLES: [(&str, &str, &str); 2] = [
    (
        "Welcome to Todo App",
        "This is your first todo item. You can mark it as complete or delete it.",
        "Getting Started",
    ),
    (
        "Explore the Features",
        "Try adding new todos, marking them complete, and managing your tasks efficiently.",
        "Exploration",
    ),
];

/// Insert the sample records if the store is empty
///
/// Returns how many records were inserted.
pub async fn seed_sample_data(store: &dyn TodoStore) -> DbResult<usize> {
    if store.count().await? > 0 {
        return Ok(0);
    }

    let today = todo_core::today();
    for (title, description, activity) in SAMPLES {
        let ts = now();
        store
            .insert(Todo {
                id: Uuid::new_v4(),
                title: title.to_string(),
                description: description.to_string(),
                activity: Some(activity.to_string()),
                date: today.clone(),
                status: TodoStatus::Pending,
                is_completed: false,
                created_at: ts,
                updated_at: ts,
            })
            .await?;
    }

    info!(count = SAMPLES.len(), "Seeded sample todos");
    Ok(SAMPLES.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::MemoryTodoStore;

    #[tokio::test]
    async fn test_seeds_only_empty_store() {
        let store = MemoryTodoStore::new();
        assert_eq!(seed_sample_data(&store).await.unwrap(), 2);
        assert_eq!(seed_sample_data(&store).await.unwrap(), 0);
        assert_eq!(store.count().await.unwrap(), 2);
    }
}
