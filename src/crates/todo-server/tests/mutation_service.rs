use std::sync::Arc;

use todo_core::{NewTodo, TodoPatch, TodoStatus};
use todo_server::db::{MemoryTodoStore, TodoStore};
use todo_server::services::MutationService;

fn setup() -> (MutationService, Arc<MemoryTodoStore>) {
    let store = Arc::new(MemoryTodoStore::new());
    (MutationService::new(store.clone()), store)
}

#[tokio::test]
async fn test_create_applies_defaults() {
    let (service, _) = setup();
    let todo = service
        .create(NewTodo::new("  Buy milk ", "Two litres"))
        .await
        .unwrap();

    assert_eq!(todo.title, "Buy milk");
    assert_eq!(todo.status, TodoStatus::Pending);
    assert!(!todo.is_completed);
    assert_eq!(todo.date, todo_core::today());
    assert_eq!(todo.created_at, todo.updated_at);
    assert!(todo.activity.is_none());
}

#[tokio::test]
async fn test_create_keeps_supplied_fields() {
    let (service, _) = setup();
    let todo = service
        .create(
            NewTodo::new("Run", "5k")
                .with_activity("Fitness")
                .with_date("2024-03-01")
                .with_status(TodoStatus::InProgress),
        )
        .await
        .unwrap();

    assert_eq!(todo.activity.as_deref(), Some("Fitness"));
    assert_eq!(todo.date, "2024-03-01");
    assert_eq!(todo.status, TodoStatus::InProgress);
}

#[tokio::test]
async fn test_create_validation() {
    let (service, store) = setup();

    let err = service.create(NewTodo::new("", "desc")).await.unwrap_err();
    assert_eq!(err.to_string(), "Title is required");

    let err = service.create(NewTodo::new("Title", "  ")).await.unwrap_err();
    assert_eq!(err.to_string(), "Description is required");

    let err = service
        .create(NewTodo::new("x".repeat(201), "desc"))
        .await
        .unwrap_err();
    assert!(err.is_validation());

    assert!(service
        .create(NewTodo::new("x".repeat(200), "desc"))
        .await
        .is_ok());
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_update_only_touches_patched_fields() {
    let (service, _) = setup();
    let todo = service
        .create(NewTodo::new("Draft", "desc").with_activity("Work"))
        .await
        .unwrap();

    let updated = service
        .update(
            &todo.id.to_string(),
            TodoPatch::default().with_status(TodoStatus::Completed),
        )
        .await
        .unwrap();

    assert_eq!(updated.status, TodoStatus::Completed);
    assert!(!updated.is_completed);
    assert_eq!(updated.title, "Draft");
    assert_eq!(updated.activity.as_deref(), Some("Work"));
    assert_eq!(updated.created_at, todo.created_at);
    assert!(updated.updated_at >= todo.updated_at);
}

#[tokio::test]
async fn test_empty_patch_refreshes_timestamp() {
    let (service, _) = setup();
    let todo = service.create(NewTodo::new("Same", "desc")).await.unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let updated = service
        .update(&todo.id.to_string(), TodoPatch::default())
        .await
        .unwrap();

    assert_eq!(updated.title, todo.title);
    assert!(updated.updated_at > todo.updated_at);
}

#[tokio::test]
async fn test_toggle_flips_completion() {
    let (service, _) = setup();
    let todo = service.create(NewTodo::new("Flip", "desc")).await.unwrap();

    let once = service.toggle(&todo).await.unwrap();
    assert!(once.is_completed);
    let twice = service.toggle(&once).await.unwrap();
    assert!(!twice.is_completed);
}

#[tokio::test]
async fn test_missing_and_malformed_ids_are_not_found() {
    let (service, _) = setup();

    let err = service
        .update(&uuid::Uuid::new_v4().to_string(), TodoPatch::default())
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    assert!(service.delete("garbage").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_delete_removes_record() {
    let (service, store) = setup();
    let todo = service.create(NewTodo::new("Gone", "soon")).await.unwrap();

    let deleted = service.delete(&todo.id.to_string()).await.unwrap();
    assert_eq!(deleted.id, todo.id);
    assert_eq!(store.count().await.unwrap(), 0);
    assert!(service
        .delete(&todo.id.to_string())
        .await
        .unwrap_err()
        .is_not_found());
}
