use std::net::SocketAddr;
use std::sync::Arc;

use todo_client::{
    notification_channel, ClientConfig, ClientError, Notification, TodoApi, TodoApiClient,
    TodoBoard,
};
use todo_core::{NewTodo, TodoPatch, TodoStatus};
use todo_server::api::{create_router, AppState};
use todo_server::db::MemoryTodoStore;
use tokio::sync::mpsc::UnboundedReceiver;

async fn spawn_server() -> (SocketAddr, Arc<MemoryTodoStore>) {
    let store = Arc::new(MemoryTodoStore::new());
    let app = create_router(AppState::new(store.clone(), "test"));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, store)
}

fn client(addr: SocketAddr) -> TodoApiClient {
    TodoApiClient::new(ClientConfig::new().with_base_url(format!("http://{}/api", addr))).unwrap()
}

async fn setup() -> (TodoBoard, TodoApiClient, UnboundedReceiver<Notification>, Arc<MemoryTodoStore>) {
    let (addr, store) = spawn_server().await;
    let api = client(addr);
    let (notifier, rx) = notification_channel();
    let board = TodoBoard::new(Arc::new(api.clone()), notifier).with_page(1, 10);
    (board, api, rx, store)
}

#[tokio::test]
async fn test_add_refetches_and_notifies() {
    let (board, _, mut rx, _) = setup().await;

    let created = board
        .add_todo(NewTodo::new("Buy milk", "Two litres").with_activity("Errands"))
        .await
        .unwrap();

    assert_eq!(board.todos(), vec![created.clone()]);
    assert_eq!(board.total_items(), 1);
    assert_eq!(board.num_of_pages(), 1);
    assert!(!board.is_adding());
    assert_eq!(
        rx.try_recv().unwrap(),
        Notification::success("New Todo added successfully")
    );
}

#[tokio::test]
async fn test_fifteen_records_second_page() {
    let (board, api, _rx, _) = setup().await;
    for i in 0..15 {
        api.create(&NewTodo::new(format!("Task {}", i), "desc"))
            .await
            .unwrap();
    }

    board.fetch_todos(2, 10).await.unwrap();
    let state = board.snapshot();
    assert_eq!(state.todos.len(), 5);
    assert_eq!(state.num_of_pages, 2);
    assert_eq!(state.page, 2);
    assert_eq!(state.total_items, 15);
}

#[tokio::test]
async fn test_zero_limit_matches_server_page_size() {
    let (board, api, _rx, _) = setup().await;
    for i in 0..12 {
        api.create(&NewTodo::new(format!("Task {}", i), "desc"))
            .await
            .unwrap();
    }

    board.fetch_todos(1, 0).await.unwrap();
    assert_eq!(board.limit(), 10);
    assert_eq!(board.todos().len(), 10);
    assert_eq!(board.num_of_pages(), 2);

    let only = board.todos()[0].id;
    board.delete_todo(only).await.unwrap();
    assert_eq!(board.limit(), 10);
    assert_eq!(board.todos().len(), 10);
    assert_eq!(board.total_items(), 11);
}

#[tokio::test]
async fn test_delete_last_item_on_page_clamps() {
    let (board, api, _rx, _) = setup().await;
    for i in 0..11 {
        api.create(&NewTodo::new(format!("Task {}", i), "desc"))
            .await
            .unwrap();
    }

    board.fetch_todos(2, 10).await.unwrap();
    let only = board.todos()[0].clone();
    board.delete_todo(only.id).await.unwrap();

    // Page 2 no longer exists; the board shows page 1 without its rows
    assert_eq!(board.page(), 1);
    assert_eq!(board.num_of_pages(), 1);
    assert!(board.todos().is_empty());

    board.refresh().await.unwrap();
    assert_eq!(board.todos().len(), 10);
}

#[tokio::test]
async fn test_toggle_patches_local_copy() {
    let (board, api, _rx, _) = setup().await;
    api.create(&NewTodo::new("Flip me", "desc")).await.unwrap();
    board.refresh().await.unwrap();

    let seen = board.todos()[0].clone();
    board.toggle_todo(&seen).await.unwrap();

    let local = board.todos()[0].clone();
    assert!(local.is_completed);
    assert_eq!(local.title, seen.title);
    assert_eq!(local.status, seen.status);
    assert_eq!(local.updated_at, seen.updated_at);

    let server = api.list(1, 10).await.unwrap();
    assert!(server.todo_list[0].is_completed);
}

#[tokio::test]
async fn test_update_merges_acknowledged_record() {
    let (board, api, _rx, _) = setup().await;
    api.create(&NewTodo::new("Draft", "desc")).await.unwrap();
    board.refresh().await.unwrap();
    let id = board.todos()[0].id;

    let updated = board
        .update_todo(id, TodoPatch::default().with_status(TodoStatus::InProgress))
        .await
        .unwrap();

    assert_eq!(updated.status, TodoStatus::InProgress);
    assert_eq!(board.todos()[0], updated);
}

#[tokio::test]
async fn test_server_errors_surface_as_notifications() {
    let (board, _, mut rx, _) = setup().await;

    let err = board
        .add_todo(NewTodo::new("   ", "desc"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(400));

    let err = board.delete_todo(uuid::Uuid::new_v4()).await.unwrap_err();
    assert!(err.is_not_found());

    let first = rx.try_recv().unwrap();
    assert!(first.is_error());
    assert!(first.message.contains("Title is required"));
    assert!(rx.try_recv().unwrap().message.contains("Todo not found"));
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_store_outage_is_reported() {
    let (board, _, mut rx, store) = setup().await;
    store.set_unavailable(true);

    let err = board.refresh().await.unwrap_err();
    assert_eq!(err.status_code(), Some(500));
    assert!(rx.try_recv().unwrap().message.contains("Internal server error"));
    assert!(!board.is_fetching());
}

#[tokio::test]
async fn test_health_and_unreachable_server() {
    let (_, api, _rx, store) = setup().await;
    let health = api.health().await.unwrap();
    assert_eq!(health.status, "healthy");

    store.set_unavailable(true);
    assert_eq!(api.health().await.unwrap_err().status_code(), Some(503));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let err = client(addr).health().await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}
