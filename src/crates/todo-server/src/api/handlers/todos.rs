//! Todo endpoint handlers

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use todo_core::{MessageResponse, NewTodo, TodoListResponse, TodoMessageResponse, TodoPatch};

use crate::api::error::ApiResult;
use crate::api::middleware::validate_todo_id;
use crate::api::models::TodoListQuery;
use crate::api::response;
use crate::api::routes::AppState;

/// `GET /api/gettodos?page&limit`
pub async fn list_todos(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Json<TodoListResponse>> {
    let query = TodoListQuery::from_pairs(pairs);
    let page = state.listing.list(query.page_request()).await?;
    Ok(Json(page.into()))
}

/// `POST /api/todos`
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<NewTodo>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TodoMessageResponse>)> {
    let Json(input) = payload?;
    let todo = state.mutations.create(input).await?;
    Ok(response::todo_message(
        StatusCode::CREATED,
        "Todo created successfully",
        todo,
    ))
}

/// `PUT /api/todos/:id`
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TodoPatch>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TodoMessageResponse>)> {
    let todo_id = validate_todo_id(&id)?;
    let Json(patch) = payload?;
    let todo = state.mutations.update(&todo_id.to_string(), patch).await?;
    Ok(response::todo_message(
        StatusCode::OK,
        "Todo updated successfully",
        todo,
    ))
}

/// `DELETE /api/todos/:id`
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let todo_id = validate_todo_id(&id)?;
    state.mutations.delete(&todo_id.to_string()).await?;
    Ok(response::message("Todo deleted successfully"))
}
