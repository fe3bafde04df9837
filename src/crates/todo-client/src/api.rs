//! HTTP calls against the todo API
//!
//! One request per operation. No retry, no backoff: any transport failure or
//! non-success status comes back as a [`ClientError`].

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use todo_core::{
    ErrorBody, HealthResponse, MessageResponse, NewTodo, Todo, TodoListResponse,
    TodoMessageResponse, TodoPatch,
};
use tracing::debug;
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Remote operations the board depends on
#[async_trait]
pub trait TodoApi: Send + Sync {
    /// `GET /gettodos?page&limit`
    async fn list(&self, page: u32, limit: u32) -> ClientResult<TodoListResponse>;

    /// `POST /todos`, returning the stored record
    async fn create(&self, todo: &NewTodo) -> ClientResult<Todo>;

    /// `PUT /todos/:id`, returning the record as the server now has it
    async fn update(&self, id: Uuid, patch: &TodoPatch) -> ClientResult<Todo>;

    /// `DELETE /todos/:id`, returning the server's message
    async fn delete(&self, id: Uuid) -> ClientResult<String>;

    /// `GET /health`
    async fn health(&self) -> ClientResult<HealthResponse>;
}

/// reqwest-backed [`TodoApi`]
#[derive(Debug, Clone)]
pub struct TodoApiClient {
    config: ClientConfig,
    client: Client,
}

impl TodoApiClient {
    /// Create a client with the given configuration
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        config.validate()?;

        let mut builder = Client::builder().timeout(config.timeout);
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(ClientError::status(status.as_u16(), error_message(status, &bytes)));
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Server message from an error body, or the canonical reason
fn error_message(status: StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .map(|e| e.message)
        .unwrap_or_else(|_| status.canonical_reason().unwrap_or("Unknown error").to_string())
}

#[async_trait]
impl TodoApi for TodoApiClient {
    async fn list(&self, page: u32, limit: u32) -> ClientResult<TodoListResponse> {
        debug!(page, limit, "Fetching todos");
        let request = self
            .client
            .get(self.config.endpoint("gettodos"))
            .query(&[("page", page), ("limit", limit)]);
        self.send(request).await
    }

    async fn create(&self, todo: &NewTodo) -> ClientResult<Todo> {
        let request = self.client.post(self.config.endpoint("todos")).json(todo);
        let body: TodoMessageResponse = self.send(request).await?;
        Ok(body.todo)
    }

    async fn update(&self, id: Uuid, patch: &TodoPatch) -> ClientResult<Todo> {
        let request = self
            .client
            .put(self.config.endpoint(&format!("todos/{}", id)))
            .json(patch);
        let body: TodoMessageResponse = self.send(request).await?;
        Ok(body.todo)
    }

    async fn delete(&self, id: Uuid) -> ClientResult<String> {
        let request = self
            .client
            .delete(self.config.endpoint(&format!("todos/{}", id)));
        let body: MessageResponse = self.send(request).await?;
        Ok(body.message)
    }

    async fn health(&self) -> ClientResult<HealthResponse> {
        self.send(self.client.get(self.config.endpoint("health"))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_server_body() {
        let body = br#"{"error":"NotFound","message":"Todo not found","code":"NOT_FOUND"}"#;
        assert_eq!(error_message(StatusCode::NOT_FOUND, body), "Todo not found");
    }

    #[test]
    fn test_error_message_falls_back_to_reason() {
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, b"<html>oops</html>"),
            "Bad Gateway"
        );
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = ClientConfig::new().with_base_url("::::");
        assert!(matches!(TodoApiClient::new(config), Err(ClientError::Config(_))));
    }
}
