//! Liveness and health check handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use todo_core::{HealthResponse, StatusResponse};

use crate::api::routes::AppState;
use crate::version::VERSION;

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `GET /`: the process is up
pub async fn root(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        message: "Todo API is running!".to_string(),
        timestamp: timestamp(),
        environment: state.environment.to_string(),
    })
}

/// `GET /api/health`: probe the store
///
/// Returns 503 with the same body shape when the store cannot be reached.
pub async fn health_check(State(state): State<AppState>) -> Response {
    match state.store.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy".to_string(),
                database: "connected".to_string(),
                version: VERSION.to_string(),
                timestamp: timestamp(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy".to_string(),
                    database: "disconnected".to_string(),
                    version: VERSION.to_string(),
                    timestamp: timestamp(),
                }),
            )
                .into_response()
        }
    }
}
