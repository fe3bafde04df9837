//! Route definitions and application state

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use crate::api::handlers;
use crate::api::middleware::{cors_layer, logging_layer};
use crate::config::CorsConfig;
use crate::db::SharedStore;
use crate::services::{ListingService, MutationService};

/// Largest accepted request body
pub const BODY_LIMIT: usize = 10 * 1024 * 1024;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub listing: ListingService,
    pub mutations: MutationService,
    pub environment: Arc<str>,
}

impl AppState {
    /// Build both services over one store handle
    pub fn new(store: SharedStore, environment: impl Into<Arc<str>>) -> Self {
        Self {
            listing: ListingService::new(store.clone()),
            mutations: MutationService::new(store.clone()),
            store,
            environment: environment.into(),
        }
    }
}

/// Create the API router without middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/health", get(handlers::health_check))
        .route("/api/gettodos", get(handlers::list_todos))
        .route("/api/todos", post(handlers::create_todo))
        .route(
            "/api/todos/:id",
            put(handlers::update_todo).delete(handlers::delete_todo),
        )
        .with_state(state)
}

/// Router with body limit, request logging, and CORS applied
pub fn build_app(state: AppState, cors: &CorsConfig) -> Router {
    create_router(state)
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(logging_layer())
        .layer(cors_layer(&cors.allowed_origins))
}
