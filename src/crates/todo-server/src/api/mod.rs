//! HTTP API layer
//!
//! axum handlers, middleware, and error mapping over the listing and
//! mutation services.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod response;
pub mod routes;

pub use error::{ApiError, ApiResult};
pub use routes::{build_app, create_router, AppState};
