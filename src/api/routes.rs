//! API route configuration.

use crate::api::handlers::{docs_handler, health_handler, index_handler, submit_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public routes. No authentication; the webhook credentials stay server-side.
///
/// # Endpoints
///
/// - `GET  /`        - Service metadata
/// - `GET  /health`  - Process liveness
/// - `POST /submit`  - Validate and forward an article submission
/// - `GET  /docs`    - OpenAPI description
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/submit", post(submit_handler))
        .route("/docs", get(docs_handler))
}
