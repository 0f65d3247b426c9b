//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`        - Service metadata
//! - `GET  /health`  - Liveness (never probes the automation engine)
//! - `POST /submit`  - Article submission
//! - `GET  /docs`    - OpenAPI description
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Browser frontend access, per `CORS_ALLOWED_ORIGINS`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and middleware, without path
/// normalization. Useful for in-process testing.
pub fn build_router(state: AppState, cors_origins: &[String]) -> Router {
    api::routes::public_routes()
        .with_state(state)
        .layer(cors::layer(cors_origins))
        .layer(tracing::layer())
}

/// Constructs the application router served by [`crate::server::run`].
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors_origins` - allowed browser origins; empty allows any origin
pub fn app_router(state: AppState, cors_origins: &[String]) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, cors_origins))
}
