//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Returns process liveness.
///
/// # Endpoint
///
/// `GET /health`
///
/// Always **200 OK** while the process can answer. The automation engine is
/// not probed, so an engine outage never turns this red.
///
/// # Response
///
/// ```json
/// {
///   "ready": true,
///   "status": "healthy",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T12:00:00Z"
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(state.health_service.report().into())
}
