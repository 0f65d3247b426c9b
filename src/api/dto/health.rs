//! DTOs for health check endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::HealthStatus;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ready: bool,
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

impl From<HealthStatus> for HealthResponse {
    fn from(status: HealthStatus) -> Self {
        Self {
            ready: status.ready,
            status: if status.ready { "healthy" } else { "unavailable" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: status.timestamp,
        }
    }
}
