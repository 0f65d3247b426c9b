//! Handler for the root endpoint.

use axum::Json;

use crate::api::dto::service_info::{Endpoints, ServiceInfo};

/// Returns service metadata and the endpoint map.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: "Article Summarizer API",
        version: env!("CARGO_PKG_VERSION"),
        description: env!("CARGO_PKG_DESCRIPTION"),
        endpoints: Endpoints {
            health: "/health",
            submit: "/submit",
            docs: "/docs",
        },
    })
}
