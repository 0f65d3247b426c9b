//! DTOs for the root endpoint.

use serde::Serialize;

/// Service name, version and endpoint map.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub health: &'static str,
    pub submit: &'static str,
    pub docs: &'static str,
}
