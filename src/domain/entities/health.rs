//! Process liveness snapshot.

use chrono::{DateTime, Utc};

/// Health of this process, independent of the automation engine.
#[derive(Debug, Clone)]
pub struct HealthStatus {
    pub ready: bool,
    pub timestamp: DateTime<Utc>,
}

impl HealthStatus {
    /// A ready snapshot taken now.
    pub fn ready_now() -> Self {
        Self {
            ready: true,
            timestamp: Utc::now(),
        }
    }
}
