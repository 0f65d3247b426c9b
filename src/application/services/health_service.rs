//! Liveness reporting.

use crate::domain::entities::HealthStatus;

/// Reports whether this process can accept submissions.
///
/// Deliberately blind to the automation engine: an engine outage does not
/// stop this service from accepting, validating and attempting dispatch.
#[derive(Debug, Default, Clone, Copy)]
pub struct HealthService;

impl HealthService {
    pub fn new() -> Self {
        Self
    }

    /// Returns a fresh snapshot. Stateless and safe to call at any rate.
    pub fn report(&self) -> HealthStatus {
        HealthStatus::ready_now()
    }
}
