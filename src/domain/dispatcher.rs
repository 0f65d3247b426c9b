//! Trait for handing validated submissions to the automation engine.

use crate::domain::entities::{DispatchOutcome, DispatchPayload};
use async_trait::async_trait;

/// Outbound seam to the downstream automation engine.
///
/// Implementations make at most one delivered call per payload and never
/// fail: every transport problem is folded into the returned
/// [`DispatchOutcome`]. They must be safe to call from many tasks at once.
///
/// # Implementations
///
/// - [`crate::infrastructure::dispatch::HttpDispatcher`] - JSON webhook over HTTP
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Dispatcher: Send + Sync {
    /// Sends `payload` and classifies the result.
    async fn dispatch(&self, payload: DispatchPayload) -> DispatchOutcome;
}
