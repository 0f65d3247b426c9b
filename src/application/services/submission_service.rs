//! Submission intake and dispatch service.

use std::sync::Arc;

use serde_json::json;
use tracing::Instrument;

use crate::domain::dispatcher::Dispatcher;
use crate::domain::entities::{
    CorrelationId, DispatchErrorKind, DispatchOutcome, DispatchPayload, DispatchStatus,
    SubmissionDraft,
};
use crate::error::AppError;

/// Validates submissions and hands them to the automation engine.
///
/// Holds no per-request state; concurrent submissions share only the
/// dispatcher, which is itself safe for concurrent use.
pub struct SubmissionService {
    dispatcher: Arc<dyn Dispatcher>,
}

impl SubmissionService {
    /// Creates a new submission service.
    pub fn new(dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Accepts one submission: validate, issue a correlation ID, dispatch once.
    ///
    /// The dispatch runs in its own task. If the caller goes away, only this
    /// future is dropped; the spawned dispatch still runs to completion.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if a field is malformed (nothing is sent)
    /// - [`AppError::DownstreamRejected`] if the engine answered non-2xx
    /// - [`AppError::DownstreamTimeout`] if the engine did not answer in time
    /// - [`AppError::DownstreamUnreachable`] if the engine could not be reached
    /// - [`AppError::Internal`] if the dispatch task panicked
    ///
    /// Every dispatch error carries the correlation ID in its details.
    pub async fn submit(&self, draft: SubmissionDraft) -> Result<DispatchOutcome, AppError> {
        let submission = draft.into_submission()?;
        let correlation_id = CorrelationId::issue();

        let span = tracing::info_span!(
            "dispatch",
            correlation_id = %correlation_id,
            article_url = %submission.url()
        );

        tracing::info!(
            parent: &span,
            email = %submission.email(),
            "Forwarding article submission"
        );

        let payload = DispatchPayload::new(&submission, correlation_id);
        let dispatcher = Arc::clone(&self.dispatcher);

        let task = async move { dispatcher.dispatch(payload).await }.instrument(span.clone());

        let outcome = tokio::spawn(task)
            .await
            .map_err(|e| {
                tracing::error!(parent: &span, error = %e, "Dispatch task failed");
                AppError::internal(
                    "An unexpected error occurred. Please try again later.",
                    json!({ "correlation_id": correlation_id }),
                )
            })?;

        span.in_scope(|| classify(outcome))
    }
}

/// Turns a failed outcome into the matching [`AppError`].
fn classify(outcome: DispatchOutcome) -> Result<DispatchOutcome, AppError> {
    let latency_ms = outcome.latency.as_millis() as u64;
    let correlation_id = outcome.correlation_id;

    let kind = match &outcome.status {
        DispatchStatus::Delivered { http_status } => {
            tracing::info!(
                status = http_status,
                latency_ms,
                attempts = outcome.attempts,
                "Submission forwarded to automation engine"
            );
            return Ok(outcome);
        }
        DispatchStatus::Failed(kind) => kind,
    };

    let details = |extra: serde_json::Value| {
        let mut details = json!({
            "correlation_id": correlation_id,
            "accepted": true,
            "forwarded": false,
            "attempts": outcome.attempts,
        });
        if let (Some(map), serde_json::Value::Object(extra)) = (details.as_object_mut(), extra) {
            map.extend(extra);
        }
        details
    };

    let err = match kind {
        DispatchErrorKind::DownstreamRejected { http_status } => {
            tracing::error!(
                status = http_status,
                latency_ms,
                "Automation engine rejected submission"
            );
            AppError::downstream_rejected(
                "Failed to process article. Please try again later.",
                details(json!({ "status": http_status })),
            )
        }
        DispatchErrorKind::DownstreamTimeout => {
            tracing::error!(latency_ms, "Timed out waiting for automation engine");
            AppError::downstream_timeout(
                "Request timeout. Please try again later.",
                details(json!({})),
            )
        }
        DispatchErrorKind::DownstreamUnreachable { reason } => {
            tracing::error!(reason = %reason, latency_ms, "Automation engine unreachable");
            AppError::downstream_unreachable(
                "Service temporarily unavailable. Please try again later.",
                details(json!({})),
            )
        }
    };

    Err(err)
}
