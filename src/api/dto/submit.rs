//! DTOs for the submission endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{CorrelationId, DispatchOutcome, SubmissionDraft};

/// Request to summarize one article.
///
/// Missing fields deserialize to empty strings so they are reported by
/// field-level validation rather than as a body parse failure.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    /// Article URL. `article_url` is accepted for older frontends.
    #[serde(default, alias = "article_url")]
    pub url: String,

    #[serde(default)]
    pub email: String,
}

impl From<SubmitRequest> for SubmissionDraft {
    fn from(req: SubmitRequest) -> Self {
        SubmissionDraft::new(req.url, req.email)
    }
}

/// Returned once the automation engine has acknowledged the submission.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    pub correlation_id: CorrelationId,
    pub latency_ms: u64,
}

impl From<DispatchOutcome> for SubmitResponse {
    fn from(outcome: DispatchOutcome) -> Self {
        Self {
            success: true,
            message: "Article submitted successfully. You'll receive the summary by email shortly."
                .to_string(),
            correlation_id: outcome.correlation_id,
            latency_ms: outcome.latency.as_millis() as u64,
        }
    }
}
