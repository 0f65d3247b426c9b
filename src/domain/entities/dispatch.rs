//! Dispatch payload and outcome types.

use serde::Serialize;
use std::time::Duration;

use super::{CorrelationId, Submission};

/// JSON body sent to the automation engine.
///
/// Wire shape: `{ "email": ..., "url": ..., "sessionId": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchPayload {
    pub email: String,
    pub url: String,
    #[serde(rename = "sessionId")]
    pub session_id: CorrelationId,
}

impl DispatchPayload {
    pub fn new(submission: &Submission, correlation_id: CorrelationId) -> Self {
        Self {
            email: submission.email().to_string(),
            url: submission.url().to_string(),
            session_id: correlation_id,
        }
    }

    pub fn correlation_id(&self) -> CorrelationId {
        self.session_id
    }
}

/// Why a dispatch did not reach an acknowledging engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchErrorKind {
    /// Engine answered, but with a non-2xx status.
    DownstreamRejected { http_status: u16 },
    /// No response within the configured bound.
    DownstreamTimeout,
    /// DNS, connection or TLS failure.
    DownstreamUnreachable { reason: String },
}

impl DispatchErrorKind {
    /// Stable label used in logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::DownstreamRejected { .. } => "downstream_rejected",
            Self::DownstreamTimeout => "downstream_timeout",
            Self::DownstreamUnreachable { .. } => "downstream_unreachable",
        }
    }
}

/// Final state of a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchStatus {
    Delivered { http_status: u16 },
    Failed(DispatchErrorKind),
}

/// Result of handing one submission to the automation engine.
///
/// Built once per submission and consumed immediately to shape the HTTP
/// response. Never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub correlation_id: CorrelationId,
    pub status: DispatchStatus,
    pub latency: Duration,
    /// Connection attempts made. Greater than one only when a connect-retry
    /// policy is configured and the engine could not be reached at first.
    pub attempts: u32,
}

impl DispatchOutcome {
    pub fn delivered(correlation_id: CorrelationId, http_status: u16, latency: Duration) -> Self {
        Self {
            correlation_id,
            status: DispatchStatus::Delivered { http_status },
            latency,
            attempts: 1,
        }
    }

    pub fn failed(correlation_id: CorrelationId, kind: DispatchErrorKind, latency: Duration) -> Self {
        Self {
            correlation_id,
            status: DispatchStatus::Failed(kind),
            latency,
            attempts: 1,
        }
    }

    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }

    pub fn succeeded(&self) -> bool {
        matches!(self.status, DispatchStatus::Delivered { .. })
    }

    /// HTTP status returned by the engine, if it answered at all.
    pub fn http_status(&self) -> Option<u16> {
        match &self.status {
            DispatchStatus::Delivered { http_status }
            | DispatchStatus::Failed(DispatchErrorKind::DownstreamRejected { http_status }) => {
                Some(*http_status)
            }
            DispatchStatus::Failed(_) => None,
        }
    }

    pub fn error_kind(&self) -> Option<&DispatchErrorKind> {
        match &self.status {
            DispatchStatus::Delivered { .. } => None,
            DispatchStatus::Failed(kind) => Some(kind),
        }
    }

    /// Stable label used in logs and metrics.
    pub fn label(&self) -> &'static str {
        match &self.status {
            DispatchStatus::Delivered { .. } => "delivered",
            DispatchStatus::Failed(kind) => kind.label(),
        }
    }
}
