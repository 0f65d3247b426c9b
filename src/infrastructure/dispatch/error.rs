//! Transport-level errors of the webhook client.

use crate::domain::entities::DispatchErrorKind;
use thiserror::Error;

/// Failure of a single HTTP call to the automation engine.
#[derive(Debug, Clone, Error)]
pub enum DispatchError {
    /// Total request time exceeded the configured bound.
    #[error("request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u128 },

    /// TCP connection (or DNS lookup) failed; nothing was sent.
    #[error("connection failed: {message}")]
    Connect { message: String },

    /// Any other transport failure after the connection was set up.
    #[error("network error: {message}")]
    Network { message: String },

    /// Engine answered with a non-2xx status.
    #[error("engine rejected request: HTTP {status_code}")]
    Rejected { status_code: u16, body: String },

    /// HTTP client could not be built.
    #[error("invalid dispatch configuration: {message}")]
    Configuration { message: String },
}

impl DispatchError {
    /// Classifies a `reqwest` transport error.
    pub(crate) fn from_reqwest(e: &reqwest::Error, timeout_ms: u128) -> Self {
        if e.is_timeout() {
            Self::Timeout { timeout_ms }
        } else if e.is_connect() {
            Self::Connect {
                message: e.to_string(),
            }
        } else {
            Self::Network {
                message: e.to_string(),
            }
        }
    }

    /// True when the request provably never reached the engine, so sending
    /// it again cannot duplicate work downstream.
    pub fn is_retry_safe(&self) -> bool {
        matches!(self, Self::Connect { .. })
    }

    /// Maps the transport error onto the domain classification.
    pub fn kind(&self) -> DispatchErrorKind {
        match self {
            Self::Timeout { .. } => DispatchErrorKind::DownstreamTimeout,
            Self::Rejected { status_code, .. } => DispatchErrorKind::DownstreamRejected {
                http_status: *status_code,
            },
            Self::Connect { message } | Self::Network { message } => {
                DispatchErrorKind::DownstreamUnreachable {
                    reason: message.clone(),
                }
            }
            Self::Configuration { message } => DispatchErrorKind::DownstreamUnreachable {
                reason: message.clone(),
            },
        }
    }
}
