//! HTTP-facing error type.
//!
//! Every failure a client can observe goes through [`AppError`], rendered as
//!
//! ```json
//! { "error": { "code": "validation_error", "message": "...", "details": {} } }
//! ```

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value, json};
use validator::ValidationErrors;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload shared by all error responses.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed input. Never reaches the dispatch stage.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// Engine answered with a non-success status.
    #[error("{message}")]
    DownstreamRejected { message: String, details: Value },

    /// Engine did not answer within the dispatch timeout.
    #[error("{message}")]
    DownstreamTimeout { message: String, details: Value },

    /// Engine could not be reached at all.
    #[error("{message}")]
    DownstreamUnreachable { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    /// Validation error for a single field.
    pub fn invalid_field(field: &str, reason: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert(field.to_string(), Value::String(reason.into()));
        Self::bad_request(
            format!("Invalid field(s): {field}"),
            json!({ "fields": fields }),
        )
    }

    pub fn downstream_rejected(message: impl Into<String>, details: Value) -> Self {
        Self::DownstreamRejected {
            message: message.into(),
            details,
        }
    }

    pub fn downstream_timeout(message: impl Into<String>, details: Value) -> Self {
        Self::DownstreamTimeout {
            message: message.into(),
            details,
        }
    }

    pub fn downstream_unreachable(message: impl Into<String>, details: Value) -> Self {
        Self::DownstreamUnreachable {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::DownstreamRejected { .. } | Self::DownstreamUnreachable { .. } => {
                StatusCode::BAD_GATEWAY
            }
            Self::DownstreamTimeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_error",
            Self::DownstreamRejected { .. } => "downstream_rejected",
            Self::DownstreamTimeout { .. } => "downstream_timeout",
            Self::DownstreamUnreachable { .. } => "downstream_unreachable",
            Self::Internal { .. } => "internal_error",
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (message, details) = match self {
            Self::Validation { message, details }
            | Self::DownstreamRejected { message, details }
            | Self::DownstreamTimeout { message, details }
            | Self::DownstreamUnreachable { message, details }
            | Self::Internal { message, details } => (message.clone(), details.clone()),
        };

        ErrorInfo {
            code: self.code(),
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut names: Vec<String> = Vec::new();
        let mut fields = Map::new();

        for (field, field_errors) in errors.field_errors() {
            let reason = field_errors
                .first()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .unwrap_or_else(|| "invalid".to_string());

            names.push(field.to_string());
            fields.insert(field.to_string(), Value::String(reason));
        }

        names.sort();

        Self::bad_request(
            format!("Invalid field(s): {}", names.join(", ")),
            json!({ "fields": fields }),
        )
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(
            "Malformed request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}
