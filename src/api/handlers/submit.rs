//! Handler for the article submission endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::dto::submit::{SubmitRequest, SubmitResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Validates a submission and forwards it to the automation engine.
///
/// # Endpoint
///
/// `POST /submit`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/article", "email": "reader@example.com" }
/// ```
///
/// # Response Codes
///
/// - **202 Accepted**: Engine acknowledged the submission
/// - **400 Bad Request**: Malformed body or invalid field (nothing forwarded)
/// - **502 Bad Gateway**: Engine rejected the call or could not be reached
/// - **504 Gateway Timeout**: Engine did not answer in time
///
/// Every 5xx body includes `details.correlation_id`: the submission was
/// accepted here but not confirmed by the engine.
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "message": "Article submitted successfully. You'll receive the summary by email shortly.",
///   "correlation_id": "6f1c7a0e-3c0e-4d59-9a53-0f4c1f1f6b7e",
///   "latency_ms": 184
/// }
/// ```
pub async fn submit_handler(
    State(state): State<AppState>,
    payload: Result<Json<SubmitRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmitResponse>), AppError> {
    let Json(payload) = payload?;

    let outcome = state.submission_service.submit(payload.into()).await?;

    Ok((StatusCode::ACCEPTED, Json(outcome.into())))
}
