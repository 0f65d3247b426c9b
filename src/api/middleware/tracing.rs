//! HTTP request/response tracing middleware.

use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnFailure, DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span};

/// Span factory recording method, path and client user agent.
///
/// The query string is left out: article URLs and mail addresses never
/// travel in it, but nothing else the frontend might add should be logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let user_agent = request
            .headers()
            .get(axum::http::header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            path = %request.uri().path(),
            version = ?request.version(),
            user_agent = %user_agent
        )
    }
}

/// Creates a tracing middleware for HTTP requests.
///
/// # Logging Behavior
///
/// - One `INFO` span per request (method, path, version, user agent)
/// - Response status and latency in milliseconds at `INFO`
/// - 5xx responses (engine rejected, unreachable or timed out) at `ERROR`
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST path=/submit version=HTTP/1.1 user_agent=Mozilla/5.0}: finished processing request latency=184 ms status=202
/// ERROR request{method=POST path=/submit version=HTTP/1.1 user_agent=-}: response failed classification=Status code: 504 Gateway Timeout latency=30002 ms
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RequestSpan> {
    TraceLayer::new_for_http()
        .make_span_with(RequestSpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}
