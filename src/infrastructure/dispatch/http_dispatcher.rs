//! JSON webhook client for the automation engine.
//!
//! Sends one POST per submission with a bounded timeout and classifies the
//! result. An optional retry policy covers only failures where the
//! connection was never established.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use url::Url;

use super::DispatchError;
use crate::domain::dispatcher::Dispatcher;
use crate::domain::entities::{DispatchOutcome, DispatchPayload};

/// Longest engine response body kept for logs.
const MAX_LOGGED_BODY: usize = 1024;

/// Longest pause between two connect retries.
const MAX_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Header carrying the correlation ID alongside the JSON body.
pub const CORRELATION_HEADER: &str = "x-correlation-id";

/// Settings for [`HttpDispatcher`].
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Webhook URL of the automation workflow.
    pub endpoint: Url,
    /// Upper bound on one attempt, connect through last response byte.
    pub timeout: Duration,
    /// Extra attempts allowed when the connection could not be established.
    pub connect_retries: usize,
    /// Base delay of the exponential backoff between connect retries.
    pub retry_base_delay: Duration,
    pub user_agent: String,
}

impl DispatchConfig {
    /// Single-attempt configuration with the default user agent.
    pub fn new(endpoint: Url, timeout: Duration) -> Self {
        Self {
            endpoint,
            timeout,
            connect_retries: 0,
            retry_base_delay: Duration::from_millis(200),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Reqwest-backed [`Dispatcher`].
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct HttpDispatcher {
    client: reqwest::Client,
    config: DispatchConfig,
}

impl HttpDispatcher {
    /// Builds the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Configuration`] if the client cannot be built.
    pub fn new(config: DispatchConfig) -> Result<Self, DispatchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout.min(Duration::from_secs(10)))
            .user_agent(config.user_agent.as_str())
            // A 3xx is the engine's answer, not a hop to follow.
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| DispatchError::Configuration {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// One HTTP round trip. Returns the 2xx status on success; any other
    /// status, redirects included, is a rejection.
    async fn send_once(&self, payload: &DispatchPayload) -> Result<u16, DispatchError> {
        let timeout_ms = self.config.timeout.as_millis();

        let response = self
            .client
            .post(self.config.endpoint.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(CORRELATION_HEADER, payload.correlation_id().to_string())
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "Webhook request failed");
                DispatchError::from_reqwest(&e, timeout_ms)
            })?;

        let status = response.status();

        // Drain the body so the pooled connection is released.
        let body = match response.bytes().await {
            Ok(bytes) if bytes.len() > MAX_LOGGED_BODY => {
                format!(
                    "{}... (truncated)",
                    String::from_utf8_lossy(&bytes[..MAX_LOGGED_BODY])
                )
            }
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => format!("[failed to read response body: {e}]"),
        };

        if status.is_success() {
            tracing::debug!(status = status.as_u16(), "Engine acknowledged submission");
            Ok(status.as_u16())
        } else {
            Err(DispatchError::Rejected {
                status_code: status.as_u16(),
                body,
            })
        }
    }
}

#[async_trait]
impl Dispatcher for HttpDispatcher {
    async fn dispatch(&self, payload: DispatchPayload) -> DispatchOutcome {
        let correlation_id = payload.correlation_id();
        let attempts = AtomicU32::new(0);
        let start = Instant::now();

        let base_ms = self.config.retry_base_delay.as_millis().max(1) as u64;
        let strategy = ExponentialBackoff::from_millis(2)
            .factor(base_ms / 2 + 1)
            .max_delay(MAX_RETRY_DELAY)
            .map(jitter)
            .take(self.config.connect_retries);

        let result = RetryIf::spawn(
            strategy,
            || {
                attempts.fetch_add(1, Ordering::Relaxed);
                self.send_once(&payload)
            },
            |e: &DispatchError| {
                let retry = e.is_retry_safe();
                if retry {
                    tracing::warn!(error = %e, "Engine unreachable, retrying");
                }
                retry
            },
        )
        .await;

        let latency = start.elapsed();
        let attempts = attempts.load(Ordering::Relaxed);

        let outcome = match result {
            Ok(status) => DispatchOutcome::delivered(correlation_id, status, latency),
            Err(e) => {
                if let DispatchError::Rejected { status_code, body } = &e {
                    tracing::warn!(status = status_code, body = %body, "Engine rejected submission");
                }
                DispatchOutcome::failed(correlation_id, e.kind(), latency)
            }
        }
        .with_attempts(attempts);

        metrics::counter!("dispatch_attempts_total", "outcome" => outcome.label()).increment(1);
        metrics::histogram!("dispatch_latency_seconds").record(latency.as_secs_f64());

        outcome
    }
}
