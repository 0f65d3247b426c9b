#![allow(dead_code)]

use article_intake::infrastructure::dispatch::{DispatchConfig, HttpDispatcher};
use article_intake::routes::build_router;
use article_intake::state::AppState;
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const WEBHOOK_PATH: &str = "/webhook/summarize";

/// Starts a stub automation engine answering every POST with `response`.
pub async fn start_engine(response: ResponseTemplate) -> MockServer {
    let engine = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(WEBHOOK_PATH))
        .respond_with(response)
        .mount(&engine)
        .await;
    engine
}

pub fn webhook_url(engine: &MockServer) -> String {
    format!("{}{}", engine.uri(), WEBHOOK_PATH)
}

pub fn create_test_state(endpoint: &str, timeout: Duration) -> AppState {
    let config = DispatchConfig::new(endpoint.parse().unwrap(), timeout);
    let dispatcher = HttpDispatcher::new(config).unwrap();
    AppState::new(Arc::new(dispatcher))
}

pub fn create_test_server(endpoint: &str, timeout: Duration) -> TestServer {
    let state = create_test_state(endpoint, timeout);
    TestServer::new(build_router(state, &[])).unwrap()
}

pub fn valid_submission() -> Value {
    json!({
        "url": "https://example.com/articles/rust-async",
        "email": "reader@example.com"
    })
}

/// Bodies of every request the stub engine received, in arrival order.
pub async fn received_bodies(engine: &MockServer) -> Vec<Value> {
    engine
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|r| r.body_json::<Value>().unwrap())
        .collect()
}
