mod common;

use article_intake::api::handlers::health_handler;
use axum::{Router, routing::get};
use axum_test::TestServer;
use std::time::Duration;

#[tokio::test]
async fn test_health_endpoint_success() {
    let state = common::create_test_state("http://127.0.0.1:1/webhook", Duration::from_secs(1));
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["ready"], true);
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let state = common::create_test_state("http://127.0.0.1:1/webhook", Duration::from_secs(1));
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("ready").is_some());
    assert!(json.get("version").is_some());
    assert!(json["timestamp"].is_string());
    assert!(
        chrono::DateTime::parse_from_rfc3339(json["timestamp"].as_str().unwrap()).is_ok()
    );
}

#[tokio::test]
async fn test_health_ignores_unreachable_engine() {
    // Nothing listens on port 1: the engine is down for the whole test.
    let server = common::create_test_server("http://127.0.0.1:1/webhook", Duration::from_secs(1));

    server
        .post("/submit")
        .json(&common::valid_submission())
        .await
        .assert_status(axum::http::StatusCode::BAD_GATEWAY);

    let response = server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["ready"], true);
}
