mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_submit_success() {
    let engine = common::start_engine(ResponseTemplate::new(200)).await;
    let server = common::create_test_server(&common::webhook_url(&engine), Duration::from_secs(5));

    let response = server
        .post("/submit")
        .json(&common::valid_submission())
        .await;

    response.assert_status(StatusCode::ACCEPTED);

    let json = response.json::<Value>();
    assert_eq!(json["success"], true);
    let correlation_id = json["correlation_id"].as_str().unwrap();
    assert_eq!(correlation_id.len(), 36);

    let bodies = common::received_bodies(&engine).await;
    assert_eq!(bodies.len(), 1);
    assert_eq!(
        bodies[0],
        json!({
            "email": "reader@example.com",
            "url": "https://example.com/articles/rust-async",
            "sessionId": correlation_id,
        })
    );
}

#[tokio::test]
async fn test_submit_forwards_correlation_header() {
    let engine = common::start_engine(ResponseTemplate::new(202)).await;
    let server = common::create_test_server(&common::webhook_url(&engine), Duration::from_secs(5));

    let response = server
        .post("/submit")
        .json(&common::valid_submission())
        .await;
    response.assert_status(StatusCode::ACCEPTED);
    let correlation_id = response.json::<Value>()["correlation_id"]
        .as_str()
        .unwrap()
        .to_string();

    let requests = engine.received_requests().await.unwrap();
    let header = requests[0]
        .headers
        .get("x-correlation-id")
        .expect("correlation header");
    assert_eq!(header.to_str().unwrap(), correlation_id);
}

#[tokio::test]
async fn test_submit_ids_are_unique() {
    let engine = common::start_engine(ResponseTemplate::new(200)).await;
    let server = common::create_test_server(&common::webhook_url(&engine), Duration::from_secs(5));

    let mut ids = std::collections::HashSet::new();
    for _ in 0..20 {
        let response = server
            .post("/submit")
            .json(&common::valid_submission())
            .await;
        response.assert_status(StatusCode::ACCEPTED);
        let id = response.json::<Value>()["correlation_id"]
            .as_str()
            .unwrap()
            .to_string();
        assert!(ids.insert(id));
    }

    assert_eq!(common::received_bodies(&engine).await.len(), 20);
}

#[tokio::test]
async fn test_submit_accepts_article_url_alias() {
    let engine = common::start_engine(ResponseTemplate::new(200)).await;
    let server = common::create_test_server(&common::webhook_url(&engine), Duration::from_secs(5));

    let response = server
        .post("/submit")
        .json(&json!({
            "article_url": "https://example.com/legacy",
            "email": "reader@example.com"
        }))
        .await;

    response.assert_status(StatusCode::ACCEPTED);
    let bodies = common::received_bodies(&engine).await;
    assert_eq!(bodies[0]["url"], "https://example.com/legacy");
}

#[tokio::test]
async fn test_submit_invalid_email() {
    let engine = common::start_engine(ResponseTemplate::new(200)).await;
    let server = common::create_test_server(&common::webhook_url(&engine), Duration::from_secs(5));

    let response = server
        .post("/submit")
        .json(&json!({
            "url": "https://example.com",
            "email": "not-an-email"
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(json["error"]["details"]["fields"]["email"].is_string());
    assert!(json["error"]["details"]["fields"].get("url").is_none());
    assert!(common::received_bodies(&engine).await.is_empty());
}

#[tokio::test]
async fn test_submit_invalid_urls() {
    let engine = common::start_engine(ResponseTemplate::new(200)).await;
    let server = common::create_test_server(&common::webhook_url(&engine), Duration::from_secs(5));

    for url in ["ftp://x", "not a url", "javascript:alert(1)", "/relative/path"] {
        let response = server
            .post("/submit")
            .json(&json!({
                "url": url,
                "email": "reader@example.com"
            }))
            .await;

        response.assert_status_bad_request();

        let json = response.json::<Value>();
        assert_eq!(json["error"]["code"], "validation_error");
        assert!(
            json["error"]["details"]["fields"]["url"].is_string(),
            "url not named for {url}"
        );
    }

    assert!(common::received_bodies(&engine).await.is_empty());
}

#[tokio::test]
async fn test_submit_missing_fields() {
    let engine = common::start_engine(ResponseTemplate::new(200)).await;
    let server = common::create_test_server(&common::webhook_url(&engine), Duration::from_secs(5));

    let response = server.post("/submit").json(&json!({})).await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["message"], "Invalid field(s): email, url");
    assert!(common::received_bodies(&engine).await.is_empty());
}

#[tokio::test]
async fn test_submit_malformed_body() {
    let engine = common::start_engine(ResponseTemplate::new(200)).await;
    let server = common::create_test_server(&common::webhook_url(&engine), Duration::from_secs(5));

    let response = server.post("/submit").text("{not json").await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["error"]["code"],
        "validation_error"
    );
    assert!(common::received_bodies(&engine).await.is_empty());
}

#[tokio::test]
async fn test_submit_downstream_rejected() {
    let engine = common::start_engine(
        ResponseTemplate::new(500).set_body_string("Workflow could not be started"),
    )
    .await;
    let server = common::create_test_server(&common::webhook_url(&engine), Duration::from_secs(5));

    let response = server
        .post("/submit")
        .json(&common::valid_submission())
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "downstream_rejected");
    assert_eq!(json["error"]["details"]["status"], 500);
    assert_eq!(json["error"]["details"]["accepted"], true);
    assert_eq!(json["error"]["details"]["forwarded"], false);

    let correlation_id = json["error"]["details"]["correlation_id"].as_str().unwrap();
    let bodies = common::received_bodies(&engine).await;
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["sessionId"], correlation_id);
}

#[tokio::test]
async fn test_submit_downstream_redirect_is_rejected() {
    let engine = common::start_engine(
        ResponseTemplate::new(302).insert_header("location", "/moved"),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/moved"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&engine)
        .await;
    let server = common::create_test_server(&common::webhook_url(&engine), Duration::from_secs(5));

    let response = server
        .post("/submit")
        .json(&common::valid_submission())
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "downstream_rejected");
    assert_eq!(json["error"]["details"]["status"], 302);

    let requests = engine.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method.as_str(), "POST");
    assert_eq!(requests[0].url.path(), common::WEBHOOK_PATH);
}

#[tokio::test]
async fn test_submit_downstream_not_found() {
    let engine = common::start_engine(
        ResponseTemplate::new(404).set_body_string("workflow not active"),
    )
    .await;
    let server = common::create_test_server(&common::webhook_url(&engine), Duration::from_secs(5));

    let response = server
        .post("/submit")
        .json(&common::valid_submission())
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "downstream_rejected");
    assert_eq!(json["error"]["details"]["status"], 404);
    assert_eq!(json["error"]["details"]["attempts"], 1);
    assert_eq!(common::received_bodies(&engine).await.len(), 1);
}

#[tokio::test]
async fn test_submit_downstream_timeout() {
    let engine =
        common::start_engine(ResponseTemplate::new(200).set_delay(Duration::from_secs(10))).await;
    let server =
        common::create_test_server(&common::webhook_url(&engine), Duration::from_millis(300));

    let start = Instant::now();
    let response = server
        .post("/submit")
        .json(&common::valid_submission())
        .await;
    let elapsed = start.elapsed();

    response.assert_status(StatusCode::GATEWAY_TIMEOUT);
    assert!(elapsed >= Duration::from_millis(300));
    assert!(elapsed < Duration::from_secs(3), "took {elapsed:?}");

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "downstream_timeout");
    assert!(json["error"]["details"]["correlation_id"].is_string());
}

#[tokio::test]
async fn test_submit_downstream_unreachable() {
    let server = common::create_test_server("http://127.0.0.1:1/webhook", Duration::from_secs(2));

    let response = server
        .post("/submit")
        .json(&common::valid_submission())
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "downstream_unreachable");
    assert!(json["error"]["details"]["correlation_id"].is_string());
    assert_eq!(json["error"]["details"]["attempts"], 1);
}
