//! End-to-end contract tests for the echo service API.

use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_echo_valid_message() {
    let addr = common::spawn_server().await;
    let client = common::client();

    let res = client
        .post(format!("http://{}/echo", addr))
        .json(&json!({"message": "Hello, World!"}))
        .send()
        .await
        .expect("server unreachable");

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["echo"], "Hello, World!");
    assert_eq!(body["length"], 13);
    assert!(body["timestamp"].is_f64());
}

#[tokio::test]
async fn test_echo_identity_preserves_input_exactly() {
    let addr = common::spawn_server().await;
    let client = common::client();

    // Padded and multibyte inputs must come back byte-for-byte
    for message in ["a", "  padded  ", "héllo wörld", "line1\nline2"] {
        let res = client
            .post(format!("http://{}/echo", addr))
            .json(&json!({ "message": message }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 200);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["echo"], message);
        assert_eq!(body["length"], message.chars().count());
    }
}

#[tokio::test]
async fn test_echo_empty_message_is_structural() {
    let addr = common::spawn_server().await;
    let client = common::client();

    let res = client
        .post(format!("http://{}/echo", addr))
        .json(&json!({"message": ""}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 422);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status_code"], 422);
    assert!(body["detail"].is_array());
}

#[tokio::test]
async fn test_echo_whitespace_message_is_semantic() {
    let addr = common::spawn_server().await;
    let client = common::client();

    let res = client
        .post(format!("http://{}/echo", addr))
        .json(&json!({"message": "   "}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("cannot be empty"));
    assert_eq!(body["status_code"], 400);
}

#[tokio::test]
async fn test_echo_message_at_limit_is_valid() {
    let addr = common::spawn_server().await;
    let client = common::client();

    let message = "a".repeat(500);
    let res = client
        .post(format!("http://{}/echo", addr))
        .json(&json!({ "message": message }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["length"], 500);
}

#[tokio::test]
async fn test_echo_long_message_is_structural() {
    let addr = common::spawn_server().await;
    let client = common::client();

    let message = "a".repeat(501);
    let res = client
        .post(format!("http://{}/echo", addr))
        .json(&json!({ "message": message }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 422);
    let body: Value = res.json().await.unwrap();
    let detail = body["detail"].as_array().unwrap();
    assert_eq!(detail[0]["loc"], json!(["body", "message"]));
}

#[tokio::test]
async fn test_echo_missing_message_field() {
    let addr = common::spawn_server().await;
    let client = common::client();

    let res = client
        .post(format!("http://{}/echo", addr))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 422);
    let body: Value = res.json().await.unwrap();
    assert!(body["detail"].is_array());
}

#[tokio::test]
async fn test_echo_malformed_json_is_structural() {
    let addr = common::spawn_server().await;
    let client = common::client();

    let res = client
        .post(format!("http://{}/echo", addr))
        .header("Content-Type", "application/json")
        .body("not json")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 422);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status_code"], 422);
    assert!(body["detail"].is_array());
}

#[tokio::test]
async fn test_echo_is_idempotent() {
    let addr = common::spawn_server().await;
    let client = common::client();

    for _ in 0..3 {
        let res = client
            .post(format!("http://{}/echo", addr))
            .json(&json!({"message": "Hello, World!"}))
            .send()
            .await
            .unwrap();
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["echo"], "Hello, World!");
    }
}

#[tokio::test]
async fn test_echo_simple_mode() {
    let addr = common::spawn_server().await;
    let client = common::client();

    let res = client
        .post(format!("http://{}/v1/echo", addr))
        .json(&json!({"message": "Hello, World!"}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"message": "Hello, World!"}));
}

#[tokio::test]
async fn test_echo_simple_mode_shares_validation_contract() {
    let addr = common::spawn_server().await;
    let client = common::client();

    let res = client
        .post(format!("http://{}/v1/echo", addr))
        .json(&json!({"message": "   "}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);

    let res = client
        .post(format!("http://{}/v1/echo", addr))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 422);
}

#[tokio::test]
async fn test_root_returns_ok() {
    let addr = common::spawn_server().await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert!(body.get("message").is_some());
}

#[tokio::test]
async fn test_root_sends_cors_headers() {
    let addr = common::spawn_server().await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/", addr))
        .header("Origin", "http://localhost:3000")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    assert!(res.headers().contains_key("access-control-allow-origin"));
}

#[tokio::test]
async fn test_health_check() {
    let addr = common::spawn_server().await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/health", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_f64());
    assert_eq!(body["version"], "1.0.0");
}

#[tokio::test]
async fn test_get_version() {
    let addr = common::spawn_server().await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/version", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["version"], "1.0.0");
    assert!(body["name"].is_string());
}

#[tokio::test]
async fn test_version_reflects_configured_settings() {
    use clap::Parser;
    let settings = echo_service::config::Settings::parse_from([
        "echo-service",
        "--app-name",
        "Contract Test",
        "--app-version",
        "2.3.4",
    ]);
    let addr = common::spawn_server_with(settings).await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/version", addr))
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["version"], "2.3.4");
    assert_eq!(body["name"], "Contract Test");

    let res = client
        .get(format!("http://{}/health", addr))
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["version"], "2.3.4");
}

#[tokio::test]
async fn test_simulated_error() {
    let addr = common::spawn_server().await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/error", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 500);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "This is a simulated error");
    assert_eq!(body["status_code"], 500);
}

#[tokio::test]
async fn test_not_found_is_enveloped() {
    let addr = common::spawn_server().await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/nonexistent", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 404);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status_code"], 404);
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let addr = common::spawn_server().await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/health", addr))
        .send()
        .await
        .unwrap();
    assert!(res.headers().contains_key("x-request-id"));

    // Client-supplied IDs are preserved
    let res = client
        .get(format!("http://{}/health", addr))
        .header("x-request-id", "test-correlation-id")
        .send()
        .await
        .unwrap();
    assert_eq!(
        res.headers().get("x-request-id").unwrap(),
        "test-correlation-id"
    );
}
