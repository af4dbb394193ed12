use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use bfhl_api_server::config::AppConfig;
use bfhl_api_server::features::ai::GeminiClient;
use bfhl_api_server::features::ops::{AnswerProvider, OpsService};
use bfhl_api_server::server::{AppState, build_router};

fn test_app(gemini_api_key: Option<&str>) -> Router {
    let config = Arc::new(AppConfig {
        host: "127.0.0.1".parse().expect("host"),
        port: 0,
        debug: false,
        use_https: false,
        official_email: Some("ops@example.com".to_string()),
        gemini_api_key: gemini_api_key.map(str::to_string),
        gemini_model: "gemma-3-12b-it".to_string(),
    });
    let provider: Arc<dyn AnswerProvider> =
        Arc::new(GeminiClient::new(config.clone()).expect("gemini client"));
    let ops = Arc::new(OpsService::new(config.clone(), provider));
    build_router(AppState::new(config, ops))
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("response body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

async fn post_bfhl(app: Router, content_type: Option<&str>, body: &str) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("POST").uri("/bfhl");
    if let Some(content_type) = content_type {
        builder = builder.header(CONTENT_TYPE, content_type);
    }
    let request = builder
        .body(Body::from(body.to_string()))
        .expect("request");

    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    (status, read_json(response).await)
}

#[tokio::test]
async fn health_returns_static_payload() {
    let app = test_app(None);
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .expect("request");

    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["status"], "OK");
    assert_eq!(body["is_success"], true);
    assert_eq!(body["official_email"], "ops@example.com");
}

#[tokio::test]
async fn non_json_content_type_is_unsupported_media_type() {
    let (status, body) = post_bfhl(test_app(None), Some("text/plain"), "{\"fibonacci\": 5}").await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body["is_success"], false);
    assert_eq!(body["error"], "Content-Type must be application/json");

    let (status, _) = post_bfhl(test_app(None), None, "{\"fibonacci\": 5}").await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn empty_object_body_is_bad_request() {
    let (status, body) = post_bfhl(test_app(None), Some("application/json"), "{}").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["is_success"], false);
    assert_eq!(body["error"], "Request body is empty");
}

#[tokio::test]
async fn undecodable_body_is_bad_request() {
    let (status, body) = post_bfhl(test_app(None), Some("application/json"), "{oops").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["is_success"], false);
}

#[tokio::test]
async fn negative_fibonacci_is_unprocessable() {
    let (status, body) = post_bfhl(
        test_app(None),
        Some("application/json"),
        "{\"fibonacci\": -1}",
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "fibonacci must be a non-negative integer");
}

#[tokio::test]
async fn fibonacci_happy_path() {
    let (status, body) = post_bfhl(
        test_app(None),
        Some("application/json; charset=utf-8"),
        "{\"fibonacci\": 5}",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_success"], true);
    assert_eq!(body["data"], json!([0, 1, 1, 2, 3]));
    assert_eq!(body["official_email"], "ops@example.com");
}

#[tokio::test]
async fn multi_key_payload_dispatches_by_priority() {
    let (status, body) = post_bfhl(
        test_app(None),
        Some("application/json"),
        "{\"prime\": [1, 2, 3], \"hcf\": [4, 6]}",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([2, 3]));
}

#[tokio::test]
async fn unrecognized_key_is_bad_request() {
    let (status, body) = post_bfhl(
        test_app(None),
        Some("application/json"),
        "{\"factorial\": 5}",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Request must contain exactly one of: fibonacci, prime, lcm, hcf, AI"
    );
}

#[tokio::test]
async fn ai_without_credential_is_service_unavailable() {
    let (status, body) = post_bfhl(
        test_app(None),
        Some("application/json"),
        "{\"AI\": \"What color is the sky?\"}",
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["is_success"], false);
    assert_eq!(body["error"], "Gemini API key not configured");
}
