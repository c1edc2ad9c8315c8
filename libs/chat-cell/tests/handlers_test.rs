use std::sync::Arc;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;
use serde_json::json;

use chat_cell::router::chat_routes;
use shared_utils::test_utils::TestConfig;

fn create_test_config() -> shared_config::AppConfig {
    TestConfig::default().to_app_config()
}

async fn post_json(app: axum::Router, uri: &str, body: serde_json::Value) -> axum::response::Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_chat_help_text() {
    let app = chat_routes(Arc::new(create_test_config()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/chat")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("POST"));
}

#[tokio::test]
async fn test_health_chat_rejects_missing_message() {
    let app = chat_routes(Arc::new(create_test_config()));

    let response = post_json(app, "/chat", json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert!(json["error"].as_str().is_some());
}

#[tokio::test]
async fn test_health_chat_rejects_empty_message() {
    let app = chat_routes(Arc::new(create_test_config()));

    let response = post_json(app, "/chat", json!({ "message": "" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert!(json["error"].as_str().is_some());
}

#[tokio::test]
async fn test_health_chat_rejects_non_string_message() {
    let app = chat_routes(Arc::new(create_test_config()));

    let response = post_json(app, "/chat", json!({ "message": 123 })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert!(json["error"].as_str().is_some());
}

#[tokio::test]
async fn test_health_chat_requires_api_key() {
    let mut config = create_test_config();
    config.perplexity_api_key = "".to_string();

    let app = chat_routes(Arc::new(config));

    let response = post_json(app, "/chat", json!({ "message": "What causes migraines?" })).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = response_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("PERPLEXITY_API"));
}

#[tokio::test]
async fn test_doctor_chat_requires_api_key() {
    let mut config = create_test_config();
    config.openai_api_key = "".to_string();

    let app = chat_routes(Arc::new(config));

    let response = post_json(app, "/chat-doctor", json!({ "message": "I have a headache" })).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = response_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("OPENAI_API_KEY"));
}

#[tokio::test]
async fn test_patient_chat_requires_api_key() {
    let mut config = create_test_config();
    config.openai_api_key = "".to_string();

    let app = chat_routes(Arc::new(config));

    let response = post_json(app, "/chat-patient", json!({ "message": "When is my appointment?" })).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = response_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("OPENAI_API_KEY"));
}

#[tokio::test]
async fn test_doctor_chat_rejects_empty_message() {
    let app = chat_routes(Arc::new(create_test_config()));

    let response = post_json(app, "/chat-doctor", json!({ "message": "   " })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_doctor_chat_reference_short_circuit_without_key() {
    // The curated-links reply is served before the provider client is built,
    // so it works even with no API key configured.
    let mut config = create_test_config();
    config.openai_api_key = "".to_string();

    let app = chat_routes(Arc::new(config));

    let response = post_json(
        app,
        "/chat-doctor",
        json!({ "message": "Could you share a LINK to read more?" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("MedlinePlus"));
}

#[tokio::test]
async fn test_chat_health_check_not_configured() {
    let mut config = create_test_config();
    config.openai_api_key = "".to_string();

    let app = chat_routes(Arc::new(config));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/chat/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["status"], "not_configured");
    assert_eq!(json["assistant_configured"], false);
    assert_eq!(json["research_configured"], true);
}

#[tokio::test]
async fn test_chat_health_check_configured() {
    let app = chat_routes(Arc::new(create_test_config()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/chat/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["assistant_configured"], true);
    assert_eq!(json["research_configured"], true);
}
