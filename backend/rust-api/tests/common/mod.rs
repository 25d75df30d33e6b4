#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use std::sync::Arc;
use tower::ServiceExt;

use examprep_api::{config::Config, create_router, services::AppState};

pub fn test_config(backend_url: &str) -> Config {
    Config {
        backend_url: backend_url.to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
    }
}

/// App wired to a backend nobody listens on, so every proxy call takes
/// the fallback path.
pub fn create_test_app() -> Router {
    create_test_app_with_backend("http://127.0.0.1:9")
}

pub fn create_test_app_with_backend(backend_url: &str) -> Router {
    // Initialize tracing for tests
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    let app_state = Arc::new(
        AppState::new(test_config(backend_url)).expect("Failed to initialize test app state"),
    );

    create_router(app_state)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    split_response(response).await
}

pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();
    split_response(response).await
}

pub async fn delete(app: Router, uri: &str) -> StatusCode {
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    response.status()
}

async fn split_response(
    response: axum::response::Response,
) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
    };
    (status, json)
}
