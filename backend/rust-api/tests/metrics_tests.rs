mod common;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serial_test::serial;
use tower::ServiceExt;

async fn fetch_metrics(auth_header: Option<&str>) -> (StatusCode, String) {
    let app = common::create_test_app();

    let mut builder = Request::builder().uri("/metrics");
    if let Some(value) = auth_header {
        builder = builder.header("authorization", value);
    }

    let response = app
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&body).to_string())
}

#[tokio::test]
#[serial]
async fn metrics_require_basic_auth() {
    let (status, _) = fetch_metrics(None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = fetch_metrics(Some("Bearer token")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // "wrong:creds"
    let (status, _) = fetch_metrics(Some("Basic d3Jvbmc6Y3JlZHM=")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial]
async fn metrics_are_served_with_default_credentials() {
    std::env::remove_var("METRICS_AUTH");

    // "admin:changeme"
    let (status, body) = fetch_metrics(Some("Basic YWRtaW46Y2hhbmdlbWU=")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("http_requests_total"));
}

#[tokio::test]
#[serial]
async fn metrics_credentials_come_from_the_environment() {
    std::env::set_var("METRICS_AUTH", "ops:secret");

    // "ops:secret"
    let (status, _) = fetch_metrics(Some("Basic b3BzOnNlY3JldA==")).await;
    assert_eq!(status, StatusCode::OK);

    // Default credentials no longer work
    let (status, _) = fetch_metrics(Some("Basic YWRtaW46Y2hhbmdlbWU=")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    std::env::remove_var("METRICS_AUTH");
}
