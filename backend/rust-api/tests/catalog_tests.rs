mod common;

use axum::http::StatusCode;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn subjects_fall_back_to_dummy_data() {
    let app = common::create_test_app();

    let (status, body) = common::get(app, "/api/subjects").await;

    assert_eq!(status, StatusCode::OK);
    let subjects = body.as_array().expect("subjects array");
    assert_eq!(subjects.len(), 4);
    assert_eq!(subjects[0]["id"], "physics");
    assert_eq!(subjects[0]["totalChapters"], 8);
    assert_eq!(subjects[3]["id"], "mathematics");
}

#[tokio::test]
async fn subjects_are_proxied_from_the_backend() {
    let server = MockServer::start().await;

    let backend_subjects = json!([
        { "name": "physics", "displayName": "Physics" },
        { "name": "botany", "displayName": "Botany" }
    ]);

    Mock::given(method("GET"))
        .and(path("/subjects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&backend_subjects))
        .mount(&server)
        .await;

    let app = common::create_test_app_with_backend(&server.uri());
    let (status, body) = common::get(app, "/api/subjects").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, backend_subjects);
}

#[tokio::test]
async fn backend_error_status_falls_back_too() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/subjects"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let app = common::create_test_app_with_backend(&server.uri());
    let (status, body) = common::get(app, "/api/subjects").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn chapters_fall_back_per_subject() {
    let (status, body) = common::get(common::create_test_app(), "/api/chapters/physics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(8));

    let (status, body) = common::get(common::create_test_app(), "/api/chapters/chemistry").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(6));

    // Unknown subjects are served as an empty list, not an error.
    let (status, body) = common::get(common::create_test_app(), "/api/chapters/history").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn chapters_are_proxied_from_the_backend() {
    let server = MockServer::start().await;

    let backend_chapters = json!([
        { "name": "mechanics", "displayName": "Mechanics" }
    ]);

    Mock::given(method("GET"))
        .and(path("/chapters/physics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&backend_chapters))
        .mount(&server)
        .await;

    let app = common::create_test_app_with_backend(&server.uri());
    let (status, body) = common::get(app, "/api/chapters/physics").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, backend_chapters);
}

#[tokio::test]
async fn topics_fall_back_per_chapter() {
    let (status, body) =
        common::get(common::create_test_app(), "/api/topics/biology/genetics").await;
    assert_eq!(status, StatusCode::OK);
    let topics = body.as_array().expect("topics array");
    assert_eq!(topics.len(), 5);
    assert_eq!(topics[0]["id"], "heredity");

    // Chapters without seeded topics are an empty list.
    let (status, body) =
        common::get(common::create_test_app(), "/api/topics/physics/optics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn health_degrades_when_backend_is_down() {
    let app = common::create_test_app();

    let (status, body) = common::get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["service"], "examprep-api");
    assert_eq!(body["dependencies"]["question_backend"]["status"], "unhealthy");
}

#[tokio::test]
async fn health_is_healthy_with_reachable_backend() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({ "status": "ok" })))
        .mount(&server)
        .await;

    let app = common::create_test_app_with_backend(&server.uri());
    let (status, body) = common::get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["dependencies"]["question_backend"]["status"], "healthy");
}
