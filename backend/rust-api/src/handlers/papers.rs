//! Paper generation and the handoff of generated papers to the test
//! screen, plus the used-question history behind deduplication.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::extractors::AppJson;
use crate::models::{GenerateQuestionsRequest, NeetPaperRequest};
use crate::services::{question_service::QuestionService, AppState};

use super::ApiError;

pub async fn generate_questions(
    State(state): State<Arc<AppState>>,
    AppJson(request): AppJson<GenerateQuestionsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!(
        "Generating paper: subject={}, chapters={}, topics={}, questions={}",
        request.subject,
        request.chapters.len(),
        request.topics.len(),
        request.num_questions
    );

    let service = QuestionService::new(state.backend.clone(), state.store.clone());
    match service.generate_questions(request).await {
        Ok(issued) => {
            let mut body = issued.paper;
            if let Value::Object(map) = &mut body {
                map.insert("testId".to_string(), json!(issued.test_id));
            }
            Ok((StatusCode::OK, Json(body)))
        }
        Err(e) => {
            tracing::error!("Failed to generate questions: {}", e);
            Err(ApiError::internal("Failed to generate questions"))
        }
    }
}

/// One-shot pickup of a paper stashed by `generate_questions`.
pub async fn get_test(
    State(state): State<Arc<AppState>>,
    Path(test_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let service = QuestionService::new(state.backend.clone(), state.store.clone());
    service
        .take_stashed_test(&test_id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Test not found"))
}

pub async fn generate_neet_paper(
    State(state): State<Arc<AppState>>,
    AppJson(request): AppJson<NeetPaperRequest>,
) -> Result<Json<Value>, ApiError> {
    tracing::info!(
        "Generating NEET paper for subjects={:?}",
        request.subjects.as_deref().unwrap_or_default()
    );

    let service = QuestionService::new(state.backend.clone(), state.store.clone());
    match service.generate_neet_paper(request.subjects).await {
        Ok(paper) => Ok(Json(paper)),
        Err(e) => {
            tracing::error!("Failed to generate NEET paper: {}", e);
            Err(ApiError::internal("Failed to generate NEET paper"))
        }
    }
}

/// GET variant serving the backend's canned NEET paper, kept for quick
/// manual testing.
pub async fn test_neet_paper(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    let service = QuestionService::new(state.backend.clone(), state.store.clone());
    match service.test_neet_paper().await {
        Ok(paper) => Ok(Json(paper)),
        Err(e) => {
            tracing::error!("Failed to fetch test NEET paper: {}", e);
            Err(ApiError::internal("Failed to generate test NEET paper"))
        }
    }
}

pub async fn used_questions(State(state): State<Arc<AppState>>) -> Json<Value> {
    let service = QuestionService::new(state.backend.clone(), state.store.clone());
    let ids = service.used_question_ids();
    Json(json!({ "count": ids.len(), "ids": ids }))
}

pub async fn reset_used_questions(State(state): State<Arc<AppState>>) -> StatusCode {
    tracing::info!("Resetting used-question history");

    let service = QuestionService::new(state.backend.clone(), state.store.clone());
    service.reset_used_questions();
    StatusCode::NO_CONTENT
}
