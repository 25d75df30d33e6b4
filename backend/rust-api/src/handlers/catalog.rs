//! Subject / chapter / topic listings, proxied from the question
//! backend with the dummy catalog as a safety net.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::services::{question_service::QuestionService, AppState};

pub async fn list_subjects(State(state): State<Arc<AppState>>) -> Json<Value> {
    let service = QuestionService::new(state.backend.clone(), state.store.clone());
    Json(service.subjects().await)
}

pub async fn list_chapters(
    State(state): State<Arc<AppState>>,
    Path(subject): Path<String>,
) -> Json<Value> {
    tracing::debug!("Listing chapters for subject={}", subject);

    let service = QuestionService::new(state.backend.clone(), state.store.clone());
    Json(service.chapters(&subject).await)
}

pub async fn list_topics(
    State(state): State<Arc<AppState>>,
    Path((subject, chapter)): Path<(String, String)>,
) -> Json<Value> {
    tracing::debug!("Listing topics for subject={}, chapter={}", subject, chapter);

    let service = QuestionService::new(state.backend.clone(), state.store.clone());
    Json(service.topics(&subject, &chapter).await)
}
