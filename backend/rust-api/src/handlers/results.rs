//! Test submission grading and the results handoff to the analysis
//! screen.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use crate::extractors::AppJson;
use crate::metrics::{ANSWERS_GRADED_TOTAL, TESTS_EVALUATED_TOTAL};
use crate::models::answer::{EvaluateTestRequest, Outcome, TestReport};
use crate::services::{evaluator, AppState};

use super::ApiError;

pub async fn evaluate_test(
    State(state): State<Arc<AppState>>,
    AppJson(request): AppJson<EvaluateTestRequest>,
) -> Result<Json<Value>, ApiError> {
    tracing::info!(
        "Evaluating test: questions={}, answered={}",
        request.questions.len(),
        request.answers.len()
    );

    let results = evaluator::score_test(&request.questions, &request.answers);

    for outcome in &results.outcomes {
        ANSWERS_GRADED_TOTAL
            .with_label_values(&[outcome_label(*outcome)])
            .inc();
    }
    TESTS_EVALUATED_TOTAL
        .with_label_values(&[request.subject.as_deref().unwrap_or("custom")])
        .inc();

    tracing::info!(
        "Test graded: correct={}, incorrect={}, unattempted={}, score={}/{}",
        results.correct_answers,
        results.incorrect_answers,
        results.unattempted,
        results.total_score,
        results.max_score
    );

    let report = TestReport {
        result_id: Uuid::new_v4().to_string(),
        questions: request.questions,
        answers: request.answers,
        results,
        subject: request.subject,
        time_spent: request.time_spent,
    };

    let body = serde_json::to_value(&report)
        .map_err(|e| ApiError::internal(format!("Failed to encode results: {}", e)))?;
    state
        .store
        .store_results(&report.result_id, &body)
        .map_err(|e| ApiError::internal(format!("Failed to store results: {}", e)))?;

    Ok(Json(body))
}

/// One-shot pickup of graded results by the analysis screen.
pub async fn get_results(
    State(state): State<Arc<AppState>>,
    Path(result_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state
        .store
        .take_results(&result_id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("No test results found"))
}

fn outcome_label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Correct => "correct",
        Outcome::Incorrect => "incorrect",
        Outcome::Unattempted => "unattempted",
    }
}
