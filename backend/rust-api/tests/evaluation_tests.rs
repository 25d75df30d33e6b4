mod common;

use axum::http::StatusCode;
use serde_json::json;

fn three_question_test() -> serde_json::Value {
    json!({
        "questions": [
            {
                "id": "bio_q_1",
                "subject": "biology",
                "question": "Which organelle is responsible for protein synthesis?",
                "options": ["(a) Nucleus", "(b) Mitochondria", "(c) Ribosomes", "(d) Golgi apparatus"],
                "answer": "b",
                "marks": 4
            },
            {
                "id": "bio_q_2",
                "subject": "biology",
                "question": "What is the function of red blood cells?",
                "options": ["Fight infection", "Transport oxygen", "Produce antibodies", "Clot blood"],
                "answer": "Transport oxygen",
                "marks": 4
            },
            {
                "id": "phy_q_1",
                "subject": "physics",
                "question": "What is the SI unit of electric field?",
                "options": ["N/C", "V/m", "J/C", "A/m"],
                "answer": "a",
                "marks": 4
            }
        ],
        // Q0 correct, Q1 incorrect, Q2 unanswered.
        "answers": { "0": 1, "1": 0 },
        "subject": "biology",
        "timeSpent": 432
    })
}

#[tokio::test]
async fn submitted_test_is_graded_and_stored() {
    let app = common::create_test_app();

    let (status, report) =
        common::post_json(app.clone(), "/api/evaluate-test", &three_question_test()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["correctAnswers"], 1);
    assert_eq!(report["incorrectAnswers"], 1);
    assert_eq!(report["unattempted"], 1);
    assert_eq!(report["totalScore"], 3); // +4 correct, -1 incorrect
    assert_eq!(report["maxScore"], 12);
    assert_eq!(report["accuracy"], 50);
    assert_eq!(report["outcomes"], json!(["correct", "incorrect", "unattempted"]));
    assert_eq!(report["subject"], "biology");
    assert_eq!(report["timeSpent"], 432);

    assert_eq!(report["subjectStats"]["biology"]["correct"], 1);
    assert_eq!(report["subjectStats"]["biology"]["incorrect"], 1);
    assert_eq!(report["subjectStats"]["biology"]["total"], 2);
    assert_eq!(report["subjectStats"]["physics"]["unattempted"], 1);

    // The analysis screen fetches the stored report exactly once.
    let result_id = report["resultId"].as_str().expect("resultId").to_string();

    let (status, stored) = common::get(app.clone(), &format!("/api/results/{}", result_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stored, report);

    let (status, body) = common::get(app, &format!("/api/results/{}", result_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No test results found");
}

#[tokio::test]
async fn letter_keys_accept_every_separator_form() {
    let app = common::create_test_app();

    let questions: Vec<serde_json::Value> = ["b", "b)", "b.", "b "]
        .iter()
        .map(|answer| {
            json!({
                "id": format!("q_{}", answer.trim()),
                "question": "Pick the second option.",
                "options": ["(a) first", "(b) second", "(c) third", "(d) fourth"],
                "answer": answer,
                "marks": 4
            })
        })
        .collect();

    let body = json!({
        "questions": questions,
        "answers": { "0": 1, "1": 1, "2": 1, "3": 1 }
    });

    let (status, report) = common::post_json(app, "/api/evaluate-test", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["correctAnswers"], 4);
    assert_eq!(report["incorrectAnswers"], 0);
    assert_eq!(report["totalScore"], 16);
}

#[tokio::test]
async fn out_of_range_choice_counts_as_unattempted() {
    let app = common::create_test_app();

    let body = json!({
        "questions": [{
            "id": "q1",
            "question": "?",
            "options": ["(a) one", "(b) two", "(c) three", "(d) four"],
            "answer": "a",
            "marks": 4
        }],
        "answers": { "0": 7 }
    });

    let (status, report) = common::post_json(app, "/api/evaluate-test", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["correctAnswers"], 0);
    assert_eq!(report["incorrectAnswers"], 0);
    assert_eq!(report["unattempted"], 1);
    assert_eq!(report["totalScore"], 0);
}

#[tokio::test]
async fn empty_submission_scores_zero() {
    let app = common::create_test_app();

    let body = json!({ "questions": [], "answers": {} });
    let (status, report) = common::post_json(app, "/api/evaluate-test", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["correctAnswers"], 0);
    assert_eq!(report["incorrectAnswers"], 0);
    assert_eq!(report["unattempted"], 0);
    assert_eq!(report["totalScore"], 0);
    assert_eq!(report["maxScore"], 0);
    assert_eq!(report["accuracy"], 0);
}

#[tokio::test]
async fn submissions_without_questions_are_rejected() {
    let app = common::create_test_app();

    let (status, body) =
        common::post_json(app, "/api/evaluate-test", &json!({ "answers": {} })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Failed to parse JSON request body"));
}
