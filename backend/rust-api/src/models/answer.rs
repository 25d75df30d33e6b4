use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Question;

/// Answers keyed by question index (test order), value = selected option
/// index. Only answered questions appear; everything else counts as
/// unattempted at evaluation time.
pub type AnswerSheet = BTreeMap<usize, usize>;

/// Per-question grading outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Correct,
    Incorrect,
    Unattempted,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateTestRequest {
    pub questions: Vec<Question>,
    #[serde(default)]
    pub answers: AnswerSheet,
    #[serde(default)]
    pub subject: Option<String>,
    /// Seconds the student spent on the test, echoed back for the
    /// analysis view.
    #[serde(default)]
    pub time_spent: Option<u64>,
}

/// Aggregate grading numbers for one submitted test.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResults {
    pub correct_answers: u32,
    pub incorrect_answers: u32,
    pub unattempted: u32,
    pub total_score: i64,
    pub max_score: u64,
    /// Percentage of answered questions that were correct, zeroed when
    /// the total score is not positive.
    pub accuracy: u32,
    /// Outcome per question index, in test order.
    pub outcomes: Vec<Outcome>,
    pub subject_stats: BTreeMap<String, SubjectBreakdown>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubjectBreakdown {
    pub correct: u32,
    pub incorrect: u32,
    pub unattempted: u32,
    pub total: u32,
}

/// Everything the analysis view needs, stored under a result id and
/// handed back once.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestReport {
    pub result_id: String,
    pub questions: Vec<Question>,
    pub answers: AnswerSheet,
    #[serde(flatten)]
    pub results: TestResults,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<u64>,
}
