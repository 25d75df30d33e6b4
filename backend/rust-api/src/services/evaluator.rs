//! Answer grading.
//!
//! The question bank stores the canonical answer in two encodings: the
//! full text of the correct option, or a short option-letter token such
//! as `"b"`, `"b)"`, `"b."`. The encoding is detected per answer at
//! grading time; both sides are compared after trim + lowercase.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::answer::{AnswerSheet, Outcome, SubjectBreakdown, TestResults};
use crate::models::Question;

lazy_static! {
    // Canonical answer is exactly one option letter.
    static ref BARE_LETTER: Regex = Regex::new(r"^[a-d]$").unwrap();
    // Option letter followed by ")", "." or whitespace, e.g. "b)" or "b. ...".
    static ref LETTER_WITH_PUNCTUATION: Regex = Regex::new(r"^[a-d][).\s]").unwrap();
}

/// The canonical answer, after encoding detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerKey {
    /// Identifies the correct option by its letter (a-d).
    Letter(char),
    /// Full text of the correct option.
    Text(String),
}

/// Detects the encoding of an already-normalized (trimmed, lowercased)
/// canonical answer. Anything that is not a letter token is treated as
/// full text, including empty or otherwise malformed values.
pub fn classify_answer_key(normalized: &str) -> AnswerKey {
    let is_letter_token =
        BARE_LETTER.is_match(normalized) || LETTER_WITH_PUNCTUATION.is_match(normalized);

    match normalized.chars().next() {
        Some(letter) if is_letter_token => AnswerKey::Letter(letter),
        _ => AnswerKey::Text(normalized.to_string()),
    }
}

/// Grades one question.
///
/// `selected_option` is the text of the option the student picked, or
/// `None` when the question was left unanswered. A letter-encoded
/// canonical answer matches selections of the form `(b) ...`, `b) ...`,
/// `b. ...` or `b ...`; a full-text canonical answer requires exact
/// equality after normalization.
pub fn evaluate(selected_option: Option<&str>, canonical_answer: &str) -> Outcome {
    let Some(selected) = selected_option else {
        return Outcome::Unattempted;
    };

    let user_answer = selected.trim().to_lowercase();
    let correct_answer = canonical_answer.trim().to_lowercase();

    let is_correct = match classify_answer_key(&correct_answer) {
        AnswerKey::Letter(letter) => {
            user_answer.starts_with(&format!("({})", letter))
                || user_answer.starts_with(&format!("{})", letter))
                || user_answer.starts_with(&format!("{}.", letter))
                || user_answer.starts_with(&format!("{} ", letter))
        }
        AnswerKey::Text(text) => user_answer == text,
    };

    if is_correct {
        Outcome::Correct
    } else {
        Outcome::Incorrect
    }
}

// Questions without a stored marks value are worth the NEET default.
fn effective_marks(question: &Question) -> u32 {
    if question.marks == 0 {
        4
    } else {
        question.marks
    }
}

fn subject_bucket(question: &Question) -> String {
    question
        .subject
        .clone()
        .unwrap_or_else(|| "general".to_string())
}

/// Grades a whole submission.
///
/// Correct answers award the question's marks; every incorrect answer
/// costs a flat 1 mark regardless of the question's marks (NEET-style
/// negative marking); unattempted questions contribute nothing. The
/// maximum score uses the first question's marks as representative for
/// the whole paper.
pub fn score_test(questions: &[Question], answers: &AnswerSheet) -> TestResults {
    let mut correct_answers = 0u32;
    let mut incorrect_answers = 0u32;
    let mut total_score = 0i64;
    let mut outcomes = Vec::with_capacity(questions.len());
    let mut subject_stats: BTreeMap<String, SubjectBreakdown> = BTreeMap::new();

    for (index, question) in questions.iter().enumerate() {
        let selected_option = answers
            .get(&index)
            .and_then(|&choice| question.options.get(choice))
            .map(String::as_str);

        let outcome = evaluate(selected_option, &question.answer);
        match outcome {
            Outcome::Correct => {
                correct_answers += 1;
                total_score += i64::from(effective_marks(question));
            }
            Outcome::Incorrect => {
                incorrect_answers += 1;
                total_score -= 1;
            }
            Outcome::Unattempted => {}
        }

        let breakdown = subject_stats.entry(subject_bucket(question)).or_default();
        match outcome {
            Outcome::Correct => breakdown.correct += 1,
            Outcome::Incorrect => breakdown.incorrect += 1,
            Outcome::Unattempted => breakdown.unattempted += 1,
        }
        breakdown.total += 1;

        outcomes.push(outcome);
    }

    let unattempted = questions.len() as u32 - correct_answers - incorrect_answers;
    let representative_marks = questions.first().map(effective_marks).unwrap_or(4);
    let max_score = questions.len() as u64 * u64::from(representative_marks);

    let answered = correct_answers + incorrect_answers;
    let accuracy = if total_score > 0 {
        ((f64::from(correct_answers) / f64::from(answered)) * 100.0).round() as u32
    } else {
        0
    };

    TestResults {
        correct_answers,
        incorrect_answers,
        unattempted,
        total_score,
        max_score,
        accuracy,
        outcomes,
        subject_stats,
    }
}
