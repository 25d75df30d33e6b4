use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A multiple-choice question as served by the question backend's
/// `/generate-questions` endpoint and by the dummy generator.
///
/// `answer` holds the canonical answer: either the full text of the
/// correct option or a short option-letter token such as `"b"` or `"b)"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    #[serde(default)]
    pub marks: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_markdown: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "tableHTML")]
    pub table_html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "type")]
    pub question_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_to_solve: Option<u32>,
}

/// A generated question paper for a single subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedTest {
    pub subject: String,
    pub total_questions: u32,
    pub total_marks: u32,
    pub questions: Vec<Question>,
    pub generated_at: DateTime<Utc>,
}

/// A full NEET mock paper: 60 questions per subject, 4 marks each.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeetPaper {
    pub exam_name: String,
    pub subjects: Vec<String>,
    pub total_questions: u32,
    pub total_marks: u32,
    /// Duration in minutes.
    pub duration: u32,
    pub sections: Vec<NeetSection>,
    pub questions: Vec<Question>,
    pub generated_at: DateTime<Utc>,
    pub instructions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeetSection {
    pub subject: String,
    pub questions: u32,
    pub marks: u32,
    /// Time limit per section, in minutes.
    pub time_limit: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub color: String,
    pub icon: String,
    pub total_chapters: u32,
    pub total_topics: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub topics: Vec<String>,
    pub total_questions: u32,
    pub difficulty: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub subtopics: Vec<String>,
    pub total_questions: u32,
    pub difficulty: String,
}

/// Request body for `/api/generate-questions`, forwarded verbatim to the
/// question backend (field names match its FastAPI contract).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateQuestionsRequest {
    pub subject: String,
    #[serde(default)]
    pub chapters: Vec<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub num_questions: u32,
    #[serde(default = "default_marks_per_question")]
    pub marks_per_question: u32,
    #[serde(default)]
    pub chapter_weights: Vec<ChapterWeight>,
    #[serde(default)]
    pub exclude_questions: Vec<String>,
}

fn default_marks_per_question() -> u32 {
    4
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterWeight {
    pub chapter: String,
    pub num_questions: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NeetPaperRequest {
    #[serde(default)]
    pub subjects: Option<Vec<String>>,
}

pub mod answer;
