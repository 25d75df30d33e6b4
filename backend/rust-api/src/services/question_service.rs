//! Catalog and paper generation: forward to the question backend,
//! fall back to the dummy dataset when it is unreachable.

use anyhow::Result;
use serde_json::Value;
use uuid::Uuid;

use crate::metrics::{
    record_fallback, record_upstream_result, PAPERS_GENERATED_TOTAL,
};
use crate::models::GenerateQuestionsRequest;
use crate::services::fallback;
use crate::services::session_store::SessionStore;
use crate::services::upstream::BackendClient;

/// Where a response ultimately came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperSource {
    Backend,
    Fallback,
}

impl PaperSource {
    fn as_str(self) -> &'static str {
        match self {
            PaperSource::Backend => "backend",
            PaperSource::Fallback => "fallback",
        }
    }
}

/// A freshly generated paper, stashed under `test_id` for the test
/// screen to pick up.
#[derive(Debug)]
pub struct IssuedPaper {
    pub test_id: String,
    pub paper: Value,
    pub source: PaperSource,
}

pub struct QuestionService {
    backend: BackendClient,
    store: SessionStore,
}

impl QuestionService {
    pub fn new(backend: BackendClient, store: SessionStore) -> Self {
        Self { backend, store }
    }

    pub async fn subjects(&self) -> Value {
        match self.backend.subjects().await {
            Ok(subjects) => {
                record_upstream_result("subjects", true);
                subjects
            }
            Err(e) => {
                record_upstream_result("subjects", false);
                record_fallback("subjects");
                tracing::warn!("Error fetching subjects from backend, using dummy data: {}", e);
                json_or_empty_array(fallback::subjects())
            }
        }
    }

    pub async fn chapters(&self, subject: &str) -> Value {
        match self.backend.chapters(subject).await {
            Ok(chapters) => {
                record_upstream_result("chapters", true);
                chapters
            }
            Err(e) => {
                record_upstream_result("chapters", false);
                record_fallback("chapters");
                tracing::warn!(
                    "Error fetching chapters for {} from backend, using dummy data: {}",
                    subject,
                    e
                );
                json_or_empty_array(fallback::chapters(subject))
            }
        }
    }

    pub async fn topics(&self, subject: &str, chapter: &str) -> Value {
        match self.backend.topics(subject, chapter).await {
            Ok(topics) => {
                record_upstream_result("topics", true);
                topics
            }
            Err(e) => {
                record_upstream_result("topics", false);
                record_fallback("topics");
                tracing::warn!(
                    "Error fetching topics for {}/{} from backend, using dummy data: {}",
                    subject,
                    chapter,
                    e
                );
                json_or_empty_array(fallback::topics(subject, chapter))
            }
        }
    }

    /// Generates a custom paper. Question ids the student has already
    /// seen are added to the exclusion list sent upstream; ids of the
    /// issued paper are recorded so they will not be served again.
    pub async fn generate_questions(
        &self,
        mut request: GenerateQuestionsRequest,
    ) -> Result<IssuedPaper> {
        let used = self.store.used_question_ids();
        if !used.is_empty() {
            tracing::debug!("Excluding {} previously used questions", used.len());
            request.exclude_questions.extend(used);
        }

        let (paper, source) = match self.backend.generate_questions(&request).await {
            Ok(paper) => {
                record_upstream_result("generate-questions", true);
                (paper, PaperSource::Backend)
            }
            Err(e) => {
                record_upstream_result("generate-questions", false);
                record_fallback("generate-questions");
                tracing::warn!("Error generating questions via backend, using dummy data: {}", e);
                (
                    serde_json::to_value(fallback::generate_questions(&request))?,
                    PaperSource::Fallback,
                )
            }
        };

        let issued_ids = question_ids(&paper);
        self.store.record_used_questions(&issued_ids)?;

        let test_id = Uuid::new_v4().to_string();
        self.store.stash_test(&test_id, &paper)?;

        PAPERS_GENERATED_TOTAL
            .with_label_values(&["custom", source.as_str()])
            .inc();
        tracing::info!(
            "Issued custom paper: test_id={}, subject={}, questions={}, source={:?}",
            test_id,
            request.subject,
            issued_ids.len(),
            source
        );

        Ok(IssuedPaper {
            test_id,
            paper,
            source,
        })
    }

    /// One-shot pickup of a stashed paper.
    pub fn take_stashed_test(&self, test_id: &str) -> Option<Value> {
        self.store.take_test(test_id)
    }

    pub async fn generate_neet_paper(&self, subjects: Option<Vec<String>>) -> Result<Value> {
        let subjects = subjects
            .filter(|list| !list.is_empty())
            .unwrap_or_else(default_neet_subjects);

        let (paper, source) = match self.backend.generate_neet_paper(&subjects).await {
            Ok(paper) => {
                record_upstream_result("generate-neet-paper", true);
                (paper, PaperSource::Backend)
            }
            Err(e) => {
                record_upstream_result("generate-neet-paper", false);
                record_fallback("generate-neet-paper");
                tracing::warn!("Error generating NEET paper via backend, using dummy data: {}", e);
                (
                    serde_json::to_value(fallback::generate_neet_paper(Some(&subjects)))?,
                    PaperSource::Fallback,
                )
            }
        };

        PAPERS_GENERATED_TOTAL
            .with_label_values(&["neet", source.as_str()])
            .inc();
        Ok(paper)
    }

    /// GET variant used for quick manual checks against the backend's
    /// canned paper.
    pub async fn test_neet_paper(&self) -> Result<Value> {
        match self.backend.test_neet_paper().await {
            Ok(paper) => {
                record_upstream_result("test-neet", true);
                Ok(paper)
            }
            Err(e) => {
                record_upstream_result("test-neet", false);
                record_fallback("test-neet");
                tracing::warn!("Error fetching test NEET paper, using dummy data: {}", e);
                Ok(serde_json::to_value(fallback::generate_neet_paper(None))?)
            }
        }
    }

    pub fn used_question_ids(&self) -> Vec<String> {
        self.store.used_question_ids()
    }

    pub fn reset_used_questions(&self) {
        self.store.clear_used_questions();
    }
}

fn default_neet_subjects() -> Vec<String> {
    ["chemistry", "physics", "biology"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn question_ids(paper: &Value) -> Vec<String> {
    paper
        .get("questions")
        .and_then(Value::as_array)
        .map(|questions| {
            questions
                .iter()
                .filter_map(|q| q.get("id").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn json_or_empty_array<T: serde::Serialize>(data: T) -> Value {
    serde_json::to_value(data).unwrap_or_else(|_| Value::Array(Vec::new()))
}
