//! Key-value session state.
//!
//! The web client used to keep this state in browser storage: the list
//! of already-served question ids, the generated paper handed from the
//! test builder to the test screen, and the finished results handed to
//! the analysis screen. Here the same records live behind an injected
//! [`Storage`] backend so nothing is ambient or global.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use serde_json::Value;

const USED_QUESTIONS_KEY: &str = "used_questions";

/// Minimal string key-value backend: `get`/`set`/`remove`.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
    fn remove(&self, key: &str) -> Option<String>;
}

/// In-process backend, the default for a single-instance deployment.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl Storage for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value);
        }
    }

    fn remove(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|mut entries| entries.remove(key))
    }
}

/// Typed facade over the raw backend.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn Storage>,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn Storage>) -> Self {
        Self { backend }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::default()))
    }

    /// Ids of questions already served to the student, excluded from
    /// future papers. Unreadable history is treated as empty.
    pub fn used_question_ids(&self) -> Vec<String> {
        self.backend
            .get(USED_QUESTIONS_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub fn record_used_questions(&self, ids: &[String]) -> Result<()> {
        let mut all = self.used_question_ids();
        all.extend(ids.iter().cloned());
        let raw = serde_json::to_string(&all).context("Failed to encode used-question ids")?;
        self.backend.set(USED_QUESTIONS_KEY, raw);
        Ok(())
    }

    pub fn clear_used_questions(&self) {
        self.backend.remove(USED_QUESTIONS_KEY);
    }

    /// Stashes a generated paper for pickup by the test screen.
    pub fn stash_test(&self, test_id: &str, paper: &Value) -> Result<()> {
        let raw = serde_json::to_string(paper).context("Failed to encode generated test")?;
        self.backend.set(&format!("custom_test:{}", test_id), raw);
        Ok(())
    }

    /// One-shot pickup: the stash entry is removed on read, like the
    /// session-storage handoff it replaces.
    pub fn take_test(&self, test_id: &str) -> Option<Value> {
        self.backend
            .remove(&format!("custom_test:{}", test_id))
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    pub fn store_results(&self, result_id: &str, report: &Value) -> Result<()> {
        let raw = serde_json::to_string(report).context("Failed to encode test results")?;
        self.backend.set(&format!("test_results:{}", result_id), raw);
        Ok(())
    }

    /// One-shot pickup of stored results, removed on read.
    pub fn take_results(&self, result_id: &str) -> Option<Value> {
        self.backend
            .remove(&format!("test_results:{}", result_id))
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn used_questions_accumulate_and_reset() {
        let store = SessionStore::in_memory();
        assert!(store.used_question_ids().is_empty());

        store
            .record_used_questions(&["physics_q_1".to_string(), "physics_q_2".to_string()])
            .unwrap();
        store
            .record_used_questions(&["biology_q_1".to_string()])
            .unwrap();

        assert_eq!(
            store.used_question_ids(),
            vec!["physics_q_1", "physics_q_2", "biology_q_1"]
        );

        store.clear_used_questions();
        assert!(store.used_question_ids().is_empty());
    }

    #[test]
    fn stashed_test_is_handed_over_once() {
        let store = SessionStore::in_memory();
        let paper = json!({ "subject": "physics", "questions": [] });

        store.stash_test("t-1", &paper).unwrap();
        assert_eq!(store.take_test("t-1"), Some(paper));
        assert_eq!(store.take_test("t-1"), None);
    }

    #[test]
    fn results_are_handed_over_once() {
        let store = SessionStore::in_memory();
        let report = json!({ "correctAnswers": 1, "incorrectAnswers": 0 });

        store.store_results("r-1", &report).unwrap();
        assert_eq!(store.take_results("r-1"), Some(report));
        assert_eq!(store.take_results("r-1"), None);
    }

    #[test]
    fn corrupt_history_reads_as_empty() {
        let backend = Arc::new(MemoryStore::default());
        backend.set(USED_QUESTIONS_KEY, "not json".to_string());

        let store = SessionStore::new(backend);
        assert!(store.used_question_ids().is_empty());
    }
}
