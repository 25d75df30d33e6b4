//! HTTP client for the external question backend.
//!
//! Responses are passed through untyped: the handlers relay whatever
//! the backend serves, and only the question-paper endpoints look
//! inside the payload (to record served question ids).

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;
use url::Url;

use crate::models::GenerateQuestionsRequest;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

// encodeURIComponent leaves these unescaped.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("invalid backend URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("failed to call question backend: {0}")]
    Request(#[from] reqwest::Error),
    #[error("question backend returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Thin client over the question backend's REST surface.
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: Url,
    http: reqwest::Client,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Result<Self, UpstreamError> {
        let base_url = Url::parse(base_url)?;
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Cheap reachability probe for the health endpoint.
    pub async fn ping(&self) -> Result<(), UpstreamError> {
        let response = self.http.get(self.endpoint("")).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(UpstreamError::Status(response.status()))
        }
    }

    pub async fn subjects(&self) -> Result<Value, UpstreamError> {
        self.get_json("subjects").await
    }

    pub async fn chapters(&self, subject: &str) -> Result<Value, UpstreamError> {
        self.get_json(&format!("chapters/{}", encode_segment(subject)))
            .await
    }

    pub async fn topics(&self, subject: &str, chapter: &str) -> Result<Value, UpstreamError> {
        self.get_json(&format!(
            "topics/{}/{}",
            encode_segment(subject),
            encode_segment(chapter)
        ))
        .await
    }

    pub async fn generate_questions(
        &self,
        request: &GenerateQuestionsRequest,
    ) -> Result<Value, UpstreamError> {
        self.post_json("generate-questions", request).await
    }

    pub async fn generate_neet_paper(&self, subjects: &[String]) -> Result<Value, UpstreamError> {
        self.post_json(
            "generate-neet-paper",
            &serde_json::json!({ "subjects": subjects }),
        )
        .await
    }

    /// The backend's canned NEET paper, used by its GET testing hook.
    pub async fn test_neet_paper(&self) -> Result<Value, UpstreamError> {
        self.get_json("test-neet").await
    }

    async fn get_json(&self, path: &str) -> Result<Value, UpstreamError> {
        let url = self.endpoint(path);
        tracing::debug!("Calling question backend: GET {}", url);

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(UpstreamError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    async fn post_json<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, UpstreamError> {
        let url = self.endpoint(path);
        tracing::debug!("Calling question backend: POST {}", url);

        let response = self.http.post(&url).json(body).send().await?;
        if !response.status().is_success() {
            return Err(UpstreamError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path)
    }
}

fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}
