//! Backend clients — the three hiring-service endpoints behind one trait.
//!
//! Each operation is a single request/response call: serialize, send, and on
//! any transport-or-status failure report a `BackendError` to the caller.
//! None retry internally; the calling layer decides whether to surface the
//! error and whether to abort the dependent workflow step.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::interview::InterviewResultRecord;
use crate::models::job::JobPosting;

const JOB_ENDPOINT: &str = "job_desc";
const CANDIDATE_ENDPOINT: &str = "candidate";
const INTERVIEW_ENDPOINT: &str = "job_interview";

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request failed (status {status}): {message}")]
    RequestFailed { status: u16, message: String },

    #[error("response did not include a candidate id")]
    MissingCandidateId,
}

/// The hiring backend seam. Production uses `HttpBackend`; tests substitute
/// in-memory fakes.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Fetches the job catalog.
    async fn fetch_jobs(&self) -> Result<Vec<JobPosting>, BackendError>;

    /// Registers a candidate and returns the backend-assigned id.
    /// A response without an id field is a failure, not a crash.
    async fn submit_candidate(&self, name: &str, email: &str) -> Result<i64, BackendError>;

    /// Persists a completed interview result. Fire-and-forget from the
    /// session's perspective: the caller reports failure but the interview
    /// is over either way.
    async fn submit_interview(&self, record: &InterviewResultRecord) -> Result<(), BackendError>;
}

#[derive(Debug, Serialize)]
struct NewCandidate<'a> {
    name: &'a str,
    email: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreatedCandidate {
    id: Option<i64>,
}

/// HTTP implementation of `Backend` over a shared reqwest client.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.trim_end_matches('/'))
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BackendError::RequestFailed {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn fetch_jobs(&self) -> Result<Vec<JobPosting>, BackendError> {
        let response = self.client.get(self.endpoint(JOB_ENDPOINT)).send().await?;
        let jobs: Vec<JobPosting> = Self::check(response).await?.json().await?;
        debug!("Fetched {} job postings", jobs.len());
        Ok(jobs)
    }

    async fn submit_candidate(&self, name: &str, email: &str) -> Result<i64, BackendError> {
        let response = self
            .client
            .post(self.endpoint(CANDIDATE_ENDPOINT))
            .json(&NewCandidate { name, email })
            .send()
            .await?;

        let created: CreatedCandidate = Self::check(response).await?.json().await?;
        created.id.ok_or(BackendError::MissingCandidateId)
    }

    async fn submit_interview(&self, record: &InterviewResultRecord) -> Result<(), BackendError> {
        let response = self
            .client
            .post(self.endpoint(INTERVIEW_ENDPOINT))
            .json(record)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_and_path() {
        let backend = HttpBackend::new("https://api.example.com/api:v1".to_string());
        assert_eq!(
            backend.endpoint(JOB_ENDPOINT),
            "https://api.example.com/api:v1/job_desc"
        );
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let backend = HttpBackend::new("https://api.example.com/".to_string());
        assert_eq!(
            backend.endpoint(CANDIDATE_ENDPOINT),
            "https://api.example.com/candidate"
        );
    }

    #[test]
    fn test_created_candidate_tolerates_missing_id() {
        let created: CreatedCandidate = serde_json::from_str("{}").unwrap();
        assert!(created.id.is_none());

        let created: CreatedCandidate = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(created.id, Some(7));
    }

    #[test]
    fn test_new_candidate_payload_shape() {
        let payload = NewCandidate {
            name: "Ada",
            email: "ada@x.com",
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["email"], "ada@x.com");
    }
}
