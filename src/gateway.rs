//! Submission gateway: one request/response exchange per submit attempt.
//!
//! The gateway never retries on its own and never mutates the draft it is
//! handed; a failed attempt leaves the caller free to submit again with the
//! same data. Requests time out after 30 seconds.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::forms::DraftRecord;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fallback confirmation when the backend accepted but sent no message
const GENERIC_CONFIRMATION: &str = "Your request has been submitted!";
/// Fallback error when the backend gave no usable message
const GENERIC_FAILURE: &str = "Failed to submit request. Please try again.";

/// Why a submit attempt did not produce an accepted submission.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The backend answered and declined (validation failure, service-level
    /// `success: false`, or a non-2xx status)
    #[error("{0}")]
    Rejected(String),
    /// The exchange never completed (connection, DNS, timeout)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The wizard is not on its final step with all required fields set
    #[error("submission is incomplete")]
    Incomplete,
    /// A submission request is already in flight for this session
    #[error("a submission is already in progress")]
    InFlight,
    /// The session already submitted successfully
    #[error("this request was already submitted")]
    AlreadySubmitted,
}

/// Service-level response envelope from the submission endpoints.
#[derive(Debug, Deserialize)]
struct SubmitOutcome {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for the form submission endpoints.
pub struct SubmissionClient {
    client: reqwest::Client,
    base_url: String,
}

impl SubmissionClient {
    /// Create a client targeting the given backend origin
    /// (e.g. `http://127.0.0.1:7080`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, SubmissionError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { client, base_url })
    }

    /// Send the draft to its schema's endpoint and interpret the outcome.
    pub async fn submit(&self, draft: &DraftRecord) -> Result<String, SubmissionError> {
        let url = format!("{}{}", self.base_url, draft.schema().endpoint);
        let response = self
            .client
            .post(&url)
            .json(&draft.to_payload())
            .send()
            .await?;

        let status = response.status();
        let outcome: SubmitOutcome = response.json().await.unwrap_or(SubmitOutcome {
            success: false,
            message: None,
            error: None,
        });

        interpret_outcome(status, outcome)
    }
}

/// Decide acceptance from HTTP status plus the service-level envelope.
fn interpret_outcome(status: StatusCode, outcome: SubmitOutcome) -> Result<String, SubmissionError> {
    if status.is_success() && outcome.success {
        return Ok(outcome
            .message
            .unwrap_or_else(|| GENERIC_CONFIRMATION.to_string()));
    }

    let reason = outcome
        .error
        .or(outcome.message)
        .unwrap_or_else(|| GENERIC_FAILURE.to_string());
    Err(SubmissionError::Rejected(reason))
}
