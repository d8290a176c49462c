//! Quiz server communication
//!
//! This module defines the trait for talking to the quiz server and its
//! HTTP implementation. The trait abstraction allows the view to be
//! driven against a scripted double in tests while production code
//! speaks JSON over HTTP to the two quiz endpoints.

use std::env;

use garde::Validate;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

use crate::constants;
use crate::question::{AnswerResult, Question, QuestionReply};

/// Errors produced while communicating with the quiz server
///
/// Every variant is terminal for the operation that produced it: no
/// retries are attempted anywhere in the view.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BackendError {
    /// The server answered with an error payload instead of a question
    #[error("server rejected the request: {0}")]
    Rejected(String),
    /// The server answered with a non-success HTTP status
    #[error("request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    /// The request failed in transport or the reply failed to decode
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// The reply decoded but failed validation
    #[error(transparent)]
    Invalid(#[from] garde::Report),
}

/// Trait for fetching questions and checking answers
///
/// This trait abstracts the quiz server so the view controller can be
/// exercised without a network. The production implementation is
/// [`HttpBackend`]; tests substitute scripted doubles.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// Requests the next question from the server
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] when the request fails, the server
    /// signals an error, or the payload is malformed. The caller must
    /// treat any error as terminal for the current round.
    async fn next_question(&self) -> Result<Question, BackendError>;

    /// Submits the user's selected option and returns the verdict
    ///
    /// The selected option is guaranteed by the caller to be one of the
    /// current question's options.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] when the request fails or the reply
    /// does not carry a complete verdict. Callers degrade errors to
    /// [`AnswerResult::submission_failure`] so the round still
    /// completes with a displayable outcome.
    async fn check_answer(&self, selected_option: &str) -> Result<AnswerResult, BackendError>;
}

/// Request body of the check-answer endpoint
#[derive(Debug, Serialize)]
struct AnswerSubmission<'a> {
    selected_option: &'a str,
}

/// HTTP implementation of [`Backend`] targeting the quiz endpoints
///
/// Requests are sent to paths under a configured base URL. No timeout
/// is applied beyond the client defaults; a hung request leaves the
/// calling round pending, mirroring the page it replaces.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Creates a backend rooted at the given base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Creates a backend from the `QUIZ_SERVER_URL` environment variable
    ///
    /// Returns `None` when the variable is unset or blank.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let base_url = env::var(constants::env::SERVER_URL).ok()?;
        if base_url.trim().is_empty() {
            return None;
        }
        Some(Self::new(base_url))
    }

    /// Returns the configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Backend for HttpBackend {
    async fn next_question(&self) -> Result<Question, BackendError> {
        let response = self
            .client
            .get(self.endpoint(constants::endpoints::NEXT_QUESTION))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BackendError::HttpStatus(response.status()));
        }

        match response.json().await? {
            QuestionReply::Rejected { error } => Err(BackendError::Rejected(error)),
            QuestionReply::Question(question) => {
                question.validate()?;
                Ok(question)
            }
        }
    }

    async fn check_answer(&self, selected_option: &str) -> Result<AnswerResult, BackendError> {
        let response = self
            .client
            .post(self.endpoint(constants::endpoints::CHECK_ANSWER))
            .json(&AnswerSubmission { selected_option })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BackendError::HttpStatus(response.status()));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_and_path() {
        let backend = HttpBackend::new("http://localhost:5000");
        assert_eq!(
            backend.endpoint(constants::endpoints::NEXT_QUESTION),
            "http://localhost:5000/get-question"
        );
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let backend = HttpBackend::new("http://localhost:5000/");
        assert_eq!(
            backend.endpoint(constants::endpoints::CHECK_ANSWER),
            "http://localhost:5000/check-answer"
        );
    }

    #[test]
    fn test_answer_submission_wire_shape() {
        let body = serde_json::to_string(&AnswerSubmission {
            selected_option: "Paris",
        })
        .unwrap();

        assert_eq!(body, r#"{"selected_option":"Paris"}"#);
    }

    #[test]
    fn test_rejected_error_carries_server_message() {
        let error = BackendError::Rejected("model offline".to_string());
        assert_eq!(
            error.to_string(),
            "server rejected the request: model offline"
        );
    }
}
