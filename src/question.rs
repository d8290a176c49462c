//! Question and answer wire types
//!
//! This module defines the data exchanged with the quiz server: the
//! question payload served before each round, the reply envelope that
//! may carry a server-signaled error instead, and the correctness
//! result returned for a submitted answer. All payloads originate from
//! the network and are validated before the view acts on them.

use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::constants;

/// A single multiple choice question
///
/// One question is served per round. The wire field for the prompt is
/// `question`; the options arrive as an ordered list of strings and are
/// rendered in the order received. Questions are discarded once the
/// round's feedback has been shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Question {
    /// The prompt text displayed to the user
    #[serde(rename = "question")]
    #[garde(length(max = constants::question::MAX_PROMPT_LENGTH))]
    prompt: String,
    /// The selectable answer options, in display order
    #[garde(
        length(min = constants::question::MIN_OPTION_COUNT, max = constants::question::MAX_OPTION_COUNT),
        inner(length(max = constants::question::MAX_OPTION_LENGTH))
    )]
    options: Vec<String>,
}

impl Question {
    /// Creates a question from a prompt and its answer options
    ///
    /// The result is not validated; callers holding untrusted input
    /// should run [`garde::Validate::validate`] on it, as the HTTP
    /// backend does for every payload it decodes.
    pub fn new(prompt: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            prompt: prompt.into(),
            options,
        }
    }

    /// Returns the prompt text
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Returns the answer options in display order
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Checks whether `candidate` is one of this question's options
    pub fn has_option(&self, candidate: &str) -> bool {
        self.options.iter().any(|option| option == candidate)
    }
}

/// Reply envelope of the next-question endpoint
///
/// The server answers with either a question payload or an error object
/// carrying a human-readable reason. When both shapes could apply, the
/// error takes precedence, matching how the server signals failure on a
/// successful HTTP status.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum QuestionReply {
    /// Server-signaled failure instead of a question
    Rejected {
        /// Human-readable reason the server could not produce a question
        error: String,
    },
    /// A question payload
    Question(Question),
}

/// Correctness verdict for a submitted answer
///
/// Both fields are required on the wire: a reply missing either does
/// not decode and is treated as a submission failure by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResult {
    /// Whether the submitted option was correct
    correct: bool,
    /// The correct answer, for display when the submission was wrong
    correct_answer: String,
}

impl AnswerResult {
    /// Creates an answer result
    pub fn new(correct: bool, correct_answer: impl Into<String>) -> Self {
        Self {
            correct,
            correct_answer: correct_answer.into(),
        }
    }

    /// The synthetic result standing in for a failed submission
    ///
    /// Rounds always complete with a displayable outcome: when the
    /// check-answer call fails, the view scores the round as incorrect
    /// against this value.
    pub fn submission_failure() -> Self {
        Self {
            correct: false,
            correct_answer: constants::text::CHECK_ANSWER_ERROR.to_string(),
        }
    }

    /// Returns whether the submitted option was correct
    pub fn correct(&self) -> bool {
        self.correct
    }

    /// Returns the correct answer text
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }
}
