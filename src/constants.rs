//! Configuration constants for the quiz view
//!
//! This module contains the fixed session parameters, server endpoint
//! paths, validation bounds, and user-visible strings used throughout
//! the view controller.

/// Quiz session configuration constants
pub mod session {
    /// Number of rounds in a quiz session
    pub const TOTAL_QUESTIONS: usize = 5;
}

/// Server endpoint paths, resolved against the configured base URL
pub mod endpoints {
    /// Endpoint serving the next question
    pub const NEXT_QUESTION: &str = "/get-question";
    /// Endpoint checking a submitted answer
    pub const CHECK_ANSWER: &str = "/check-answer";
    /// Score page the view navigates to after the final round
    pub const SCORE_PAGE: &str = "/score";
}

/// Validation bounds for questions received from the server
pub mod question {
    /// Maximum length of a question prompt in characters
    pub const MAX_PROMPT_LENGTH: usize = 500;
    /// Minimum number of answer options for a question
    pub const MIN_OPTION_COUNT: usize = 1;
    /// Maximum number of answer options for a question
    pub const MAX_OPTION_COUNT: usize = 8;
    /// Maximum length of a single answer option in characters
    pub const MAX_OPTION_LENGTH: usize = 200;
}

/// User-visible strings rendered by the view
pub mod text {
    /// Feedback shown for a correct answer
    pub const CORRECT_FEEDBACK: &str = "Correct!";
    /// Prefix of the feedback shown for an incorrect answer
    pub const INCORRECT_FEEDBACK_PREFIX: &str = "Incorrect. The correct answer is: ";
    /// Blocking prompt shown when the action button is activated with no selection
    pub const SELECT_ANSWER_PROMPT: &str = "Please select an answer.";
    /// Inline error shown when fetching a question fails
    pub const FETCH_ERROR: &str = "Could not fetch a new question. Please try refreshing the page.";
    /// Stand-in correct answer used when checking an answer fails
    pub const CHECK_ANSWER_ERROR: &str = "Error checking answer";
}

/// Environment variables read by the default backend configuration
pub mod env {
    /// Base URL of the quiz server
    pub const SERVER_URL: &str = "QUIZ_SERVER_URL";
}
