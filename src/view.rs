//! Round state machine and view controller
//!
//! This module contains the quiz view controller: the two-phase round
//! state machine, the session progress tracking, and the update
//! messages it emits to the page binding. The controller owns the
//! session from the first question fetch to the final navigation to
//! the score page.

use serde::{Deserialize, Serialize};

use crate::backend::{Backend, BackendError};
use crate::constants;
use crate::markup;
use crate::page::Page;
use crate::question::{AnswerResult, Question};

/// Represents the current phase of a quiz round
///
/// Each round alternates between two phases: waiting for the user to
/// pick an option and waiting for them to advance past the feedback.
/// The action button drives both, so its activation is interpreted
/// according to the current phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// A question is displayed and no answer has been submitted yet
    #[default]
    AwaitingSelection,
    /// Feedback is displayed and the next activation advances the quiz
    AwaitingAdvance,
}

/// Label shown on the action button
///
/// The label tells the user what the next activation will do; it is
/// the user-visible reflection of [`Phase`] and of whether any rounds
/// remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum ButtonLabel {
    /// Submit the currently selected option
    #[display("Submit")]
    Submit,
    /// Fetch and display the next question
    #[serde(rename = "Next Question")]
    #[display("Next Question")]
    NextQuestion,
    /// Navigate to the score page
    #[serde(rename = "See Score")]
    #[display("See Score")]
    SeeScore,
}

/// Update messages sent to the page binding
///
/// These messages describe every externally visible effect of the view
/// controller. They are applied in emission order by the [`Page`]
/// implementation backing the session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum UpdateMessage {
    /// Replace the quiz container content with the given markup
    QuizMarkup(String),
    /// Replace the result region content with the given markup
    ResultMarkup(String),
    /// Set the action button label
    ButtonLabel(ButtonLabel),
    /// Enable or disable the action button
    ButtonEnabled(bool),
    /// Show a blocking prompt to the user
    Alert(String),
    /// Perform a full page navigation to the given location
    Navigate(String),
}

impl UpdateMessage {
    /// Converts the update message to a JSON string for transmission
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

/// Progress of the current quiz session
///
/// Tracks the score and the number of completed rounds against the
/// session length. The invariant `score <= answered <= total` holds
/// after every transition; progress is mutated only by [`QuizView`] in
/// response to user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// Number of correctly answered rounds
    score: usize,
    /// Number of rounds answered so far
    answered: usize,
    /// Number of rounds in the session
    total: usize,
}

impl Progress {
    fn new(total: usize) -> Self {
        Self {
            score: 0,
            answered: 0,
            total,
        }
    }

    /// Returns the number of correctly answered rounds
    pub fn score(&self) -> usize {
        self.score
    }

    /// Returns the number of rounds answered so far
    pub fn answered(&self) -> usize {
        self.answered
    }

    /// Returns the number of rounds in the session
    pub fn total(&self) -> usize {
        self.total
    }

    /// Checks whether every round of the session has been answered
    pub fn is_complete(&self) -> bool {
        self.answered >= self.total
    }

    fn begin_round(&mut self) {
        self.answered += 1;
    }

    fn record_correct(&mut self) {
        self.score += 1;
    }
}

/// Builds the score page location for a finished session
fn score_url(progress: Progress) -> String {
    format!(
        "{}?score={}&total={}",
        constants::endpoints::SCORE_PAGE,
        progress.score(),
        progress.total()
    )
}

/// The quiz view controller
///
/// This struct drives a complete quiz session: it fetches questions
/// through its [`Backend`], renders them through the [`Page`] binding,
/// scores submitted answers, and navigates to the score page once the
/// final round completes. All methods take `&mut self`, so a session
/// can never process overlapping activations; the action button is
/// additionally disabled for the duration of every network call.
#[derive(Debug)]
pub struct QuizView<B> {
    /// Channel to the quiz server
    backend: B,
    /// Score and round progress for this session
    progress: Progress,
    /// Current phase of the round state machine
    phase: Phase,
    /// The question currently awaiting an answer, if any
    current: Option<Question>,
}

impl<B: Backend> QuizView<B> {
    /// Creates a view for a session of the default length
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            progress: Progress::new(constants::session::TOTAL_QUESTIONS),
            phase: Phase::default(),
            current: None,
        }
    }

    /// Overrides the number of rounds in the session
    #[must_use]
    pub fn with_total_questions(mut self, total: usize) -> Self {
        self.progress = Progress::new(total);
        self
    }

    /// Returns the current phase of the round state machine
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the session progress
    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Returns the question currently awaiting an answer
    pub fn current_question(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    /// Starts the session by fetching and displaying the first question
    ///
    /// Call once after constructing the view, with the page in its
    /// initial state and the action button labeled for submission.
    pub async fn start<P: Page>(&mut self, page: &P) {
        self.fetch_and_show(page).await;
    }

    /// Handles an activation of the action button
    ///
    /// `selected` carries the option currently chosen in the displayed
    /// question's radio group, or `None` when nothing is selected. The
    /// activation is interpreted according to the current phase: it
    /// either submits the selection for scoring or advances the quiz
    /// to the next question or the score page.
    pub async fn activate<P: Page>(&mut self, page: &P, selected: Option<&str>) {
        match self.phase {
            Phase::AwaitingSelection => self.submit(page, selected).await,
            Phase::AwaitingAdvance => self.advance(page).await,
        }
    }

    /// Scores the selected option and displays feedback
    async fn submit<P: Page>(&mut self, page: &P, selected: Option<&str>) {
        let selection = selected.filter(|choice| {
            self.current
                .as_ref()
                .is_some_and(|question| question.has_option(choice))
        });
        let Some(choice) = selection else {
            page.apply(&UpdateMessage::Alert(
                constants::text::SELECT_ANSWER_PROMPT.to_string(),
            ));
            return;
        };

        page.apply(&UpdateMessage::ButtonEnabled(false));
        self.progress.begin_round();

        let result = match self.backend.check_answer(choice).await {
            Ok(result) => result,
            Err(err) => {
                log::warn!("answer check failed, scoring round as incorrect: {err}");
                AnswerResult::submission_failure()
            }
        };

        if result.correct() {
            self.progress.record_correct();
        }
        page.apply(&UpdateMessage::ResultMarkup(markup::feedback(&result)));

        let label = if self.progress.is_complete() {
            ButtonLabel::SeeScore
        } else {
            ButtonLabel::NextQuestion
        };
        page.apply(&UpdateMessage::ButtonLabel(label));

        self.current = None;
        self.change_phase(Phase::AwaitingSelection, Phase::AwaitingAdvance);
        page.apply(&UpdateMessage::ButtonEnabled(true));
    }

    /// Advances past the feedback to the next question or the score page
    async fn advance<P: Page>(&mut self, page: &P) {
        if self.progress.is_complete() {
            let url = score_url(self.progress);
            log::info!("quiz complete, navigating to {url}");
            page.apply(&UpdateMessage::Navigate(url));
        } else {
            self.fetch_and_show(page).await;
        }
    }

    /// Fetches a question and displays it, entering the selection phase
    ///
    /// On failure the quiz container shows an inline error and no state
    /// changes: a later activation in the advance phase retries the
    /// fetch, and no retry is ever issued automatically. The action
    /// button is re-enabled unconditionally once the request settles.
    async fn fetch_and_show<P: Page>(&mut self, page: &P) {
        page.apply(&UpdateMessage::ButtonEnabled(false));
        let outcome = self.backend.next_question().await;
        page.apply(&UpdateMessage::ButtonEnabled(true));

        match outcome {
            Ok(question) => {
                page.apply(&UpdateMessage::ResultMarkup(String::new()));
                page.apply(&UpdateMessage::QuizMarkup(markup::question(&question)));
                page.apply(&UpdateMessage::ButtonLabel(ButtonLabel::Submit));
                self.current = Some(question);
                self.set_phase(Phase::AwaitingSelection);
            }
            Err(err) => {
                log::error!("failed to fetch a question: {err}");
                let message = match err {
                    BackendError::Rejected(reason) => reason,
                    _ => constants::text::FETCH_ERROR.to_string(),
                };
                page.apply(&UpdateMessage::QuizMarkup(markup::error(&message)));
            }
        }
    }

    /// Attempts to transition from one phase to another
    ///
    /// The transition only happens when the current phase matches the
    /// expected `before` phase.
    ///
    /// # Returns
    ///
    /// `true` if the transition was taken, `false` otherwise
    fn change_phase(&mut self, before: Phase, after: Phase) -> bool {
        if self.phase == before {
            self.phase = after;
            true
        } else {
            false
        }
    }

    /// Sets the current phase
    fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }
}
