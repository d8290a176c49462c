//! Page binding for the quiz display
//!
//! This module defines the trait connecting the view controller to a
//! concrete page surface. The abstraction keeps the controller free of
//! any particular host: a DOM shell maps messages onto its quiz
//! container and action button, a terminal shell prints them, and
//! tests capture them for inspection.
//!
//! A browser shell is expected to bind the quiz region to its
//! `#quiz-container` element and the action button to `#next-btn`,
//! both present at load, and to create the result region as a sibling
//! element directly after the container.

use crate::view::UpdateMessage;

/// Trait for applying view updates to the host page
///
/// Implementations map each [`UpdateMessage`] onto the corresponding
/// region of the host surface: the quiz container, the result region
/// next to it, the action button, a blocking prompt, or a full page
/// navigation.
pub trait Page {
    /// Applies an update message to the page
    ///
    /// Messages arrive in the order their effects must become visible
    /// and implementations are expected to apply them synchronously.
    ///
    /// # Arguments
    ///
    /// * `message` - The update message to apply
    fn apply(&self, message: &UpdateMessage);
}
