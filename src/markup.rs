//! Markup rendering for the quiz display regions
//!
//! Pure functions producing the HTML fragments the page binding writes
//! into the quiz container and the result region. Every piece of
//! interpolated text is HTML-escaped before insertion; the server and
//! its question generator are not trusted to produce markup-safe text.
//! The escaping is attribute-safe, since option text doubles as a radio
//! input value: spaces and slashes arrive as numeric character
//! references.

use ammonia::clean_text;
use itertools::Itertools;

use crate::constants::text;
use crate::question::{AnswerResult, Question};

/// Renders a question as a prompt paragraph and a grouped radio list
///
/// All inputs share the `option` radio group, so exactly one option is
/// selectable at a time. Option text doubles as the input value that
/// the page binding reports back on activation.
pub fn question(question: &Question) -> String {
    let options = question
        .options()
        .iter()
        .map(|option| {
            let escaped = clean_text(option);
            format!(
                "<label>\n<input type=\"radio\" name=\"option\" value=\"{escaped}\">\n{escaped}\n</label>"
            )
        })
        .join("\n");

    format!(
        "<div class=\"question\">\n<p>{}</p>\n<div class=\"options\">\n{options}\n</div>\n</div>",
        clean_text(question.prompt())
    )
}

/// Renders the correctness feedback for a scored round
pub fn feedback(result: &AnswerResult) -> String {
    if result.correct() {
        format!(
            "<p style=\"color: green;\">{}</p>",
            text::CORRECT_FEEDBACK
        )
    } else {
        format!(
            "<p style=\"color: red;\">{}{}</p>",
            text::INCORRECT_FEEDBACK_PREFIX,
            clean_text(result.correct_answer())
        )
    }
}

/// Renders an inline error message for the quiz container
pub fn error(message: &str) -> String {
    format!("<p style=\"color: red;\">{}</p>", clean_text(message))
}
