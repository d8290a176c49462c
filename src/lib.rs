//! # Quiz View Library
//!
//! This library provides the view-controller logic for a server-backed
//! multiple choice quiz. It handles question retrieval, answer submission,
//! feedback rendering, and score tracking across a fixed number of rounds,
//! leaving the concrete page surface (DOM shell, terminal, test harness)
//! to an implementation of the [`page::Page`] trait.
//!
//! A session is driven by [`view::QuizView`]: construct it over a
//! [`backend::Backend`], call [`view::QuizView::start`] once to display the
//! first question, then forward every action-button activation to
//! [`view::QuizView::activate`] together with the currently selected
//! option. After the final round the view emits a navigation to the score
//! page carrying the session result.

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::wildcard_imports)]

pub mod backend;
pub mod constants;
pub mod markup;
pub mod page;
pub mod question;
pub mod view;
