//! Core domain types for the word game
//!
//! This module contains the fundamental domain types: words, letter sets and feedback.
//! All types here are pure, testable, and independent of the solver.

mod feedback;
mod letters;
mod word;

pub use feedback::{Feedback, FeedbackParseError, FeedbackSymbol};
pub use letters::{ALPHABET_SIZE, LetterSet, letter_index};
pub use word::{WORD_LENGTH, Word, WordError};
