//! Wordle Split
//!
//! A Wordle solver that ranks guesses by how evenly their letters split the remaining
//! candidates, with a deterministic tie-break for near-equal scores.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_split::core::{Feedback, Word};
//!
//! // Create words
//! let guess = Word::new("polls").unwrap();
//! let answer = Word::new("spool").unwrap();
//!
//! // Calculate feedback
//! let feedback = Feedback::calculate(&guess, &answer);
//! println!("Feedback: {feedback}");
//! ```

// Core domain types
pub mod core;

// Solving algorithm
pub mod solver;

// Feedback sources
pub mod oracle;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
