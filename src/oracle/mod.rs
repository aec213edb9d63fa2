//! Feedback oracles
//!
//! An oracle answers guesses with per-letter feedback. The solver does not know whether the
//! answers come from a simulated game, a person at the terminal, or a test double.

mod game;
mod human;

pub use game::Game;
pub use human::HumanOracle;

use crate::core::{Feedback, Word};
use std::io;
use thiserror::Error;

/// Errors an oracle can report instead of feedback
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("No attempts left after {limit} guesses")]
    AttemptsExceeded { limit: usize },
    #[error("Invalid guess '{guess}': {reason}")]
    InvalidGuess { guess: String, reason: String },
    #[error("Failed to exchange feedback: {0}")]
    Input(#[from] io::Error),
    #[error("Game aborted")]
    Aborted,
}

/// Source of feedback for guesses
pub trait Oracle {
    /// Answer `guess` with feedback
    ///
    /// # Errors
    ///
    /// Returns `OracleError::AttemptsExceeded` once the attempt budget is spent and
    /// `OracleError::InvalidGuess` for guesses the oracle does not accept.
    fn play(&mut self, guess: &Word) -> Result<Feedback, OracleError>;
}
