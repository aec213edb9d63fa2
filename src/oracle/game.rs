//! Simulated game with a known target

use super::{Oracle, OracleError};
use crate::core::{Feedback, WORD_LENGTH, Word};
use crate::output::formatters::feedback_to_emoji;
use crate::solver::MAX_ATTEMPTS;
use rustc_hash::FxHashSet;

/// A game that computes feedback against a hidden target
///
/// Guesses must come from the game's word list, and at most `max_attempts` guesses are
/// answered.
#[derive(Debug, Clone)]
pub struct Game {
    target: Word,
    accepted: FxHashSet<[u8; WORD_LENGTH]>,
    max_attempts: usize,
    history: Vec<(Word, Feedback)>,
}

impl Game {
    /// Create a game for `target` accepting guesses from `words`
    ///
    /// # Errors
    ///
    /// Returns `OracleError::InvalidGuess` if the target is not one of `words`.
    pub fn new(target: &Word, words: &[Word]) -> Result<Self, OracleError> {
        let accepted: FxHashSet<[u8; WORD_LENGTH]> = words.iter().map(|w| *w.chars()).collect();

        if !accepted.contains(target.chars()) {
            return Err(OracleError::InvalidGuess {
                guess: target.text().to_string(),
                reason: "target is not in the word list".to_string(),
            });
        }

        Ok(Self {
            target: target.clone(),
            accepted,
            max_attempts: MAX_ATTEMPTS,
            history: Vec::new(),
        })
    }

    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Guesses answered so far
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    /// True once a guess matched the target
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.history.iter().any(|(_, feedback)| feedback.is_solved())
    }

    /// Play a guess typed as text
    ///
    /// # Errors
    ///
    /// Same as [`Oracle::play`], plus `OracleError::InvalidGuess` when the text is not a
    /// five-letter word.
    pub fn play_text(&mut self, text: &str) -> Result<Feedback, OracleError> {
        self.check_attempts()?;
        let guess = Word::new(text).map_err(|err| OracleError::InvalidGuess {
            guess: text.to_string(),
            reason: err.to_string(),
        })?;
        self.play(&guess)
    }

    /// One emoji row per guess, like the shareable game summary
    #[must_use]
    pub fn summary(&self) -> String {
        self.history
            .iter()
            .map(|(_, feedback)| feedback_to_emoji(feedback))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn check_attempts(&self) -> Result<(), OracleError> {
        if self.attempts() >= self.max_attempts {
            return Err(OracleError::AttemptsExceeded {
                limit: self.max_attempts,
            });
        }
        Ok(())
    }
}

impl Oracle for Game {
    fn play(&mut self, guess: &Word) -> Result<Feedback, OracleError> {
        self.check_attempts()?;

        if !self.accepted.contains(guess.chars()) {
            return Err(OracleError::InvalidGuess {
                guess: guess.text().to_string(),
                reason: "not in the word list".to_string(),
            });
        }

        let feedback = Feedback::calculate(guess, &self.target);
        self.history.push((guess.clone(), feedback));
        Ok(feedback)
    }
}
