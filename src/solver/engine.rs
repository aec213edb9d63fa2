//! Solver control loop
//!
//! A [`Session`] holds the state of one game (candidates and constraints) and steps it one
//! round at a time. [`Solver`] drives a session against an [`Oracle`] until the game is won
//! or the oracle runs out of attempts.

use super::config::SolverConfig;
use super::constraints::Constraints;
use super::scoring::{Selection, SelectionKind, select_scored};
use crate::core::{Feedback, Word};
use crate::oracle::{Oracle, OracleError};
use log::{debug, info};
use thiserror::Error;

/// Errors that end a solve abnormally
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("Dictionary is empty")]
    EmptyDictionary,
    #[error("No candidate matches the feedback received up to round {round}")]
    InconsistentFeedback { round: usize },
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

/// State of a single game
pub struct Session<'a> {
    words: &'a [Word],
    candidates: Vec<&'a Word>,
    constraints: Constraints,
    config: SolverConfig,
    rounds: usize,
}

impl<'a> Session<'a> {
    /// Start a game where every word is a candidate
    #[must_use]
    pub fn new(words: &'a [Word]) -> Self {
        Self::with_config(words, SolverConfig::default())
    }

    #[must_use]
    pub fn with_config(words: &'a [Word], config: SolverConfig) -> Self {
        Self {
            words,
            candidates: words.iter().collect(),
            constraints: Constraints::new(),
            config,
            rounds: 0,
        }
    }

    /// Words still consistent with every feedback recorded so far
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    #[must_use]
    pub const fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Number of feedbacks recorded
    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    /// Choose the next guess
    ///
    /// With at most `endgame_threshold` candidates left the first one is guessed directly;
    /// otherwise every dictionary word is scored against the candidates.
    ///
    /// # Errors
    ///
    /// Returns `SolveError::EmptyDictionary` if the game started without words and
    /// `SolveError::InconsistentFeedback` if the recorded feedback eliminated every candidate.
    pub fn select_guess(&self) -> Result<Selection<'a>, SolveError> {
        let Some(&first) = self.candidates.first() else {
            return Err(if self.rounds == 0 {
                SolveError::EmptyDictionary
            } else {
                SolveError::InconsistentFeedback {
                    round: self.rounds,
                }
            });
        };

        if self.candidates.len() <= self.config.endgame_threshold {
            return Ok(Selection {
                word: first,
                kind: SelectionKind::Shortcut,
                score: None,
            });
        }

        select_scored(
            self.words,
            &self.candidates,
            self.constraints.required(),
            &self.config,
        )
        .ok_or(SolveError::EmptyDictionary)
    }

    /// Apply the feedback for `guess` and narrow the candidates
    ///
    /// Returns the number of candidates left.
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) -> usize {
        self.constraints.record(guess, feedback);
        self.candidates = self.constraints.filter(&self.candidates);
        self.rounds += 1;

        debug!(
            "round {}: {guess} -> {feedback}, {}",
            self.rounds,
            self.state_summary()
        );
        self.candidates.len()
    }

    /// One-line description of the current state for logging
    #[must_use]
    pub fn state_summary(&self) -> String {
        format!(
            "{} candidates, {}",
            self.candidates.len(),
            self.constraints
        )
    }
}

/// One completed guess of a game
#[derive(Debug, Clone, PartialEq)]
pub struct Round<'a> {
    pub guess: &'a Word,
    pub feedback: Feedback,
    pub selection: SelectionKind,
    pub score: Option<f64>,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Result of a solve
#[derive(Debug, Clone, PartialEq)]
pub struct SolveOutcome<'a> {
    pub solved: bool,
    /// The winning guess, absent when the attempts ran out
    pub final_guess: Option<&'a Word>,
    pub rounds: Vec<Round<'a>>,
}

impl SolveOutcome<'_> {
    /// How each round's guess was chosen, in order
    #[must_use]
    pub fn trace(&self) -> Vec<SelectionKind> {
        self.rounds.iter().map(|round| round.selection).collect()
    }

    /// Number of guesses the oracle answered
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.rounds.len()
    }

    /// True if any round fell back to the overlap tie-break
    #[must_use]
    pub fn used_tie_break(&self) -> bool {
        self.rounds
            .iter()
            .any(|round| round.selection == SelectionKind::TieBroken)
    }
}

/// Plays games over a fixed dictionary
///
/// Guesses are always drawn from the full dictionary, so a round may play a word that is
/// no longer a candidate when it tells the remaining candidates apart better.
pub struct Solver<'a> {
    words: &'a [Word],
    config: SolverConfig,
}

impl<'a> Solver<'a> {
    #[must_use]
    pub fn new(words: &'a [Word]) -> Self {
        Self::with_config(words, SolverConfig::default())
    }

    #[must_use]
    pub const fn with_config(words: &'a [Word], config: SolverConfig) -> Self {
        Self { words, config }
    }

    /// Fresh game state over this solver's dictionary
    #[must_use]
    pub fn session(&self) -> Session<'a> {
        Session::with_config(self.words, self.config)
    }

    /// Play one game against `oracle`
    ///
    /// Running out of attempts is a normal outcome with `solved == false`.
    ///
    /// # Errors
    ///
    /// Returns `SolveError::InconsistentFeedback` when the oracle's answers rule out every
    /// word, `SolveError::EmptyDictionary` for an empty dictionary, and
    /// `SolveError::Oracle` for any oracle failure other than exhausted attempts.
    ///
    /// # Examples
    /// ```
    /// use wordle_split::core::Word;
    /// use wordle_split::oracle::Game;
    /// use wordle_split::solver::Solver;
    /// use wordle_split::wordlists::{WORDS, loader::words_from_slice};
    ///
    /// let words = words_from_slice(WORDS);
    /// let target = Word::new("roker").unwrap();
    /// let mut game = Game::new(&target, &words).unwrap();
    ///
    /// let outcome = Solver::new(&words).solve(&mut game).unwrap();
    /// assert!(outcome.solved);
    /// assert_eq!(outcome.final_guess, Some(&target));
    /// ```
    pub fn solve<O: Oracle + ?Sized>(
        &self,
        oracle: &mut O,
    ) -> Result<SolveOutcome<'a>, SolveError> {
        let mut session = self.session();
        let mut rounds = Vec::new();

        loop {
            let selection = session.select_guess()?;
            let candidates_before = session.candidates().len();

            let feedback = match oracle.play(selection.word) {
                Ok(feedback) => feedback,
                Err(OracleError::AttemptsExceeded { limit }) => {
                    info!("attempts exhausted after {limit} guesses");
                    return Ok(SolveOutcome {
                        solved: false,
                        final_guess: None,
                        rounds,
                    });
                }
                Err(err) => return Err(err.into()),
            };

            let solved = feedback.is_solved();
            let candidates_after = if solved {
                1
            } else {
                session.record(selection.word, &feedback)
            };

            rounds.push(Round {
                guess: selection.word,
                feedback,
                selection: selection.kind,
                score: selection.score,
                candidates_before,
                candidates_after,
            });

            if solved {
                info!("solved with '{}' in {} guesses", selection.word, rounds.len());
                return Ok(SolveOutcome {
                    solved: true,
                    final_guess: Some(selection.word),
                    rounds,
                });
            }
        }
    }
}
