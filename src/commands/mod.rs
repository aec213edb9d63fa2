//! Command implementations

pub mod assist;
pub mod benchmark;
pub mod play;
pub mod score;
pub mod solve;

pub use assist::run_assist;
pub use benchmark::{BenchmarkConfig, BenchmarkReport, WordResult, run_benchmark, select_targets};
pub use play::{PlayResult, pick_target, run_play};
pub use score::{ScoreResult, score_word};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};

use crate::core::{Word, WordError};
use crate::oracle::OracleError;
use crate::solver::SolveError;
use std::io;
use thiserror::Error;

/// Errors reported by the command layer
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Invalid word '{word}': {source}")]
    InvalidWord { word: String, source: WordError },
    #[error("Word '{0}' is not in the dictionary")]
    UnknownWord(String),
    #[error(transparent)]
    Solve(#[from] SolveError),
    #[error(transparent)]
    Oracle(#[from] OracleError),
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Parse `text` and check that it is one of `words`
fn dictionary_word(text: &str, words: &[Word]) -> Result<Word, CommandError> {
    let word = Word::new(text).map_err(|source| CommandError::InvalidWord {
        word: text.to_string(),
        source,
    })?;

    if words.contains(&word) {
        Ok(word)
    } else {
        Err(CommandError::UnknownWord(word.text().to_string()))
    }
}
