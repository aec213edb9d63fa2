//! Word solving command
//!
//! Solves a specific target word and returns the solution path.

use super::{CommandError, dictionary_word};
use crate::core::{Feedback, Word};
use crate::oracle::Game;
use crate::solver::{MAX_ATTEMPTS, SelectionKind, Solver};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_attempts: usize,
}

impl SolveConfig {
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub target: String,
    pub solved: bool,
    pub steps: Vec<GuessStep>,
    /// Emoji grid of the game
    pub summary: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub selection: SelectionKind,
    pub score: Option<f64>,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve `config.target` with a simulated game over `words`
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a five-letter word
/// - The target is not in the dictionary
/// - The solver fails (inconsistent feedback, empty dictionary)
pub fn solve_word(config: &SolveConfig, words: &[Word]) -> Result<SolveResult, CommandError> {
    let target = dictionary_word(&config.target, words)?;
    let mut game = Game::new(&target, words)?.with_max_attempts(config.max_attempts);

    let outcome = Solver::new(words).solve(&mut game)?;

    let steps = outcome
        .rounds
        .iter()
        .map(|round| GuessStep {
            word: round.guess.text().to_string(),
            feedback: round.feedback,
            selection: round.selection,
            score: round.score,
            candidates_before: round.candidates_before,
            candidates_after: round.candidates_after,
        })
        .collect();

    Ok(SolveResult {
        target: target.text().to_string(),
        solved: outcome.solved,
        steps,
        summary: game.summary(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn solve_word_follows_expected_path() {
        let words = words_from_slice(WORDS);
        let result = solve_word(&SolveConfig::new("roker"), &words).unwrap();

        assert!(result.solved);
        assert_eq!(result.target, "roker");

        let path: Vec<&str> = result.steps.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(path, vec!["arise", "youth", "logic", "power", "roker"]);

        let kinds: Vec<SelectionKind> = result.steps.iter().map(|s| s.selection).collect();
        assert_eq!(
            kinds,
            vec![
                SelectionKind::Scored,
                SelectionKind::Scored,
                SelectionKind::Scored,
                SelectionKind::Shortcut,
                SelectionKind::Shortcut,
            ]
        );
        assert_eq!(result.steps[0].candidates_before, words.len());
        assert!(result.steps[3].score.is_none());
    }

    #[test]
    fn solve_records_history() {
        let words = words_from_slice(WORDS);
        let result = solve_word(&SolveConfig::new("north"), &words).unwrap();

        assert!(result.solved);
        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
        assert_eq!(result.summary.lines().count(), result.steps.len());
        assert_eq!(result.summary.lines().last(), Some("🟩🟩🟩🟩🟩"));
    }

    #[test]
    fn solve_with_max_attempts_limit() {
        let words = words_from_slice(WORDS);
        let mut config = SolveConfig::new("roker");
        config.max_attempts = 3;

        let result = solve_word(&config, &words).unwrap();
        assert!(!result.solved);
        assert_eq!(result.steps.len(), 3);
    }

    #[test]
    fn solve_unknown_target_returns_error() {
        let words = words_from_slice(WORDS);
        let result = solve_word(&SolveConfig::new("zzzzz"), &words);
        assert!(matches!(result, Err(CommandError::UnknownWord(_))));
    }

    #[test]
    fn solve_malformed_target_returns_error() {
        let words = words_from_slice(WORDS);
        let result = solve_word(&SolveConfig::new("toolong"), &words);
        assert!(matches!(result, Err(CommandError::InvalidWord { .. })));
    }
}
