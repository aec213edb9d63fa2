//! Solver tuning constants and configuration

pub use crate::core::WORD_LENGTH;

/// Guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// Candidate sets this small are guessed directly instead of scored
pub const ENDGAME_THRESHOLD: usize = 2;

/// Relative score difference below which two scores count as tied
pub const NEAR_TIE_EPSILON: f64 = 1e-4;

/// Rank (1-based) compared against the best score to detect a near tie
pub const NEAR_TIE_RANK: usize = 10;

/// Number of top-ranked words considered by the overlap tie-break
pub const TIE_BREAK_POOL: usize = 5;

/// Multiplier of the position-independent letter term in a word's score
pub const UNORDERED_WEIGHT: f64 = WORD_LENGTH as f64;

/// Tunable parameters of the guess selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    pub endgame_threshold: usize,
    pub near_tie_epsilon: f64,
    pub near_tie_rank: usize,
    pub tie_break_pool: usize,
    pub unordered_weight: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            endgame_threshold: ENDGAME_THRESHOLD,
            near_tie_epsilon: NEAR_TIE_EPSILON,
            near_tie_rank: NEAR_TIE_RANK,
            tie_break_pool: TIE_BREAK_POOL,
            unordered_weight: UNORDERED_WEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = SolverConfig::default();
        assert_eq!(config.endgame_threshold, 2);
        assert_eq!(config.near_tie_rank, 10);
        assert_eq!(config.tie_break_pool, 5);
        assert!((config.near_tie_epsilon - 1e-4).abs() < f64::EPSILON);
        assert!((config.unordered_weight - 5.0).abs() < f64::EPSILON);
    }
}
