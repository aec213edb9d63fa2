//! Letter-frequency solver
//!
//! Guesses are ranked by how evenly their letters split the remaining candidates, both by
//! position and by presence anywhere in the word. Near ties fall back to the guess that
//! shares the most unconfirmed letters with the candidates.

pub mod config;
pub mod constraints;
mod engine;
pub mod scoring;

pub use config::{
    ENDGAME_THRESHOLD, MAX_ATTEMPTS, NEAR_TIE_EPSILON, NEAR_TIE_RANK, SolverConfig,
    TIE_BREAK_POOL, UNORDERED_WEIGHT,
};
pub use constraints::{Constraints, Slot};
pub use engine::{Round, Session, SolveError, SolveOutcome, Solver};
pub use scoring::{
    LetterWeights, ScoredWord, Selection, SelectionKind, overlap, rank_words, relative_gap,
    select_scored, split_weight,
};
