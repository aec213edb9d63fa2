//! Letter-frequency scoring of guesses
//!
//! A letter is worth most when it splits the candidate set in half: its weight is
//! `f·(N−f)/N²`, where `f` is how many of the `N` candidates contain it. Weights are kept
//! per position (ordered) and regardless of position (unordered), and a word's score sums
//! the ordered weight of each letter plus a multiple of the unordered weight of each
//! distinct letter. This approximates information gain without enumerating feedback
//! patterns.

use super::config::SolverConfig;
use crate::core::{ALPHABET_SIZE, LetterSet, WORD_LENGTH, Word, letter_index};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::fmt;

/// Split weights derived from one candidate set
#[derive(Debug, Clone, PartialEq)]
pub struct LetterWeights {
    unordered: [f64; ALPHABET_SIZE],
    ordered: [[f64; ALPHABET_SIZE]; WORD_LENGTH],
}

/// Weight of a letter seen in `frequency` of `total` candidates
///
/// Maximal (0.25) at an even split, zero when no candidate or every candidate has it.
#[inline]
#[must_use]
pub fn split_weight(frequency: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let f = frequency as f64;
    let n = total as f64;
    (f * (n - f) / (n * n)).max(0.0)
}

impl LetterWeights {
    /// Count letter frequencies over `candidates` and convert them to split weights
    #[must_use]
    pub fn from_candidates(candidates: &[&Word]) -> Self {
        let mut unordered_counts = [0usize; ALPHABET_SIZE];
        let mut ordered_counts = [[0usize; ALPHABET_SIZE]; WORD_LENGTH];

        for word in candidates {
            for letter in word.letters().iter() {
                unordered_counts[letter_index(letter)] += 1;
            }
            for (counts, &letter) in ordered_counts.iter_mut().zip(word.chars()) {
                counts[letter_index(letter)] += 1;
            }
        }

        let total = candidates.len();
        Self {
            unordered: unordered_counts.map(|count| split_weight(count, total)),
            ordered: ordered_counts.map(|counts| counts.map(|count| split_weight(count, total))),
        }
    }

    /// Position-independent weight of `letter`
    #[inline]
    #[must_use]
    pub const fn unordered(&self, letter: u8) -> f64 {
        self.unordered[letter_index(letter)]
    }

    /// Weight of `letter` at `position`
    #[inline]
    #[must_use]
    pub const fn ordered(&self, position: usize, letter: u8) -> f64 {
        self.ordered[position][letter_index(letter)]
    }

    /// Score of a guess: positional term plus `unordered_weight` times the distinct-letter term
    #[must_use]
    pub fn score(&self, word: &Word, unordered_weight: f64) -> f64 {
        let positional: f64 = word
            .chars()
            .iter()
            .enumerate()
            .map(|(position, &letter)| self.ordered(position, letter))
            .sum();
        let distinct: f64 = word.letters().iter().map(|letter| self.unordered(letter)).sum();
        positional + unordered_weight * distinct
    }
}

/// A word with its score for the current round
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredWord<'a> {
    pub word: &'a Word,
    pub score: f64,
}

/// Score every word in `guess_pool` and sort best first
///
/// Equal scores are ordered by word text, descending, so the ranking never depends on
/// how the parallel pass was scheduled.
#[must_use]
pub fn rank_words<'a>(
    guess_pool: &'a [Word],
    weights: &LetterWeights,
    unordered_weight: f64,
) -> Vec<ScoredWord<'a>> {
    let mut ranked: Vec<ScoredWord<'a>> = guess_pool
        .par_iter()
        .map(|word| ScoredWord {
            word,
            score: weights.score(word, unordered_weight),
        })
        .collect();

    ranked.sort_by(compare_best_first);
    ranked
}

fn compare_best_first(a: &ScoredWord<'_>, b: &ScoredWord<'_>) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.word.text().cmp(a.word.text()))
}

/// Relative difference `best / other − 1`
///
/// Two zero scores are an exact tie; a positive score over zero is infinitely far.
#[must_use]
pub fn relative_gap(best: f64, other: f64) -> f64 {
    if other > 0.0 {
        best / other - 1.0
    } else if best > 0.0 {
        f64::INFINITY
    } else {
        0.0
    }
}

/// Number of candidates sharing at least one not-yet-required letter with `word`
#[must_use]
pub fn overlap(word: &Word, candidates: &[&Word], required: LetterSet) -> usize {
    let probing = word.letters().difference(required);
    candidates
        .iter()
        .filter(|candidate| !candidate.letters().intersection(probing).is_empty())
        .count()
}

/// How a round's guess was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionKind {
    /// Candidate set small enough to guess directly
    Shortcut,
    /// Highest score
    Scored,
    /// Near tie resolved by overlap
    TieBroken,
}

impl SelectionKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shortcut => "shortcut",
            Self::Scored => "scored",
            Self::TieBroken => "tie-broken",
        }
    }
}

impl fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The guess picked for a round
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection<'a> {
    pub word: &'a Word,
    pub kind: SelectionKind,
    /// Primary score, absent for shortcut guesses
    pub score: Option<f64>,
}

/// Pick the best-scoring guess from `guess_pool`, breaking near ties by overlap
///
/// The best score is compared with the score at rank `near_tie_rank` (or the last one when
/// the pool is smaller). When they are within `near_tie_epsilon` of each other, the top
/// `tie_break_pool` words still within that tolerance of the best are re-ranked by
/// [`overlap`]; equal overlaps go to the greater word text.
///
/// Returns `None` if the guess pool is empty.
///
/// # Examples
/// ```
/// use wordle_split::core::{LetterSet, Word};
/// use wordle_split::solver::{SelectionKind, SolverConfig, select_scored};
///
/// let words: Vec<Word> = ["bight", "fight", "light", "might", "flumb"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let candidates: Vec<&Word> = words[..4].iter().collect();
///
/// // FLUMB cannot be the answer, but it probes four distinguishing letters at once
/// let selection =
///     select_scored(&words, &candidates, LetterSet::EMPTY, &SolverConfig::default()).unwrap();
/// assert_eq!(selection.word.text(), "flumb");
/// assert_eq!(selection.kind, SelectionKind::Scored);
/// ```
#[must_use]
pub fn select_scored<'a>(
    guess_pool: &'a [Word],
    candidates: &[&Word],
    required: LetterSet,
    config: &SolverConfig,
) -> Option<Selection<'a>> {
    let weights = LetterWeights::from_candidates(candidates);
    let ranked = rank_words(guess_pool, &weights, config.unordered_weight);

    let best = *ranked.first()?;
    let reference = ranked
        .get(config.near_tie_rank.saturating_sub(1))
        .or_else(|| ranked.last())?;

    if relative_gap(best.score, reference.score) >= config.near_tie_epsilon {
        return Some(Selection {
            word: best.word,
            kind: SelectionKind::Scored,
            score: Some(best.score),
        });
    }

    let winner = most_overlapping(
        ranked
            .iter()
            .take(config.tie_break_pool)
            .filter(|scored| relative_gap(best.score, scored.score) < config.near_tie_epsilon)
            .map(|scored| (*scored, overlap(scored.word, candidates, required))),
    )
    .unwrap_or(best);

    log::debug!(
        "near tie at {:.6}, overlap picked '{}' over '{}'",
        best.score,
        winner.word,
        best.word
    );

    Some(Selection {
        word: winner.word,
        kind: SelectionKind::TieBroken,
        score: Some(winner.score),
    })
}

/// Highest overlap wins; equal overlaps go to the greater word text
fn most_overlapping<'a>(
    tied: impl Iterator<Item = (ScoredWord<'a>, usize)>,
) -> Option<ScoredWord<'a>> {
    tied.max_by(|(a, overlap_a), (b, overlap_b)| {
        overlap_a
            .cmp(overlap_b)
            .then_with(|| a.word.text().cmp(b.word.text()))
    })
    .map(|(scored, _)| scored)
}
