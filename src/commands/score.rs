//! Word scoring command
//!
//! Reports how a word scores as an opening guess against the whole dictionary.

use super::{CommandError, dictionary_word};
use crate::core::Word;
use crate::solver::{LetterWeights, UNORDERED_WEIGHT, rank_words};

/// Result of scoring a word
pub struct ScoreResult {
    pub word: String,
    pub score: f64,
    /// Sum of per-position split weights
    pub positional: f64,
    /// Sum of position-independent split weights over distinct letters
    pub presence: f64,
    /// 1-based position in the ranking
    pub rank: usize,
    pub total: usize,
    pub best_word: String,
    pub best_score: f64,
}

/// Score `word` with every dictionary word as a candidate
///
/// # Errors
///
/// Returns an error if the word is malformed or not in the dictionary.
pub fn score_word(word: &str, words: &[Word]) -> Result<ScoreResult, CommandError> {
    let word = dictionary_word(word, words)?;

    let candidates: Vec<&Word> = words.iter().collect();
    let weights = LetterWeights::from_candidates(&candidates);
    let ranked = rank_words(words, &weights, UNORDERED_WEIGHT);

    let (index, scored) = ranked
        .iter()
        .enumerate()
        .find(|(_, scored)| *scored.word == word)
        .ok_or_else(|| CommandError::UnknownWord(word.text().to_string()))?;
    let best = ranked[0];

    let positional = word
        .chars()
        .iter()
        .enumerate()
        .map(|(position, &letter)| weights.ordered(position, letter))
        .sum();
    let presence = word.letters().iter().map(|letter| weights.unordered(letter)).sum();

    Ok(ScoreResult {
        word: word.text().to_string(),
        score: scored.score,
        positional,
        presence,
        rank: index + 1,
        total: ranked.len(),
        best_word: best.word.text().to_string(),
        best_score: best.score,
    })
}
