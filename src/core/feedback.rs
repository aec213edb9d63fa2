//! Per-letter feedback for a guess
//!
//! Feedback is an ordered sequence of five symbols aligned to the guessed word:
//! - `RightPlace`: letter is in the target at this position
//! - `WrongPlace`: letter is in the target at another position
//! - `Unused`: letter is not in the target (or all its occurrences are already accounted for)

use super::letters::{ALPHABET_SIZE, letter_index};
use super::word::{WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackSymbol {
    RightPlace,
    WrongPlace,
    Unused,
}

impl FeedbackSymbol {
    /// True for `RightPlace` and `WrongPlace`, i.e. the letter is present in the target
    #[inline]
    #[must_use]
    pub const fn is_present(self) -> bool {
        matches!(self, Self::RightPlace | Self::WrongPlace)
    }

    /// Parse a single feedback character
    ///
    /// Accepts:
    /// - 'R'/'G'/🟩 for right place
    /// - 'W'/'Y'/🟨 for wrong place
    /// - 'U'/'-'/'_'/'.'/⬜ for unused
    ///
    /// Letters are case-insensitive.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'R' | 'r' | 'G' | 'g' | '🟩' => Some(Self::RightPlace),
            'W' | 'w' | 'Y' | 'y' | '🟨' => Some(Self::WrongPlace),
            'U' | 'u' | '-' | '_' | '.' | '⬜' => Some(Self::Unused),
            _ => None,
        }
    }

    const fn as_char(self) -> char {
        match self {
            Self::RightPlace => 'G',
            Self::WrongPlace => 'Y',
            Self::Unused => '-',
        }
    }
}

/// Error returned when a feedback string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackParseError {
    #[error("Feedback must have exactly 5 symbols, got {0}")]
    InvalidLength(usize),
    #[error("Invalid feedback symbol '{0}'")]
    InvalidSymbol(char),
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([FeedbackSymbol; WORD_LENGTH]);

impl Feedback {
    /// All letters in the right place
    pub const SOLVED: Self = Self([FeedbackSymbol::RightPlace; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(symbols: [FeedbackSymbol; WORD_LENGTH]) -> Self {
        Self(symbols)
    }

    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[FeedbackSymbol; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is `RightPlace`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&s| s == FeedbackSymbol::RightPlace)
    }

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// Duplicate letters are handled by multiset consumption:
    /// 1. Exact matches are marked `RightPlace`
    /// 2. Target letters at unmatched positions form a pool
    /// 3. Each unmatched guess letter, left to right, is `WrongPlace` if the pool still
    ///    holds it (consuming one occurrence), otherwise `Unused`
    ///
    /// # Examples
    /// ```
    /// use wordle_split::core::{Feedback, Word};
    ///
    /// let guess = Word::new("polls").unwrap();
    /// let target = Word::new("spool").unwrap();
    ///
    /// // Only one L remains in the pool, so the second L is unused
    /// let feedback = Feedback::calculate(&guess, &target);
    /// assert_eq!(feedback.to_string(), "YYY-Y");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut result = [FeedbackSymbol::Unused; WORD_LENGTH];
        let mut pool = [0u8; ALPHABET_SIZE];

        for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                result[i] = FeedbackSymbol::RightPlace;
            } else {
                pool[letter_index(t)] += 1;
            }
        }

        for (symbol, &g) in result.iter_mut().zip(guess.chars()) {
            if *symbol == FeedbackSymbol::RightPlace {
                continue;
            }
            let available = &mut pool[letter_index(g)];
            if *available > 0 {
                *symbol = FeedbackSymbol::WrongPlace;
                *available -= 1;
            }
        }

        Self(result)
    }

    /// Count the number of `RightPlace` symbols
    #[must_use]
    pub fn count_right(&self) -> usize {
        self.count(FeedbackSymbol::RightPlace)
    }

    /// Count the number of `WrongPlace` symbols
    #[must_use]
    pub fn count_wrong(&self) -> usize {
        self.count(FeedbackSymbol::WrongPlace)
    }

    fn count(&self, symbol: FeedbackSymbol) -> usize {
        self.0.iter().filter(|&&s| s == symbol).count()
    }
}

impl FromStr for Feedback {
    type Err = FeedbackParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(FeedbackParseError::InvalidLength(chars.len()));
        }

        let mut symbols = [FeedbackSymbol::Unused; WORD_LENGTH];
        for (slot, ch) in symbols.iter_mut().zip(chars) {
            *slot = FeedbackSymbol::from_char(ch).ok_or(FeedbackParseError::InvalidSymbol(ch))?;
        }
        Ok(Self(symbols))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.0 {
            write!(f, "{}", symbol.as_char())?;
        }
        Ok(())
    }
}
