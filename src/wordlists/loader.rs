//! Dictionary loading
//!
//! Entries are trimmed and lowercased. Anything that is not a five-letter ASCII word is
//! skipped, and repeated words keep their first position.

use crate::core::{WORD_LENGTH, Word};
use log::debug;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file with one word per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_split::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_lines(content.lines());
    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Build a dictionary from string entries
///
/// # Examples
/// ```
/// use wordle_split::wordlists::loader::words_from_slice;
/// use wordle_split::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'s>(lines: impl Iterator<Item = &'s str>) -> Vec<Word> {
    let mut seen: FxHashSet<[u8; WORD_LENGTH]> = FxHashSet::default();

    lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .filter(|word| seen.insert(*word.chars()))
        .collect()
}
