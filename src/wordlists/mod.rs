//! Dictionaries for the solver
//!
//! The default dictionary is embedded in the binary; custom ones are loaded from text files
//! with one word per line.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
