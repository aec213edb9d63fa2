//! Play against a hidden word
//!
//! The user types guesses and sees coloured feedback, as in the real game.

use super::CommandError;
use crate::core::Word;
use crate::oracle::{Game, OracleError};
use crate::output::formatters::colored_guess;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::io::{BufRead, Write};

/// Result of a human game
pub struct PlayResult {
    pub target: String,
    pub won: bool,
    pub attempts: usize,
    /// Emoji grid of the game
    pub summary: String,
}

/// Choose a hidden word
#[must_use]
pub fn pick_target<'a, R: Rng + ?Sized>(words: &'a [Word], rng: &mut R) -> Option<&'a Word> {
    words.choose(rng)
}

/// Let the user guess `target`
///
/// Guesses outside the dictionary are rejected without using up an attempt. Typing `quit`
/// or closing the input ends the game early.
///
/// # Errors
///
/// Returns an error if `target` is not in `words` or the terminal cannot be read or written.
pub fn run_play<R: BufRead, W: Write>(
    words: &[Word],
    target: &Word,
    max_attempts: usize,
    mut input: R,
    mut output: W,
) -> Result<PlayResult, CommandError> {
    let mut game = Game::new(target, words)?.with_max_attempts(max_attempts);

    writeln!(output, "Guess the hidden five-letter word in {max_attempts} tries.")?;

    while !game.is_won() && game.attempts() < max_attempts {
        write!(output, "Guess {}/{max_attempts}: ", game.attempts() + 1)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if matches!(line, "quit" | "q" | "exit") {
            break;
        }

        match game.play_text(line) {
            Ok(feedback) => {
                if let Some((word, _)) = game.history().last() {
                    writeln!(output, "{}", colored_guess(word, &feedback))?;
                }
            }
            Err(OracleError::InvalidGuess { guess, reason }) => {
                writeln!(output, "'{guess}' not accepted: {reason}")?;
            }
            Err(OracleError::AttemptsExceeded { .. }) => break,
            Err(err) => return Err(err.into()),
        }
    }

    let won = game.is_won();
    if won {
        writeln!(output, "\nSolved in {} guesses!", game.attempts())?;
    } else {
        writeln!(output, "\nThe word was {}.", game.target().text().to_uppercase())?;
    }
    writeln!(output, "{}", game.summary())?;

    Ok(PlayResult {
        target: game.target().text().to_string(),
        won,
        attempts: game.attempts(),
        summary: game.summary(),
    })
}
