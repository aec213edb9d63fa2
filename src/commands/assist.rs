//! Interactive assistant for a real game
//!
//! Suggests each guess and reads back the feedback the user got from the game.

use super::CommandError;
use crate::core::Word;
use crate::oracle::{HumanOracle, OracleError};
use crate::output::formatters::feedback_to_emoji;
use crate::solver::{SolveError, SolveOutcome, Solver};
use std::io::{BufRead, Write};

const INSTRUCTIONS: &str = "\
Type the feedback for each suggested guess, one symbol per letter:
  r / G / 🟩  right letter, right place
  w / Y / 🟨  right letter, wrong place
  u / - / ⬜  letter not in the word
Type 'win' when the guess was correct, or 'quit' to stop.
";

/// Run the assistant until the game is won, attempts run out or the user quits
///
/// Returns `None` when the user quit.
///
/// # Errors
///
/// Returns an error if the terminal cannot be read or written, or if the feedback entered
/// contradicts every word in the dictionary.
pub fn run_assist<'a, R: BufRead, W: Write>(
    words: &'a [Word],
    max_attempts: usize,
    input: R,
    mut output: W,
) -> Result<Option<SolveOutcome<'a>>, CommandError> {
    writeln!(output, "{INSTRUCTIONS}")?;

    let mut oracle = HumanOracle::new(input, output).with_max_attempts(max_attempts);
    let result = Solver::new(words).solve(&mut oracle);
    let mut output = oracle.into_output();

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(SolveError::Oracle(OracleError::Aborted)) => {
            writeln!(output, "\nGame abandoned.")?;
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };

    writeln!(output)?;
    if let Some(word) = outcome.final_guess {
        writeln!(
            output,
            "Solved in {} guesses: {}",
            outcome.attempts(),
            word.text().to_uppercase()
        )?;
    } else {
        writeln!(output, "Out of attempts after {} guesses.", outcome.attempts())?;
    }
    for round in &outcome.rounds {
        writeln!(
            output,
            "  {} {}",
            round.guess.text().to_uppercase(),
            feedback_to_emoji(&round.feedback)
        )?;
    }

    Ok(Some(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn run(words: &[Word], input: &str) -> (Result<bool, String>, String) {
        let mut output = Vec::new();
        let result = run_assist(words, 6, Cursor::new(input.as_bytes()), &mut output)
            .map(|outcome| outcome.is_some_and(|o| o.solved))
            .map_err(|e| e.to_string());
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn follows_feedback_to_the_answer() {
        let words = words_from_slice(WORDS);
        // Feedback a player would see with ROKER as the answer
        let (result, output) = run(&words, "uwuuw\nuruuu\nuruuu\nururr\nwin\n");

        assert_eq!(result, Ok(true));
        assert!(output.contains("Guess 1: ARISE"));
        assert!(output.contains("Guess 5: ROKER"));
        assert!(output.contains("Solved in 5 guesses: ROKER"));
    }

    #[test]
    fn first_guess_win() {
        let words = words_from_slice(WORDS);
        let (result, output) = run(&words, "GGGGG\n");
        assert_eq!(result, Ok(true));
        assert!(output.contains("Solved in 1 guesses: ARISE"));
    }

    #[test]
    fn quit_abandons_the_game() {
        let words = words_from_slice(WORDS);
        let mut output = Vec::new();
        let outcome = run_assist(&words, 6, Cursor::new("quit\n".as_bytes()), &mut output).unwrap();

        assert!(outcome.is_none());
        assert!(String::from_utf8(output).unwrap().contains("Game abandoned."));
    }

    #[test]
    fn contradictory_feedback_is_an_error() {
        let words = words_from_slice(&["crane", "slate", "plate", "grate"]);
        // Every letter of the first guess reported absent, then a contradiction
        let (result, _) = run(&words, "uuuuu\n");
        assert!(result.is_err());
    }

    #[test]
    fn runs_out_of_attempts() {
        let words = words_from_slice(WORDS);
        let mut output = Vec::new();
        let outcome = run_assist(&words, 1, Cursor::new("uwuuw\n".as_bytes()), &mut output)
            .unwrap()
            .unwrap();

        assert!(!outcome.solved);
        assert_eq!(outcome.attempts(), 1);
        assert!(String::from_utf8(output).unwrap().contains("Out of attempts after 1 guesses."));
    }
}
