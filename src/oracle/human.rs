//! Feedback typed by a person playing the real game

use super::{Oracle, OracleError};
use crate::core::{Feedback, Word};
use crate::solver::MAX_ATTEMPTS;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "Feedback (r/w/u or G/Y/-, 'win', 'quit')";

/// Oracle that shows each guess and reads the feedback back from the user
///
/// Feedback lines use one symbol per letter: `r`/`G`/🟩 for the right place, `w`/`Y`/🟨
/// for the wrong place and `u`/`-`/⬜ for unused letters.
pub struct HumanOracle<R, W> {
    input: R,
    output: W,
    attempts: usize,
    max_attempts: usize,
}

impl<R: BufRead, W: Write> HumanOracle<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            attempts: 0,
            max_attempts: MAX_ATTEMPTS,
        }
    }

    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_feedback(&mut self) -> Result<Feedback, OracleError> {
        loop {
            write!(self.output, "{PROMPT}: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
            }

            let line = line.trim().to_lowercase();
            match line.as_str() {
                "quit" | "q" | "exit" => return Err(OracleError::Aborted),
                "win" | "solved" => return Ok(Feedback::SOLVED),
                _ => match line.parse::<Feedback>() {
                    Ok(feedback) => return Ok(feedback),
                    Err(err) => writeln!(self.output, "Invalid feedback: {err}")?,
                },
            }
        }
    }
}

impl<R: BufRead, W: Write> Oracle for HumanOracle<R, W> {
    fn play(&mut self, guess: &Word) -> Result<Feedback, OracleError> {
        if self.attempts >= self.max_attempts {
            return Err(OracleError::AttemptsExceeded {
                limit: self.max_attempts,
            });
        }

        writeln!(
            self.output,
            "Guess {}: {}",
            self.attempts + 1,
            guess.text().to_uppercase()
        )?;
        let feedback = self.read_feedback()?;
        self.attempts += 1;
        Ok(feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use test_case::test_case;

    fn oracle(input: &str) -> HumanOracle<Cursor<Vec<u8>>, Vec<u8>> {
        HumanOracle::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn crane() -> Word {
        Word::new("crane").unwrap()
    }

    #[test_case("uuRuR\n", "--G-G" ; "letter codes")]
    #[test_case("--g-g\n", "--G-G" ; "colour codes")]
    #[test_case("⬜⬜🟩⬜🟩\n", "--G-G" ; "emoji")]
    #[test_case("  wwuuu \n", "YY---" ; "surrounding whitespace")]
    #[test_case("win\n", "GGGGG" ; "win shortcut")]
    fn parses_feedback(input: &str, expected: &str) {
        let mut oracle = oracle(input);
        let feedback = oracle.play(&crane()).unwrap();
        assert_eq!(feedback.to_string(), expected);
        assert_eq!(oracle.attempts(), 1);
    }

    #[test]
    fn shows_guess_and_reprompts_on_invalid_input() {
        let mut oracle = oracle("rrr\nxxxxx\nrrrrr\n");
        assert!(oracle.play(&crane()).unwrap().is_solved());

        let output = String::from_utf8(oracle.into_output()).unwrap();
        assert!(output.starts_with("Guess 1: CRANE\n"));
        assert_eq!(output.matches("Invalid feedback:").count(), 2);
        assert!(output.contains("exactly 5 symbols, got 3"));
        assert!(output.contains("symbol 'x'"));
        assert_eq!(output.matches(PROMPT).count(), 3);
    }

    #[test]
    fn quit_aborts() {
        let mut oracle = oracle("quit\n");
        assert!(matches!(oracle.play(&crane()), Err(OracleError::Aborted)));
        assert_eq!(oracle.attempts(), 0);
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut oracle = oracle("");
        assert!(matches!(oracle.play(&crane()), Err(OracleError::Input(_))));
    }

    #[test]
    fn attempt_budget_is_enforced() {
        let mut oracle = oracle("uuuuu\nuuuuu\n").with_max_attempts(1);
        assert!(oracle.play(&crane()).is_ok());
        assert!(matches!(
            oracle.play(&crane()),
            Err(OracleError::AttemptsExceeded { limit: 1 })
        ));
    }
}
