//! Formatting utilities for terminal output

use crate::core::{Feedback, FeedbackSymbol, Word};
use colored::{ColoredString, Colorize};

/// Format feedback as the familiar row of squares
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback
        .symbols()
        .iter()
        .map(|symbol| match symbol {
            FeedbackSymbol::RightPlace => '🟩',
            FeedbackSymbol::WrongPlace => '🟨',
            FeedbackSymbol::Unused => '⬜',
        })
        .collect()
}

/// Upper-case guess with each letter coloured by its feedback
#[must_use]
pub fn colored_guess(word: &Word, feedback: &Feedback) -> String {
    word.chars()
        .iter()
        .zip(feedback.symbols())
        .map(|(&letter, symbol)| {
            let tile = format!(" {} ", char::from(letter.to_ascii_uppercase()));
            color_tile(&tile, *symbol).to_string()
        })
        .collect()
}

fn color_tile(tile: &str, symbol: FeedbackSymbol) -> ColoredString {
    match symbol {
        FeedbackSymbol::RightPlace => tile.black().on_green().bold(),
        FeedbackSymbol::WrongPlace => tile.black().on_yellow().bold(),
        FeedbackSymbol::Unused => tile.white().on_bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Clamped to [0, width] before the cast
        ((value / max) * width as f64).clamp(0.0, width as f64) as usize
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback(text: &str) -> Feedback {
        text.parse().unwrap()
    }

    #[test]
    fn emoji_all_unused() {
        assert_eq!(feedback_to_emoji(&feedback("-----")), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn emoji_solved() {
        assert_eq!(feedback_to_emoji(&Feedback::SOLVED), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn emoji_mixed() {
        assert_eq!(feedback_to_emoji(&feedback("YYY-Y")), "🟨🟨🟨⬜🟨");
    }

    #[test]
    fn colored_guess_keeps_letters() {
        colored::control::set_override(false);
        let word = Word::new("crane").unwrap();
        assert_eq!(
            colored_guess(&word, &feedback("--G-G")),
            " C  R  A  N  E "
        );
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
