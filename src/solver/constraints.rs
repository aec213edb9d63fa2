//! Constraint tracking and candidate filtering
//!
//! Constraints accumulate everything the feedback has revealed during one game:
//! letters known to be present, letters fixed at a position, and letters known
//! not to occupy a position. Candidates are filtered against them after each round.

use crate::core::{Feedback, FeedbackSymbol, LetterSet, WORD_LENGTH, Word};
use std::fmt;

/// What is known about one letter position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Slot {
    fixed: Option<u8>,
    excluded: LetterSet,
}

impl Slot {
    /// Letter confirmed at this position, if any
    #[inline]
    #[must_use]
    pub const fn fixed(&self) -> Option<u8> {
        self.fixed
    }

    /// Letters known not to occupy this position
    #[inline]
    #[must_use]
    pub const fn excluded(&self) -> LetterSet {
        self.excluded
    }

    #[inline]
    fn allows(&self, letter: u8) -> bool {
        self.fixed.is_none_or(|fixed| fixed == letter) && !self.excluded.contains(letter)
    }

    #[inline]
    fn exclude(&mut self, letter: u8) {
        if self.fixed.is_none() {
            self.excluded.insert(letter);
        }
    }
}

/// Knowledge accumulated from feedback during one game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    required: LetterSet,
    slots: [Slot; WORD_LENGTH],
}

impl Constraints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Letters confirmed present somewhere in the target
    #[inline]
    #[must_use]
    pub const fn required(&self) -> LetterSet {
        self.required
    }

    #[inline]
    #[must_use]
    pub const fn slots(&self) -> &[Slot; WORD_LENGTH] {
        &self.slots
    }

    /// Number of positions with a confirmed letter
    #[must_use]
    pub fn fixed_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.fixed.is_some()).count()
    }

    /// Fold the feedback for `guess` into the constraints
    ///
    /// `RightPlace` fixes the slot and drops its earlier exclusions. `WrongPlace` requires
    /// the letter and excludes it from that slot. For `Unused`, a letter with no present
    /// mark anywhere in the guess is absent from the target and is excluded from every
    /// open slot; a letter marked present elsewhere in the guess only has its copies
    /// exhausted, so it is excluded from this slot alone.
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        let mut marked = LetterSet::EMPTY;

        for ((slot, &letter), &symbol) in self
            .slots
            .iter_mut()
            .zip(guess.chars())
            .zip(feedback.symbols())
        {
            match symbol {
                FeedbackSymbol::RightPlace => {
                    self.required.insert(letter);
                    marked.insert(letter);
                    slot.fixed = Some(letter);
                    slot.excluded.clear();
                }
                FeedbackSymbol::WrongPlace => {
                    self.required.insert(letter);
                    marked.insert(letter);
                    slot.exclude(letter);
                }
                FeedbackSymbol::Unused => {}
            }
        }

        for (position, (&letter, &symbol)) in
            guess.chars().iter().zip(feedback.symbols()).enumerate()
        {
            if symbol.is_present() {
                continue;
            }
            if marked.contains(letter) {
                self.slots[position].exclude(letter);
            } else {
                for slot in &mut self.slots {
                    slot.exclude(letter);
                }
            }
        }
    }

    /// Check whether `word` could still be the target
    ///
    /// True iff every required letter occurs in the word, every fixed slot matches and no
    /// slot holds a letter excluded from it.
    #[must_use]
    pub fn is_consistent(&self, word: &Word) -> bool {
        self.required.is_subset(word.letters())
            && self
                .slots
                .iter()
                .zip(word.chars())
                .all(|(slot, &letter)| slot.allows(letter))
    }

    /// Keep exactly the consistent candidates, preserving order
    #[must_use]
    pub fn filter<'a>(&self, candidates: &[&'a Word]) -> Vec<&'a Word> {
        candidates
            .iter()
            .copied()
            .filter(|word| self.is_consistent(word))
            .collect()
    }
}

impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "required=[{}] fixed=", self.required)?;
        for slot in &self.slots {
            write!(f, "{}", slot.fixed.map_or('.', char::from))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn record_against(constraints: &mut Constraints, guess: &str, target: &str) {
        let guess = word(guess);
        let feedback = Feedback::calculate(&guess, &word(target));
        constraints.record(&guess, &feedback);
    }

    #[test]
    fn empty_constraints_accept_everything() {
        let constraints = Constraints::new();
        assert!(constraints.is_consistent(&word("crane")));
        assert!(constraints.is_consistent(&word("zzzzz")));
        assert_eq!(constraints.fixed_count(), 0);
    }

    #[test]
    fn right_place_fixes_slot() {
        let mut constraints = Constraints::new();
        record_against(&mut constraints, "crane", "slate");

        assert_eq!(constraints.slots()[2].fixed(), Some(b'a'));
        assert_eq!(constraints.slots()[4].fixed(), Some(b'e'));
        assert!(constraints.required().contains(b'a'));
        assert!(constraints.required().contains(b'e'));
        assert_eq!(constraints.fixed_count(), 2);
    }

    #[test]
    fn unused_letters_excluded_from_open_slots_only() {
        let mut constraints = Constraints::new();
        record_against(&mut constraints, "crane", "slate");

        let absent = LetterSet::from_letters(b"crn");
        for position in [0, 1, 3] {
            assert_eq!(constraints.slots()[position].excluded(), absent);
        }
        assert!(constraints.slots()[2].excluded().is_empty());
        assert!(constraints.slots()[4].excluded().is_empty());
    }

    #[test]
    fn wrong_place_requires_and_excludes_slot() {
        let mut constraints = Constraints::new();
        // R is in ROKER but not at position 1
        record_against(&mut constraints, "arise", "roker");

        assert!(constraints.required().contains(b'r'));
        assert!(constraints.slots()[1].excluded().contains(b'r'));
        assert!(!constraints.slots()[0].excluded().contains(b'r'));
        assert!(constraints.is_consistent(&word("roker")));
        assert!(!constraints.is_consistent(&word("aroma")));
    }

    #[test]
    fn right_place_clears_earlier_exclusions() {
        let mut constraints = Constraints::new();
        record_against(&mut constraints, "crane", "slate");
        assert!(!constraints.slots()[0].excluded().is_empty());

        record_against(&mut constraints, "state", "slate");
        assert_eq!(constraints.slots()[0].fixed(), Some(b's'));
        assert!(constraints.slots()[0].excluded().is_empty());
    }

    #[test]
    fn repeated_letter_not_over_excluded() {
        // The second L of POLLS is unused, but SPOOL still has an L at position 4
        let mut constraints = Constraints::new();
        record_against(&mut constraints, "polls", "spool");

        assert_eq!(constraints.required(), LetterSet::from_letters(b"lops"));
        assert!(constraints.slots()[3].excluded().contains(b'l'));
        assert!(!constraints.slots()[4].excluded().contains(b'l'));
        assert!(constraints.is_consistent(&word("spool")));
    }

    #[test]
    fn repeated_letter_with_fixed_occurrence() {
        // EERIE vs THERE: the last E is fixed, the second E is unused
        let mut constraints = Constraints::new();
        record_against(&mut constraints, "eerie", "there");

        assert_eq!(constraints.slots()[4].fixed(), Some(b'e'));
        assert!(constraints.slots()[1].excluded().contains(b'e'));
        assert!(!constraints.slots()[2].excluded().contains(b'e'));
        assert!(constraints.is_consistent(&word("there")));
    }

    #[test]
    fn filter_keeps_order_and_consistent_words() {
        let words: Vec<Word> = ["crane", "slate", "plate", "grate", "state"]
            .into_iter()
            .map(word)
            .collect();
        let candidates: Vec<&Word> = words.iter().collect();

        let mut constraints = Constraints::new();
        record_against(&mut constraints, "crane", "slate");

        let remaining: Vec<&str> = constraints
            .filter(&candidates)
            .into_iter()
            .map(Word::text)
            .collect();
        assert_eq!(remaining, vec!["slate", "plate", "state"]);
    }

    #[test]
    fn target_survives_every_guess() {
        let texts = [
            "roker", "spool", "polls", "erase", "speed", "floor", "robot", "there", "eerie",
            "crane", "slate", "sheet", "geese", "lolly", "allow", "mamma",
        ];
        let words: Vec<Word> = texts.into_iter().map(word).collect();

        for target in &words {
            for guess in &words {
                let mut constraints = Constraints::new();
                constraints.record(guess, &Feedback::calculate(guess, target));
                assert!(
                    constraints.is_consistent(target),
                    "{target} rejected after guessing {guess}"
                );
            }
        }
    }

    #[test]
    fn consistency_is_deterministic() {
        let mut constraints = Constraints::new();
        record_against(&mut constraints, "arise", "roker");
        let probe = word("poker");
        let first = constraints.is_consistent(&probe);
        for _ in 0..10 {
            assert_eq!(constraints.is_consistent(&probe), first);
        }
    }

    #[test]
    fn display_summarises_state() {
        let mut constraints = Constraints::new();
        record_against(&mut constraints, "crane", "slate");
        assert_eq!(constraints.to_string(), "required=[ae] fixed=..a.e");
    }
}
