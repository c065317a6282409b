//! Keyboard status tracking
//!
//! Keeps the most favorable status seen for every letter across all scored
//! guesses, so an on-screen keyboard never regresses from green to yellow.

use super::LetterStatus;

const ALPHABET: usize = 26;

/// Best-known status per letter `A`–`Z`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardState {
    keys: [LetterStatus; ALPHABET],
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardState {
    /// All letters start unset
    #[must_use]
    pub const fn new() -> Self {
        Self {
            keys: [LetterStatus::Unset; ALPHABET],
        }
    }

    fn index(letter: char) -> Option<usize> {
        let upper = letter.to_ascii_uppercase();
        upper
            .is_ascii_uppercase()
            .then(|| (upper as u8 - b'A') as usize)
    }

    /// Status of a letter; letters outside `A`–`Z` are always unset
    #[must_use]
    pub fn get(&self, letter: char) -> LetterStatus {
        Self::index(letter).map_or(LetterStatus::Unset, |i| self.keys[i])
    }

    /// Fold one scored guess into the keyboard
    ///
    /// Each letter keeps `max(current, incoming)`. Letters and statuses are
    /// paired positionally; extra items on either side are ignored.
    pub fn update<I, S>(&mut self, letters: I, statuses: S)
    where
        I: IntoIterator<Item = char>,
        S: IntoIterator<Item = LetterStatus>,
    {
        for (letter, status) in letters.into_iter().zip(statuses) {
            if let Some(i) = Self::index(letter) {
                self.keys[i] = self.keys[i].upgrade(status);
            }
        }
    }

    /// Iterate over `(letter, status)` in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        self.keys
            .iter()
            .enumerate()
            .map(|(i, &status)| ((b'A' + i as u8) as char, status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use crate::core::LetterStatus::{Absent, Correct, Present, Unset};

    #[test]
    fn starts_unset() {
        let keyboard = KeyboardState::new();
        assert!(keyboard.iter().all(|(_, s)| s == Unset));
        assert_eq!(keyboard.iter().count(), 26);
    }

    #[test]
    fn upgrades_and_never_downgrades() {
        let mut keyboard = KeyboardState::new();
        keyboard.update("AB".chars(), [Present, Absent]);
        assert_eq!(keyboard.get('A'), Present);
        assert_eq!(keyboard.get('B'), Absent);

        keyboard.update("AB".chars(), [Correct, Present]);
        assert_eq!(keyboard.get('A'), Correct);
        assert_eq!(keyboard.get('B'), Present);

        keyboard.update("AB".chars(), [Absent, Absent]);
        assert_eq!(keyboard.get('A'), Correct);
        assert_eq!(keyboard.get('B'), Present);
    }

    #[test]
    fn repeated_letter_within_one_guess_keeps_best() {
        // EERIE vs LEVEL scores E as present, correct, then absent
        let mut keyboard = KeyboardState::new();
        keyboard.update("EERIE".chars(), [Present, Correct, Absent, Absent, Absent]);
        assert_eq!(keyboard.get('E'), Correct);
        assert_eq!(keyboard.get('R'), Absent);
        assert_eq!(keyboard.get('I'), Absent);
    }

    #[test]
    fn lowercase_and_non_letters() {
        let mut keyboard = KeyboardState::new();
        keyboard.update("a1".chars(), [Correct, Correct]);
        assert_eq!(keyboard.get('A'), Correct);
        assert_eq!(keyboard.get('a'), Correct);
        assert_eq!(keyboard.get('1'), Unset);
    }

    fn status() -> impl Strategy<Value = LetterStatus> {
        prop_oneof![Just(Unset), Just(Absent), Just(Present), Just(Correct)]
    }

    proptest! {
        #[test]
        fn monotonic_over_any_sequence(
            updates in prop::collection::vec(("[A-F]{5}", prop::collection::vec(status(), 5)), 1..20)
        ) {
            let mut keyboard = KeyboardState::new();
            for (letters, statuses) in updates {
                let before = keyboard.clone();
                keyboard.update(letters.chars(), statuses);
                for ((_, old), (_, new)) in before.iter().zip(keyboard.iter()) {
                    prop_assert!(new >= old);
                }
            }
        }
    }
}
