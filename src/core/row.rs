//! A single row of the board

use super::{Feedback, LetterStatus};

/// One guess slot: up to `capacity` letters, each with a status
///
/// Letters can be appended and removed until the row is revealed; after
/// that the row is frozen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow {
    letters: Vec<char>,
    statuses: Vec<LetterStatus>,
    capacity: usize,
    revealed: bool,
}

impl GuessRow {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            letters: Vec::with_capacity(capacity),
            statuses: vec![LetterStatus::Unset; capacity],
            capacity,
            revealed: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.letters.len() == self.capacity
    }

    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the row has been scored
    #[inline]
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// The letters typed so far, uppercase
    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().collect()
    }

    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Statuses for every slot; `Unset` until revealed
    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.statuses
    }

    /// Every slot as `(letter, status)`, empty slots yield `None`
    pub fn tiles(&self) -> impl Iterator<Item = (Option<char>, LetterStatus)> + '_ {
        (0..self.capacity).map(|i| (self.letters.get(i).copied(), self.statuses[i]))
    }

    /// Append an uppercase letter; returns false if the row is full or frozen
    pub(crate) fn push(&mut self, letter: char) -> bool {
        if self.revealed || self.is_full() {
            return false;
        }
        self.letters.push(letter.to_ascii_uppercase());
        true
    }

    /// Remove the last letter; returns false if the row is empty or frozen
    pub(crate) fn pop(&mut self) -> bool {
        !self.revealed && self.letters.pop().is_some()
    }

    /// Freeze the row with its scored feedback
    pub(crate) fn reveal(&mut self, feedback: &Feedback) {
        debug_assert!(!self.revealed, "row revealed twice");
        debug_assert_eq!(feedback.len(), self.capacity);
        self.statuses.copy_from_slice(feedback.statuses());
        self.revealed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    #[test]
    fn push_until_full() {
        let mut row = GuessRow::new(5);
        for c in "crane".chars() {
            assert!(row.push(c));
        }
        assert!(row.is_full());
        assert!(!row.push('x'));
        assert_eq!(row.text(), "CRANE");
    }

    #[test]
    fn pop_removes_last() {
        let mut row = GuessRow::new(5);
        assert!(!row.pop());
        row.push('a');
        row.push('b');
        assert!(row.pop());
        assert_eq!(row.text(), "A");
    }

    #[test]
    fn revealed_row_is_frozen() {
        let mut row = GuessRow::new(5);
        for c in "CRATE".chars() {
            row.push(c);
        }
        let feedback = evaluate("CRATE", "REACT").unwrap();
        row.reveal(&feedback);

        assert!(row.is_revealed());
        assert!(!row.pop());
        assert_eq!(row.text(), "CRATE");
        assert_eq!(row.statuses(), feedback.statuses());
    }

    #[test]
    fn tiles_pad_empty_slots() {
        let mut row = GuessRow::new(3);
        row.push('z');
        let tiles: Vec<_> = row.tiles().collect();
        assert_eq!(
            tiles,
            vec![
                (Some('Z'), LetterStatus::Unset),
                (None, LetterStatus::Unset),
                (None, LetterStatus::Unset)
            ]
        );
    }
}
