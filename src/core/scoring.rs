//! Guess scoring
//!
//! Computes the per-letter feedback for one guess against one target,
//! including proper handling of duplicate letters.

use super::{LetterStatus, WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Scoring contract violation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Guess or target does not have the expected number of letters
    #[error("invalid input: expected {expected} letters, got guess of {guess} and target of {target}")]
    InvalidInput {
        expected: usize,
        guess: usize,
        target: usize,
    },
}

/// Feedback for a whole guess, one status per position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterStatus>);

impl Feedback {
    /// Per-position statuses in guess order
    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Count the number of correct (green) positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&s| s == LetterStatus::Correct).count()
    }

    /// Count the number of present (yellow) positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&s| s == LetterStatus::Present).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl From<Vec<LetterStatus>> for Feedback {
    fn from(statuses: Vec<LetterStatus>) -> Self {
        Self(statuses)
    }
}

impl<'a> IntoIterator for &'a Feedback {
    type Item = &'a LetterStatus;
    type IntoIter = std::slice::Iter<'a, LetterStatus>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Scoring engine for a fixed word length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scorer {
    word_length: usize,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(WORD_LENGTH)
    }
}

impl Scorer {
    #[must_use]
    pub const fn new(word_length: usize) -> Self {
        Self { word_length }
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Score `guess` against `target`
    ///
    /// Both inputs are compared case-insensitively.
    ///
    /// # Algorithm
    /// 1. Build a multiset of the target's letters
    /// 2. First pass: mark exact matches (correct) and remove them from the pool
    /// 3. Second pass: mark remaining letters present while the pool still has them
    ///
    /// # Errors
    /// Returns `ScoreError::InvalidInput` if either string does not have
    /// exactly `word_length` characters.
    pub fn evaluate(&self, guess: &str, target: &str) -> Result<Feedback, ScoreError> {
        let guess: Vec<char> = guess.chars().map(|c| c.to_ascii_uppercase()).collect();
        let target: Vec<char> = target.chars().map(|c| c.to_ascii_uppercase()).collect();

        if guess.len() != self.word_length || target.len() != self.word_length {
            return Err(ScoreError::InvalidInput {
                expected: self.word_length,
                guess: guess.len(),
                target: target.len(),
            });
        }

        let mut result = vec![LetterStatus::Absent; self.word_length];
        let mut available: FxHashMap<char, usize> = FxHashMap::default();
        for &letter in &target {
            *available.entry(letter).or_insert(0) += 1;
        }

        // First pass: exact position matches
        for (i, (g, t)) in guess.iter().zip(&target).enumerate() {
            if g == t {
                result[i] = LetterStatus::Correct;
                if let Some(count) = available.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but letter still unclaimed
        for (i, letter) in guess.iter().enumerate() {
            if result[i] == LetterStatus::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(letter)
                && *count > 0
            {
                result[i] = LetterStatus::Present;
                *count -= 1;
            }
        }

        Ok(Feedback(result))
    }

    /// Score two validated words
    ///
    /// # Errors
    /// Returns `ScoreError::InvalidInput` if either word has the wrong length.
    pub fn score(&self, guess: &Word, target: &Word) -> Result<Feedback, ScoreError> {
        self.evaluate(guess.text(), target.text())
    }
}

/// Score a five-letter guess against a five-letter target
///
/// # Errors
/// Returns `ScoreError::InvalidInput` if either string is not 5 characters.
///
/// # Examples
/// ```
/// use wordle_game::core::{evaluate, LetterStatus};
///
/// let feedback = evaluate("crane", "slate").unwrap();
/// assert_eq!(feedback.to_emoji(), "⬜⬜🟩⬜🟩");
/// assert_eq!(feedback.statuses()[2], LetterStatus::Correct);
/// ```
pub fn evaluate(guess: &str, target: &str) -> Result<Feedback, ScoreError> {
    Scorer::default().evaluate(guess, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use crate::core::LetterStatus::{Absent, Correct, Present};

    #[test]
    fn all_correct_when_guess_equals_target() {
        let feedback = evaluate("crane", "crane").unwrap();
        assert!(feedback.is_perfect());
        assert_eq!(feedback.count_correct(), 5);
    }

    #[test]
    fn all_absent_when_no_letters_shared() {
        let feedback = evaluate("abcde", "fghij").unwrap();
        assert_eq!(feedback.statuses(), &[Absent; 5]);
        assert_eq!(feedback.count_correct(), 0);
        assert_eq!(feedback.count_present(), 0);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(evaluate("CrAnE", "slate"), evaluate("crane", "SLATE"));
    }

    #[test]
    fn invalid_length_rejected() {
        assert_eq!(
            evaluate("cranes", "slate"),
            Err(ScoreError::InvalidInput {
                expected: 5,
                guess: 6,
                target: 5
            })
        );
        assert!(evaluate("crane", "sla").is_err());
        assert!(evaluate("", "").is_err());
    }

    #[test]
    fn crate_against_react() {
        let feedback = evaluate("CRATE", "REACT").unwrap();
        assert_eq!(
            feedback.statuses(),
            &[Present, Present, Correct, Present, Present]
        );
    }

    #[test]
    fn eerie_against_level_conserves_duplicates() {
        // LEVEL has two E's: one is claimed in place at index 1, the other by
        // the first E of EERIE; the last E gets nothing.
        let feedback = evaluate("EERIE", "LEVEL").unwrap();
        assert_eq!(feedback.statuses(), &[Present, Correct, Absent, Absent, Absent]);
    }

    #[test]
    fn duplicate_letters_green_takes_priority() {
        // SPEED vs ERASE: S yellow, P gray, both E's yellow, D gray
        let feedback = evaluate("speed", "erase").unwrap();
        assert_eq!(feedback.statuses(), &[Present, Absent, Present, Present, Absent]);
    }

    #[test]
    fn duplicate_letters_complex() {
        // ROBOT vs FLOOR: first O yellow, second O green
        let feedback = evaluate("robot", "floor").unwrap();
        assert_eq!(feedback.statuses(), &[Present, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn later_exact_match_claims_letter_before_earlier_guess() {
        // Only one L in WORLD and it's in position 3; the L at 0 must stay gray
        let feedback = evaluate("lolly", "world").unwrap();
        assert_eq!(feedback.statuses(), &[Absent, Correct, Absent, Correct, Absent]);
    }

    #[test]
    fn custom_word_length() {
        let scorer = Scorer::new(6);
        let feedback = scorer.evaluate("planet", "plants").unwrap();
        assert_eq!(
            feedback.statuses(),
            &[Correct, Correct, Correct, Correct, Absent, Present]
        );
        assert!(scorer.evaluate("crane", "slate").is_err());
    }

    #[test]
    fn emoji_rendering() {
        let feedback = evaluate("crane", "slate").unwrap();
        assert_eq!(feedback.to_emoji(), "⬜⬜🟩⬜🟩");
    }

    fn five_letters() -> impl Strategy<Value = String> {
        "[A-E]{5}"
    }

    proptest! {
        #[test]
        fn hits_never_exceed_target_occurrences(guess in five_letters(), target in five_letters()) {
            let feedback = evaluate(&guess, &target).unwrap();
            for letter in 'A'..='E' {
                let hits = guess
                    .chars()
                    .zip(feedback.statuses())
                    .filter(|&(c, s)| c == letter && s.is_hit())
                    .count();
                let in_target = target.chars().filter(|&c| c == letter).count();
                prop_assert!(hits <= in_target, "{letter}: {hits} hits > {in_target} in target");
            }
        }

        #[test]
        fn correct_exactly_where_letters_match(guess in five_letters(), target in five_letters()) {
            let feedback = evaluate(&guess, &target).unwrap();
            for ((g, t), s) in guess.chars().zip(target.chars()).zip(feedback.statuses()) {
                prop_assert_eq!(g == t, *s == Correct);
            }
        }

        #[test]
        fn deterministic(guess in five_letters(), target in five_letters()) {
            prop_assert_eq!(evaluate(&guess, &target), evaluate(&guess, &target));
        }

        #[test]
        fn self_match_is_perfect(word in "[A-Z]{5}") {
            prop_assert!(evaluate(&word, &word).unwrap().is_perfect());
        }
    }
}
