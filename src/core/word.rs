//! Word representation
//!
//! A `Word` is a validated, uppercase ASCII word of a fixed length. Targets,
//! guesses and dictionary entries all pass through it.

use std::fmt;
use thiserror::Error;

/// Default number of letters in a word
pub const WORD_LENGTH: usize = 5;

/// An uppercase ASCII word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Why a string is not a valid word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Validate a five-letter word, uppercasing it
    ///
    /// # Errors
    /// `NonAscii` for any non-ASCII byte, `InvalidLength` for anything but
    /// five letters, and `InvalidCharacters` for digits, spaces or punctuation.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        Self::with_length(text, WORD_LENGTH)
    }

    /// Create a Word of an explicit length
    ///
    /// # Errors
    /// Same as [`Word::new`], checked against `length`.
    pub fn with_length(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        let text: String = text.into();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let text = text.to_ascii_uppercase();

        if text.len() != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual: text.len(),
            });
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// The uppercase text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The letters as ASCII bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the word has no letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercase_word_accepted() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.chars(), b"CRANE");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn mixed_case_is_normalized() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "CRANE");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2.text(), "CRANE");
    }

    #[test]
    fn wrong_length_reports_both_lengths() {
        assert_eq!(
            Word::new("too long"),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 8
            })
        );
        assert_eq!(
            Word::new("shrt"),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 4
            })
        );
        assert!(matches!(
            Word::new(""),
            Err(WordError::InvalidLength { actual: 0, .. })
        ));
    }

    #[test]
    fn digits_spaces_and_accents_rejected() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crané"), Err(WordError::NonAscii));
    }

    #[test]
    fn explicit_length_is_checked() {
        let word = Word::with_length("wordle", 6).unwrap();
        assert_eq!(word.text(), "WORDLE");
        assert!(Word::with_length("crane", 6).is_err());
    }

    #[test]
    fn displays_uppercase() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "CRANE");
    }
}
