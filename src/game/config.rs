//! Board dimensions

use crate::core::WORD_LENGTH;
use thiserror::Error;

/// Default number of attempts
pub const MAX_GUESSES: usize = 6;

/// Invalid session configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a board needs at least one row")]
    NoRows,
    #[error("words need at least one letter")]
    NoLetters,
    #[error("target has {actual} letters but the board expects {expected}")]
    TargetLength { expected: usize, actual: usize },
}

/// Rows and word length for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    rows: usize,
    word_length: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: MAX_GUESSES,
            word_length: WORD_LENGTH,
        }
    }
}

impl SessionConfig {
    /// # Errors
    /// Returns `ConfigError` if either dimension is zero.
    pub const fn new(rows: usize, word_length: usize) -> Result<Self, ConfigError> {
        if rows == 0 {
            return Err(ConfigError::NoRows);
        }
        if word_length == 0 {
            return Err(ConfigError::NoLetters);
        }
        Ok(Self { rows, word_length })
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }
}
