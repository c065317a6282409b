//! Session errors

use super::ConfigError;
use crate::core::ScoreError;
use crate::wordlists::SourceError;
use thiserror::Error;

/// Why an input could not be applied
#[derive(Debug, Error)]
pub enum SessionError {
    /// No session exists yet because the word source failed
    #[error("game not ready: {reason}")]
    NotReady { reason: String },

    /// The guess is not in the acceptable word list
    #[error("not in word list: {guess}")]
    RejectedGuess { guess: String },

    /// The word source failed during a membership check
    #[error(transparent)]
    SourceUnavailable(#[from] SourceError),

    /// The scoring engine was called with malformed input
    #[error(transparent)]
    InvalidInput(#[from] ScoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A completion was handed a submission that does not match the active row
    #[error("submission for row {row} no longer matches the board")]
    StaleSubmission { row: usize },
}

impl SessionError {
    /// Whether the session is unchanged and play can simply continue
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::RejectedGuess { .. })
    }
}
