//! Per-letter feedback status
//!
//! The closed set of states a tile or keyboard key can be in. Variants are
//! declared in upgrade order, so the derived `Ord` gives
//! `Unset < Absent < Present < Correct`.

use std::fmt;

/// Feedback for a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LetterStatus {
    /// Not yet scored
    #[default]
    Unset,
    /// Letter not in the target (gray)
    Absent,
    /// Letter in the target, wrong position (yellow)
    Present,
    /// Letter in the correct position (green)
    Correct,
}

impl LetterStatus {
    /// Combine two statuses, keeping the more favorable one
    #[inline]
    #[must_use]
    pub fn upgrade(self, incoming: Self) -> Self {
        self.max(incoming)
    }

    /// Whether the letter has been scored as appearing in the target
    #[inline]
    #[must_use]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Present | Self::Correct)
    }

    /// Emoji tile for share-style output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
            Self::Unset => '⬛',
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unset => "unset",
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        };
        f.write_str(name)
    }
}
