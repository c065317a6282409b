//! Core domain types for Wordle
//!
//! Pure, synchronous building blocks: words, letter statuses, the scoring
//! engine, board rows and the keyboard tracker. Nothing here performs I/O.

mod keyboard;
mod row;
mod scoring;
mod status;
mod word;

pub use keyboard::KeyboardState;
pub use row::GuessRow;
pub use scoring::{Feedback, ScoreError, Scorer, evaluate};
pub use status::LetterStatus;
pub use word::{WORD_LENGTH, Word, WordError};
