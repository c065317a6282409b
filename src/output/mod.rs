//! Terminal output formatting
//!
//! Colored tiles and keyboard for line mode, plus pretty-printing of
//! command results.

pub mod display;
pub mod formatters;

pub use display::{
    WIN_MESSAGE, game_over_message, print_board, print_divergences, print_keyboard,
    print_outcome, print_score, print_statistics,
};
