//! Formatting utilities for terminal output

use crate::core::{GuessRow, KeyboardState, LetterStatus};
use colored::{ColoredString, Colorize};

/// On-screen keyboard rows, top to bottom
pub const KEYBOARD_LAYOUT: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// One tile as a colored, padded letter
///
/// Empty slots render as `_` on the default background.
#[must_use]
pub fn tile(letter: Option<char>, status: LetterStatus) -> ColoredString {
    let text = format!(" {} ", letter.unwrap_or('_'));
    match status {
        LetterStatus::Correct => text.black().on_green().bold(),
        LetterStatus::Present => text.black().on_yellow().bold(),
        LetterStatus::Absent => text.white().on_bright_black(),
        LetterStatus::Unset => text.normal(),
    }
}

/// A whole row of tiles
#[must_use]
pub fn row_line(row: &GuessRow) -> String {
    row.tiles()
        .map(|(letter, status)| tile(letter, status).to_string())
        .collect()
}

/// The keyboard as three lines, each key colored by its best status
#[must_use]
pub fn keyboard_lines(keyboard: &KeyboardState) -> Vec<String> {
    KEYBOARD_LAYOUT
        .iter()
        .enumerate()
        .map(|(i, keys)| {
            let indent = " ".repeat(i * 2);
            let keys: String = keys
                .chars()
                .map(|key| tile(Some(key), keyboard.get(key)).to_string())
                .collect();
            format!("{indent}{keys}")
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tile_is_placeholder() {
        colored::control::set_override(false);
        assert_eq!(tile(None, LetterStatus::Unset).to_string(), " _ ");
        assert_eq!(tile(Some('A'), LetterStatus::Correct).to_string(), " A ");
    }

    #[test]
    fn keyboard_has_every_letter_once() {
        let letters: String = KEYBOARD_LAYOUT.concat();
        let mut sorted: Vec<char> = letters.chars().collect();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 26);
        assert_eq!(keyboard_lines(&KeyboardState::new()).len(), 3);
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
