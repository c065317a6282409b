//! Word lists and word sources
//!
//! Embedded lists compiled into the binary, file loading helpers and the
//! `WordSource` implementations the game draws targets and dictionaries from.

mod embedded;
pub mod loader;
pub mod source;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
pub use source::{Dictionary, FileSource, ListSource, SourceError, TimeoutSource, WordSource};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn embedded_lists_are_uppercase_five_letter_words() {
        for &word in ANSWERS.iter().chain(ALLOWED) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn answers_subset_of_allowed() {
        let allowed: std::collections::HashSet<_> = ALLOWED.iter().collect();

        for answer in ANSWERS {
            assert!(
                allowed.contains(answer),
                "Answer '{answer}' not in allowed list"
            );
        }
    }

    #[test]
    fn scenario_words_present() {
        for word in ["REACT", "CRATE", "LEVEL", "EERIE"] {
            assert!(ALLOWED.contains(&word), "{word} missing from ALLOWED");
        }
    }
}
