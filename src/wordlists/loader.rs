//! Word list loading utilities
//!
//! Turns newline-delimited text (files or embedded constants) into
//! normalized word lists: entries are trimmed, uppercased and blank lines
//! dropped.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Normalize raw word-list text
///
/// Every non-empty line is trimmed and uppercased. No length filtering is
/// applied; that is the caller's concern.
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::normalize_lines;
///
/// let words = normalize_lines("crane\n\n  Slate \n");
/// assert_eq!(words, vec!["CRANE", "SLATE"]);
/// ```
#[must_use]
pub fn normalize_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim().to_uppercase())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Keep only entries that are valid words of `length`
///
/// Returns the words and the number of rejected entries.
#[must_use]
pub fn words_of_length<I, S>(entries: I, length: usize) -> (Vec<Word>, usize)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut skipped = 0;
    let words = entries
        .into_iter()
        .filter_map(|entry| {
            let word = Word::with_length(entry, length).ok();
            if word.is_none() {
                skipped += 1;
            }
            word
        })
        .collect();
    (words, skipped)
}

/// Load words of `length` from a file, skipping invalid entries
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let (words, skipped) = words_of_length(normalize_lines(&content), length);
    if skipped > 0 {
        log::warn!(
            "skipped {skipped} entries in {} that are not {length}-letter words",
            path.display()
        );
    }
    Ok(words)
}

/// Async variant used by file-backed word sources
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub async fn read_normalized(path: &Path) -> io::Result<Vec<String>> {
    let content = tokio::fs::read_to_string(path).await?;
    Ok(normalize_lines(&content))
}

/// Convert an embedded string slice to words of `length`
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS, 5);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], length: usize) -> Vec<Word> {
    words_of_length(slice.iter().copied(), length).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn normalize_trims_uppercases_and_drops_blanks() {
        let words = normalize_lines("  crane\n\nSLATE\r\n   \nirate");
        assert_eq!(words, vec!["CRANE", "SLATE", "IRATE"]);
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input, 5);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let (words, skipped) = words_of_length(["crane", "toolong", "abc", "sl4te", "slate"], 5);

        assert_eq!(words.len(), 2);
        assert_eq!(skipped, 3);
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input, 5).is_empty());
    }

    #[test]
    fn load_from_file_reads_and_filters() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crane\nplanet\n\nslate").unwrap();

        let five = load_from_file(file.path(), 5).unwrap();
        assert_eq!(five.len(), 2);

        let six = load_from_file(file.path(), 6).unwrap();
        assert_eq!(six.len(), 1);
        assert_eq!(six[0].text(), "PLANET");
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/definitely/not/here.txt", 5).is_err());
    }

    #[tokio::test]
    async fn read_normalized_async() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "react\n\n crate ").unwrap();
        let words = read_normalized(file.path()).await.unwrap();
        assert_eq!(words, vec!["REACT", "CRATE"]);
    }
}
