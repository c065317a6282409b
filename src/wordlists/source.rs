//! Word sources
//!
//! The game depends on two read operations: drawing a target word and
//! looking up the set of acceptable guesses. Both are async and fallible so
//! a source can sit behind a file, a network call or an in-memory list.

use super::loader::{read_normalized, words_from_slice, words_of_length};
use super::{ALLOWED, ANSWERS};
use crate::core::{WORD_LENGTH, Word, WordError};
use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use thiserror::Error;

/// A word source could not answer
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no {length}-letter words available")]
    Empty { length: usize },
    #[error("malformed target word: {0}")]
    InvalidTarget(#[from] WordError),
    #[error("word source timed out after {0:?}")]
    TimedOut(Duration),
    #[error("word source unavailable: {0}")]
    Unavailable(String),
}

/// Set of acceptable guesses, stored uppercase
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build from raw entries; entries are trimmed and uppercased, blanks dropped
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_uppercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Case-insensitive membership
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        if word.bytes().all(|b| !b.is_ascii_lowercase()) {
            self.words.contains(word)
        } else {
            self.words.contains(&word.to_uppercase())
        }
    }

    pub fn insert(&mut self, word: &str) {
        self.words.insert(word.trim().to_uppercase());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in alphabetical order
    #[must_use]
    pub fn sorted(&self) -> Vec<String> {
        let mut words: Vec<String> = self.words.iter().cloned().collect();
        words.sort_unstable();
        words
    }
}

/// Supplier of target words and acceptable guesses
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Draw a target word
    async fn fetch_target(&self) -> Result<Word, SourceError>;

    /// The full set of acceptable guesses
    async fn fetch_acceptable_words(&self) -> Result<Dictionary, SourceError>;

    /// Whether `guess` may be submitted
    async fn is_acceptable(&self, guess: &str) -> Result<bool, SourceError> {
        Ok(self.fetch_acceptable_words().await?.contains(guess))
    }
}

#[async_trait]
impl<T: WordSource + ?Sized> WordSource for Box<T> {
    async fn fetch_target(&self) -> Result<Word, SourceError> {
        (**self).fetch_target().await
    }

    async fn fetch_acceptable_words(&self) -> Result<Dictionary, SourceError> {
        (**self).fetch_acceptable_words().await
    }

    async fn is_acceptable(&self, guess: &str) -> Result<bool, SourceError> {
        (**self).is_acceptable(guess).await
    }
}

fn choose_target(
    answers: &[Word],
    rng: &Mutex<StdRng>,
    length: usize,
) -> Result<Word, SourceError> {
    let mut rng = rng
        .lock()
        .map_err(|_| SourceError::Unavailable("random generator poisoned".to_string()))?;
    let target = answers
        .choose(&mut *rng)
        .cloned()
        .ok_or(SourceError::Empty { length })?;
    log::debug!("drew target from {} candidates", answers.len());
    Ok(target)
}

/// In-memory source over a fixed answer list and dictionary
///
/// Targets are drawn uniformly at random. Every answer is also acceptable
/// as a guess.
#[derive(Debug)]
pub struct ListSource {
    answers: Vec<Word>,
    dictionary: Dictionary,
    word_length: usize,
    rng: Mutex<StdRng>,
}

impl ListSource {
    #[must_use]
    pub fn new(answers: Vec<Word>, mut dictionary: Dictionary) -> Self {
        for answer in &answers {
            dictionary.insert(answer.text());
        }
        let word_length = answers.first().map_or(WORD_LENGTH, Word::len);
        Self {
            answers,
            dictionary,
            word_length,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Word lists compiled into the binary, filtered to `word_length`
    #[must_use]
    pub fn embedded(word_length: usize) -> Self {
        let answers = words_from_slice(ANSWERS, word_length);
        let dictionary = Dictionary::from_words(
            words_from_slice(ALLOWED, word_length)
                .iter()
                .map(Word::text),
        );
        let mut source = Self::new(answers, dictionary);
        source.word_length = word_length;
        source
    }

    /// Make target selection reproducible
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}

#[async_trait]
impl WordSource for ListSource {
    async fn fetch_target(&self) -> Result<Word, SourceError> {
        choose_target(&self.answers, &self.rng, self.word_length)
    }

    async fn fetch_acceptable_words(&self) -> Result<Dictionary, SourceError> {
        Ok(self.dictionary.clone())
    }

    async fn is_acceptable(&self, guess: &str) -> Result<bool, SourceError> {
        Ok(self.dictionary.contains(guess))
    }
}

/// Source that re-reads newline-delimited files on every request
///
/// The answers file supplies targets; the optional allowed file supplies
/// extra acceptable guesses on top of the answers.
#[derive(Debug)]
pub struct FileSource {
    answers_path: PathBuf,
    allowed_path: Option<PathBuf>,
    word_length: usize,
    rng: Mutex<StdRng>,
}

impl FileSource {
    #[must_use]
    pub fn new(answers_path: impl Into<PathBuf>, word_length: usize) -> Self {
        Self {
            answers_path: answers_path.into(),
            allowed_path: None,
            word_length,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    #[must_use]
    pub fn with_allowed(mut self, allowed_path: impl Into<PathBuf>) -> Self {
        self.allowed_path = Some(allowed_path.into());
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    async fn read(path: &Path) -> Result<Vec<String>, SourceError> {
        read_normalized(path).await.map_err(|source| {
            log::error!("failed to read word list {}: {source}", path.display());
            SourceError::Io {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    async fn answers(&self) -> Result<Vec<Word>, SourceError> {
        let entries = Self::read(&self.answers_path).await?;
        let (words, skipped) = words_of_length(entries, self.word_length);
        if skipped > 0 {
            log::warn!(
                "skipped {skipped} entries in {} that are not {}-letter words",
                self.answers_path.display(),
                self.word_length
            );
        }
        Ok(words)
    }
}

#[async_trait]
impl WordSource for FileSource {
    async fn fetch_target(&self) -> Result<Word, SourceError> {
        let answers = self.answers().await?;
        choose_target(&answers, &self.rng, self.word_length)
    }

    async fn fetch_acceptable_words(&self) -> Result<Dictionary, SourceError> {
        let mut dictionary = Dictionary::from_words(Self::read(&self.answers_path).await?);
        if let Some(path) = &self.allowed_path {
            for word in Self::read(path).await? {
                dictionary.insert(&word);
            }
        }
        Ok(dictionary)
    }
}

/// Bounds every call of the wrapped source with a deadline
///
/// An elapsed deadline is reported as `SourceError::TimedOut`.
#[derive(Debug)]
pub struct TimeoutSource<S> {
    inner: S,
    limit: Duration,
}

impl<S> TimeoutSource<S> {
    pub const fn new(inner: S, limit: Duration) -> Self {
        Self { inner, limit }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

#[async_trait]
impl<S: WordSource> WordSource for TimeoutSource<S> {
    async fn fetch_target(&self) -> Result<Word, SourceError> {
        tokio::time::timeout(self.limit, self.inner.fetch_target())
            .await
            .map_err(|_| SourceError::TimedOut(self.limit))?
    }

    async fn fetch_acceptable_words(&self) -> Result<Dictionary, SourceError> {
        tokio::time::timeout(self.limit, self.inner.fetch_acceptable_words())
            .await
            .map_err(|_| SourceError::TimedOut(self.limit))?
    }

    async fn is_acceptable(&self, guess: &str) -> Result<bool, SourceError> {
        tokio::time::timeout(self.limit, self.inner.is_acceptable(guess))
            .await
            .map_err(|_| SourceError::TimedOut(self.limit))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn words(list: &[&str]) -> Vec<Word> {
        words_from_slice(list, 5)
    }

    struct Stalled;

    #[async_trait]
    impl WordSource for Stalled {
        async fn fetch_target(&self) -> Result<Word, SourceError> {
            std::future::pending().await
        }

        async fn fetch_acceptable_words(&self) -> Result<Dictionary, SourceError> {
            std::future::pending().await
        }
    }

    #[test]
    fn dictionary_normalizes_and_is_case_insensitive() {
        let dictionary = Dictionary::from_words(["crane", " Slate ", ""]);
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("CRANE"));
        assert!(dictionary.contains("slate"));
        assert!(!dictionary.contains("irate"));
        assert_eq!(dictionary.sorted(), vec!["CRANE", "SLATE"]);
    }

    #[tokio::test]
    async fn list_source_answers_are_acceptable() {
        let source = ListSource::new(words(&["react"]), Dictionary::from_words(["crate"]));
        assert!(source.is_acceptable("REACT").await.unwrap());
        assert!(source.is_acceptable("crate").await.unwrap());
        assert!(!source.is_acceptable("zzzzz").await.unwrap());
        assert_eq!(source.fetch_target().await.unwrap().text(), "REACT");
    }

    #[tokio::test]
    async fn seeded_list_source_is_reproducible() {
        let answers = words(&["react", "crate", "trace", "cater", "slate"]);
        let a = ListSource::new(answers.clone(), Dictionary::default()).with_seed(7);
        let b = ListSource::new(answers, Dictionary::default()).with_seed(7);
        for _ in 0..5 {
            assert_eq!(a.fetch_target().await.unwrap(), b.fetch_target().await.unwrap());
        }
    }

    #[tokio::test]
    async fn empty_list_source_reports_empty() {
        let source = ListSource::new(Vec::new(), Dictionary::default());
        assert!(matches!(
            source.fetch_target().await,
            Err(SourceError::Empty { length: 5 })
        ));
    }

    #[tokio::test]
    async fn embedded_source_draws_acceptable_targets() {
        let source = ListSource::embedded(5).with_seed(1);
        assert!(!source.answers().is_empty());
        let target = source.fetch_target().await.unwrap();
        assert!(source.is_acceptable(target.text()).await.unwrap());
    }

    #[tokio::test]
    async fn file_source_reads_answers_and_allowed() {
        let mut answers = tempfile::NamedTempFile::new().unwrap();
        writeln!(answers, "react\n\n").unwrap();
        let mut allowed = tempfile::NamedTempFile::new().unwrap();
        writeln!(allowed, "crate\neerie").unwrap();

        let source = FileSource::new(answers.path(), 5).with_allowed(allowed.path());
        assert_eq!(source.fetch_target().await.unwrap().text(), "REACT");

        let dictionary = source.fetch_acceptable_words().await.unwrap();
        assert_eq!(dictionary.len(), 3);
        assert!(source.is_acceptable("eerie").await.unwrap());
    }

    #[tokio::test]
    async fn file_source_missing_file_is_io_error() {
        let source = FileSource::new("/no/such/answers.txt", 5);
        assert!(matches!(
            source.fetch_target().await,
            Err(SourceError::Io { .. })
        ));
    }

    #[tokio::test]
    async fn timeout_source_reports_timed_out() {
        let source = TimeoutSource::new(Stalled, Duration::from_millis(50));
        assert!(matches!(
            source.fetch_target().await,
            Err(SourceError::TimedOut(_))
        ));
        assert!(matches!(
            source.is_acceptable("crane").await,
            Err(SourceError::TimedOut(_))
        ));
    }

    #[tokio::test]
    async fn boxed_source_delegates() {
        let source: Box<dyn WordSource> = Box::new(ListSource::new(
            words(&["level"]),
            Dictionary::from_words(["eerie"]),
        ));
        assert!(source.is_acceptable("EERIE").await.unwrap());
        assert_eq!(source.fetch_target().await.unwrap().text(), "LEVEL");
    }
}
