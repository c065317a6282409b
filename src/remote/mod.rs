//! JSON shapes for remote word and scoring services
//!
//! A hosted game answers three queries: the target word, the acceptable
//! word list and the scoring of a guess. These types mirror those payloads
//! so responses can be parsed, produced from the local engine, and checked
//! against it. The local engine is authoritative; remote scoring is only
//! ever compared, never trusted.

use crate::core::{Feedback, LetterStatus, ScoreError, Scorer, Word};
use serde::{Deserialize, Serialize};

/// Answer to a target word query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetResponse {
    pub word: String,
}

impl From<&Word> for TargetResponse {
    fn from(word: &Word) -> Self {
        Self {
            word: word.text().to_string(),
        }
    }
}

/// Answer to a word list query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordListResponse {
    pub words: Vec<String>,
}

impl WordListResponse {
    /// Uppercase every entry and drop blank ones
    #[must_use]
    pub fn normalized<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().trim().to_uppercase())
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }
}

/// Failure payload paired with a non-success status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Guess submitted for remote scoring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRequest {
    pub guess: String,
}

/// Per-letter flags in a scoring response
///
/// Either flag may be missing in a malformed payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterScoring {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_word: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_idx: Option<bool>,
}

impl LetterScoring {
    /// Collapse the flags into a status
    ///
    /// `correct_idx` wins over `in_word`. Anything missing counts as false.
    #[must_use]
    pub fn status(self) -> LetterStatus {
        match (self.in_word, self.correct_idx) {
            (_, Some(true)) => LetterStatus::Correct,
            (Some(true), _) => LetterStatus::Present,
            _ => LetterStatus::Absent,
        }
    }

    const fn is_complete(self) -> bool {
        self.in_word.is_some() && self.correct_idx.is_some()
    }
}

impl From<LetterStatus> for LetterScoring {
    fn from(status: LetterStatus) -> Self {
        Self {
            in_word: Some(status.is_hit()),
            correct_idx: Some(status == LetterStatus::Correct),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterInfo {
    #[serde(rename = "char", default)]
    pub letter: Option<char>,
    #[serde(default)]
    pub scoring: Option<LetterScoring>,
}

/// Answer to a guess submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessResponse {
    pub guess: String,
    #[serde(default)]
    pub was_correct: Option<bool>,
    #[serde(default)]
    pub character_info: Vec<CharacterInfo>,
}

impl GuessResponse {
    /// Score `guess` against `target` with the local engine
    ///
    /// # Errors
    ///
    /// Returns `ScoreError::InvalidInput` if the lengths differ.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::remote::GuessResponse;
    ///
    /// let response = GuessResponse::from_local("crate", "crate").unwrap();
    /// assert_eq!(response.was_correct, Some(true));
    /// assert_eq!(response.character_info.len(), 5);
    /// ```
    pub fn from_local(guess: &str, target: &str) -> Result<Self, ScoreError> {
        let feedback = score_local(guess, target)?;
        let guess = guess.to_uppercase();
        let character_info = guess
            .chars()
            .zip(&feedback)
            .map(|(letter, &status)| CharacterInfo {
                letter: Some(letter),
                scoring: Some(status.into()),
            })
            .collect();

        Ok(Self {
            guess,
            was_correct: Some(feedback.is_perfect()),
            character_info,
        })
    }

    /// Statuses for each letter of the guess
    ///
    /// Positions with missing or partial scoring are treated as `Absent`
    /// and logged. The result always has one entry per letter of `guess`.
    #[must_use]
    pub fn statuses(&self) -> Feedback {
        let length = self.guess.chars().count();
        if self.character_info.len() != length {
            log::warn!(
                "remote scoring for {} has {} entries, expected {length}",
                self.guess,
                self.character_info.len()
            );
        }
        if self.was_correct.is_none() {
            log::warn!("remote scoring for {} has no was_correct", self.guess);
        }
        for (i, info) in self.character_info.iter().enumerate() {
            if info.letter.is_none() {
                log::warn!("remote scoring for {} position {i} has no char", self.guess);
            }
        }

        (0..length)
            .map(|i| match self.character_info.get(i).and_then(|info| info.scoring) {
                Some(scoring) => {
                    if !scoring.is_complete() {
                        log::warn!(
                            "remote scoring for {} position {i} is incomplete: {scoring:?}",
                            self.guess
                        );
                    }
                    scoring.status()
                }
                None => {
                    log::warn!(
                        "remote scoring for {} position {i} is missing",
                        self.guess
                    );
                    LetterStatus::Absent
                }
            })
            .collect::<Vec<_>>()
            .into()
    }
}

/// Score with the engine sized to the target
fn score_local(guess: &str, target: &str) -> Result<Feedback, ScoreError> {
    Scorer::new(target.chars().count()).evaluate(guess, target)
}

/// One position where remote and local scoring disagree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Divergence {
    pub position: usize,
    pub letter: char,
    pub remote: LetterStatus,
    pub local: LetterStatus,
}

/// Compare a remote scoring response with the local engine
///
/// Returns every position where the two disagree; an empty list means the
/// response is consistent.
///
/// # Errors
///
/// Returns `ScoreError::InvalidInput` if the response's guess cannot be
/// scored against `target`.
pub fn verify_against_local(
    response: &GuessResponse,
    target: &str,
) -> Result<Vec<Divergence>, ScoreError> {
    let local = score_local(&response.guess, target)?;
    let remote = response.statuses();

    let divergences: Vec<Divergence> = response
        .guess
        .to_uppercase()
        .chars()
        .zip(remote.statuses().iter().zip(local.statuses()))
        .enumerate()
        .filter(|(_, (_, (remote, local)))| remote != local)
        .map(|(position, (letter, (&remote, &local)))| Divergence {
            position,
            letter,
            remote,
            local,
        })
        .collect();

    if response
        .was_correct
        .is_some_and(|was_correct| was_correct != local.is_perfect())
    {
        log::warn!(
            "remote says was_correct for {}, local engine disagrees",
            response.guess
        );
    }
    Ok(divergences)
}
