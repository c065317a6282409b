//! A single game in progress
//!
//! The session owns the board, the keyboard and the target. It accepts
//! three inputs (append a letter, delete a letter, submit the active row)
//! and is the only place that moves the game between `Playing`, `Won` and
//! `Lost`.
//!
//! Submitting is split into two phases so the membership check against a
//! word source can run without holding the session borrowed:
//! [`Session::begin_submit`] locks input and hands out a
//! [`PendingSubmission`], and [`Session::complete_submit`] applies the
//! source's verdict. [`Session::submit_guess`] wires both phases together
//! for callers that can await in place.

use super::{ConfigError, SessionConfig, SessionError};
use crate::core::{Feedback, GuessRow, KeyboardState, Scorer, Word};
use crate::wordlists::{SourceError, WordSource};
use std::fmt;

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// `Won` and `Lost` are absorbing
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(label)
    }
}

/// Outcome of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    /// Index of the row that was scored
    pub row: usize,
    pub guess: String,
    pub feedback: Feedback,
    /// Game status after applying the guess
    pub status: GameStatus,
}

/// A submitted row waiting on a membership verdict
///
/// Only [`Session::begin_submit`] creates one. While it is outstanding the
/// session ignores letter input and further submits.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingSubmission {
    ticket: u64,
    row: usize,
    guess: String,
}

impl PendingSubmission {
    #[must_use]
    pub fn guess(&self) -> &str {
        &self.guess
    }

    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }
}

/// Read-only copy of everything a renderer needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub rows: Vec<GuessRow>,
    pub active_row: usize,
    pub status: GameStatus,
    pub keyboard: KeyboardState,
    pub submitting: bool,
}

/// One game of Wordle against a fixed target
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    scorer: Scorer,
    target: Word,
    rows: Vec<GuessRow>,
    active: usize,
    status: GameStatus,
    keyboard: KeyboardState,
    /// Ticket of the outstanding submission, if any
    submitting: Option<u64>,
    next_ticket: u64,
}

impl Session {
    /// Start a fresh board for `target`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::TargetLength` if the target does not have the
    /// configured number of letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{GameStatus, Session, SessionConfig};
    ///
    /// let target = Word::new("crate").unwrap();
    /// let session = Session::new(target, SessionConfig::default()).unwrap();
    /// assert_eq!(session.status(), GameStatus::Playing);
    /// assert_eq!(session.rows().len(), 6);
    /// ```
    pub fn new(target: Word, config: SessionConfig) -> Result<Self, ConfigError> {
        if target.len() != config.word_length() {
            return Err(ConfigError::TargetLength {
                expected: config.word_length(),
                actual: target.len(),
            });
        }

        log::debug!(
            "new session: {} rows of {} letters",
            config.rows(),
            config.word_length()
        );

        Ok(Self {
            config,
            scorer: Scorer::new(config.word_length()),
            target,
            rows: (0..config.rows())
                .map(|_| GuessRow::new(config.word_length()))
                .collect(),
            active: 0,
            status: GameStatus::Playing,
            keyboard: KeyboardState::new(),
            submitting: None,
            next_ticket: 0,
        })
    }

    /// Whether letter and submit input is currently accepted
    #[inline]
    #[must_use]
    pub const fn accepts_input(&self) -> bool {
        !self.status.is_terminal() && self.submitting.is_none()
    }

    /// Append a letter to the active row
    ///
    /// Non-alphabetic characters, full rows, finished games and rows awaiting
    /// a verdict all leave the board untouched. Returns whether a letter was
    /// added.
    pub fn add_letter(&mut self, letter: char) -> bool {
        if !self.accepts_input() || !letter.is_ascii_alphabetic() {
            return false;
        }
        self.rows[self.active].push(letter)
    }

    /// Remove the last letter of the active row; returns whether one was removed
    pub fn delete_letter(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.rows[self.active].pop()
    }

    /// Lock input and hand out the active row for a membership check
    ///
    /// Returns `None` when the row is not full, the game is over, or another
    /// submission is already outstanding.
    pub fn begin_submit(&mut self) -> Option<PendingSubmission> {
        if !self.accepts_input() {
            return None;
        }
        let row = &self.rows[self.active];
        if !row.is_full() {
            return None;
        }

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.submitting = Some(ticket);
        let pending = PendingSubmission {
            ticket,
            row: self.active,
            guess: row.text(),
        };
        log::debug!("checking {} for row {}", pending.guess, pending.row);
        Some(pending)
    }

    /// Apply the membership verdict for an outstanding submission
    ///
    /// Input is unlocked whatever the outcome, unless `pending` is not the
    /// outstanding submission; a stale one leaves the lock with its owner.
    /// An accepted guess is scored and revealed, and the keyboard and status
    /// follow. A rejected guess or source failure leaves the row as typed so
    /// the player can edit or retry.
    ///
    /// # Errors
    ///
    /// - `RejectedGuess` if the source does not know the word
    /// - `SourceUnavailable` if the source failed
    /// - `StaleSubmission` if `pending` was aborted or superseded, or no
    ///   longer matches the active row
    /// - `InvalidInput` if scoring fails
    pub fn complete_submit(
        &mut self,
        pending: PendingSubmission,
        verdict: Result<bool, SourceError>,
    ) -> Result<Reveal, SessionError> {
        if self.submitting != Some(pending.ticket) {
            log::debug!("ignoring stale verdict for {}", pending.guess);
            return Err(SessionError::StaleSubmission { row: pending.row });
        }
        self.submitting = None;

        if self.status.is_terminal()
            || pending.row != self.active
            || self.rows[self.active].text() != pending.guess
        {
            return Err(SessionError::StaleSubmission { row: pending.row });
        }

        match verdict {
            Ok(true) => {}
            Ok(false) => {
                log::info!("rejected guess {}", pending.guess);
                return Err(SessionError::RejectedGuess {
                    guess: pending.guess,
                });
            }
            Err(err) => {
                log::warn!("membership check for {} failed: {err}", pending.guess);
                return Err(err.into());
            }
        }

        let feedback = self.scorer.evaluate(&pending.guess, self.target.text())?;
        self.rows[self.active].reveal(&feedback);
        self.keyboard
            .update(pending.guess.chars(), feedback.statuses().iter().copied());

        if feedback.is_perfect() {
            self.status = GameStatus::Won;
        } else if self.active + 1 == self.rows.len() {
            self.status = GameStatus::Lost;
        } else {
            self.active += 1;
        }

        log::info!(
            "row {} {} {} -> {}",
            pending.row + 1,
            pending.guess,
            feedback.to_emoji(),
            self.status
        );

        Ok(Reveal {
            row: pending.row,
            guess: pending.guess,
            feedback,
            status: self.status,
        })
    }

    /// Unlock input without applying a verdict
    ///
    /// Used when the membership check was abandoned, for instance when its
    /// future was dropped. Returns whether a submission was outstanding.
    pub fn abort_submit(&mut self) -> bool {
        self.submitting.take().is_some()
    }

    /// Submit the active row, checking it against `source`
    ///
    /// Returns `Ok(None)` when there was nothing to submit (row not full,
    /// game over, or a submission already in flight).
    ///
    /// # Errors
    ///
    /// See [`Session::complete_submit`].
    pub async fn submit_guess<S>(&mut self, source: &S) -> Result<Option<Reveal>, SessionError>
    where
        S: WordSource + ?Sized,
    {
        let Some(pending) = self.begin_submit() else {
            return Ok(None);
        };
        let verdict = source.is_acceptable(pending.guess()).await;
        self.complete_submit(pending, verdict).map(Some)
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> SessionConfig {
        self.config
    }

    /// Index of the row currently accepting input
    ///
    /// Once the game is over this stays on the last submitted row.
    #[inline]
    #[must_use]
    pub const fn active_row_index(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&GuessRow> {
        self.rows.get(index)
    }

    #[must_use]
    pub fn active_row(&self) -> &GuessRow {
        &self.rows[self.active]
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// The word being guessed
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Number of rows that have been scored
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.rows.iter().filter(|row| row.is_revealed()).count()
    }

    #[inline]
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting.is_some()
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            rows: self.rows.clone(),
            active_row: self.active,
            status: self.status,
            keyboard: self.keyboard.clone(),
            submitting: self.submitting.is_some(),
        }
    }
}
