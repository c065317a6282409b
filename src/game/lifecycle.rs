//! Game lifecycle
//!
//! A game only exists once a target has been fetched. Until then the
//! [`Game`] sits in `NotReady` with the reason, and every input is refused
//! with [`SessionError::NotReady`]. Starting over always draws a new target
//! from the same source.

use super::{GameStatus, Reveal, Session, SessionConfig, SessionError};
use crate::wordlists::WordSource;

/// Player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Letter(char),
    Delete,
    Submit,
}

/// What an input did to the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    /// Nothing changed
    Ignored,
    /// The active row was edited
    Edited,
    Revealed(Reveal),
}

#[derive(Debug, Clone)]
pub enum Game {
    NotReady { reason: String },
    Ready(Session),
}

impl Game {
    /// Fetch a target from `source` and start a session
    ///
    /// Failures are kept as `NotReady` rather than returned so the caller can
    /// show the reason and offer [`Game::restart`].
    pub async fn start<S>(source: &S, config: SessionConfig) -> Self
    where
        S: WordSource + ?Sized,
    {
        let target = match source.fetch_target().await {
            Ok(target) => target,
            Err(err) => {
                log::error!("could not fetch a target word: {err}");
                return Self::NotReady {
                    reason: err.to_string(),
                };
            }
        };

        match Session::new(target, config) {
            Ok(session) => Self::Ready(session),
            Err(err) => {
                log::error!("could not start a session: {err}");
                Self::NotReady {
                    reason: err.to_string(),
                }
            }
        }
    }

    /// Discard the current board and start again with a fresh target
    pub async fn restart<S>(&mut self, source: &S, config: SessionConfig)
    where
        S: WordSource + ?Sized,
    {
        *self = Self::start(source, config).await;
    }

    /// Try again to fetch a target if the last attempt failed
    ///
    /// A game that is already running is left alone. Returns whether a
    /// session is ready afterwards.
    pub async fn retry<S>(&mut self, source: &S, config: SessionConfig) -> bool
    where
        S: WordSource + ?Sized,
    {
        if let Self::NotReady { reason } = self {
            log::info!("retrying target fetch after: {reason}");
            *self = Self::start(source, config).await;
        }
        self.is_ready()
    }

    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotReady` if no target was fetched.
    pub fn session(&self) -> Result<&Session, SessionError> {
        match self {
            Self::Ready(session) => Ok(session),
            Self::NotReady { reason } => Err(SessionError::NotReady {
                reason: reason.clone(),
            }),
        }
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotReady` if no target was fetched.
    pub fn session_mut(&mut self) -> Result<&mut Session, SessionError> {
        match self {
            Self::Ready(session) => Ok(session),
            Self::NotReady { reason } => Err(SessionError::NotReady {
                reason: reason.clone(),
            }),
        }
    }

    /// Status of the current session, `None` when not ready
    #[must_use]
    pub fn status(&self) -> Option<GameStatus> {
        match self {
            Self::Ready(session) => Some(session.status()),
            Self::NotReady { .. } => None,
        }
    }

    /// Route one input to the session
    ///
    /// # Errors
    ///
    /// Returns `NotReady` without a session, and otherwise whatever
    /// [`Session::submit_guess`] reports for a submit.
    pub async fn apply<S>(
        &mut self,
        event: InputEvent,
        source: &S,
    ) -> Result<InputOutcome, SessionError>
    where
        S: WordSource + ?Sized,
    {
        let session = self.session_mut()?;
        let edited = match event {
            InputEvent::Letter(letter) => session.add_letter(letter),
            InputEvent::Delete => session.delete_letter(),
            InputEvent::Submit => {
                return Ok(session
                    .submit_guess(source)
                    .await?
                    .map_or(InputOutcome::Ignored, InputOutcome::Revealed));
            }
        };
        Ok(if edited {
            InputOutcome::Edited
        } else {
            InputOutcome::Ignored
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::loader::words_from_slice;
    use crate::wordlists::{Dictionary, ListSource, SourceError};
    use async_trait::async_trait;

    struct Offline;

    #[async_trait]
    impl WordSource for Offline {
        async fn fetch_target(&self) -> Result<Word, SourceError> {
            Err(SourceError::Unavailable("offline".into()))
        }

        async fn fetch_acceptable_words(&self) -> Result<Dictionary, SourceError> {
            Err(SourceError::Unavailable("offline".into()))
        }
    }

    fn crate_only() -> ListSource {
        ListSource::new(
            words_from_slice(&["CRATE"], 5),
            Dictionary::from_words(["REACT"]),
        )
    }

    #[tokio::test]
    async fn failed_fetch_is_not_ready() {
        let mut game = Game::start(&Offline, SessionConfig::default()).await;
        assert!(!game.is_ready());
        assert_eq!(game.status(), None);

        let err = game
            .apply(InputEvent::Letter('a'), &Offline)
            .await
            .unwrap_err();
        assert!(matches!(err, SessionError::NotReady { reason } if reason.contains("offline")));
    }

    #[tokio::test]
    async fn target_of_wrong_length_is_not_ready() {
        let config = SessionConfig::new(6, 6).unwrap();
        let game = Game::start(&crate_only(), config).await;
        assert!(matches!(game, Game::NotReady { .. }));
    }

    #[tokio::test]
    async fn events_drive_the_session() {
        let source = crate_only();
        let mut game = Game::start(&source, SessionConfig::default()).await;
        assert_eq!(game.status(), Some(GameStatus::Playing));

        for letter in "REACT".chars() {
            let outcome = game.apply(InputEvent::Letter(letter), &source).await;
            assert_eq!(outcome.unwrap(), InputOutcome::Edited);
        }
        assert_eq!(
            game.apply(InputEvent::Letter('X'), &source).await.unwrap(),
            InputOutcome::Ignored
        );

        let outcome = game.apply(InputEvent::Submit, &source).await.unwrap();
        let InputOutcome::Revealed(reveal) = outcome else {
            panic!("expected a reveal, got {outcome:?}");
        };
        assert_eq!(reveal.guess, "REACT");
        assert_eq!(
            game.apply(InputEvent::Submit, &source).await.unwrap(),
            InputOutcome::Ignored
        );
        assert_eq!(
            game.apply(InputEvent::Delete, &source).await.unwrap(),
            InputOutcome::Ignored
        );
    }

    #[tokio::test]
    async fn retry_only_refetches_when_not_ready() {
        let source = crate_only();
        let mut game = Game::start(&Offline, SessionConfig::default()).await;
        assert!(!game.retry(&Offline, SessionConfig::default()).await);
        assert!(game.retry(&source, SessionConfig::default()).await);

        game.apply(InputEvent::Letter('R'), &source).await.unwrap();
        assert!(game.retry(&Offline, SessionConfig::default()).await);
        assert_eq!(game.session().unwrap().active_row().text(), "R");
    }

    #[tokio::test]
    async fn restart_recovers_from_not_ready() {
        let mut game = Game::start(&Offline, SessionConfig::default()).await;
        game.restart(&crate_only(), SessionConfig::default()).await;
        let session = game.session().unwrap();
        assert_eq!(session.target().text(), "CRATE");
        assert_eq!(session.attempts(), 0);
    }
}
