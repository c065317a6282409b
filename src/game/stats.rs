//! Per-run statistics

use super::{GameStatus, Session};

/// Results of finished games in this process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    played: u32,
    won: u32,
    current_streak: u32,
    max_streak: u32,
    /// `distribution[n]` counts wins in `n + 1` guesses
    distribution: Vec<u32>,
}

impl Statistics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished session; unfinished sessions are ignored
    ///
    /// Returns whether anything was recorded.
    pub fn record(&mut self, session: &Session) -> bool {
        match session.status() {
            GameStatus::Playing => false,
            GameStatus::Won => {
                self.played += 1;
                self.won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);

                let slot = session.attempts().saturating_sub(1);
                if self.distribution.len() <= slot {
                    self.distribution.resize(slot + 1, 0);
                }
                self.distribution[slot] += 1;
                true
            }
            GameStatus::Lost => {
                self.played += 1;
                self.current_streak = 0;
                true
            }
        }
    }

    #[must_use]
    pub const fn played(&self) -> u32 {
        self.played
    }

    #[must_use]
    pub const fn won(&self) -> u32 {
        self.won
    }

    #[must_use]
    pub const fn current_streak(&self) -> u32 {
        self.current_streak
    }

    #[must_use]
    pub const fn max_streak(&self) -> u32 {
        self.max_streak
    }

    #[must_use]
    pub fn distribution(&self) -> &[u32] {
        &self.distribution
    }

    /// Percentage of games won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            return 0.0;
        }
        f64::from(self.won) / f64::from(self.played) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::SessionConfig;

    fn finished(target: &str, guesses: &[&str]) -> Session {
        let mut session =
            Session::new(Word::new(target).unwrap(), SessionConfig::default()).unwrap();
        for guess in guesses {
            for letter in guess.chars() {
                session.add_letter(letter);
            }
            let pending = session.begin_submit().unwrap();
            session.complete_submit(pending, Ok(true)).unwrap();
        }
        session
    }

    #[test]
    fn empty_stats() {
        let stats = Statistics::new();
        assert_eq!(stats.played(), 0);
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn unfinished_session_not_recorded() {
        let mut stats = Statistics::new();
        assert!(!stats.record(&finished("CRATE", &["SLATE"])));
        assert_eq!(stats.played(), 0);
    }

    #[test]
    fn wins_and_losses_update_streaks_and_distribution() {
        let mut stats = Statistics::new();
        stats.record(&finished("CRATE", &["SLATE", "CRATE"]));
        stats.record(&finished("CRATE", &["CRATE"]));
        stats.record(&finished("CRATE", &["SLATE"; 6]));
        stats.record(&finished("CRATE", &["SLATE", "CRATE"]));

        assert_eq!(stats.played(), 4);
        assert_eq!(stats.won(), 3);
        assert_eq!(stats.max_streak(), 2);
        assert_eq!(stats.current_streak(), 1);
        assert_eq!(stats.distribution(), &[1, 2]);
        assert!((stats.win_rate() - 75.0).abs() < 1e-9);
    }
}
