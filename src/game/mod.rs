//! Game state
//!
//! [`Session`] is the single-game state machine, [`Game`] wraps it with the
//! "no target yet" state, and [`Statistics`] tallies finished games.

mod config;
mod error;
mod lifecycle;
mod session;
mod stats;

pub use config::{ConfigError, MAX_GUESSES, SessionConfig};
pub use error::SessionError;
pub use lifecycle::{Game, InputEvent, InputOutcome};
pub use session::{GameStatus, PendingSubmission, Reveal, Session, SessionSnapshot};
pub use stats::Statistics;
