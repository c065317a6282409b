//! Wordle
//!
//! Wordle game core: two-pass guess scoring, a strict session state machine,
//! keyboard tracking and pluggable async word sources, with a TUI and a
//! line-mode front end.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{LetterStatus, evaluate};
//!
//! let feedback = evaluate("react", "crate").unwrap();
//! assert_eq!(feedback.statuses()[2], LetterStatus::Correct);
//! assert_eq!(feedback.count_present(), 4);
//! ```
//!
//! Playing a game against the built-in word lists:
//!
//! ```rust,no_run
//! use wordle_game::game::{Session, SessionConfig};
//! use wordle_game::wordlists::{ListSource, WordSource};
//!
//! # async fn play() -> Result<(), Box<dyn std::error::Error>> {
//! let source = ListSource::embedded(5);
//! let target = source.fetch_target().await?;
//! let mut session = Session::new(target, SessionConfig::default())?;
//! for letter in "crane".chars() {
//!     session.add_letter(letter);
//! }
//! if let Some(reveal) = session.submit_guess(&source).await? {
//!     println!("{}", reveal.feedback.to_emoji());
//! }
//! # Ok(())
//! # }
//! ```

// Core domain types
pub mod core;

// Session state machine and lifecycle
pub mod game;

// Word lists and word sources
pub mod wordlists;

// Remote payload shapes
pub mod remote;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
