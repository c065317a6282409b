//! Interactive terminal play
//!
//! A ratatui front end over [`crate::game::Game`]: typing fills the active
//! row, Enter submits, and revealed rows flip one tile at a time.

pub mod app;
pub mod rendering;
pub mod reveal;

pub use app::{App, run_tui};
