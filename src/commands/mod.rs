//! Command implementations

pub mod query;
pub mod score;
pub mod simple;
pub mod verify;

pub use query::{query_target, query_words};
pub use score::{run_score, score_guess};
pub use simple::run_simple;
pub use verify::{run_verify, verify_response};
