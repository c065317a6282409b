//! Score a single guess against a target

use crate::core::{Feedback, ScoreError, Scorer};
use crate::output::print_score;
use crate::remote::GuessResponse;
use anyhow::Result;

/// Score `guess` against `target`, sized to the target's length
///
/// # Errors
///
/// Returns `ScoreError::InvalidInput` if the lengths differ.
pub fn score_guess(guess: &str, target: &str) -> Result<Feedback, ScoreError> {
    Scorer::new(target.chars().count()).evaluate(guess, target)
}

/// Print the score either as tiles or as a scoring response
///
/// # Errors
///
/// Returns an error if the lengths differ or serialization fails.
pub fn run_score(guess: &str, target: &str, json: bool) -> Result<()> {
    if json {
        let response = GuessResponse::from_local(guess, target)?;
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        let feedback = score_guess(guess, target)?;
        print_score(guess, &feedback);
    }
    Ok(())
}
