//! Word queries answered as JSON
//!
//! `target` and `words` print the same payloads a hosted game serves, so
//! scripts can treat a local source like the remote one.

use crate::remote::{ErrorResponse, TargetResponse, WordListResponse};
use crate::wordlists::WordSource;

/// Draw a target word
///
/// # Errors
///
/// Returns the error payload if the source fails.
pub async fn query_target<S>(source: &S) -> Result<TargetResponse, ErrorResponse>
where
    S: WordSource + ?Sized,
{
    source
        .fetch_target()
        .await
        .map(|word| TargetResponse::from(&word))
        .map_err(|err| {
            log::error!("target query failed: {err}");
            ErrorResponse::new("Failed to load target word")
        })
}

/// List every acceptable word, sorted
///
/// # Errors
///
/// Returns the error payload if the source fails.
pub async fn query_words<S>(source: &S) -> Result<WordListResponse, ErrorResponse>
where
    S: WordSource + ?Sized,
{
    source
        .fetch_acceptable_words()
        .await
        .map(|dictionary| WordListResponse::normalized(dictionary.sorted()))
        .map_err(|err| {
            log::error!("word list query failed: {err}");
            ErrorResponse::new("Failed to load words")
        })
}
