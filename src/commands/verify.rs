//! Check a remote scoring response against the local engine

use crate::output::print_divergences;
use crate::remote::{Divergence, GuessResponse, verify_against_local};
use anyhow::{Context, Result};
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Parse a scoring response and compare it with local scoring of `target`
///
/// # Errors
///
/// Returns an error if the JSON is malformed or the guess cannot be scored
/// against `target`.
pub fn verify_response(body: &str, target: &str) -> Result<(GuessResponse, Vec<Divergence>)> {
    let response: GuessResponse =
        serde_json::from_str(body).context("malformed scoring response")?;
    let divergences = verify_against_local(&response, target)?;
    Ok((response, divergences))
}

/// Read a response from `file` (or stdin) and print the comparison
///
/// Returns whether the response agrees with the local engine.
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed.
pub async fn run_verify(target: &str, file: Option<&Path>) -> Result<bool> {
    let body = match file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut body = String::new();
            tokio::io::stdin()
                .read_to_string(&mut body)
                .await
                .context("failed to read stdin")?;
            body
        }
    };

    let (response, divergences) = verify_response(&body, target)?;
    print_divergences(&response.guess, &divergences);
    Ok(divergences.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const REACT_VS_CRATE: &str = r#"{
        "guess": "react",
        "was_correct": false,
        "character_info": [
            {"char": "r", "scoring": {"in_word": true, "correct_idx": false}},
            {"char": "e", "scoring": {"in_word": true, "correct_idx": false}},
            {"char": "a", "scoring": {"in_word": true, "correct_idx": true}},
            {"char": "c", "scoring": {"in_word": true, "correct_idx": false}},
            {"char": "t", "scoring": {"in_word": false, "correct_idx": false}}
        ]
    }"#;

    #[test]
    fn reports_divergent_position() {
        let (_, divergences) = verify_response(REACT_VS_CRATE, "crate").unwrap();
        assert_eq!(divergences.len(), 1);
        assert_eq!(divergences[0].position, 4);
        assert_eq!(divergences[0].letter, 'T');
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(verify_response("{not json", "crate").is_err());
    }

    #[tokio::test]
    async fn verifies_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let body = serde_json::to_string(&GuessResponse::from_local("slate", "crate").unwrap())
            .unwrap();
        file.write_all(body.as_bytes()).unwrap();

        assert!(run_verify("crate", Some(file.path())).await.unwrap());
        assert!(!run_verify("plate", Some(file.path())).await.unwrap());
    }
}
