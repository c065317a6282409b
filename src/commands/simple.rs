//! Simple line-mode game
//!
//! Text-based play without the TUI: one guess per line, board and keyboard
//! printed with colored tiles after every turn.

use crate::game::{Game, InputEvent, InputOutcome, SessionConfig, SessionError, Statistics};
use crate::output::{print_board, print_keyboard, print_outcome, print_statistics};
use crate::wordlists::WordSource;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Run the line-mode game until the player quits or input ends
///
/// Lines that are exactly one word long are guesses; anything else is
/// checked against the commands `quit`, `new` and `stats`.
///
/// # Errors
///
/// Returns an error if reading input or writing to stdout fails.
pub async fn run_simple<S, R>(source: &S, config: SessionConfig, mut input: R) -> Result<Statistics>
where
    S: WordSource + ?Sized,
    R: AsyncBufRead + Unpin,
{
    println!("\n╔══════════════════════════════════════════════════╗");
    println!("║                 Wordle - Line Mode               ║");
    println!("╚══════════════════════════════════════════════════╝\n");
    println!(
        "Guess the {}-letter word in {} tries.",
        config.word_length(),
        config.rows()
    );
    println!("Commands: 'quit' to exit, 'new' for a new game, 'stats' for statistics\n");

    let mut stats = Statistics::new();
    let mut game = Game::start(source, config).await;

    loop {
        let session = match &game {
            Game::NotReady { reason } => {
                println!("{}", format!("❌ Could not load a word: {reason}").red());
                match read_line(&mut input, "Press Enter to retry or type 'quit'").await? {
                    Some(line) if !is_quit(&line) => {
                        game.retry(source, config).await;
                        continue;
                    }
                    _ => break,
                }
            }
            Game::Ready(session) => session,
        };

        if session.status().is_terminal() {
            print_board(session);
            print_outcome(session);
            stats.record(session);

            match read_line(&mut input, "Play again? (yes/no)")
                .await?
                .as_deref()
            {
                Some("yes" | "y") => {
                    game.restart(source, config).await;
                    println!("\n🔄 New game started!\n");
                    continue;
                }
                _ => break,
            }
        }

        print_board(session);
        print_keyboard(session);

        let prompt = format!("Guess {}/{}", session.attempts() + 1, session.rows().len());
        let Some(line) = read_line(&mut input, &prompt).await? else {
            break;
        };

        let is_word = line.chars().count() == config.word_length()
            && line.chars().all(|c| c.is_ascii_alphabetic());
        if is_word {
            enter_guess(&mut game, &line, source).await;
            continue;
        }

        match line.as_str() {
            "quit" | "q" | "exit" => break,
            "new" | "n" => {
                game.restart(source, config).await;
                println!("\n🔄 New game started!\n");
            }
            "stats" => print_statistics(&stats),
            _ => println!(
                "{}",
                format!("Enter a {}-letter word", config.word_length()).yellow()
            ),
        }
    }

    print_statistics(&stats);
    println!("\n👋 Thanks for playing!\n");
    Ok(stats)
}

/// Replace the active row with `word` and submit it
async fn enter_guess<S>(game: &mut Game, word: &str, source: &S)
where
    S: WordSource + ?Sized,
{
    if let Ok(session) = game.session_mut() {
        while session.delete_letter() {}
        for letter in word.chars() {
            session.add_letter(letter);
        }
    }

    match game.apply(InputEvent::Submit, source).await {
        Ok(InputOutcome::Revealed(reveal)) => {
            log::debug!("revealed row {}", reveal.row);
        }
        Ok(_) => {}
        Err(err @ SessionError::RejectedGuess { .. }) => {
            println!("{}", format!("❌ {err}").red());
        }
        Err(SessionError::SourceUnavailable(err)) => {
            println!("{}", format!("❌ {err}, try again").red());
        }
        Err(err) => {
            log::error!("guess {word} failed: {err}");
            println!("{}", format!("❌ {err}").red());
        }
    }
}

fn is_quit(line: &str) -> bool {
    matches!(line, "quit" | "q" | "exit")
}

/// Prompt and read one trimmed, lowercased line; `None` at end of input
async fn read_line<R>(input: &mut R, prompt: &str) -> io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line).await? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}
