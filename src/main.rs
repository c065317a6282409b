//! Wordle - CLI
//!
//! Play Wordle in the terminal (TUI or line mode), score guesses, and answer
//! word queries as JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tokio::io::BufReader;
use wordle_game::{
    commands::{query_target, query_words, run_score, run_simple, run_verify},
    game::{MAX_GUESSES, SessionConfig},
    interactive::{App, run_tui},
    wordlists::{FileSource, ListSource, TimeoutSource, WordSource},
};

#[derive(Parser)]
#[command(name = "wordle", about = "Wordle in the terminal", version, author)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of guesses allowed
    #[arg(short, long, global = true, default_value_t = MAX_GUESSES)]
    rows: usize,

    /// Letters per word
    #[arg(short = 'l', long, global = true, default_value_t = wordle_game::core::WORD_LENGTH)]
    word_length: usize,

    /// Answers file, one word per line (default: built-in list)
    #[arg(short, long, global = true)]
    answers: Option<PathBuf>,

    /// Extra acceptable guesses, one word per line (needs --answers)
    #[arg(long, global = true, requires = "answers")]
    allowed: Option<PathBuf>,

    /// Seed for reproducible target selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Give up on the word source after this many milliseconds
    #[arg(long, global = true, default_value = "5000")]
    source_timeout_ms: u64,

    /// Where logs go while the TUI owns the terminal
    #[arg(long, global = true, default_value = "wordle.log")]
    log_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line mode: one guess per line, no TUI
    Simple,

    /// Score a guess against a target
    Score {
        guess: String,
        target: String,

        /// Print the scoring response JSON instead of tiles
        #[arg(long)]
        json: bool,
    },

    /// Check a scoring response JSON against the local engine
    Verify {
        /// The target the response was scored against
        target: String,

        /// Response file (default: stdin)
        file: Option<PathBuf>,
    },

    /// Print a target word as JSON
    Target,

    /// Print every acceptable word as JSON
    Words,
}

impl Cli {
    fn session_config(&self) -> Result<SessionConfig> {
        SessionConfig::new(self.rows, self.word_length).context("invalid board size")
    }

    /// Built-in lists or files, bounded by the source timeout
    fn word_source(&self) -> Box<dyn WordSource> {
        let inner: Box<dyn WordSource> = match &self.answers {
            Some(answers) => {
                let mut source = FileSource::new(answers, self.word_length);
                if let Some(allowed) = &self.allowed {
                    source = source.with_allowed(allowed);
                }
                if let Some(seed) = self.seed {
                    source = source.with_seed(seed);
                }
                Box::new(source)
            }
            None => {
                let mut source = ListSource::embedded(self.word_length);
                if let Some(seed) = self.seed {
                    source = source.with_seed(seed);
                }
                Box::new(source)
            }
        };
        let limit = Duration::from_millis(self.source_timeout_ms);
        Box::new(TimeoutSource::new(inner, limit))
    }
}

/// Logs go to stderr unless the TUI owns the terminal
fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    let tui = matches!(command, Commands::Play);
    init_logging(tui.then_some(&cli.log_file))?;

    match command {
        Commands::Play => {
            let app = App::start(cli.word_source(), cli.session_config()?).await;
            run_tui(app).await?;
        }
        Commands::Simple => {
            let source = cli.word_source();
            let stdin = BufReader::new(tokio::io::stdin());
            run_simple(source.as_ref(), cli.session_config()?, stdin).await?;
        }
        Commands::Score {
            guess,
            target,
            json,
        } => run_score(&guess, &target, json)?,
        Commands::Verify { target, file } => {
            if !run_verify(&target, file.as_deref()).await? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Target => {
            let source = cli.word_source();
            return print_json(query_target(source.as_ref()).await);
        }
        Commands::Words => {
            let source = cli.word_source();
            return print_json(query_words(source.as_ref()).await);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Print the payload or the error payload; failures exit non-zero
fn print_json<T, E>(result: Result<T, E>) -> Result<ExitCode>
where
    T: serde::Serialize,
    E: serde::Serialize,
{
    match result {
        Ok(payload) => {
            println!("{}", serde_json::to_string(&payload)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            println!("{}", serde_json::to_string(&error)?);
            Ok(ExitCode::FAILURE)
        }
    }
}
