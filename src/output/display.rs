//! Display functions for line-mode play and command results

use super::formatters::{create_progress_bar, keyboard_lines, row_line, tile};
use crate::core::Feedback;
use crate::game::{GameStatus, Session, Statistics};
use crate::remote::Divergence;
use colored::Colorize;

/// Message shown when the target is found
pub const WIN_MESSAGE: &str = "You won! 🎉";

/// Message shown when the last row misses
#[must_use]
pub fn game_over_message(target: &str) -> String {
    format!("Game over! The word was {target}")
}

/// Print the board, one row per line
pub fn print_board(session: &Session) {
    println!();
    for (i, row) in session.rows().iter().enumerate() {
        let marker = if i == session.active_row_index() && !session.status().is_terminal() {
            "▶".cyan().to_string()
        } else {
            " ".to_string()
        };
        println!("  {marker} {}", row_line(row));
    }
}

/// Print the keyboard with the best status seen for each key
pub fn print_keyboard(session: &Session) {
    println!();
    for line in keyboard_lines(session.keyboard()) {
        println!("    {line}");
    }
    println!();
}

/// Print the end-of-game banner
pub fn print_outcome(session: &Session) {
    match session.status() {
        GameStatus::Won => println!(
            "{} {}",
            WIN_MESSAGE.green().bold(),
            format!("({}/{})", session.attempts(), session.rows().len()).bright_black()
        ),
        GameStatus::Lost => println!(
            "{}",
            game_over_message(session.target().text()).red().bold()
        ),
        GameStatus::Playing => {}
    }
}

/// Print a scored guess as colored tiles and emoji
pub fn print_score(guess: &str, feedback: &Feedback) {
    let tiles: String = guess
        .to_uppercase()
        .chars()
        .zip(feedback)
        .map(|(letter, &status)| tile(Some(letter), status).to_string())
        .collect();
    println!("{tiles}  {}", feedback.to_emoji());
}

/// Print the result of comparing remote scoring with the local engine
pub fn print_divergences(guess: &str, divergences: &[Divergence]) {
    if divergences.is_empty() {
        println!(
            "{}",
            format!("✅ Remote scoring for {} matches", guess.to_uppercase())
                .green()
                .bold()
        );
        return;
    }

    println!(
        "{}",
        format!(
            "❌ Remote scoring for {} differs at {} position(s)",
            guess.to_uppercase(),
            divergences.len()
        )
        .red()
        .bold()
    );
    for divergence in divergences {
        println!(
            "   {}: {}  remote {}  local {}",
            divergence.position + 1,
            divergence.letter.to_string().bright_yellow().bold(),
            divergence.remote,
            divergence.local
        );
    }
}

/// Print the running statistics
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!("   Played:          {}", stats.played());
    println!(
        "   Win rate:        {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );
    println!("   Current streak:  {}", stats.current_streak());
    println!("   Max streak:      {}", stats.max_streak());

    let best = stats.distribution().iter().copied().max().unwrap_or(0);
    if best == 0 {
        return;
    }
    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    for (i, &count) in stats.distribution().iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), f64::from(best), 20);
        println!("   {}: {} {count}", i + 1, bar.green());
    }
}
