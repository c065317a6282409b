//! TUI rendering with ratatui
//!
//! Board, keyboard, messages and a status bar for interactive play.

use super::app::{App, MessageStyle};
use crate::core::{GuessRow, KeyboardState, LetterStatus};
use crate::game::{Game, GameStatus, Session};
use crate::output::formatters::KEYBOARD_LAYOUT;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use std::time::Instant;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App, now: Instant) {
    let rows = u16::try_from(app.config.rows()).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                   // Header
            Constraint::Min(rows.saturating_add(2)), // Board
            Constraint::Length(5),                   // Keyboard
            Constraint::Length(7),                   // Messages
            Constraint::Length(1),                   // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match &app.game {
        Game::Ready(session) => {
            render_board(f, app, session, now, chunks[1]);
            render_keyboard(f, app.keyboard_at(session, now), chunks[2]);
        }
        Game::NotReady { reason } => render_not_ready(f, reason, chunks[1]),
    }

    render_messages(f, app, now, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Background color for a tile
fn status_color(status: LetterStatus) -> Option<Color> {
    match status {
        LetterStatus::Correct => Some(Color::Green),
        LetterStatus::Present => Some(Color::Yellow),
        LetterStatus::Absent => Some(Color::DarkGray),
        LetterStatus::Unset => None,
    }
}

fn tile_span(letter: Option<char>, status: LetterStatus, highlight: bool) -> Span<'static> {
    let text = format!(" {} ", letter.unwrap_or('·'));
    let style = match status_color(status) {
        Some(bg) => Style::default()
            .fg(Color::Black)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
        None if highlight => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::Gray),
    };
    Span::styled(text, style)
}

fn row_line(
    session: &Session,
    app: &App,
    index: usize,
    row: &GuessRow,
    now: Instant,
) -> Line<'static> {
    let active = index == session.active_row_index() && !session.status().is_terminal();
    let mut spans = Vec::with_capacity(row.capacity() * 2);
    for (i, (letter, status)) in row.tiles().enumerate() {
        let shown = app
            .reveal
            .is_none_or(|reveal| reveal.is_visible(index, i, now));
        let status = if shown { status } else { LetterStatus::Unset };
        spans.push(tile_span(letter, status, active));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, session: &Session, now: Instant, area: Rect) {
    let lines: Vec<Line> = session
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| row_line(session, app, i, row, now))
        .collect();

    let title = if session.is_submitting() {
        " Checking... "
    } else {
        " Board "
    };
    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, keyboard: &KeyboardState, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_LAYOUT
        .iter()
        .map(|keys| {
            let spans: Vec<Span> = keys
                .chars()
                .flat_map(|key| [tile_span(Some(key), keyboard.get(key), true), Span::raw(" ")])
                .collect();
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn render_not_ready(f: &mut Frame, reason: &str, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            "No word loaded",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(reason.to_string()),
        Line::from("Press Enter to retry."),
    ];
    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn render_messages(f: &mut Frame, app: &App, now: Instant, area: Rect) {
    // Hold the outcome back until the winning or losing row has flipped
    let hide_latest = app.is_over() && app.is_animating(now);

    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .skip(if hide_latest { 2 } else { 0 })
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let state = match app.game.status() {
        None => "Not ready".to_string(),
        Some(GameStatus::Playing) => match app.game.session() {
            Ok(session) => format!("Guess {}/{}", session.attempts() + 1, session.rows().len()),
            Err(_) => "Playing".to_string(),
        },
        Some(status) => format!("Game {status}"),
    };
    f.render_widget(Paragraph::new(state).alignment(Alignment::Center), chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {}",
        app.stats.played(),
        app.stats.win_rate(),
        app.stats.current_streak()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = if app.is_over() {
        "n: New Game | Esc: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Ctrl+N: New | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
