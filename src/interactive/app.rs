//! TUI application state and logic

use super::reveal::RevealSchedule;
use crate::core::KeyboardState;
use crate::game::{
    Game, GameStatus, InputEvent, InputOutcome, Reveal, Session, SessionConfig, SessionError,
    Statistics,
};
use crate::output::{WIN_MESSAGE, game_over_message};
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// How often the screen redraws without input, for the reveal animation
const TICK_RATE: Duration = Duration::from_millis(50);

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Something the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Input(InputEvent),
    NewGame,
    Quit,
}

/// Application state
pub struct App {
    pub game: Game,
    pub config: SessionConfig,
    pub source: Box<dyn WordSource>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub reveal: Option<RevealSchedule>,
    /// Keyboard as it was before the row in `reveal` was scored
    pub keyboard_before_reveal: Option<KeyboardState>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Fetch the first target and build the app around it
    pub async fn start(source: Box<dyn WordSource>, config: SessionConfig) -> Self {
        let game = Game::start(source.as_ref(), config).await;
        let mut app = Self {
            game,
            config,
            source,
            messages: Vec::new(),
            stats: Statistics::new(),
            reveal: None,
            keyboard_before_reveal: None,
            should_quit: false,
        };
        app.announce_start();
        app
    }

    fn announce_start(&mut self) {
        match &self.game {
            Game::Ready(_) => self.add_message(
                &format!(
                    "Guess the {}-letter word in {} tries.",
                    self.config.word_length(),
                    self.config.rows()
                ),
                MessageStyle::Info,
            ),
            Game::NotReady { reason } => {
                let text = format!("Could not load a word: {reason}. Press Enter to retry.");
                self.add_message(&text, MessageStyle::Error);
            }
        }
    }

    pub async fn handle(&mut self, action: Action) {
        log::trace!("action {action:?}");
        match action {
            Action::Quit => self.should_quit = true,
            Action::NewGame => self.new_game().await,
            Action::Input(InputEvent::Letter('n' | 'N')) if self.is_over() => {
                self.new_game().await;
            }
            Action::Input(InputEvent::Submit) if !self.game.is_ready() => {
                if self.game.retry(self.source.as_ref(), self.config).await {
                    self.messages.clear();
                }
                self.announce_start();
            }
            Action::Input(event) => self.apply_input(event).await,
        }
    }

    async fn apply_input(&mut self, event: InputEvent) {
        let keyboard = self.game.session().ok().map(|s| s.keyboard().clone());
        match self.game.apply(event, self.source.as_ref()).await {
            Ok(InputOutcome::Revealed(reveal)) => {
                self.keyboard_before_reveal = keyboard;
                self.on_reveal(&reveal);
            }
            Ok(InputOutcome::Edited | InputOutcome::Ignored) => {}
            Err(err) if err.is_recoverable() => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
            Err(SessionError::SourceUnavailable(err)) => {
                let text = format!("{err}. Press Enter to try again.");
                self.add_message(&text, MessageStyle::Error);
            }
            Err(err) => {
                log::error!("input {event:?} failed: {err}");
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    fn on_reveal(&mut self, reveal: &Reveal) {
        self.reveal = Some(RevealSchedule::new(
            reveal.row,
            reveal.feedback.len(),
            Instant::now(),
        ));

        let Ok(session) = self.game.session() else {
            return;
        };
        match reveal.status {
            GameStatus::Playing => {}
            GameStatus::Won => {
                self.stats.record(session);
                self.add_message(WIN_MESSAGE, MessageStyle::Success);
                self.add_message("Press 'n' for a new game or Esc to quit.", MessageStyle::Info);
            }
            GameStatus::Lost => {
                self.stats.record(session);
                let text = game_over_message(session.target().text());
                self.add_message(&text, MessageStyle::Error);
                self.add_message("Press 'n' for a new game or Esc to quit.", MessageStyle::Info);
            }
        }
    }

    pub async fn new_game(&mut self) {
        self.game.restart(self.source.as_ref(), self.config).await;
        self.reveal = None;
        self.keyboard_before_reveal = None;
        self.messages.clear();
        self.announce_start();
    }

    /// Whether the current session has finished
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game.status().is_some_and(GameStatus::is_terminal)
    }

    /// Whether the last revealed row is still animating
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.reveal.is_some_and(|reveal| !reveal.is_finished(now))
    }

    /// Keyboard to draw at `now`
    ///
    /// Keys keep their earlier colors until the row that changed them has
    /// finished flipping.
    #[must_use]
    pub fn keyboard_at<'a>(&'a self, session: &'a Session, now: Instant) -> &'a KeyboardState {
        match &self.keyboard_before_reveal {
            Some(before) if self.is_animating(now) => before,
            _ => session.keyboard(),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Map a key press to an action
///
/// Only single alphabetic keys type letters. Esc and Ctrl+C quit, Ctrl+N
/// starts over.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let action = match key.code {
        KeyCode::Esc => Action::Quit,
        KeyCode::Char('c') if ctrl => Action::Quit,
        KeyCode::Char('n') if ctrl => Action::NewGame,
        KeyCode::Char(c) if !ctrl && c.is_ascii_alphabetic() => {
            Action::Input(InputEvent::Letter(c))
        }
        KeyCode::Backspace => Action::Input(InputEvent::Delete),
        KeyCode::Enter => Action::Input(InputEvent::Submit),
        _ => return None,
    };
    Some(action)
}

/// Forward terminal key presses, sending `None` on every idle tick
fn spawn_event_reader(
    tx: mpsc::UnboundedSender<io::Result<Option<Action>>>,
) -> tokio::task::JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        loop {
            let next = match event::poll(TICK_RATE) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) => Ok(map_key(key)),
                    Ok(_) => Ok(None),
                    Err(err) => Err(err),
                },
                Ok(false) => Ok(None),
                Err(err) => Err(err),
            };
            let failed = next.is_err();
            if tx.send(next).is_err() || failed {
                break;
            }
        }
    })
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub async fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("tui exited with error: {err}");
        eprintln!("Error: {err}");
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let reader = spawn_event_reader(tx);

    let result: Result<()> = async {
        loop {
            terminal.draw(|f| super::rendering::ui(f, &app, Instant::now()))?;
            let Some(next) = rx.recv().await else {
                break;
            };
            if let Some(action) = next? {
                app.handle(action).await;
            }
            if app.should_quit {
                break;
            }
        }
        Ok(())
    }
    .await;

    // The reader stops on its next tick once the receiver is gone
    drop(rx);
    reader.await?;
    result
}
