//! TUI application state and logic

use crate::puzzle::Difficulty;
use crate::session::{Game, GameStatus, Hint, HintDetail, SessionSnapshot, StartRequest};
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

/// Application state
pub struct App<'a> {
    pub game: Game<'a>,
    pub snapshot: Option<SessionSnapshot>,
    pub difficulty: Difficulty,
    pub input_buffer: String,
    pub last_hint: Option<Hint>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Finished-game tallies
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(game: Game<'a>) -> Self {
        Self {
            game,
            snapshot: None,
            difficulty: Difficulty::default(),
            input_buffer: String::new(),
            last_hint: None,
            messages: vec![Message {
                text: "Change one letter at a time to reach the target.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        match &self.snapshot {
            Some(snapshot) if snapshot.status == GameStatus::Playing => InputMode::Typing,
            _ => InputMode::Finished,
        }
    }

    #[must_use]
    pub fn stats(&self) -> Statistics {
        let history = self.game.history();
        Statistics {
            total_games: history.len(),
            games_won: history
                .iter()
                .filter(|s| s.status == GameStatus::Won)
                .count(),
        }
    }

    /// Start a session, reporting failure as a message
    pub fn start(&mut self, request: StartRequest) {
        match self.game.start(request) {
            Ok(snapshot) => {
                self.difficulty = snapshot.difficulty;
                self.add_message(
                    &format!(
                        "New {} puzzle: {} → {}",
                        snapshot.difficulty,
                        snapshot.start_word.to_uppercase(),
                        snapshot.target_word.to_uppercase()
                    ),
                    MessageStyle::Info,
                );
                self.snapshot = Some(snapshot);
                self.input_buffer.clear();
                self.last_hint = None;
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self, difficulty: Difficulty) {
        self.start(StartRequest::Tier(difficulty));
    }

    pub fn submit(&mut self) {
        let word = std::mem::take(&mut self.input_buffer);
        if word.is_empty() {
            return;
        }

        match self.game.make_move(&word) {
            Ok(snapshot) => {
                self.last_hint = None;
                match snapshot.status {
                    GameStatus::Won => {
                        let celebration = match snapshot.moves_used {
                            1 => "🎯 HOLE IN ONE! 🌟".to_string(),
                            n => format!("🎉 SOLVED in {n} moves! 🎉"),
                        };
                        self.add_message(&celebration, MessageStyle::Success);
                        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    }
                    GameStatus::Lost => {
                        self.add_message(
                            &format!(
                                "Out of moves! The target was {}.",
                                snapshot.target_word.to_uppercase()
                            ),
                            MessageStyle::Error,
                        );
                        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    }
                    GameStatus::Playing => self.add_message(
                        &format!("{} moves left", snapshot.moves_remaining()),
                        MessageStyle::Info,
                    ),
                }
                self.snapshot = Some(snapshot);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn request_hint(&mut self, detail: HintDetail) {
        match self.game.get_hint(detail) {
            Ok(hint) => {
                let style = if hint.is_available() {
                    MessageStyle::Success
                } else {
                    MessageStyle::Error
                };
                self.add_message(&hint.explanation, style);
                self.last_hint = Some(hint);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn cycle_algorithm(&mut self) {
        let next = self.game.hint_algorithm().next();
        self.game.set_algorithm(next);
        self.add_message(&format!("Hints now use {}", next.label()), MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.cycle_algorithm(),
            KeyCode::Char(tier @ '1'..='3') => {
                let index = tier as usize - '1' as usize;
                self.new_game(Difficulty::ALL[index]);
            }
            code => match self.input_mode() {
                InputMode::Finished => match code {
                    KeyCode::Char('q') => self.should_quit = true,
                    KeyCode::Char('n') => self.new_game(self.difficulty),
                    _ => {}
                },
                InputMode::Typing => match code {
                    KeyCode::Char('?') => self.request_hint(HintDetail::Basic),
                    KeyCode::Char('!') => self.request_hint(HintDetail::Full),
                    KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                        let limit = self.snapshot.as_ref().map_or(0, |s| s.target_word.len());
                        if self.input_buffer.len() < limit {
                            self.input_buffer.push(c.to_ascii_lowercase());
                        }
                    }
                    KeyCode::Backspace => {
                        self.input_buffer.pop();
                    }
                    KeyCode::Enter => self.submit(),
                    _ => {}
                },
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(mut app: App, request: StartRequest) -> Result<()> {
    app.start(request);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
