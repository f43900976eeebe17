//! TUI application state and logic

use crate::config::GameConfig;
use crate::core::{Difficulty, GameSession, GuessError, GuessOutcome, Parity, Trend, Verdict};
use crate::scores::ScoreStore;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::warn;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest number the input line accepts
const MAX_INPUT_DIGITS: usize = 6;

/// Application state
pub struct App {
    pub config: GameConfig,
    pub store: ScoreStore,
    pub difficulty: Difficulty,
    pub session: GameSession,
    pub history: Vec<HistoryEntry>,
    pub last_outcome: Option<GuessOutcome>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub guess: u32,
    pub verdict: Verdict,
    pub difference: u32,
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

/// Rounds played during this process
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_won: usize,
    pub total_attempts: usize,
}

impl App {
    #[must_use]
    pub fn new(config: GameConfig, store: ScoreStore) -> Self {
        let mut rng = config.rng();
        let difficulty = config.difficulty;
        let session = config.new_session(difficulty, &mut rng);

        let mut app = Self {
            config,
            store,
            difficulty,
            session,
            history: Vec::new(),
            last_outcome: None,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
            rng,
        };
        app.add_message(
            &format!("🎲 Guess the number between 1 and {}!", app.session.max_range()),
            MessageStyle::Info,
        );
        app.add_message("Press 'h' for a hint, TAB to change difficulty.", MessageStyle::Info);
        app
    }

    /// Discard the current round and start a fresh one
    pub fn new_round(&mut self) {
        self.session = self.config.new_session(self.difficulty, &mut self.rng);
        self.history.clear();
        self.last_outcome = None;
        self.input_buffer.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message(
            &format!(
                "New {} round: guess between 1 and {}.",
                self.difficulty,
                self.session.max_range()
            ),
            MessageStyle::Info,
        );
    }

    /// Switch to the next difficulty; this always starts a new round
    pub fn cycle_difficulty(&mut self) {
        self.difficulty = self.difficulty.next();
        self.new_round();
    }

    pub fn show_hint(&mut self) {
        let hint = Parity::of(self.session.secret()).message();
        self.add_message(hint, MessageStyle::Info);
    }

    /// Submit whatever is in the input line
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::Inactive`] if called after the round was won;
    /// key handling never does this.
    pub fn submit_input(&mut self) -> Result<(), GuessError> {
        let input = std::mem::take(&mut self.input_buffer);
        if input.is_empty() {
            self.add_message("Type a number first!", MessageStyle::Error);
            return Ok(());
        }

        let Ok(value) = input.parse::<i64>() else {
            self.add_message(&format!("'{input}' is not a number!"), MessageStyle::Error);
            return Ok(());
        };

        let outcome = match self.session.submit_guess(value) {
            Ok(outcome) => outcome,
            Err(GuessError::Inactive) => return Err(GuessError::Inactive),
            Err(err) => {
                self.add_message(&format!("{err}"), MessageStyle::Error);
                return Ok(());
            }
        };

        self.history.push(HistoryEntry {
            guess: value as u32,
            verdict: outcome.verdict,
            difference: outcome.difference,
        });
        self.last_outcome = Some(outcome);

        if outcome.is_correct() {
            self.finish_round(outcome.attempts);
        } else {
            let relation = if outcome.verdict == Verdict::TooLow {
                "too low"
            } else {
                "too high"
            };
            self.add_message(
                &format!("{} {value} is {relation}.", outcome.verdict.direction()),
                MessageStyle::Info,
            );
            if let Some(trend) = self.trend().message() {
                self.add_message(trend, MessageStyle::Info);
            }
        }

        Ok(())
    }

    fn finish_round(&mut self, attempts: usize) {
        self.stats.rounds_won += 1;
        self.stats.total_attempts += attempts;
        self.input_mode = InputMode::RoundOver;

        let celebration = match attempts {
            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟".to_string(),
            2..=3 => format!("🔥 MAGNIFICENT! Found {} in {attempts}!", self.session.secret()),
            _ => format!("🎉 Correct! The number was {}.", self.session.secret()),
        };
        self.add_message(&celebration, MessageStyle::Success);

        let attempts = u32::try_from(attempts).unwrap_or(u32::MAX);
        if self.store.record_win(self.difficulty, attempts) {
            self.add_message(
                &format!("🏆 New best for {}: {attempts}!", self.difficulty),
                MessageStyle::Success,
            );
        }

        if let Err(err) = self.store.save(&self.config.scores_path) {
            warn!("{err}");
            self.add_message("Could not save best score!", MessageStyle::Error);
        }

        self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
    }

    #[must_use]
    pub fn trend(&self) -> Trend {
        Trend::from_attempts(self.session.secret(), self.session.attempts())
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
    ///
    /// # Errors
    ///
    /// Propagates [`GuessError::Inactive`] from [`App::submit_input`].
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), GuessError> {
        let quit = matches!(key.code, KeyCode::Esc | KeyCode::Char('q'))
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL));
        if quit {
            self.should_quit = true;
            return Ok(());
        }

        match self.input_mode {
            InputMode::RoundOver => match key.code {
                KeyCode::Char('n') => self.new_round(),
                KeyCode::Tab => self.cycle_difficulty(),
                _ => {
                    // Round is over, ignore other keys
                }
            },
            InputMode::Guessing => match key.code {
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    if self.input_buffer.len() < MAX_INPUT_DIGITS {
                        self.input_buffer.push(c);
                    }
                }
                KeyCode::Char('h') => self.show_hint(),
                KeyCode::Char('n') => self.new_round(),
                KeyCode::Tab => self.cycle_difficulty(),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_input()?,
                _ => {}
            },
        }

        Ok(())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{TempDir, tempdir};

    fn test_app() -> (App, TempDir) {
        let dir = tempdir().unwrap();
        let config = GameConfig::new(Difficulty::Medium, dir.path().join("scores.json"))
            .with_seed(Some(1234));
        let mut app = App::new(config, ScoreStore::new());
        app.session = GameSession::with_secret(100, 42);
        (app, dir)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn type_guess(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn starts_guessing_at_configured_difficulty() {
        let (app, _dir) = test_app();
        assert_eq!(app.difficulty, Difficulty::Medium);
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(!app.messages.is_empty());
    }

    #[test]
    fn typing_and_submitting_guesses() {
        let (mut app, _dir) = test_app();

        type_guess(&mut app, "50");
        type_guess(&mut app, "25");

        assert_eq!(app.history.len(), 2);
        assert_eq!(app.history[0].verdict, Verdict::TooHigh);
        assert_eq!(app.history[1].verdict, Verdict::TooLow);
        assert_eq!(app.history[1].difference, 17);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn winning_records_best_and_saves() {
        let (mut app, dir) = test_app();

        type_guess(&mut app, "50");
        type_guess(&mut app, "42");

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.store.best(Difficulty::Medium), Some(2));
        assert_eq!(app.stats.rounds_won, 1);
        assert_eq!(app.stats.total_attempts, 2);

        let saved = ScoreStore::load(&dir.path().join("scores.json"));
        assert_eq!(saved.best(Difficulty::Medium), Some(2));
    }

    #[test]
    fn keys_ignored_after_win_until_new_round() {
        let (mut app, _dir) = test_app();
        type_guess(&mut app, "42");

        // Digits and Enter do nothing once the round is over
        type_guess(&mut app, "7");
        assert_eq!(app.session.attempt_count(), 1);
        assert!(app.input_buffer.is_empty());

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.history.is_empty());
        assert_eq!(app.session.attempt_count(), 0);
    }

    #[test]
    fn out_of_range_not_counted() {
        let (mut app, _dir) = test_app();

        type_guess(&mut app, "0");
        type_guess(&mut app, "101");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.attempt_count(), 0);
        assert!(app.history.is_empty());
        assert_eq!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Error)
        );
    }

    #[test]
    fn input_is_digits_only_and_bounded() {
        let (mut app, _dir) = test_app();

        for c in "12x3456789".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_buffer, "123456");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "12345");
    }

    #[test]
    fn tab_cycles_difficulty_and_restarts() {
        let (mut app, _dir) = test_app();
        type_guess(&mut app, "10");

        press(&mut app, KeyCode::Tab);

        assert_eq!(app.difficulty, Difficulty::Hard);
        assert_eq!(app.session.max_range(), 500);
        assert!(app.history.is_empty());
    }

    #[test]
    fn hint_reports_parity() {
        let (mut app, _dir) = test_app();
        press(&mut app, KeyCode::Char('h'));
        assert!(app.messages.last().unwrap().text.contains("EVEN"));
        assert_eq!(app.session.attempt_count(), 0);
    }

    #[test]
    fn quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let (mut app, _dir) = test_app();
            press(&mut app, code);
            assert!(app.should_quit);
        }

        let (mut app, _dir) = test_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn messages_capped_at_five() {
        let (mut app, _dir) = test_app();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }

    #[test]
    fn submit_after_win_is_inactive_error() {
        let (mut app, _dir) = test_app();
        type_guess(&mut app, "42");

        app.input_buffer = "42".to_string();
        assert_eq!(app.submit_input(), Err(GuessError::Inactive));
    }
}
