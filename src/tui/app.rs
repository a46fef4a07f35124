//! Application state and key handling.

use super::display::TerminalDisplay;
use super::input::{GameKey, game_key};
use crate::config::AppConfig;
use crate::display::GameDisplay;
use crate::games::tictactoe::{Engine, Position};
use crossterm::event::KeyCode;
use tracing::{debug, info, instrument, warn};

/// Name fields on the setup form.
#[derive(Debug, Clone, Default)]
pub struct SetupForm {
    names: [String; 2],
    focus: usize,
}

impl SetupForm {
    /// Form pre-filled with the given names.
    pub fn new(player1: Option<String>, player2: Option<String>) -> Self {
        Self {
            names: [player1.unwrap_or_default(), player2.unwrap_or_default()],
            focus: 0,
        }
    }

    /// Entered names.
    pub fn names(&self) -> &[String; 2] {
        &self.names
    }

    /// Index of the field being edited.
    pub fn focus(&self) -> usize {
        self.focus
    }

    fn toggle_focus(&mut self) {
        self.focus = 1 - self.focus;
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: Engine<TerminalDisplay>,
    form: SetupForm,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates the app on the setup screen.
    #[instrument(skip(config))]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            engine: Engine::new(TerminalDisplay::new()),
            form: SetupForm::new(config.player1().clone(), config.player2().clone()),
            cursor: Position::default(),
            should_quit: false,
        }
    }

    /// The engine.
    pub fn engine(&self) -> &Engine<TerminalDisplay> {
        &self.engine
    }

    /// The setup form.
    pub fn form(&self) -> &SetupForm {
        &self.form
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Routes a key press to the active screen.
    pub fn handle_key(&mut self, key: KeyCode) {
        if self.engine.display().game_active() {
            self.handle_game_key(key);
        } else {
            self.handle_setup_key(key);
        }
    }

    #[instrument(skip(self))]
    fn handle_setup_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.form.toggle_focus()
            }
            KeyCode::Enter => self.start(),
            KeyCode::Backspace => {
                self.form.names[self.form.focus].pop();
            }
            KeyCode::Char(c) => self.form.names[self.form.focus].push(c),
            _ => {}
        }
    }

    #[instrument(skip(self))]
    fn handle_game_key(&mut self, key: KeyCode) {
        let Some(action) = game_key(key) else {
            return;
        };
        match action {
            GameKey::Move(direction) => self.cursor = self.cursor.step(direction),
            GameKey::Select => self.click(self.cursor.to_index()),
            GameKey::Cell(index) => {
                if let Some(position) = Position::from_index(index) {
                    self.cursor = position;
                }
                self.click(index);
            }
            GameKey::Restart => {
                if let Err(e) = self.engine.restart_game() {
                    warn!(error = %e, "Restart failed");
                }
            }
            GameKey::NewPlayers => {
                info!("Returning to setup");
                self.engine.display_mut().toggle_game_display(false);
            }
            GameKey::Quit => self.should_quit = true,
        }
    }

    fn start(&mut self) {
        let [name1, name2] = self.form.names();
        self.engine.start_game(name1, name2);
        self.engine.display_mut().toggle_game_display(true);
        self.cursor = Position::default();
    }

    fn click(&mut self, index: usize) {
        match self.engine.handle_cell_click(index) {
            Ok(outcome) => debug!(index, ?outcome, "Cell clicked"),
            Err(e) => warn!(error = %e, "Click rejected"),
        }
    }
}
