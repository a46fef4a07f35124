//! Outbound display capability used by the engine.
//!
//! The engine never draws anything itself. It reports every status change
//! through a [`GameDisplay`] handed to it at construction, which lets the
//! terminal UI, the console replayer, and test doubles plug in alike.

use crate::games::tictactoe::Board;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Capability set a display surface must provide.
pub trait GameDisplay {
    /// Redraws all nine cells from the board.
    fn render(&mut self, board: &Board);

    /// Shows a status line such as `Current Player: Alice`.
    fn update_status(&mut self, message: &str);

    /// Shows a terminal message (`"<name> wins!"` or `"It's a tie!"`).
    fn show_winner(&mut self, message: &str) {
        self.update_status(message);
    }

    /// Switches between the setup form and the board.
    fn toggle_game_display(&mut self, _active: bool) {}
}

impl<D: GameDisplay + ?Sized> GameDisplay for Box<D> {
    fn render(&mut self, board: &Board) {
        (**self).render(board);
    }

    fn update_status(&mut self, message: &str) {
        (**self).update_status(message);
    }

    fn show_winner(&mut self, message: &str) {
        (**self).show_winner(message);
    }

    fn toggle_game_display(&mut self, active: bool) {
        (**self).toggle_game_display(active);
    }
}

/// A single call the engine made into a display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    /// `render` was called with this board.
    Render(Board),
    /// `update_status` was called.
    Status(String),
    /// `show_winner` was called.
    Winner(String),
    /// `toggle_game_display` was called.
    Toggle(bool),
}

/// Display that records every notification instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingDisplay {
    notifications: Vec<Notification>,
    status: String,
}

impl RecordingDisplay {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, oldest first.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Latest status line, including winner messages.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Number of `render` calls recorded.
    pub fn render_count(&self) -> usize {
        self.notifications
            .iter()
            .filter(|n| matches!(n, Notification::Render(_)))
            .count()
    }

    /// Drops recorded notifications, keeping the status line.
    pub fn clear(&mut self) {
        self.notifications.clear();
    }
}

impl GameDisplay for RecordingDisplay {
    fn render(&mut self, board: &Board) {
        self.notifications.push(Notification::Render(board.clone()));
    }

    fn update_status(&mut self, message: &str) {
        self.status = message.to_string();
        self.notifications.push(Notification::Status(message.to_string()));
    }

    fn show_winner(&mut self, message: &str) {
        self.status = message.to_string();
        self.notifications.push(Notification::Winner(message.to_string()));
    }

    fn toggle_game_display(&mut self, active: bool) {
        self.notifications.push(Notification::Toggle(active));
    }
}

/// Display that writes plain text to a writer (stdout by default).
#[derive(Debug)]
pub struct ConsoleDisplay<W: std::io::Write> {
    out: W,
}

impl ConsoleDisplay<std::io::Stdout> {
    /// Console display on standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: std::io::Write> ConsoleDisplay<W> {
    /// Wraps an arbitrary writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    #[instrument(skip(self, text))]
    fn write_line(&mut self, text: &str) {
        // A broken pipe must not abort the game.
        if let Err(e) = writeln!(self.out, "{}", text) {
            debug!(error = %e, "Console write failed");
        }
    }
}

impl<W: std::io::Write> GameDisplay for ConsoleDisplay<W> {
    fn render(&mut self, board: &Board) {
        let text = format!("{}\n", board);
        self.write_line(&text);
    }

    fn update_status(&mut self, message: &str) {
        self.write_line(message);
    }

    fn show_winner(&mut self, message: &str) {
        let text = format!("*** {} ***", message);
        self.write_line(&text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_winner_defaults_to_status() {
        struct StatusOnly(Vec<String>);
        impl GameDisplay for StatusOnly {
            fn render(&mut self, _board: &Board) {}
            fn update_status(&mut self, message: &str) {
                self.0.push(message.to_string());
            }
        }

        let mut display = StatusOnly(Vec::new());
        display.show_winner("It's a tie!");
        assert_eq!(display.0, vec!["It's a tie!".to_string()]);
    }

    #[test]
    fn test_console_display_output() {
        let mut display = ConsoleDisplay::new(Vec::new());
        display.update_status("Current Player: Alice");
        display.show_winner("Alice wins!");
        let text = String::from_utf8(display.into_inner()).unwrap();
        assert_eq!(text, "Current Player: Alice\n*** Alice wins! ***\n");
    }
}
