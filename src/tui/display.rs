//! Display adapter backing the terminal UI.

use crate::display::GameDisplay;
use crate::games::tictactoe::{Board, CELL_COUNT, Cell};
use tracing::debug;

/// Holds what the terminal should show; the draw loop reads from here.
#[derive(Debug, Clone, Default)]
pub struct TerminalDisplay {
    cells: [Cell; CELL_COUNT],
    status: String,
    game_active: bool,
}

impl TerminalDisplay {
    /// Creates a display showing the setup screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last rendered cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Current status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// True while the board is shown instead of the setup form.
    pub fn game_active(&self) -> bool {
        self.game_active
    }
}

impl GameDisplay for TerminalDisplay {
    fn render(&mut self, board: &Board) {
        self.cells = *board.cells();
    }

    fn update_status(&mut self, message: &str) {
        self.status = message.to_string();
    }

    fn toggle_game_display(&mut self, active: bool) {
        debug!(active, "Toggling game display");
        self.game_active = active;
    }
}
