//! Turn and outcome controller.
//!
//! The engine owns the board, the two players, and the game-over flag.
//! Every user action maps to one method call that runs to completion and
//! reports its effects through the injected [`GameDisplay`].

use super::board::{Board, CELL_COUNT};
use super::rules;
use super::types::{
    Cell, DEFAULT_PLAYER1_NAME, DEFAULT_PLAYER2_NAME, Marker, Outcome, Player,
};
use crate::display::GameDisplay;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Message shown when the board fills with no winner.
pub const TIE_MESSAGE: &str = "It's a tie!";

/// Lifecycle phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum Phase {
    /// No players yet.
    Setup,
    /// Moves are accepted.
    InProgress,
    /// Won or tied; waiting for a restart.
    Over,
}

/// What a cell click did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Game over or cell occupied; nothing changed.
    Ignored,
    /// Marker placed and the turn passed to the other player.
    Placed,
    /// Marker placed and it ended the game.
    Finished(Outcome),
}

/// Kinds of engine contract violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EngineErrorKind {
    /// Cell index outside 0-8.
    #[display("cell index {} out of range (0-8)", _0)]
    OutOfRange(usize),
    /// Action requires a started game.
    #[display("game has not been started")]
    NotStarted,
}

/// Engine error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Engine error: {} at {}:{}", kind, file, line)]
pub struct EngineError {
    /// What went wrong.
    pub kind: EngineErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EngineError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    pub fn new(kind: EngineErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Serializable view of an engine's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Lifecycle phase.
    pub phase: Phase,
    /// Cells in row-major order.
    pub cells: [Cell; CELL_COUNT],
    /// Both players, once the game has started.
    pub players: Option<[Player; 2]>,
    /// Player whose turn it is (or who moved last, once over).
    pub current_player: Option<Player>,
    /// Game-over flag.
    pub game_over: bool,
}

/// Tic-tac-toe engine driving an injected display.
#[derive(Debug)]
pub struct Engine<D: GameDisplay> {
    board: Board,
    players: Option<[Player; 2]>,
    current: usize,
    game_over: bool,
    display: D,
}

impl<D: GameDisplay> Engine<D> {
    /// Creates an engine in the setup phase.
    pub fn new(display: D) -> Self {
        Self {
            board: Board::new(),
            players: None,
            current: 0,
            game_over: false,
            display,
        }
    }

    /// Starts a fresh game with new player names.
    ///
    /// Blank names fall back to "Player 1" / "Player 2". Player 1 always
    /// plays X and moves first.
    #[instrument(skip(self))]
    pub fn start_game(&mut self, name1: &str, name2: &str) {
        let player1 = Player::with_default_name(name1, DEFAULT_PLAYER1_NAME, Marker::X);
        let player2 = Player::with_default_name(name2, DEFAULT_PLAYER2_NAME, Marker::O);
        info!(
            player1 = %player1.name(),
            player2 = %player2.name(),
            "Starting game"
        );
        self.players = Some([player1, player2]);
        self.begin();
    }

    /// Restarts with the same players.
    ///
    /// # Errors
    ///
    /// Returns [`EngineErrorKind::NotStarted`] if no game was ever started.
    #[instrument(skip(self))]
    pub fn restart_game(&mut self) -> Result<(), EngineError> {
        if self.players.is_none() {
            warn!("Restart requested before any game was started");
            return Err(EngineError::new(EngineErrorKind::NotStarted));
        }
        info!("Restarting game");
        self.begin();
        Ok(())
    }

    fn begin(&mut self) {
        self.board.reset();
        self.current = 0;
        self.game_over = false;
        self.announce_turn();
        self.display.render(&self.board);
    }

    /// Places the current player's marker at `index`.
    ///
    /// Clicks on an occupied cell or after the game ended are ignored
    /// without notifying the display.
    ///
    /// # Errors
    ///
    /// Fails without touching any state if `index` is off the board or the
    /// game has not been started.
    #[instrument(skip(self), fields(phase = %self.phase()))]
    pub fn handle_cell_click(&mut self, index: usize) -> Result<ClickOutcome, EngineError> {
        if index >= CELL_COUNT {
            warn!(index, "Cell index out of range");
            return Err(EngineError::new(EngineErrorKind::OutOfRange(index)));
        }
        let Some(players) = &self.players else {
            warn!(index, "Click before game start");
            return Err(EngineError::new(EngineErrorKind::NotStarted));
        };
        let mover = &players[self.current];

        if self.game_over || !self.board.set_cell(index, mover.marker()) {
            debug!(index, game_over = self.game_over, "Click ignored");
            return Ok(ClickOutcome::Ignored);
        }

        // Evaluate before switching turns so the mover gets credit.
        let outcome = rules::evaluate(&self.board, mover);
        let finished = match &outcome {
            Outcome::Win(winner) => {
                info!(winner = %winner.name(), "Game won");
                self.game_over = true;
                self.display
                    .show_winner(&format!("{} wins!", winner.name()));
                true
            }
            Outcome::Tie => {
                info!("Game tied");
                self.game_over = true;
                self.display.show_winner(TIE_MESSAGE);
                true
            }
            Outcome::NoResult => {
                self.current = 1 - self.current;
                self.announce_turn();
                false
            }
        };
        self.display.render(&self.board);

        if finished {
            Ok(ClickOutcome::Finished(outcome))
        } else {
            Ok(ClickOutcome::Placed)
        }
    }

    fn announce_turn(&mut self) {
        let Some(status) = self
            .current_player()
            .map(|player| format!("Current Player: {}", player.name()))
        else {
            return;
        };
        debug!(%status, "Turn changed");
        self.display.update_status(&status);
    }

    /// Evaluates the board as if the current player had just moved.
    pub fn evaluate(&self) -> Outcome {
        match self.current_player() {
            Some(player) => rules::evaluate(&self.board, player),
            None => Outcome::NoResult,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        match (&self.players, self.game_over) {
            (None, _) => Phase::Setup,
            (Some(_), false) => Phase::InProgress,
            (Some(_), true) => Phase::Over,
        }
    }

    /// Player to move, or the player who ended the game.
    pub fn current_player(&self) -> Option<&Player> {
        self.players.as_ref().map(|players| &players[self.current])
    }

    /// Both players, once started.
    pub fn players(&self) -> Option<&[Player; 2]> {
        self.players.as_ref()
    }

    /// True after a win or tie until the next restart.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The injected display.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Mutable access to the injected display.
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Serializable copy of the engine state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase(),
            cells: *self.board.cells(),
            players: self.players.clone(),
            current_player: self.current_player().cloned(),
            game_over: self.game_over,
        }
    }
}
