//! Tic-tac-toe: board, rules, and the turn engine.

mod board;
mod engine;
mod position;
pub mod rules;
mod types;

pub use board::{Board, BoardError, CELL_COUNT};
pub use engine::{
    ClickOutcome, Engine, EngineError, EngineErrorKind, GameSnapshot, Phase, TIE_MESSAGE,
};
pub use position::{Direction, Position};
pub use types::{Cell, DEFAULT_PLAYER1_NAME, DEFAULT_PLAYER2_NAME, Marker, Outcome, Player};
