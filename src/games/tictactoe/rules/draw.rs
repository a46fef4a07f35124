//! Tie detection for tic-tac-toe.

use super::super::Board;
use super::win::completed_line;
use tracing::instrument;

/// A full board with no completed line.
#[instrument]
pub fn is_tie(board: &Board) -> bool {
    board.is_full() && completed_line(board).is_none()
}
