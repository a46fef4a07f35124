//! Win-line detection for tic-tac-toe.

use super::super::{Board, Cell};
use tracing::instrument;

/// The eight winning index triples, in evaluation order.
pub const WIN_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first completed line, if any.
#[instrument]
pub fn completed_line(board: &Board) -> Option<[usize; 3]> {
    let cells = board.cells();
    WIN_LINES.into_iter().find(|&[a, b, c]| {
        cells[a] != Cell::Empty && cells[a] == cells[b] && cells[a] == cells[c]
    })
}
