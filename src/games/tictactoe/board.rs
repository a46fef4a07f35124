//! The 3x3 grid and its placement invariant.

use super::types::{Cell, Marker};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Out-of-range access to the board.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Cell index {} out of range (0-8) at {}:{}", index, file, line)]
pub struct BoardError {
    /// Index that was requested.
    pub index: usize,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardError {
    /// Creates an out-of-range error with caller location tracking.
    #[track_caller]
    pub fn out_of_range(index: usize) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            index,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// 3x3 tic-tac-toe board, cells in row-major order (0-8).
///
/// A cell, once occupied, can only be cleared by [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if `index` is not in 0-8.
    #[track_caller]
    pub fn cell(&self, index: usize) -> Result<Cell, BoardError> {
        match self.cells.get(index) {
            Some(cell) => Ok(*cell),
            None => Err(BoardError::out_of_range(index)),
        }
    }

    /// Places `marker` at `index` if the cell is empty.
    ///
    /// Returns `false` and leaves the board untouched when the cell is
    /// occupied or the index is off the board.
    #[instrument(skip(self))]
    pub fn set_cell(&mut self, index: usize, marker: Marker) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if cell.is_empty() => {
                *cell = Cell::Occupied(marker);
                true
            }
            Some(existing) => {
                debug!(?existing, "Cell already occupied");
                false
            }
            None => {
                debug!("Index off the board");
                false
            }
        }
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// All cells as a read-only array.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.empty_cells().next().is_none()
    }

    /// Indices of the cells still open for play.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Occupied(marker) => write!(f, "{}", marker)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.cells().iter().all(|c| c.is_empty()));
        assert_eq!(board.empty_cells().count(), 9);
    }

    #[test]
    fn test_out_of_range_cell() {
        let board = Board::new();
        let err = board.cell(9).unwrap_err();
        assert_eq!(err.index, 9);
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_set_cell_out_of_range_rejected() {
        let mut board = Board::new();
        assert!(!board.set_cell(12, Marker::X));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display_layout() {
        let mut board = Board::new();
        board.set_cell(0, Marker::X);
        board.set_cell(4, Marker::O);
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
