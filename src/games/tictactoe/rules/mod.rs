//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here mutates state.

pub mod draw;
pub mod win;

pub use draw::is_tie;
pub use win::{WIN_LINES, completed_line};

use super::{Board, Outcome, Player};
use tracing::instrument;

/// Evaluates the board after `mover` has placed a marker.
///
/// A completed line credits `mover`, so this must run before the turn
/// passes to the other player.
#[instrument(skip(board, mover), fields(mover = %mover.name()))]
pub fn evaluate(board: &Board, mover: &Player) -> Outcome {
    if completed_line(board).is_some() {
        Outcome::Win(mover.clone())
    } else if is_tie(board) {
        Outcome::Tie
    } else {
        Outcome::NoResult
    }
}

#[cfg(test)]
mod tests {
    use super::super::Marker;
    use super::*;

    #[test]
    fn test_evaluate_credits_mover() {
        let mut board = Board::new();
        for i in [0, 4, 8] {
            board.set_cell(i, Marker::X);
        }
        let mover = Player::new("Alice".to_string(), Marker::X);
        assert_eq!(evaluate(&board, &mover), Outcome::Win(mover.clone()));
    }

    #[test]
    fn test_evaluate_in_progress() {
        let mut board = Board::new();
        board.set_cell(0, Marker::X);
        let mover = Player::new("Alice".to_string(), Marker::X);
        assert_eq!(evaluate(&board, &mover), Outcome::NoResult);
    }
}
