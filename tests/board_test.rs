//! Tests for the board placement invariant.

use tictactoe::{Board, CELL_COUNT, Cell, Marker, Position};

#[test]
fn test_set_then_get_every_cell() {
    for index in 0..CELL_COUNT {
        let mut board = Board::new();
        assert!(board.set_cell(index, Marker::X));
        assert_eq!(board.cell(index).unwrap(), Cell::Occupied(Marker::X));
    }
}

#[test]
fn test_occupied_cell_never_overwritten() {
    for index in 0..CELL_COUNT {
        let mut board = Board::new();
        assert!(board.set_cell(index, Marker::X));
        let before = board.clone();

        assert!(!board.set_cell(index, Marker::O));
        assert!(!board.set_cell(index, Marker::X));
        assert_eq!(board.cell(index).unwrap(), Cell::Occupied(Marker::X));
        assert_eq!(board, before);
    }
}

#[test]
fn test_reset_clears_all_cells() {
    let mut board = Board::new();
    for index in 0..CELL_COUNT {
        let marker = if index % 2 == 0 { Marker::X } else { Marker::O };
        board.set_cell(index, marker);
    }
    assert!(board.is_full());

    board.reset();
    for index in 0..CELL_COUNT {
        assert_eq!(board.cell(index).unwrap(), Cell::Empty);
    }
    assert!(!board.is_full());
}

#[test]
fn test_out_of_range_get_fails_fast() {
    let board = Board::new();
    assert!(board.cell(CELL_COUNT).is_err());
    assert!(board.cell(usize::MAX).is_err());
}

#[test]
fn test_position_index_round_trip() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}
