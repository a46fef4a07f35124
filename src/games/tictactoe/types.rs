//! Core domain types for tic-tac-toe.

use derive_new::new;
use serde::{Deserialize, Serialize};

/// Marker a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Marker {
    /// Marker X (always player 1, moves first).
    X,
    /// Marker O (always player 2).
    O,
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a marker.
    Occupied(Marker),
}

impl Cell {
    /// Returns true if nothing has been placed here.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(marker) => Some(marker),
        }
    }
}

/// Label used for player 1 when no name is given.
pub const DEFAULT_PLAYER1_NAME: &str = "Player 1";

/// Label used for player 2 when no name is given.
pub const DEFAULT_PLAYER2_NAME: &str = "Player 2";

/// A participant: display name plus marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Player {
    name: String,
    marker: Marker,
}

impl Player {
    /// Builds a player, replacing a blank name with `default_name`.
    ///
    /// Any other name is kept exactly as given.
    pub fn with_default_name(name: &str, default_name: &str, marker: Marker) -> Self {
        let name = if name.trim().is_empty() { default_name } else { name };
        Self::new(name.to_string(), marker)
    }

    /// Player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Player's marker.
    pub fn marker(&self) -> Marker {
        self.marker
    }
}

/// Result of evaluating the board after a placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Game continues.
    NoResult,
    /// The player who just moved completed a line.
    Win(Player),
    /// Board is full with no completed line.
    Tie,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_uses_default() {
        let player = Player::with_default_name("   ", DEFAULT_PLAYER1_NAME, Marker::X);
        assert_eq!(player.name(), "Player 1");
        assert_eq!(player.marker(), Marker::X);
    }

    #[test]
    fn test_name_kept_as_typed() {
        let player = Player::with_default_name(" Bob ", DEFAULT_PLAYER2_NAME, Marker::O);
        assert_eq!(player.name(), " Bob ");
    }

    #[test]
    fn test_empty_name_uses_default() {
        let player = Player::with_default_name("", DEFAULT_PLAYER2_NAME, Marker::O);
        assert_eq!(player.name(), "Player 2");
    }

    #[test]
    fn test_marker_display() {
        assert_eq!(Marker::X.to_string(), "X");
        assert_eq!(Marker::O.to_string(), "O");
    }
}
