//! Key bindings.

use crate::games::tictactoe::Direction;
use crossterm::event::KeyCode;

/// What a key press on the game screen asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    /// Move the cursor.
    Move(Direction),
    /// Click the cell under the cursor.
    Select,
    /// Click a cell by index (digits 1-9).
    Cell(usize),
    /// Restart with the same players.
    Restart,
    /// Back to the setup form.
    NewPlayers,
    /// Leave the program.
    Quit,
}

/// Maps a key on the game screen to an action.
pub fn game_key(key: KeyCode) -> Option<GameKey> {
    match key {
        KeyCode::Up => Some(GameKey::Move(Direction::Up)),
        KeyCode::Down => Some(GameKey::Move(Direction::Down)),
        KeyCode::Left => Some(GameKey::Move(Direction::Left)),
        KeyCode::Right => Some(GameKey::Move(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameKey::Select),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| GameKey::Cell(digit as usize - 1)),
        KeyCode::Char('r') => Some(GameKey::Restart),
        KeyCode::Char('n') => Some(GameKey::NewPlayers),
        KeyCode::Char('q') | KeyCode::Esc => Some(GameKey::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_are_one_based() {
        assert_eq!(game_key(KeyCode::Char('1')), Some(GameKey::Cell(0)));
        assert_eq!(game_key(KeyCode::Char('9')), Some(GameKey::Cell(8)));
        assert_eq!(game_key(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_arrows_move() {
        assert_eq!(game_key(KeyCode::Left), Some(GameKey::Move(Direction::Left)));
    }
}
