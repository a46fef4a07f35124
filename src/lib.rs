//! Two-player tic-tac-toe engine.
//!
//! The [`Engine`] owns a [`Board`], the two players, and the game-over
//! flag. It reports every status change through a [`GameDisplay`] injected
//! at construction, so the terminal UI, a console printer, and test
//! doubles all drive the same logic.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Engine, RecordingDisplay};
//!
//! let mut engine = Engine::new(RecordingDisplay::new());
//! engine.start_game("Alice", "Bob");
//! for index in [0, 3, 1, 4, 2] {
//!     engine.handle_cell_click(index).unwrap();
//! }
//! assert_eq!(engine.display().status(), "Alice wins!");
//! assert!(engine.is_game_over());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod display;
mod games;
mod replay;
mod session;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Display capability
pub use display::{ConsoleDisplay, GameDisplay, Notification, RecordingDisplay};

// Crate-level exports - Headless playback
pub use replay::replay;

// Crate-level exports - Session management
pub use session::{SessionError, SessionId, SessionManager};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardError, CELL_COUNT, Cell, ClickOutcome, DEFAULT_PLAYER1_NAME,
    DEFAULT_PLAYER2_NAME, Direction, Engine, EngineError, EngineErrorKind, GameSnapshot, Marker,
    Outcome, Phase, Player, Position, TIE_MESSAGE, rules,
};
