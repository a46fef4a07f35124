//! Headless playback of a click sequence.

use crate::display::GameDisplay;
use crate::games::tictactoe::{ClickOutcome, Engine, EngineError, GameSnapshot};
use tracing::{debug, info, instrument};

/// Starts a game on `engine` and feeds it `moves` in order.
///
/// Clicks after the game ends are passed through and ignored by the
/// engine like any other click.
///
/// # Errors
///
/// Stops at the first out-of-range index.
#[instrument(skip(engine))]
pub fn replay<D: GameDisplay>(
    engine: &mut Engine<D>,
    name1: &str,
    name2: &str,
    moves: &[usize],
) -> Result<GameSnapshot, EngineError> {
    engine.start_game(name1, name2);
    let mut ignored = 0usize;
    for &index in moves {
        if engine.handle_cell_click(index)? == ClickOutcome::Ignored {
            debug!(index, "Replayed click ignored");
            ignored += 1;
        }
    }
    let snapshot = engine.snapshot();
    info!(phase = %snapshot.phase, ignored, "Replay finished");
    Ok(snapshot)
}
