//! History consistency invariant: the history is anchored and the cursor
//! points into it.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: history starts with the empty board and the cursor is in
/// range.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        match game.history.first() {
            Some(first) => *first == Board::new() && game.current_move < game.history.len(),
            None => false,
        }
    }

    fn description() -> &'static str {
        "History starts with the empty board and the cursor points into it"
    }
}
