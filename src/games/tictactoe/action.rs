//! Moves and the ways a request against the game can be refused.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move that was played: `player` marked cell `index`, producing history
/// entry `move_number`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Index of the resulting snapshot in the history. Never 0, which is
    /// the empty board.
    pub move_number: usize,
    /// The player making the move.
    pub player: Player,
    /// The position where the player placed their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(move_number: usize, player: Player, position: Position) -> Self {
        Self {
            move_number,
            player,
            position,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} {} -> {}",
            self.move_number,
            self.player,
            self.position.label()
        )
    }
}

/// Why a `play_move` or `jump_to` request was refused.
///
/// Every rejection leaves the game untouched. Front ends are expected to
/// ignore them: a refused click simply does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum Rejected {
    /// The current board already has a complete line.
    #[display("Game is already won")]
    GameAlreadyWon,

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] usize),

    /// The target cell is not on the board.
    #[display("Cell {} is off the board (must be 0-8)", _0)]
    CellOutOfRange(#[error(not(source))] usize),

    /// The requested history entry does not exist.
    #[display("Move {} is out of range (history has {} entries)", index, len)]
    IndexOutOfRange {
        /// Requested history index.
        index: usize,
        /// History length at the time of the request.
        len: usize,
    },
}
