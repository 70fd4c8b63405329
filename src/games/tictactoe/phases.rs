//! Derived meta-state of the game.
//!
//! The status is never stored. It is recomputed from the current board
//! every time it is asked for, so it cannot drift from the board.

use super::rules::{self, WinLine};
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status of a board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves can still be played.
    InProgress,
    /// A line is complete. Terminal for moves, but history navigation
    /// still works.
    Won(WinLine),
    /// Board is full with no complete line.
    Draw,
}

impl GameStatus {
    /// Evaluates the status of a board.
    #[instrument]
    pub fn of(board: &Board) -> Self {
        if let Some(line) = rules::detect(board) {
            GameStatus::Won(line)
        } else if rules::is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(line) => Some(line.player()),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn win_line(&self) -> Option<WinLine> {
        match self {
            GameStatus::Won(line) => Some(*line),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, GameStatus::Draw)
    }

    /// Returns true while moves can be played.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameStatus::InProgress)
    }
}
