//! Tic-tac-toe with a navigable move history.

mod action;
mod events;
mod game;
mod history;
pub mod invariants;
mod phases;
mod position;
pub mod rules;
mod types;

pub use action::{Move, Rejected};
pub use events::{GameEvent, GameObserver};
pub use game::GameState;
pub use history::{MoveEntry, MoveList};
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant, TicTacToeInvariants,
};
pub use phases::GameStatus;
pub use position::Position;
pub use rules::WinLine;
pub use types::{Board, CELL_COUNT, Player, Square};
