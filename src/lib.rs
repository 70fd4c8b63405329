//! Rewind Tic-Tac-Toe library - game state with a navigable move history
//!
//! # Architecture
//!
//! - **Games**: the tic-tac-toe board, win detection, and [`GameState`],
//!   which keeps every snapshot and lets the player jump back to any of them
//! - **TUI**: terminal front end that renders the current snapshot and
//!   dispatches key presses
//! - **Config**: TOML settings for the front end
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, GameStatus, Rejected, TicTacToePlayer as Player};
//!
//! let mut game = GameState::new();
//! for cell in [0, 4, 1, 5, 2] {
//!     game.play_move(cell).unwrap();
//! }
//! assert_eq!(game.status().winner(), Some(Player::X));
//! assert_eq!(game.play_move(3), Err(Rejected::GameAlreadyWon));
//!
//! game.jump_to(0).unwrap();
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AlternatingTurnInvariant, Board, CELL_COUNT, GameEvent, GameObserver, GameState, GameStatus,
    HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant, Move, MoveEntry, MoveList, Position, Rejected, Square,
    TicTacToeInvariants, WinLine, Player as TicTacToePlayer,
};

// Crate-level exports - Rules
pub use games::tictactoe::rules;
