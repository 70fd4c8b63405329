//! Game state with a navigable move history.
//!
//! The game keeps every board snapshot it has passed through. Navigation
//! moves a cursor over the snapshots; playing a move after navigating back
//! discards the abandoned future and starts a new branch.

use super::action::{Move, Rejected};
use super::events::{GameEvent, GameObserver};
use super::history::MoveList;
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::phases::GameStatus;
use super::rules;
use super::{Board, Player, Position};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game with time travel.
///
/// Invariants maintained by every transition:
/// - the history is never empty and starts with the empty board
/// - each snapshot adds exactly one mark to its predecessor, X on even
///   steps and O on odd ones
/// - the cursor always points at an existing snapshot
pub struct GameState {
    pub(super) history: Vec<Board>,
    pub(super) current_move: usize,
    observers: Vec<Box<dyn GameObserver>>,
}

impl GameState {
    /// Creates a new game holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
            observers: Vec::new(),
        }
    }

    /// Plays the given cells in order from a fresh game.
    ///
    /// # Errors
    ///
    /// Returns the first rejection encountered.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<Self, Rejected> {
        let mut game = Self::new();
        for &cell in cells {
            game.play_move(cell)?;
        }
        Ok(game)
    }

    /// Registers an observer for all subsequent transitions.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// The snapshot the cursor points at.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Index of the snapshot the cursor points at.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Whose turn it is on the current snapshot.
    pub fn current_turn(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Every snapshot of the current branch, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Status of the current snapshot, recomputed on every call.
    pub fn status(&self) -> GameStatus {
        GameStatus::of(self.current_board())
    }

    /// Labelled entries for every snapshot in the history.
    pub fn list_moves(&self) -> MoveList {
        MoveList::new(self.history.len())
    }

    /// Places the current player's mark on `cell` (0-8).
    ///
    /// Snapshots after the current one are discarded before the new board
    /// is appended, and the cursor moves to the new board.
    ///
    /// # Errors
    ///
    /// Checked in order:
    /// - [`Rejected::GameAlreadyWon`] if the current board has a winner
    /// - [`Rejected::CellOutOfRange`] if `cell` is not on the board
    /// - [`Rejected::CellOccupied`] if the cell already holds a mark
    ///
    /// A rejected move leaves the game unchanged.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn play_move(&mut self, cell: usize) -> Result<(), Rejected> {
        let board = *self.current_board();

        if rules::detect(&board).is_some() {
            debug!("Move rejected: game already won");
            return Err(Rejected::GameAlreadyWon);
        }

        let position = Position::from_index(cell).ok_or(Rejected::CellOutOfRange(cell))?;

        if !board.is_empty(cell) {
            debug!("Move rejected: cell occupied");
            return Err(Rejected::CellOccupied(cell));
        }

        let player = self.current_turn();
        let next = board.place(position, player);

        let discarded = self.history.len() - (self.current_move + 1);
        if discarded > 0 {
            debug!(discarded, "Branching: dropping abandoned future moves");
        }
        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;
        self.assert_invariants();

        let action = Move::new(self.current_move, player, position);
        debug!(%action, "Move applied");
        self.emit(GameEvent::Moved(action));

        if let Some(line) = rules::detect(&next) {
            info!(winner = %line.player(), cells = ?line.cells(), "Game won");
            self.emit(GameEvent::Won(line));
        }

        Ok(())
    }

    /// Moves the cursor to history entry `index` without altering history.
    ///
    /// # Errors
    ///
    /// Returns [`Rejected::IndexOutOfRange`] if no such entry exists.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), Rejected> {
        let len = self.history.len();
        if index >= len {
            debug!(len, "Jump rejected: index out of range");
            return Err(Rejected::IndexOutOfRange { index, len });
        }

        let from = self.current_move;
        let was_won = rules::detect(self.current_board()).is_some();
        self.current_move = index;
        self.assert_invariants();

        debug!(from, to = index, "Jumped");
        self.emit(GameEvent::Jumped { from, to: index });

        if index == 0 {
            self.emit(GameEvent::JumpedToStart);
        }

        if !was_won && let Some(line) = rules::detect(self.current_board()) {
            self.emit(GameEvent::Won(line));
        }

        Ok(())
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }

    /// Panics in debug builds if a transition broke a game invariant.
    fn assert_invariants(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        if let Err(violations) = TicTacToeInvariants::check_all(self) {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Game invariants violated");
            panic!("Game invariants violated: {}", descriptions);
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameState")
            .field("history", &self.history)
            .field("current_move", &self.current_move)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    #[test]
    fn test_new_game_starts_empty() {
        let game = GameState::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_move(), 0);
        assert_eq!(*game.current_board(), Board::new());
        assert_eq!(game.current_turn(), Player::X);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_play_move_appends_snapshot() {
        let mut game = GameState::new();
        game.play_move(4).unwrap();

        assert_eq!(game.history().len(), 2);
        assert_eq!(game.current_move(), 1);
        assert_eq!(game.current_board().get(4), Some(Square::Occupied(Player::X)));
        assert!(game.history()[0].is_empty(4));
        assert_eq!(game.current_turn(), Player::O);
    }

    #[test]
    fn test_out_of_range_cell_rejected() {
        let mut game = GameState::new();
        assert_eq!(game.play_move(9), Err(Rejected::CellOutOfRange(9)));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_won_check_precedes_range_check() {
        let mut game = GameState::replay(&[0, 3, 1, 4, 2]).unwrap();
        assert_eq!(game.play_move(42), Err(Rejected::GameAlreadyWon));
    }

    #[test]
    fn test_debug_lists_observer_count() {
        let mut game = GameState::new();
        game.subscribe(|_: &GameEvent| {});
        let debug = format!("{:?}", game);
        assert!(debug.contains("observers: 1"));
    }
}
