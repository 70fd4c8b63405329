//! Notifications emitted by [`GameState`](super::GameState) transitions.
//!
//! The game never performs presentation side effects itself. Front ends
//! that want to react (a victory sound, a status flash) register a
//! [`GameObserver`] and do the work there.

use super::{Move, WinLine};

/// Something observable happened to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A move was played and became the newest history entry.
    Moved(Move),
    /// The current board went from having no winner to having one.
    Won(WinLine),
    /// The current history entry changed through navigation.
    Jumped {
        /// Entry shown before the jump.
        from: usize,
        /// Entry shown after the jump.
        to: usize,
    },
    /// Navigation landed on the empty starting board.
    JumpedToStart,
}

/// Receives [`GameEvent`]s from a game it was subscribed to.
pub trait GameObserver {
    /// Called synchronously after the transition has been applied.
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}
