//! Victory side effect, driven by game events.

use crate::games::tictactoe::{GameEvent, GameObserver};
use std::cell::Cell;
use std::io::Write;
use std::rc::Rc;
use tracing::{debug, warn};

/// Plays the victory signal whenever the shown board becomes won.
///
/// Stands in for the victory sound: the terminal bell rings each time a
/// line is completed or navigation lands on a won board, and playback stops
/// as soon as the cursor moves away from it. In any branch only the last
/// snapshot can be won, so a jump between two different snapshots always
/// leaves the won board behind. The shared flag lets the UI style the
/// status line while the celebration is "playing".
#[derive(Debug, Clone)]
pub struct Celebration {
    playing: Rc<Cell<bool>>,
    plays: Rc<Cell<usize>>,
    bell: bool,
}

impl Celebration {
    /// Creates a celebration; `bell` controls whether the bell is rung.
    pub fn new(bell: bool) -> Self {
        Self {
            playing: Rc::new(Cell::new(false)),
            plays: Rc::new(Cell::new(0)),
            bell,
        }
    }

    /// Handle to the "playing" flag, shared with every clone.
    pub fn playing(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.playing)
    }

    /// Number of times the celebration has started, shared with every clone.
    pub fn play_count(&self) -> usize {
        self.plays.get()
    }

    fn ring(&self) {
        let mut out = std::io::stdout();
        if let Err(e) = out.write_all(b"\x07").and_then(|()| out.flush()) {
            warn!(error = %e, "Failed to ring terminal bell");
        }
    }

    fn stop(&self, reason: &str) {
        if self.playing.replace(false) {
            debug!(reason, "Celebration stopped");
        }
    }
}

impl GameObserver for Celebration {
    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Won(line) => {
                self.plays.set(self.plays.get() + 1);
                debug!(
                    winner = %line.player(),
                    plays = self.plays.get(),
                    "Celebration started"
                );
                self.playing.set(true);
                if self.bell {
                    self.ring();
                }
            }
            GameEvent::Jumped { from, to } if from != to => self.stop("left won board"),
            GameEvent::JumpedToStart => self.stop("rewound to start"),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::GameState;

    #[test]
    fn test_plays_on_win_and_resets_at_start() {
        let celebration = Celebration::new(false);
        let playing = celebration.playing();

        let mut game = GameState::new();
        game.subscribe(celebration);
        for cell in [0, 3, 1, 4] {
            game.play_move(cell).unwrap();
        }
        assert!(!playing.get());

        game.play_move(2).unwrap();
        assert!(playing.get());

        game.jump_to(5).unwrap();
        assert!(playing.get());

        game.jump_to(2).unwrap();
        assert!(!playing.get());

        game.jump_to(5).unwrap();
        assert!(playing.get());

        game.jump_to(0).unwrap();
        assert!(!playing.get());
    }

    #[test]
    fn test_plays_again_after_branching_to_new_win() {
        let celebration = Celebration::new(false);
        let playing = celebration.playing();
        let counter = celebration.clone();

        let mut game = GameState::new();
        game.subscribe(celebration);
        for cell in [0, 3, 1, 4, 2] {
            game.play_move(cell).unwrap();
        }
        assert!(playing.get());
        assert_eq!(counter.play_count(), 1);

        game.jump_to(1).unwrap();
        assert!(!playing.get());

        // X completes the diagonal on the new branch.
        for cell in [3, 4, 5, 8] {
            game.play_move(cell).unwrap();
        }
        assert!(playing.get());
        assert_eq!(counter.play_count(), 2);
    }
}
