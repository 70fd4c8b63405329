//! Application state and logic.

use super::celebration::Celebration;
use super::input::{Action, move_cursor};
use crate::config::AppConfig;
use crate::games::tictactoe::{GameState, GameStatus, Position};
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, info};

/// Main application state.
pub struct App {
    game: GameState,
    cursor: Position,
    celebrating: Rc<Cell<bool>>,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(config: &AppConfig) -> Self {
        let celebration = Celebration::new(*config.bell_on_win());
        let celebrating = celebration.playing();

        let mut game = GameState::new();
        game.subscribe(celebration);

        Self {
            game,
            cursor: Position::Center,
            celebrating,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the victory celebration is active.
    pub fn is_celebrating(&self) -> bool {
        self.celebrating.get()
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Status line for the current snapshot.
    pub fn status_message(&self) -> String {
        match self.game.status() {
            GameStatus::Won(line) => format!("Winner: {}", line.player()),
            GameStatus::Draw => "Draw".to_string(),
            GameStatus::InProgress => format!("Next player: {}", self.game.current_turn()),
        }
    }

    /// Applies a user action.
    ///
    /// Rejected moves and jumps are dropped: the key press just does
    /// nothing.
    pub fn handle_action(&mut self, action: Action) {
        debug!(?action, "Handling action");

        let current = self.game.current_move();
        let outcome = match action {
            Action::MoveCursor(key) => {
                self.cursor = move_cursor(self.cursor, key);
                Ok(())
            }
            Action::PlayAtCursor => self.game.play_move(self.cursor.to_index()),
            Action::Play(cell) => {
                if let Some(pos) = Position::from_index(cell) {
                    self.cursor = pos;
                }
                self.game.play_move(cell)
            }
            Action::StepBack => match current.checked_sub(1) {
                Some(previous) => self.game.jump_to(previous),
                None => Ok(()),
            },
            Action::StepForward => self.game.jump_to(current + 1),
            Action::JumpToStart => self.game.jump_to(0),
            Action::JumpToLatest => self.game.jump_to(self.game.history().len() - 1),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
                Ok(())
            }
        };

        if let Err(rejected) = outcome {
            debug!(%rejected, "Ignoring rejected input");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_app() -> App {
        let config = AppConfig::from_toml("bell_on_win = false").unwrap();
        App::new(&config)
    }

    #[test]
    fn test_status_follows_game() {
        let mut app = quiet_app();
        assert_eq!(app.status_message(), "Next player: X");

        for cell in [0, 4, 1, 5, 2] {
            app.handle_action(Action::Play(cell));
        }
        assert_eq!(app.status_message(), "Winner: X");
        assert!(app.is_celebrating());
        assert_eq!(app.cursor(), Position::TopRight);

        app.handle_action(Action::JumpToStart);
        assert_eq!(app.status_message(), "Next player: X");
        assert!(!app.is_celebrating());
    }

    #[test]
    fn test_stepping_off_a_win_stops_celebrating() {
        let mut app = quiet_app();
        for cell in [0, 4, 1, 5, 2] {
            app.handle_action(Action::Play(cell));
        }
        assert!(app.is_celebrating());

        app.handle_action(Action::StepBack);
        assert!(!app.is_celebrating());

        app.handle_action(Action::StepForward);
        assert!(app.is_celebrating());
    }

    #[test]
    fn test_rejected_input_is_ignored() {
        let mut app = quiet_app();
        app.handle_action(Action::PlayAtCursor);
        app.handle_action(Action::PlayAtCursor);
        assert_eq!(app.game().history().len(), 2);

        app.handle_action(Action::StepForward);
        assert_eq!(app.game().current_move(), 1);

        app.handle_action(Action::StepBack);
        app.handle_action(Action::StepBack);
        assert_eq!(app.game().current_move(), 0);

        app.handle_action(Action::JumpToLatest);
        assert_eq!(app.game().current_move(), 1);
    }

    #[test]
    fn test_draw_status() {
        let mut app = quiet_app();
        for cell in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            app.handle_action(Action::Play(cell));
        }
        assert_eq!(app.status_message(), "Draw");
    }

    #[test]
    fn test_quit() {
        let mut app = quiet_app();
        assert!(!app.should_quit());
        app.handle_action(Action::Quit);
        assert!(app.should_quit());
    }
}
