//! Key bindings and cursor movement for keyboard navigation.

use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor (arrow keys).
    MoveCursor(KeyCode),
    /// Play at the cursor.
    PlayAtCursor,
    /// Play directly at a cell (0-8), from keys 1-9.
    Play(usize),
    /// Show the previous history entry.
    StepBack,
    /// Show the next history entry.
    StepForward,
    /// Jump to the empty starting board.
    JumpToStart,
    /// Jump to the newest history entry.
    JumpToLatest,
    /// Leave the program.
    Quit,
}

/// Maps a key to an action, if it is bound.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::MoveCursor(key))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayAtCursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| Action::Play(digit as usize - 1)),
        KeyCode::Char('[') | KeyCode::Backspace => Some(Action::StepBack),
        KeyCode::Char(']') => Some(Action::StepForward),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::JumpToStart),
        KeyCode::End | KeyCode::Char('G') => Some(Action::JumpToLatest),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys. The cursor stops at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let target = match key {
        KeyCode::Right => Position::from_row_col(row, col + 1),
        KeyCode::Left => col
            .checked_sub(1)
            .and_then(|col| Position::from_row_col(row, col)),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        KeyCode::Up => row
            .checked_sub(1)
            .and_then(|row| Position::from_row_col(row, col)),
        _ => None,
    };

    target.unwrap_or(cursor)
}
