//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Candidate winning lines, in the order they are checked.
///
/// Rows first, then columns, then diagonals. When a board holds more than
/// one complete line (only possible for boards not reached by legal play),
/// the earliest line in this list wins the tie.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A completed line of three equal marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{} wins on {:?}", player, cells)]
pub struct WinLine {
    cells: [usize; 3],
    player: Player,
}

impl WinLine {
    /// Creates a win line from its three cell indices and the winning mark.
    pub fn new(cells: [usize; 3], player: Player) -> Self {
        Self { cells, player }
    }

    /// The three cell indices forming the line.
    pub fn cells(&self) -> [usize; 3] {
        self.cells
    }

    /// The winning mark.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Whether `index` is one of the winning cells.
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

/// Finds the first complete line on the board.
///
/// Returns `None` when no line is complete, including a full board with
/// no three-in-a-row. Draws are reported by [`super::is_draw`].
#[instrument]
pub fn detect(board: &Board) -> Option<WinLine> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a)?;
        match sq {
            Square::Occupied(player) if Some(sq) == board.get(b) && Some(sq) == board.get(c) => {
                Some(WinLine::new([a, b, c], player))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    detect(board).map(|line| line.player())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(marks: &[(usize, Player)]) -> Board {
        marks
            .iter()
            .fold(Board::new(), |board, &(pos, player)| {
                board.with_mark(pos, player).unwrap()
            })
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(detect(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_from(&[(0, Player::X), (1, Player::X), (2, Player::X)]);
        assert_eq!(detect(&board), Some(WinLine::new([0, 1, 2], Player::X)));
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let board = board_from(&line.map(|pos| (pos, Player::O)));
            assert_eq!(detect(&board), Some(WinLine::new(line, Player::O)));
        }
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_from(&[
            (2, Player::O),
            (4, Player::O),
            (6, Player::O),
            (0, Player::X),
            (1, Player::X),
        ]);
        let line = detect(&board).unwrap();
        assert_eq!(line.cells(), [2, 4, 6]);
        assert_eq!(line.player(), Player::O);
        assert!(line.contains(4));
        assert!(!line.contains(0));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_from(&[(0, Player::X), (1, Player::X), (2, Player::O)]);
        assert_eq!(detect(&board), None);
    }

    #[test]
    fn test_no_winner_full_board() {
        // X O X / X O O / O X X
        let board = board_from(&[
            (0, Player::X),
            (1, Player::O),
            (2, Player::X),
            (3, Player::X),
            (4, Player::O),
            (5, Player::O),
            (6, Player::O),
            (7, Player::X),
            (8, Player::X),
        ]);
        assert_eq!(detect(&board), None);
    }

    #[test]
    fn test_earliest_line_wins_tie() {
        // Degenerate board: X holds the top row and O the bottom row.
        let board = board_from(&[
            (6, Player::O),
            (7, Player::O),
            (8, Player::O),
            (0, Player::X),
            (1, Player::X),
            (2, Player::X),
        ]);
        assert_eq!(detect(&board), Some(WinLine::new([0, 1, 2], Player::X)));

        // Column 0 precedes the main diagonal.
        let board = board_from(&[
            (0, Player::O),
            (3, Player::O),
            (6, Player::O),
            (4, Player::O),
            (8, Player::O),
        ]);
        assert_eq!(detect(&board), Some(WinLine::new([0, 3, 6], Player::O)));
    }

    #[test]
    fn test_detect_does_not_mutate() {
        let board = board_from(&[(0, Player::X), (4, Player::X), (8, Player::X)]);
        let before = board;
        let _ = detect(&board);
        assert_eq!(board, before);
    }
}
