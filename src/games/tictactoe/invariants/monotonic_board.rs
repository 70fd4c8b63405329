//! Monotonic board invariant: each snapshot adds exactly one mark.

use super::super::{GameState, Square};
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly one square, which
/// goes from empty to occupied.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        game.history.windows(2).all(|pair| {
            let changed: Vec<_> = pair[0]
                .squares()
                .iter()
                .zip(pair[1].squares())
                .filter(|(before, after)| before != after)
                .collect();

            matches!(
                changed.as_slice(),
                [(Square::Empty, Square::Occupied(_))]
            )
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to its predecessor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Player;

    #[test]
    fn test_played_game_holds() {
        let game = GameState::replay(&[0, 4, 8, 2]).unwrap();
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut game = GameState::replay(&[4]).unwrap();
        let overwritten = game.history[1].with_mark(4, Player::O).unwrap();
        game.history.push(overwritten);
        assert!(!MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_repeated_snapshot_violates() {
        let mut game = GameState::replay(&[4]).unwrap();
        let same = game.history[1];
        game.history.push(same);
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
