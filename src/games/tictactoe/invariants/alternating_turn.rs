//! Alternating turn invariant: marks go X, O, X, O, ...

use super::super::{GameState, Player, Square};
use super::Invariant;

/// Invariant: the mark added by snapshot `k` belongs to the player whose
/// turn it was at snapshot `k - 1`.
///
/// First move is always X.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        game.history.windows(2).enumerate().all(|(step, pair)| {
            let expected = Square::Occupied(Player::for_move(step));
            pair[0]
                .squares()
                .iter()
                .zip(pair[1].squares())
                .filter(|(before, after)| before != after)
                .all(|(_, after)| *after == expected)
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let game = GameState::replay(&[0, 4, 2, 6, 8]).unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.current_turn(), Player::O);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = GameState::replay(&[0]).unwrap();
        // X plays again where O should have.
        let twice = game.history[1].with_mark(4, Player::X).unwrap();
        game.history.push(twice);
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
