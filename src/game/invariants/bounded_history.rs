//! Bounded history invariant: a round has at most 9 moves.

use super::Invariant;
use crate::game::{Game, Square};

/// Invariant: the history never exceeds the number of board squares.
pub struct BoundedHistoryInvariant;

impl Invariant<Game> for BoundedHistoryInvariant {
    fn holds(game: &Game) -> bool {
        game.moves().len() <= Square::COUNT
    }

    fn description() -> &'static str {
        "A round holds at most 9 moves"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    #[test]
    fn test_full_round_holds() {
        let mut game = Game::new();
        let mut player = Player::One;
        for id in [1u8, 2, 3, 5, 4, 6, 8, 7, 9] {
            game = game.with_move(id, player).unwrap();
            player = player.opponent();
        }
        assert!(BoundedHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_overlong_history_violates() {
        // 10 entries can only come from a tampered payload.
        let moves: Vec<String> = (1..=9)
            .chain(std::iter::once(1))
            .enumerate()
            .map(|(i, id)| format!(r#"{{"square":{},"player":{}}}"#, id, (i % 2) + 1))
            .collect();
        let payload = format!(r#"{{"moves":[{}]}}"#, moves.join(","));
        let game: Game = serde_json::from_str(&payload).unwrap();
        assert!(!BoundedHistoryInvariant::holds(&game));
    }
}
