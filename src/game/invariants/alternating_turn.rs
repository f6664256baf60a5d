//! Alternating turn invariant: moves alternate between the players.

use super::Invariant;
use crate::game::Game;

/// Invariant: players alternate turns.
///
/// The first move belongs to the round's starting player, and no
/// player moves twice in a row.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let moves = game.moves();

        if let Some(first) = moves.first()
            && first.player() != game.first_player()
        {
            return false;
        }

        moves
            .windows(2)
            .all(|pair| pair[0].player() != pair[1].player())
    }

    fn description() -> &'static str {
        "Players alternate turns, starting with the round's first player"
    }
}
