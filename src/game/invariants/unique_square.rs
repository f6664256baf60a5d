//! Unique square invariant: no square is claimed twice.

use super::Invariant;
use crate::game::Game;

/// Invariant: every move claims a distinct square.
pub struct UniqueSquareInvariant;

impl Invariant<Game> for UniqueSquareInvariant {
    fn holds(game: &Game) -> bool {
        let moves = game.moves();
        moves.iter().enumerate().all(|(i, m)| {
            moves[..i].iter().all(|earlier| earlier.square() != m.square())
        })
    }

    fn description() -> &'static str {
        "No two moves claim the same square"
    }
}
