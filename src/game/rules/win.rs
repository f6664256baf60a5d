//! Win detection logic for tic-tac-toe.

use tracing::instrument;

use super::super::action::Move;
use super::super::types::{Player, Square};

/// The 8 winning triples in canonical order: rows, columns, diagonals.
const WINNING_TRIPLES: [[Square; 3]; 8] = [
    // Rows
    [Square::TopLeft, Square::TopCenter, Square::TopRight],
    [Square::MiddleLeft, Square::Center, Square::MiddleRight],
    [Square::BottomLeft, Square::BottomCenter, Square::BottomRight],
    // Columns
    [Square::TopLeft, Square::MiddleLeft, Square::BottomLeft],
    [Square::TopCenter, Square::Center, Square::BottomCenter],
    [Square::TopRight, Square::MiddleRight, Square::BottomRight],
    // Diagonals
    [Square::TopLeft, Square::Center, Square::BottomRight],
    [Square::TopRight, Square::Center, Square::BottomLeft],
];

/// Checks if a player has claimed a full winning triple.
///
/// Returns `Some(player)` if that player's claimed squares cover one
/// of the 8 triples, `None` otherwise.
///
/// The scan visits every triple and overwrites the winner instead of
/// returning at the first match. Legal alternating play can satisfy a
/// triple for at most one player, but a corrupted history can satisfy
/// triples for both; in that case the later triple in canonical order
/// decides. That tie-break is intentional and pinned by a test.
#[instrument]
pub fn check_winner(moves: &[Move]) -> Option<Player> {
    let mut winner = None;

    for triple in &WINNING_TRIPLES {
        for player in [Player::One, Player::Two] {
            let claimed = triple
                .iter()
                .all(|square| moves.iter().any(|m| m.player() == player && m.square() == *square));
            if claimed {
                winner = Some(player);
            }
        }
    }

    winner
}
