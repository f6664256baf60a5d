//! First-class move types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. The history of moves is
//! the authoritative record of a round; everything else is derived.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::types::{Player, Square};

/// A move: a player claiming a single board square.
///
/// Immutable once created; its position in the history is its play
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The square being claimed.
    square: Square,
    /// The player claiming it.
    player: Player,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, square: Square) -> Self {
        Self { square, player }
    }

    /// Returns the player who made this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the square this move claimed.
    pub fn square(&self) -> Square {
        self.square
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.square.label())
    }
}

/// Error raised when a move is rejected.
///
/// These indicate caller bugs or tampered state; a well-behaved host
/// only offers the derived current player and open squares, but the
/// engine enforces every rule independently. A rejected move never
/// alters the existing history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square id is not in 1..9.
    #[display("Square id {} is not on the board", _0)]
    InvalidSquare(u8),

    /// The square is already claimed by an earlier move.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Square),

    /// The acting player is not the derived current player.
    #[display("It's not {}'s turn", _0)]
    OutOfTurn(Player),

    /// The round already has a winner or a full board.
    #[display("Round is already over")]
    RoundOver,
}

impl std::error::Error for MoveError {}
