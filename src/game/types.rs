//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::action::{Move, MoveError};
use super::engine;
use super::invariants::{GameInvariants, InvariantSet};

/// Player in the game.
///
/// Serialized as the integer id `1` or `2`, matching the stored
/// snapshot format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Player {
    /// Player 1 (moves first by default).
    #[default]
    One,
    /// Player 2.
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Numeric id of this player (1 or 2).
    pub fn id(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Zero-based index, for counter tables.
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl TryFrom<u8> for Player {
    type Error = String;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            other => Err(format!("Player id must be 1 or 2, got {}", other)),
        }
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> Self {
        player.id()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.id())
    }
}

/// A square on the tic-tac-toe board.
///
/// Squares are identified 1..9 in row-major order and serialize as
/// their integer id; ids outside that range fail to decode.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Square {
    /// Top-left (id 1)
    TopLeft,
    /// Top-center (id 2)
    TopCenter,
    /// Top-right (id 3)
    TopRight,
    /// Middle-left (id 4)
    MiddleLeft,
    /// Center (id 5)
    Center,
    /// Middle-right (id 6)
    MiddleRight,
    /// Bottom-left (id 7)
    BottomLeft,
    /// Bottom-center (id 8)
    BottomCenter,
    /// Bottom-right (id 9)
    BottomRight,
}

impl Square {
    /// Number of squares on the board.
    pub const COUNT: usize = 9;

    /// Numeric id of this square (1..9, row-major).
    pub fn id(self) -> u8 {
        match self {
            Square::TopLeft => 1,
            Square::TopCenter => 2,
            Square::TopRight => 3,
            Square::MiddleLeft => 4,
            Square::Center => 5,
            Square::MiddleRight => 6,
            Square::BottomLeft => 7,
            Square::BottomCenter => 8,
            Square::BottomRight => 9,
        }
    }

    /// Creates a square from its numeric id.
    #[instrument]
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Square::TopLeft),
            2 => Some(Square::TopCenter),
            3 => Some(Square::TopRight),
            4 => Some(Square::MiddleLeft),
            5 => Some(Square::Center),
            6 => Some(Square::MiddleRight),
            7 => Some(Square::BottomLeft),
            8 => Some(Square::BottomCenter),
            9 => Some(Square::BottomRight),
            _ => None,
        }
    }

    /// Get label for this square (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Square::TopLeft => "Top-left",
            Square::TopCenter => "Top-center",
            Square::TopRight => "Top-right",
            Square::MiddleLeft => "Middle-left",
            Square::Center => "Center",
            Square::MiddleRight => "Middle-right",
            Square::BottomLeft => "Bottom-left",
            Square::BottomCenter => "Bottom-center",
            Square::BottomRight => "Bottom-right",
        }
    }
}

impl TryFrom<u8> for Square {
    type Error = String;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Square::from_id(id).ok_or_else(|| format!("Square id must be 1..9, got {}", id))
    }
}

impl From<Square> for u8 {
    fn from(square: Square) -> Self {
        square.id()
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Current status of a round, derived from the move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Round is ongoing.
    InProgress,
    /// Round ended with a winner.
    Won(Player),
    /// Round ended with a full board and no winner.
    Draw,
}

impl GameStatus {
    /// Returns true once the round can accept no further moves.
    pub fn is_complete(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }
}

/// A round of tic-tac-toe: the ordered move history plus the round's
/// starting player.
///
/// Everything else (current player, status, winner) is derived on
/// demand from the history, so no stored turn or winner state can
/// drift out of sync with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Player who made (or will make) the first move of this round.
    #[serde(default)]
    first_player: Player,
    /// Moves in play order; insertion order is the turn sequence.
    moves: Vec<Move>,
}

impl Game {
    /// Creates an empty round started by player 1.
    #[instrument]
    pub fn new() -> Self {
        Self::starting_with(Player::One)
    }

    /// Creates an empty round started by the given player.
    #[instrument]
    pub fn starting_with(first_player: Player) -> Self {
        Self {
            first_player,
            moves: Vec::new(),
        }
    }

    /// Returns the round's starting player.
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Returns the move history in play order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        engine::current_player(&self.moves, self.first_player)
    }

    /// Returns the round status derived from the history.
    pub fn status(&self) -> GameStatus {
        engine::status(&self.moves)
    }

    /// Returns a new round with the move applied; the receiver is
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if the round is over, the square id is
    /// invalid or occupied, or it is not the acting player's turn.
    #[instrument(skip(self), fields(first_player = %self.first_player))]
    pub fn with_move(&self, square_id: u8, acting: Player) -> Result<Self, MoveError> {
        let moves = engine::apply_move(&self.moves, self.first_player, square_id, acting)?;
        let next = Self {
            first_player: self.first_player,
            moves,
        };
        debug_assert!(
            GameInvariants::check_all(&next).is_ok(),
            "move application broke a game invariant"
        );
        Ok(next)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
