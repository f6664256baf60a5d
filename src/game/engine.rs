//! The rules engine: pure functions over an ordered move history.
//!
//! Turn and winner are always re-derived from the history rather than
//! tracked as separate mutable state, so identical histories can never
//! disagree about whose turn it is or who won.

use tracing::instrument;

use super::action::{Move, MoveError};
use super::rules;
use super::types::{GameStatus, Player, Square};

/// Derives the player whose turn it is.
///
/// `first` if the history is empty, otherwise the opponent of the
/// last mover.
#[instrument]
pub fn current_player(moves: &[Move], first: Player) -> Player {
    match moves.last() {
        None => first,
        Some(last) => last.player().opponent(),
    }
}

/// Derives the round status from the move history.
#[instrument]
pub fn status(moves: &[Move]) -> GameStatus {
    if let Some(winner) = rules::check_winner(moves) {
        return GameStatus::Won(winner);
    }
    if rules::is_board_full(moves) {
        return GameStatus::Draw;
    }
    GameStatus::InProgress
}

/// Validates and applies a move, returning a new history with the
/// move appended. The input history is never mutated, so a rejected
/// move cannot corrupt it.
///
/// # Errors
///
/// - [`MoveError::RoundOver`] if the round already has a winner or a
///   full board.
/// - [`MoveError::InvalidSquare`] if `square_id` is not in 1..9.
/// - [`MoveError::SquareOccupied`] if an earlier move claimed the square.
/// - [`MoveError::OutOfTurn`] if `acting` is not the derived current
///   player.
#[instrument]
pub fn apply_move(
    moves: &[Move],
    first: Player,
    square_id: u8,
    acting: Player,
) -> Result<Vec<Move>, MoveError> {
    if status(moves).is_complete() {
        return Err(MoveError::RoundOver);
    }

    let square = Square::from_id(square_id).ok_or(MoveError::InvalidSquare(square_id))?;

    if moves.iter().any(|m| m.square() == square) {
        return Err(MoveError::SquareOccupied(square));
    }

    let expected = current_player(moves, first);
    if acting != expected {
        return Err(MoveError::OutOfTurn(acting));
    }

    let mut next = moves.to_vec();
    next.push(Move::new(acting, square));
    Ok(next)
}

/// Returns the squares no move has claimed yet, in board order.
#[instrument]
pub fn open_squares(moves: &[Move]) -> Vec<Square> {
    <Square as strum::IntoEnumIterator>::iter()
        .filter(|square| moves.iter().all(|m| m.square() != *square))
        .collect()
}
