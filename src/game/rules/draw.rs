//! Draw detection logic for tic-tac-toe.

use tracing::instrument;

use super::super::action::Move;
use super::super::types::Square;

/// Checks if the board is full (all 9 squares claimed).
///
/// A full board with no winner ends the round in a tie.
#[instrument]
pub fn is_board_full(moves: &[Move]) -> bool {
    moves.len() >= Square::COUNT
}

#[cfg(test)]
mod tests {
    use super::super::super::types::Player;
    use super::super::win::check_winner;
    use super::*;

    fn mv(player: Player, id: u8) -> Move {
        Move::new(player, Square::from_id(id).unwrap())
    }

    fn is_tie(moves: &[Move]) -> bool {
        is_board_full(moves) && check_winner(moves).is_none()
    }

    #[test]
    fn test_empty_history_not_full() {
        assert!(!is_board_full(&[]));
    }

    #[test]
    fn test_partial_history_not_full() {
        let moves = vec![mv(Player::One, 5)];
        assert!(!is_board_full(&moves));
    }

    #[test]
    fn test_tie_detection() {
        // Fill order 1,2,3,5,4,6,8,7,9: board ends
        //   1 2 1
        //   1 2 2
        //   2 1 1
        // with no triple owned by either player.
        let moves: Vec<Move> = [1u8, 2, 3, 5, 4, 6, 8, 7, 9]
            .iter()
            .enumerate()
            .map(|(i, &id)| {
                let player = if i % 2 == 0 { Player::One } else { Player::Two };
                mv(player, id)
            })
            .collect();

        assert!(is_board_full(&moves));
        assert!(is_tie(&moves));
    }

    #[test]
    fn test_not_tie_if_winner() {
        let moves = vec![
            mv(Player::One, 1),
            mv(Player::Two, 4),
            mv(Player::One, 2),
            mv(Player::Two, 5),
            mv(Player::One, 3),
        ];
        assert!(!is_tie(&moves));
    }
}
