//! The tic-tac-toe rules core: domain types, the pure engine, and the
//! invariants every well-formed history satisfies.

mod action;
mod engine;
pub mod invariants;
mod rules;
mod types;

pub use action::{Move, MoveError};
pub use engine::{apply_move, current_player, open_squares, status};
pub use invariants::{GameInvariants, Invariant, InvariantSet, InvariantViolation};
pub use rules::{check_winner, is_board_full};
pub use types::{Game, GameStatus, Player, Square};
