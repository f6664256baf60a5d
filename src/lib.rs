//! Tic-tac-toe rules engine with round sessions and persisted score
//! tracking.
//!
//! # Architecture
//!
//! - **Game**: pure rules core: turn derivation, move validation,
//!   win/tie detection, all derived from the ordered move history
//! - **Stats**: cumulative win/tie counters folded from round outcomes,
//!   scoped by a player-pairing key
//! - **Snapshot**: the persisted `{ game, stats }` unit with structural
//!   validation and corrupt-input recovery
//! - **Store**: persistence port with in-memory (change-notifying) and
//!   file-backed implementations
//! - **Session**: controller owning the snapshot, routing move,
//!   new-round, and reset intents
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{MemoryStore, Session, SessionConfig};
//!
//! let mut session = Session::open(MemoryStore::new(), SessionConfig::default());
//! session.handle_move(5)?;
//! assert_eq!(session.snapshot().game().moves().len(), 1);
//! # Ok::<(), tictactoe_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game;
mod session;
mod snapshot;
mod stats;
mod store;

// Crate-level exports - Rules core
pub use game::{
    apply_move, check_winner, current_player, invariants, is_board_full, open_squares, status,
    Game, GameInvariants, GameStatus, Invariant, InvariantSet, InvariantViolation, Move,
    MoveError, Player, Square,
};

// Crate-level exports - Score aggregation
pub use stats::{record_outcome, Outcome, PairingKey, Stats};

// Crate-level exports - Snapshot contract
pub use snapshot::{Snapshot, SnapshotError};

// Crate-level exports - Persistence port
pub use store::{FileStore, MemoryStore, SnapshotStore, StoreError};

// Crate-level exports - Session control
pub use session::{Session, SessionConfig, SessionPhase, StartPolicy};
