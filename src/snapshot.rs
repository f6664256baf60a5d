//! The persisted snapshot: one round in progress plus cumulative
//! stats, serialized as a single JSON value.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::game::{Game, GameInvariants, InvariantSet};
use crate::stats::Stats;

/// The unit of persistence and cross-context propagation.
///
/// Read at startup (defaulting when absent or corrupt) and rewritten
/// after every accepted move, reset, or new-round action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Snapshot {
    /// The round in progress (possibly finished, awaiting a new round).
    game: Game,
    /// Cumulative score counters.
    stats: Stats,
}

impl Snapshot {
    /// Creates a snapshot from its parts.
    #[instrument]
    pub fn new(game: Game, stats: Stats) -> Self {
        Self { game, stats }
    }

    /// Serializes the snapshot to its JSON payload.
    ///
    /// # Errors
    ///
    /// Returns the underlying serializer error; with these types that
    /// only happens under resource exhaustion.
    #[instrument(skip(self))]
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parses and validates a stored JSON payload.
    ///
    /// Decoding enforces the structural rules JSON alone cannot: ids
    /// must be on the board, squares unique, turns alternating, the
    /// history bounded. A payload that parses but violates them is
    /// reported as corrupt rather than admitted into the engine.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] on malformed JSON or an invalid
    /// history.
    #[instrument(skip(payload))]
    pub fn decode(payload: &str) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot =
            serde_json::from_str(payload).map_err(|e| SnapshotError::Parse(e.to_string()))?;

        GameInvariants::check_all(&snapshot.game).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            SnapshotError::Integrity(descriptions)
        })?;

        Ok(snapshot)
    }
}

/// Error raised when a stored payload cannot be admitted.
///
/// Callers recover locally by substituting the default snapshot; this
/// error never reaches a user.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SnapshotError {
    /// The payload is not valid JSON for the snapshot shape.
    #[display("Snapshot payload failed to parse: {}", _0)]
    Parse(String),

    /// The payload parsed but its history violates a game invariant.
    #[display("Snapshot game history is invalid: {}", _0)]
    Integrity(String),
}

impl std::error::Error for SnapshotError {}
