//! Score aggregation across rounds.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::game::{GameStatus, Player};

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a winning triple.
    Win(Player),
    /// The board filled with no winner.
    Tie,
}

impl Outcome {
    /// Derives the outcome from a round status, or `None` while the
    /// round is still in progress.
    #[instrument]
    pub fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::Won(player) => Some(Outcome::Win(player)),
            GameStatus::Draw => Some(Outcome::Tie),
            GameStatus::InProgress => None,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            Outcome::Tie => None,
        }
    }

    /// Returns true if the round was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(player) => write!(f, "{} wins", player),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// Cumulative score counters for one player pairing.
///
/// Counters only grow while a session runs; they are zeroed solely by
/// an explicit reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Win counts indexed by player (player 1 first).
    wins: [u32; 2],
    /// Number of tied rounds.
    ties: u32,
}

impl Stats {
    /// Creates zeroed counters.
    #[instrument]
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// Returns the win count for the given player.
    pub fn wins(&self, player: Player) -> u32 {
        self.wins[player.index()]
    }

    /// Returns the number of tied rounds.
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Returns the total number of recorded rounds.
    pub fn total_rounds(&self) -> u32 {
        self.wins[0] + self.wins[1] + self.ties
    }
}

/// Folds a finished round's outcome into the counters, returning the
/// updated copy. Total: every outcome increments exactly one counter.
#[instrument]
pub fn record_outcome(stats: &Stats, outcome: Outcome) -> Stats {
    let mut next = stats.clone();
    match outcome {
        Outcome::Win(player) => next.wins[player.index()] += 1,
        Outcome::Tie => next.ties += 1,
    }
    next
}

/// Order-insensitive identifier for a pair of players.
///
/// Scopes persisted stats, so score history survives the two players
/// swapping sides between rounds. With a single fixed pairing this is
/// effectively a constant storage key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{}", _0)]
pub struct PairingKey(String);

impl PairingKey {
    /// Derives the key for a pair of display names.
    #[instrument]
    pub fn for_players(a: &str, b: &str) -> Self {
        let mut names = [a.trim().to_lowercase(), b.trim().to_lowercase()];
        names.sort();
        Self(format!("tictactoe::scores::{}::{}", names[0], names[1]))
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
