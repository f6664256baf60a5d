//! Session controller: owns the snapshot and routes user intents
//! through the engine and the stats aggregator.
//!
//! The controller replaces ambient front-end state with one explicit
//! value: every intent reads the snapshot, derives the next one with
//! pure functions, persists it, and hands it back for rendering.

use derive_getters::Getters;
use derive_new::new;
use tracing::{debug, info, instrument, warn};

use crate::game::{Game, GameStatus, MoveError, Player};
use crate::snapshot::Snapshot;
use crate::stats::{record_outcome, Outcome, PairingKey};
use crate::store::SnapshotStore;

/// Who starts each new round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartPolicy {
    /// Player 1 starts every round.
    #[default]
    FixedFirstPlayer,
    /// The starter flips each round, so openings stay fair.
    Alternate,
}

/// Static session configuration: the two display names and the
/// starting-player policy. Fixed for the life of the session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct SessionConfig {
    /// Display name for player 1.
    player_one: String,
    /// Display name for player 2.
    player_two: String,
    /// Starting-player policy for new rounds.
    start_policy: StartPolicy,
}

impl SessionConfig {
    /// Returns the display name for the given player.
    pub fn display_name(&self, player: Player) -> &str {
        match player {
            Player::One => &self.player_one,
            Player::Two => &self.player_two,
        }
    }

    /// Derives the pairing key scoping this session's stats.
    #[instrument(skip(self))]
    pub fn pairing_key(&self) -> PairingKey {
        PairingKey::for_players(&self.player_one, &self.player_two)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(
            "Player 1".to_string(),
            "Player 2".to_string(),
            StartPolicy::default(),
        )
    }
}

/// Where the session stands within the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// The round accepts moves.
    AwaitingMove,
    /// The round is finished; awaiting a new round or a reset.
    Complete,
}

/// A running game session bound to one store key.
///
/// The session itself has no terminal state; it runs until its host
/// tears it down.
#[derive(Debug)]
pub struct Session<S: SnapshotStore> {
    store: S,
    key: String,
    config: SessionConfig,
    snapshot: Snapshot,
}

impl<S: SnapshotStore> Session<S> {
    /// Opens a session, loading any snapshot persisted under the
    /// pairing's key.
    #[instrument(skip(store, config))]
    pub fn open(store: S, config: SessionConfig) -> Self {
        let key = config.pairing_key().as_str().to_string();
        info!(%key, "Opening game session");
        let snapshot = store.load(&key);
        Self {
            store,
            key,
            config,
            snapshot,
        }
    }

    /// Returns the current snapshot for rendering.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the store key this session persists under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.snapshot.game().current_player()
    }

    /// Returns the display name of the given player.
    pub fn player_name(&self, player: Player) -> &str {
        self.config.display_name(player)
    }

    /// Where the session stands within the current round.
    pub fn phase(&self) -> SessionPhase {
        if self.snapshot.game().status().is_complete() {
            SessionPhase::Complete
        } else {
            SessionPhase::AwaitingMove
        }
    }

    /// Handles a move attempt on the given square by the current
    /// player.
    ///
    /// When the move finishes the round, the outcome is folded into
    /// the stats in the same step, so the persisted snapshot always
    /// couples the finished game with the updated counters.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] when the engine rejects the move; the
    /// session state is unchanged in that case.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn handle_move(&mut self, square_id: u8) -> Result<GameStatus, MoveError> {
        let acting = self.current_player();
        let game = self
            .snapshot
            .game()
            .with_move(square_id, acting)
            .map_err(|error| {
                warn!(square_id, %acting, %error, "Move rejected");
                error
            })?;

        let status = game.status();
        let stats = match Outcome::from_status(status) {
            Some(outcome) => {
                info!(%outcome, "Round complete");
                record_outcome(self.snapshot.stats(), outcome)
            }
            None => {
                debug!(square_id, next = %game.current_player(), "Move accepted");
                self.snapshot.stats().clone()
            }
        };

        self.snapshot = Snapshot::new(game, stats);
        self.persist();
        Ok(status)
    }

    /// Starts a new round: clears the moves, keeps the stats, and
    /// picks the starter per the configured policy.
    ///
    /// An unfinished round is discarded without recording an outcome.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn new_round(&mut self) {
        let next_first = match self.config.start_policy() {
            StartPolicy::FixedFirstPlayer => Player::One,
            StartPolicy::Alternate => self.snapshot.game().first_player().opponent(),
        };
        info!(starter = %next_first, "Starting new round");

        let stats = self.snapshot.stats().clone();
        self.snapshot = Snapshot::new(Game::starting_with(next_first), stats);
        self.persist();
    }

    /// Resets the session: clears the moves AND zeroes the stats.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn reset(&mut self) {
        info!("Resetting round and scores");
        self.snapshot = Snapshot::default();
        self.persist();
    }

    /// Re-loads the snapshot from the store.
    ///
    /// Hosts call this when the store signals an external change; the
    /// signal carries no payload, so the authoritative state is
    /// whatever the store now holds.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn refresh(&mut self) {
        debug!("Refreshing snapshot from store");
        self.snapshot = self.store.load(&self.key);
    }

    /// Persists the snapshot. Failures are logged and swallowed; the
    /// in-memory session stays authoritative for this context.
    fn persist(&self) {
        if let Err(error) = self.store.save(&self.key, &self.snapshot) {
            warn!(key = %self.key, %error, "Failed to persist snapshot");
        }
    }
}
