//! Game setup: the network plus the reveal schedule.
//!
//! Immutable for the life of a game. The network sits behind an `Arc` so
//! every derived state shares the same read-only graph; cloning a setup
//! into a successor state is two pointer copies and a `Vec` clone of the
//! schedule.

use std::sync::Arc;

use crate::network::Network;

/// Rounds of the original board game on which the fugitive's destination
/// is revealed (1-based): 3, 8, 13, 18 and 24 of 24.
const STANDARD_REVEAL_ROUNDS: [usize; 5] = [3, 8, 13, 18, 24];
const STANDARD_ROUNDS: usize = 24;

/// The fixed configuration of one game.
#[derive(Clone, Debug)]
pub struct GameSetup {
    network: Arc<Network>,
    schedule: Vec<bool>,
}

impl GameSetup {
    /// Create a setup from a network and a per-round reveal schedule.
    ///
    /// `schedule[i]` says whether the fugitive's destination on leg `i`
    /// (0-based) is revealed in the travel log. Validity (non-empty
    /// schedule, non-empty network) is checked when a game is built from
    /// this setup.
    #[must_use]
    pub fn new(network: Arc<Network>, schedule: Vec<bool>) -> Self {
        Self { network, schedule }
    }

    /// The original board game's setup: 24 rounds, destinations revealed
    /// on rounds 3, 8, 13, 18 and 24.
    #[must_use]
    pub fn standard(network: Arc<Network>) -> Self {
        let schedule = (1..=STANDARD_ROUNDS)
            .map(|round| STANDARD_REVEAL_ROUNDS.contains(&round))
            .collect();
        Self::new(network, schedule)
    }

    /// The shared transport network.
    #[must_use]
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// The reveal schedule, one boolean per round.
    #[must_use]
    pub fn schedule(&self) -> &[bool] {
        &self.schedule
    }

    /// Total number of rounds in the game.
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.schedule.len()
    }

    /// Whether the leg at 0-based log index `leg` is revealed.
    /// Out-of-schedule indices are never revealed.
    #[must_use]
    pub fn reveals(&self, leg: usize) -> bool {
        self.schedule.get(leg).copied().unwrap_or(false)
    }
}
