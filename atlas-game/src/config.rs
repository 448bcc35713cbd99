//! Game configuration.

use serde::{Deserialize, Serialize};

/// Length of a game and of each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Rounds per game.
    pub total_rounds: u32,
    /// Seconds on the clock at the start of each round.
    pub round_seconds: u32,
}

impl GameConfig {
    /// Rounds per game by default.
    pub const DEFAULT_TOTAL_ROUNDS: u32 = 5;
    /// Seconds per round by default.
    pub const DEFAULT_ROUND_SECONDS: u32 = 30;

    /// Replace the number of rounds.
    #[must_use]
    pub const fn with_total_rounds(mut self, total_rounds: u32) -> Self {
        self.total_rounds = total_rounds;
        self
    }

    /// Replace the per-round time limit.
    #[must_use]
    pub const fn with_round_seconds(mut self, round_seconds: u32) -> Self {
        self.round_seconds = round_seconds;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            total_rounds: Self::DEFAULT_TOTAL_ROUNDS,
            round_seconds: Self::DEFAULT_ROUND_SECONDS,
        }
    }
}
