use std::fmt;

use serde::{Deserialize, Serialize};

/// Stage of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// Waiting for artifacts.
    Loading,
    /// A round is open and the clock is running.
    Playing,
    /// The round's guess has been scored.
    Feedback,
    /// Every round has been played.
    GameOver,
}

impl GamePhase {
    /// Return the phase as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Playing => "playing",
            Self::Feedback => "feedback",
            Self::GameOver => "game_over",
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
