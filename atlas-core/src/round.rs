use serde::{Deserialize, Serialize};

use crate::{Guess, ResolvedArtifact, ScoreOutcome};

/// The outcome of one round.
///
/// Created once when the guess is submitted and appended to the round
/// history; never changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Artifact shown during the round.
    pub artifact: ResolvedArtifact,
    /// The player's answer.
    pub guess: Guess,
    /// Points awarded.
    pub score: u32,
    /// Great-circle distance for pin guesses; absent for typed answers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl RoundResult {
    /// Record a scored guess against an artifact.
    #[must_use]
    pub const fn new(artifact: ResolvedArtifact, guess: Guess, outcome: ScoreOutcome) -> Self {
        Self {
            artifact,
            guess,
            score: outcome.score,
            distance_km: outcome.distance_km,
        }
    }
}
