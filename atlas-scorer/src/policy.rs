//! Tunable constants for distance-based scoring.

use serde::{Deserialize, Serialize};

/// Constants that shape the exponential distance decay.
///
/// A pin guess at distance `d` scores
/// `round(max_score * exp(-decay_rate * min(d, max_distance_km) / max_distance_km))`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    /// Points for a perfect answer.
    pub max_score: u32,
    /// Distance beyond which every guess scores the same floor.
    pub max_distance_km: f64,
    /// Exponent applied to the normalised distance.
    pub decay_rate: f64,
}

impl ScoringPolicy {
    /// Points for a perfect answer under the default policy.
    pub const DEFAULT_MAX_SCORE: u32 = 1000;
    /// Saturation distance under the default policy.
    pub const DEFAULT_MAX_DISTANCE_KM: f64 = 20_000.0;
    /// Decay exponent under the default policy.
    pub const DEFAULT_DECAY_RATE: f64 = 5.0;

    /// Replace the maximum score.
    #[must_use]
    pub const fn with_max_score(mut self, max_score: u32) -> Self {
        self.max_score = max_score;
        self
    }

    /// Replace the saturation distance.
    #[must_use]
    pub const fn with_max_distance_km(mut self, max_distance_km: f64) -> Self {
        self.max_distance_km = max_distance_km;
        self
    }

    /// Replace the decay exponent.
    #[must_use]
    pub const fn with_decay_rate(mut self, decay_rate: f64) -> Self {
        self.decay_rate = decay_rate;
        self
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            max_score: Self::DEFAULT_MAX_SCORE,
            max_distance_km: Self::DEFAULT_MAX_DISTANCE_KM,
            decay_rate: Self::DEFAULT_DECAY_RATE,
        }
    }
}
