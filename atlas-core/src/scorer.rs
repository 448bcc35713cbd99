//! Score a player's guess against a resolved location.
//!
//! The `GuessScorer` trait is the seam between the game loop and the
//! scoring engine.

use serde::{Deserialize, Serialize};

use crate::{Guess, ResolvedLocation};

/// Points and distance produced for a single guess.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreOutcome {
    /// Points awarded.
    pub score: u32,
    /// Great-circle distance in kilometres, present only for pin guesses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl ScoreOutcome {
    /// Outcome for a typed country answer.
    #[must_use]
    pub const fn exact(score: u32) -> Self {
        Self {
            score,
            distance_km: None,
        }
    }

    /// Outcome for a pin guess.
    #[must_use]
    pub const fn at_distance(score: u32, distance_km: f64) -> Self {
        Self {
            score,
            distance_km: Some(distance_km),
        }
    }
}

/// Calculate the score for a guess.
///
/// Implementations must be thread-safe (`Send` + `Sync`) and total: the
/// method never fails. Coordinate ranges are a caller precondition.
///
/// # Examples
///
/// ```rust
/// use atlas_core::{Guess, GuessScorer, LatLng, ResolutionSource, ResolvedLocation, ScoreOutcome};
///
/// struct Flat;
///
/// impl GuessScorer for Flat {
///     fn score(&self, _actual: &ResolvedLocation, _guess: &Guess) -> ScoreOutcome {
///         ScoreOutcome::exact(1)
///     }
///
///     fn max_score(&self) -> u32 {
///         1
///     }
/// }
///
/// let actual = ResolvedLocation::new("Peru", LatLng::new(-9.19, -75.0), ResolutionSource::Country);
/// assert_eq!(Flat.score(&actual, &Guess::country("Chile")).score, 1);
/// ```
pub trait GuessScorer: Send + Sync {
    /// Score `guess` against the ground truth `actual`.
    fn score(&self, actual: &ResolvedLocation, guess: &Guess) -> ScoreOutcome;

    /// Highest score a single round can award.
    fn max_score(&self) -> u32;
}
