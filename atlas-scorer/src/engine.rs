use atlas_core::{Guess, GuessScorer, LatLng, ResolvedLocation, ScoreOutcome, haversine_km};
use log::debug;

use crate::ScoringPolicy;

/// Scores guesses with exponential distance decay.
///
/// Typed country answers earn the full score on a case-insensitive exact
/// match and nothing otherwise. Pin guesses are scored on great-circle
/// distance under the configured [`ScoringPolicy`].
///
/// # Examples
///
/// ```
/// use atlas_core::{Guess, GuessScorer, LatLng, ResolutionSource, ResolvedLocation};
/// use atlas_scorer::ScoringEngine;
///
/// let paris = ResolvedLocation::new("France", LatLng::new(48.8566, 2.3522), ResolutionSource::Country);
/// let outcome = ScoringEngine::default().score(&paris, &Guess::at(51.5074, -0.1278));
/// assert_eq!(outcome.score, 918);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoringEngine {
    policy: ScoringPolicy,
}

impl ScoringEngine {
    /// Build an engine around `policy`.
    #[must_use]
    pub const fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    /// Policy in force.
    #[must_use]
    pub const fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Score a typed country answer.
    #[must_use]
    pub fn score_country(&self, actual: &ResolvedLocation, answer: &str) -> ScoreOutcome {
        let score = if answer.to_lowercase() == actual.country.to_lowercase() {
            self.policy.max_score
        } else {
            0
        };
        ScoreOutcome::exact(score)
    }

    /// Score a pin guess.
    #[must_use]
    pub fn score_coordinates(&self, actual: &ResolvedLocation, guess: LatLng) -> ScoreOutcome {
        let distance_km = haversine_km(actual.coordinates(), guess);
        ScoreOutcome::at_distance(self.distance_score(distance_km), distance_km)
    }

    /// Points awarded for a pin dropped `distance_km` from the answer.
    ///
    /// Distances at or beyond the policy's saturation distance all earn the
    /// same floor, `round(max_score * exp(-decay_rate))`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "exponential decay is computed in floating point"
    )]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "value is rounded and clamped to 0..=max_score before the cast"
    )]
    pub fn distance_score(&self, distance_km: f64) -> u32 {
        let ScoringPolicy {
            max_score,
            max_distance_km,
            decay_rate,
        } = self.policy;
        let normalised = if max_distance_km > 0.0 {
            distance_km.clamp(0.0, max_distance_km) / max_distance_km
        } else {
            1.0
        };
        let ceiling = f64::from(max_score);
        let raw = (ceiling * (-decay_rate * normalised).exp()).round();
        if !raw.is_finite() {
            return 0;
        }
        raw.clamp(0.0, ceiling) as u32
    }
}

impl GuessScorer for ScoringEngine {
    fn score(&self, actual: &ResolvedLocation, guess: &Guess) -> ScoreOutcome {
        let outcome = match guess {
            Guess::Country(answer) => self.score_country(actual, answer),
            Guess::Coordinates(at) => self.score_coordinates(actual, *at),
        };
        debug!(
            "scored guess against {} ({}): {} points",
            actual.country, actual.source, outcome.score
        );
        outcome
    }

    fn max_score(&self) -> u32 {
        self.policy.max_score
    }
}
