//! Property-based tests for the scoring engine.
//!
//! # Invariants tested
//!
//! - **Bounds:** every score lies in `0..=1000`.
//! - **Monotonicity:** a farther pin never outscores a nearer one.
//! - **Floor:** every pin scores at least the saturated floor of 7.
//! - **Symmetry:** swapping the answer and the pin leaves the score unchanged.

use atlas_core::{Guess, GuessScorer, LatLng, ResolutionSource, ResolvedLocation};
use atlas_scorer::ScoringEngine;
use proptest::prelude::*;

const FLOOR: u32 = 7;

fn coordinates() -> impl Strategy<Value = LatLng> {
    (-90.0_f64..=90.0, -180.0_f64..=180.0).prop_map(|(lat, lng)| LatLng::new(lat, lng))
}

fn located(at: LatLng) -> ResolvedLocation {
    ResolvedLocation::new("Anywhere", at, ResolutionSource::Country)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: pin scores stay within the policy's range and above the floor.
    #[test]
    fn pin_scores_are_bounded(actual in coordinates(), pin in coordinates()) {
        let outcome = ScoringEngine::default().score(&located(actual), &Guess::Coordinates(pin));

        prop_assert!(outcome.score <= 1000);
        prop_assert!(outcome.score >= FLOOR);
        prop_assert!(outcome.distance_km.is_some_and(|km| km >= 0.0));
    }

    /// Property: the distance curve never increases.
    #[test]
    fn distance_score_is_monotonic(near in 0.0_f64..30_000.0, extra in 0.0_f64..30_000.0) {
        let engine = ScoringEngine::default();

        prop_assert!(engine.distance_score(near) >= engine.distance_score(near + extra));
    }

    /// Property: every distance past saturation scores the floor.
    #[test]
    fn saturated_distances_score_the_floor(km in 20_000.0_f64..1.0e6) {
        prop_assert_eq!(ScoringEngine::default().distance_score(km), FLOOR);
    }

    /// Property: scoring a pin is symmetric in its two endpoints.
    #[test]
    fn pin_scoring_is_symmetric(a in coordinates(), b in coordinates()) {
        let engine = ScoringEngine::default();
        let forward = engine.score(&located(a), &Guess::Coordinates(b)).score;
        let backward = engine.score(&located(b), &Guess::Coordinates(a)).score;

        prop_assert!(forward.abs_diff(backward) <= 1);
    }
}
