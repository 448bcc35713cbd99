//! Unit coverage for the scoring engine.

use atlas_core::{LatLng, ResolutionSource};
use rstest::{fixture, rstest};

use super::*;

const PARIS: LatLng = LatLng::new(48.8566, 2.3522);
const LONDON: LatLng = LatLng::new(51.5074, -0.1278);

#[fixture]
fn engine() -> ScoringEngine {
    ScoringEngine::default()
}

#[fixture]
fn japan() -> ResolvedLocation {
    ResolvedLocation::new(
        "Japan",
        LatLng::new(36.2048, 138.2529),
        ResolutionSource::Culture,
    )
}

#[rstest]
#[case("japan", 1000)]
#[case("JAPAN", 1000)]
#[case("Japan", 1000)]
#[case("China", 0)]
#[case("Japanese", 0)]
#[case("", 0)]
fn country_answers_are_all_or_nothing(
    engine: ScoringEngine,
    japan: ResolvedLocation,
    #[case] answer: &str,
    #[case] expected: u32,
) {
    let outcome = engine.score(&japan, &Guess::country(answer));

    assert_eq!(outcome.score, expected);
    assert_eq!(outcome.distance_km, None);
}

#[rstest]
fn exact_pin_scores_the_maximum(engine: ScoringEngine, japan: ResolvedLocation) {
    let outcome = engine.score(&japan, &Guess::Coordinates(japan.coordinates()));

    assert_eq!(outcome.score, 1000);
    assert_eq!(outcome.distance_km, Some(0.0));
}

#[rstest]
#[expect(
    clippy::float_arithmetic,
    reason = "distance is compared within a tolerance"
)]
fn paris_to_london(engine: ScoringEngine) {
    let actual = ResolvedLocation::new("France", PARIS, ResolutionSource::Country);
    let outcome = engine.score(&actual, &Guess::Coordinates(LONDON));

    let distance = outcome.distance_km.unwrap_or_default();
    assert!((distance - 343.556).abs() < 0.01, "distance was {distance}");
    assert_eq!(outcome.score, 918);
}

#[rstest]
fn antipodal_pin_scores_the_floor(engine: ScoringEngine) {
    let actual = ResolvedLocation::new("Null Island", LatLng::new(0.0, 0.0), ResolutionSource::Default);
    let outcome = engine.score(&actual, &Guess::at(0.0, 180.0));

    assert_eq!(outcome.score, 7);
}

#[rstest]
#[case(0.0, 1000)]
#[case(20_000.0, 7)]
#[case(25_000.0, 7)]
#[case(8022.0, 135)]
#[case(-5.0, 1000)]
#[case(f64::NAN, 0)]
fn distance_score_boundaries(engine: ScoringEngine, #[case] km: f64, #[case] expected: u32) {
    assert_eq!(engine.distance_score(km), expected);
}

#[rstest]
fn custom_policy_changes_the_curve() {
    let engine = ScoringEngine::new(
        ScoringPolicy::default()
            .with_max_score(5000)
            .with_decay_rate(10.0),
    );

    assert_eq!(engine.distance_score(0.0), 5000);
    assert_eq!(engine.distance_score(20_000.0), 0);
    assert_eq!(engine.max_score(), 5000);
}

#[rstest]
fn degenerate_saturation_distance_scores_the_floor() {
    let engine = ScoringEngine::new(ScoringPolicy::default().with_max_distance_km(0.0));

    assert_eq!(engine.distance_score(10.0), 7);
}

#[rstest]
fn free_function_uses_the_default_policy(japan: ResolvedLocation) {
    let guess = Guess::at(35.0, 139.0);

    assert_eq!(score_guess(&japan, &guess), engine().score(&japan, &guess));
}
