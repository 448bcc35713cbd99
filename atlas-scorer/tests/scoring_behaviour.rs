//! Behavioural coverage for scoring typed answers and pin guesses.

use std::cell::RefCell;

use atlas_core::{Guess, GuessScorer, LatLng, ResolutionSource, ResolvedLocation, ScoreOutcome};
use atlas_scorer::{ScoreBand, ScoringEngine, format_distance};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Engine under test.
#[fixture]
pub fn engine() -> ScoringEngine {
    ScoringEngine::default()
}

/// Ground truth for the round.
#[fixture]
pub fn actual() -> RefCell<Option<ResolvedLocation>> {
    RefCell::new(None)
}

/// Captures the scored outcome for assertions.
#[fixture]
pub fn outcome() -> RefCell<Option<ScoreOutcome>> {
    RefCell::new(None)
}

fn set_actual(actual: &RefCell<Option<ResolvedLocation>>, country: &str, lat: f64, lng: f64) {
    actual.replace(Some(ResolvedLocation::new(
        country,
        LatLng::new(lat, lng),
        ResolutionSource::Country,
    )));
}

fn submit(
    engine: &ScoringEngine,
    actual: &RefCell<Option<ResolvedLocation>>,
    outcome: &RefCell<Option<ScoreOutcome>>,
    guess: &Guess,
) {
    let binding = actual.borrow();
    let Some(location) = binding.as_ref() else {
        panic!("the artifact location must be set first");
    };
    outcome.replace(Some(engine.score(location, guess)));
}

fn scored(outcome: &RefCell<Option<ScoreOutcome>>) -> ScoreOutcome {
    let Some(scored) = *outcome.borrow() else {
        panic!("a guess must be scored first");
    };
    scored
}

#[given("the artifact comes from Japan")]
fn from_japan(actual: &RefCell<Option<ResolvedLocation>>) {
    set_actual(actual, "Japan", 36.2048, 138.2529);
}

#[given("the artifact comes from Paris")]
fn from_paris(actual: &RefCell<Option<ResolvedLocation>>) {
    set_actual(actual, "France", 48.8566, 2.3522);
}

#[given("the artifact comes from the origin")]
fn from_origin(actual: &RefCell<Option<ResolvedLocation>>) {
    set_actual(actual, "Null Island", 0.0, 0.0);
}

#[when("the player answers {answer}")]
fn answers(
    answer: String,
    engine: &ScoringEngine,
    actual: &RefCell<Option<ResolvedLocation>>,
    outcome: &RefCell<Option<ScoreOutcome>>,
) {
    let guess = Guess::country(answer.trim_matches('"'));
    submit(engine, actual, outcome, &guess);
}

#[when("the player drops a pin on London")]
fn pin_on_london(
    engine: &ScoringEngine,
    actual: &RefCell<Option<ResolvedLocation>>,
    outcome: &RefCell<Option<ScoreOutcome>>,
) {
    submit(engine, actual, outcome, &Guess::at(51.5074, -0.1278));
}

#[when("the player drops a pin on the antimeridian")]
fn pin_on_antimeridian(
    engine: &ScoringEngine,
    actual: &RefCell<Option<ResolvedLocation>>,
    outcome: &RefCell<Option<ScoreOutcome>>,
) {
    submit(engine, actual, outcome, &Guess::at(0.0, 180.0));
}

#[then("the guess scores {points} points")]
fn scores(points: u32, outcome: &RefCell<Option<ScoreOutcome>>) {
    assert_eq!(scored(outcome).score, points);
}

#[then("no distance is reported")]
fn no_distance(outcome: &RefCell<Option<ScoreOutcome>>) {
    assert_eq!(scored(outcome).distance_km, None);
}

#[then("the distance reads {text}")]
fn distance_reads(text: String, outcome: &RefCell<Option<ScoreOutcome>>) {
    let Some(km) = scored(outcome).distance_km else {
        panic!("pin guesses report a distance");
    };
    assert_eq!(format_distance(km), text.trim_matches('"'));
}

#[then("the feedback band is {band}")]
fn band_is(band: String, outcome: &RefCell<Option<ScoreOutcome>>) {
    assert_eq!(ScoreBand::from_score(scored(outcome).score).as_str(), band);
}

#[scenario(path = "tests/features/scoring.feature", index = 0)]
fn typed_answer_ignores_case(
    engine: ScoringEngine,
    actual: RefCell<Option<ResolvedLocation>>,
    outcome: RefCell<Option<ScoreOutcome>>,
) {
    let _ = (engine, actual, outcome);
}

#[scenario(path = "tests/features/scoring.feature", index = 1)]
fn wrong_country_scores_nothing(
    engine: ScoringEngine,
    actual: RefCell<Option<ResolvedLocation>>,
    outcome: RefCell<Option<ScoreOutcome>>,
) {
    let _ = (engine, actual, outcome);
}

#[scenario(path = "tests/features/scoring.feature", index = 2)]
fn paris_to_london(
    engine: ScoringEngine,
    actual: RefCell<Option<ResolvedLocation>>,
    outcome: RefCell<Option<ScoreOutcome>>,
) {
    let _ = (engine, actual, outcome);
}

#[scenario(path = "tests/features/scoring.feature", index = 3)]
fn antipode_keeps_the_floor(
    engine: ScoringEngine,
    actual: RefCell<Option<ResolvedLocation>>,
    outcome: RefCell<Option<ScoreOutcome>>,
) {
    let _ = (engine, actual, outcome);
}
