//! Behavioural coverage for the game loop.

use std::cell::RefCell;

use atlas_core::Guess;
use atlas_core::test_support::playable_records;
use atlas_game::{GameConfig, GameError, GamePhase, GameSession, TIMEOUT_GUESS, TickOutcome};
use atlas_scorer::ScoringEngine;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

type Session = GameSession<'static, ScoringEngine>;

const ANSWERS: [&str; 5] = ["France", "Japan", "Italy", "Peru", "Egypt"];

/// Session under test.
#[fixture]
pub fn session() -> RefCell<Session> {
    RefCell::new(GameSession::standard(GameConfig::default()))
}

/// Captures a failed load for assertions.
#[fixture]
pub fn load_error() -> RefCell<Option<GameError>> {
    RefCell::new(None)
}

#[given("a game loaded with five playable artifacts")]
fn loaded_game(session: &RefCell<Session>) {
    if let Err(err) = session.borrow_mut().load(playable_records(5)) {
        panic!("load playable records: {err}");
    }
}

#[given("a game offered three playable artifacts")]
fn short_game(session: &RefCell<Session>, load_error: &RefCell<Option<GameError>>) {
    let outcome = session.borrow_mut().load(playable_records(3));
    load_error.replace(outcome.err());
}

#[when("the player guesses {answer}")]
fn guesses(answer: String, session: &RefCell<Session>) {
    let guess = Guess::country(answer.trim_matches('"'));
    if let Err(err) = session.borrow_mut().make_guess(guess) {
        panic!("guess while playing: {err}");
    }
}

#[when("the clock runs out")]
fn clock_runs_out(session: &RefCell<Session>) {
    let mut current = session.borrow_mut();
    loop {
        match current.tick() {
            Ok(TickOutcome::Running { .. }) => {}
            Ok(TickOutcome::TimedOut(_)) => break,
            Err(err) => panic!("tick while playing: {err}"),
        }
    }
}

#[when("the player plays every round with country answers")]
fn plays_every_round(session: &RefCell<Session>) {
    let mut current = session.borrow_mut();
    for answer in ANSWERS {
        if let Err(err) = current.make_guess(Guess::country(answer)) {
            panic!("guess {answer}: {err}");
        }
        if let Err(err) = current.next_round() {
            panic!("advance after {answer}: {err}");
        }
    }
}

#[then("the game is in the {phase} phase")]
fn phase_is(phase: String, session: &RefCell<Session>) {
    assert_eq!(session.borrow().phase().as_str(), phase);
}

#[then("the total score is {points}")]
fn total_is(points: u32, session: &RefCell<Session>) {
    assert_eq!(session.borrow().total_score(), points);
}

#[then("the last round records a guess at the origin")]
fn timeout_recorded(session: &RefCell<Session>) {
    let current = session.borrow();
    let Some(last) = current.history().last() else {
        panic!("a round was recorded");
    };
    assert_eq!(last.guess, TIMEOUT_GUESS);
    assert!(last.distance_km.is_some());
}

#[then("the summary reports {rounds} rounds played")]
fn rounds_played(rounds: usize, session: &RefCell<Session>) {
    let summary = session.borrow().summary();
    assert_eq!(summary.rounds_played, rounds);
    assert_eq!(summary.total_score, 5000);
}

#[then("loading fails for lack of artifacts")]
fn load_failed(load_error: &RefCell<Option<GameError>>) {
    assert_eq!(
        *load_error.borrow(),
        Some(GameError::NotEnoughArtifacts {
            needed: 5,
            available: 3
        })
    );
}

#[scenario(path = "tests/features/game.feature", index = 0)]
fn guessing_closes_the_round(session: RefCell<Session>, load_error: RefCell<Option<GameError>>) {
    let _ = (session, load_error);
}

#[scenario(path = "tests/features/game.feature", index = 1)]
fn timeout_submits_a_guess(session: RefCell<Session>, load_error: RefCell<Option<GameError>>) {
    let _ = (session, load_error);
}

#[scenario(path = "tests/features/game.feature", index = 2)]
fn finishing_ends_the_game(session: RefCell<Session>, load_error: RefCell<Option<GameError>>) {
    let _ = (session, load_error);
}

#[scenario(path = "tests/features/game.feature", index = 3)]
fn too_few_artifacts(session: RefCell<Session>, load_error: RefCell<Option<GameError>>) {
    let _ = (session, load_error);
}
