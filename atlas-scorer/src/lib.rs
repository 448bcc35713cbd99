//! Scoring for costume atlas guesses.
//!
//! [`ScoringEngine`] implements [`GuessScorer`](atlas_core::GuessScorer).
//! Typed country answers are all-or-nothing; pin guesses decay
//! exponentially with great-circle distance, saturating at the policy's
//! maximum distance so that a guess on the far side of the globe still
//! earns a small floor.
//!
//! The crate also carries the feedback helpers shown after each round:
//! [`ScoreBand`] and [`format_distance`].
//!
//! # Examples
//!
//! ```
//! use atlas_core::{Guess, LatLng, ResolutionSource, ResolvedLocation};
//! use atlas_scorer::{ScoreBand, score_guess};
//!
//! let japan = ResolvedLocation::new("Japan", LatLng::new(36.2048, 138.2529), ResolutionSource::Culture);
//! let outcome = score_guess(&japan, &Guess::country("japan"));
//! assert_eq!(outcome.score, 1000);
//! assert_eq!(ScoreBand::from_score(outcome.score), ScoreBand::Excellent);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use atlas_core::{Guess, GuessScorer, ResolvedLocation, ScoreOutcome};

mod band;
mod engine;
mod policy;

pub use band::{ScoreBand, format_distance};
pub use engine::ScoringEngine;
pub use policy::ScoringPolicy;

/// Score `guess` against `actual` with the default policy.
#[must_use]
pub fn score_guess(actual: &ResolvedLocation, guess: &Guess) -> ScoreOutcome {
    ScoringEngine::default().score(actual, guess)
}

#[cfg(test)]
mod tests;
