//! Facade crate for the costume atlas.
//!
//! This crate re-exports the location resolver, the scoring engine and,
//! behind the `game` feature, the round-based game loop.
//!
//! ```
//! use costume_atlas::{ArtifactRecord, Guess, resolve_location, score_guess};
//!
//! let record = ArtifactRecord::new(1).with_culture("Japanese");
//! let location = resolve_location(&record);
//! assert_eq!(score_guess(&location, &Guess::country("Japan")).score, 1000);
//! ```

#![forbid(unsafe_code)]

pub use atlas_core::{
    ArtifactRecord, Gazetteer, GazetteerError, Guess, GuessParseError, GuessScorer, LatLng,
    LocationResolver, ResolutionSource, ResolvedArtifact, ResolvedLocation, RoundResult,
    ScoreOutcome, haversine_km, resolve_location,
};
pub use atlas_scorer::{ScoreBand, ScoringEngine, ScoringPolicy, format_distance, score_guess};

#[cfg(feature = "game")]
pub use atlas_game::{GameConfig, GameError, GamePhase, GameSession, GameSummary, PlayerRank};
