//! Core domain types for the costume atlas.
//!
//! The crate owns the pieces every other workspace member builds on:
//! - [`ArtifactRecord`], the sparse record supplied by the collection API;
//! - the embedded [`Gazetteer`] reference tables;
//! - the [`LocationResolver`], which turns a record into a
//!   [`ResolvedLocation`] through an ordered fallback chain;
//! - the [`GuessScorer`] seam implemented by the scoring engine.
//!
//! Resolution is total: a record with no usable metadata still resolves to
//! the collection's home location.
//!
//! # Examples
//!
//! ```
//! use atlas_core::{ArtifactRecord, resolve_location};
//!
//! let record = ArtifactRecord::new(1).with_culture("French, 18th century");
//! let location = resolve_location(&record);
//! assert_eq!(location.country, "France");
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod artifact;
pub mod gazetteer;
mod geodesy;
mod guess;
mod location;
pub mod resolver;
mod round;
mod scorer;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use artifact::ArtifactRecord;
pub use gazetteer::{Gazetteer, GazetteerData, GazetteerError};
pub use geodesy::{EARTH_RADIUS_KM, LatLng, haversine_km};
pub use guess::{Guess, GuessParseError};
pub use location::{ResolutionSource, ResolvedArtifact, ResolvedLocation};
pub use resolver::{LocationResolver, resolve_location};
pub use round::RoundResult;
pub use scorer::{GuessScorer, ScoreOutcome};
