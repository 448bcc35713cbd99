//! Errors raised while loading reference tables.

use thiserror::Error;

/// Errors returned by [`Gazetteer::from_data`](crate::Gazetteer::from_data)
/// and the JSON loaders.
#[derive(Debug, Error)]
pub enum GazetteerError {
    /// The JSON asset could not be decoded.
    #[error("failed to parse gazetteer JSON")]
    ParseJson {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The country table is empty.
    #[error("gazetteer must contain at least one country")]
    NoCountries,
    /// A table entry has a blank name.
    #[error("{table} table contains an entry with a blank name")]
    BlankName {
        /// Table holding the entry.
        table: &'static str,
    },
    /// A country's coordinates are outside valid degree ranges.
    #[error("country {country} has coordinates outside valid ranges ({lat}, {lng})")]
    InvalidCoordinates {
        /// Offending country.
        country: String,
        /// Latitude read from the asset.
        lat: f64,
        /// Longitude read from the asset.
        lng: f64,
    },
    /// A culture or historical entry points at a country with no coordinates.
    #[error("{table} entry {entry} maps to unknown country {country}")]
    UnknownCountry {
        /// Table holding the entry.
        table: &'static str,
        /// The adjective or historical name.
        entry: String,
        /// Country it maps to.
        country: String,
    },
}
