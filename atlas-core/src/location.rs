//! Resolved ground-truth locations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ArtifactRecord, LatLng};

/// Fallback step that produced a [`ResolvedLocation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    /// The record's explicit country matched the country table.
    Country,
    /// The culture descriptor mapped to a country.
    Culture,
    /// Free-text inference over the date and medium.
    Description,
    /// Free-text inference over the title.
    Title,
    /// Nothing matched; the collection's home location was used.
    Default,
}

impl ResolutionSource {
    /// Return the source as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Country => "country",
            Self::Culture => "culture",
            Self::Description => "description",
            Self::Title => "title",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The country and coordinates taken as ground truth for an artifact.
///
/// `country` is always non-empty and always paired with the coordinates of
/// the same lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    /// Canonical country name.
    pub country: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Step of the fallback chain that produced this location.
    pub source: ResolutionSource,
}

impl ResolvedLocation {
    /// Construct a resolved location.
    #[must_use]
    pub fn new(country: impl Into<String>, at: LatLng, source: ResolutionSource) -> Self {
        Self {
            country: country.into(),
            lat: at.lat,
            lng: at.lng,
            source,
        }
    }

    /// Coordinates as a [`LatLng`].
    #[must_use]
    pub const fn coordinates(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

/// An artifact paired with its resolved location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedArtifact {
    /// The record as supplied.
    pub record: ArtifactRecord,
    /// Ground truth for scoring.
    pub location: ResolvedLocation,
}
