//! Resolve an artifact's country and coordinates from sparse metadata.
//!
//! Resolution walks an ordered fallback chain and stops at the first step
//! that yields a country with known coordinates:
//!
//! 1. the explicit `country` field, looked up case-insensitively;
//! 2. the `culture` descriptor, mapped through the culture adjective table;
//! 3. free-text inference over the date and medium, when both are present;
//! 4. free-text inference over the title;
//! 5. the collection's home location.
//!
//! A step that fails is treated as absent and the chain moves on; the
//! country and coordinates returned always come from the same step.

use log::debug;

use crate::{
    ArtifactRecord, Gazetteer, LatLng, ResolutionSource, ResolvedArtifact, ResolvedLocation,
    gazetteer::CountryEntry,
};

mod culture;
mod inference;

pub use culture::country_for_culture;
pub use inference::infer_country;

/// Country reported when no metadata resolves.
pub const DEFAULT_COUNTRY: &str = "United States";

/// The collection's home coordinates on Fifth Avenue, New York.
pub const HOME_COORDINATES: LatLng = LatLng::new(40.7794, -73.9632);

/// Resolves artifact records against a [`Gazetteer`].
///
/// The resolver borrows its tables and holds no other state, so a single
/// instance can be shared across threads.
///
/// # Examples
///
/// ```
/// use atlas_core::{ArtifactRecord, LocationResolver, ResolutionSource};
///
/// let resolver = LocationResolver::embedded();
/// let record = ArtifactRecord::new(7)
///     .with_country("Ruritania")
///     .with_culture("French");
/// let location = resolver.resolve(&record);
/// assert_eq!(location.country, "France");
/// assert_eq!(location.source, ResolutionSource::Culture);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LocationResolver<'g> {
    gazetteer: &'g Gazetteer,
}

impl LocationResolver<'static> {
    /// Resolver backed by the embedded tables.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(Gazetteer::embedded())
    }
}

impl Default for LocationResolver<'static> {
    fn default() -> Self {
        Self::embedded()
    }
}

impl<'g> LocationResolver<'g> {
    /// Resolver backed by `gazetteer`.
    #[must_use]
    pub const fn new(gazetteer: &'g Gazetteer) -> Self {
        Self { gazetteer }
    }

    /// The tables this resolver consults.
    #[must_use]
    pub const fn gazetteer(&self) -> &'g Gazetteer {
        self.gazetteer
    }

    /// Resolve a record to a country and coordinates.
    ///
    /// Never fails: a record with nothing usable resolves to
    /// [`DEFAULT_COUNTRY`] at [`HOME_COORDINATES`].
    #[must_use]
    pub fn resolve(&self, record: &ArtifactRecord) -> ResolvedLocation {
        self.from_country(record)
            .or_else(|| self.from_culture(record))
            .or_else(|| self.from_description(record))
            .or_else(|| self.from_title(record))
            .unwrap_or_else(|| {
                debug!(
                    "artifact {} has no resolvable location; using the home location",
                    record.id
                );
                ResolvedLocation::new(DEFAULT_COUNTRY, HOME_COORDINATES, ResolutionSource::Default)
            })
    }

    /// Resolve a record and keep it alongside its location.
    #[must_use]
    pub fn resolve_artifact(&self, record: ArtifactRecord) -> ResolvedArtifact {
        let location = self.resolve(&record);
        ResolvedArtifact { record, location }
    }

    fn from_country(&self, record: &ArtifactRecord) -> Option<ResolvedLocation> {
        let raw = record.country()?;
        let Some(entry) = self.gazetteer.country(raw) else {
            debug!("artifact {}: country {raw:?} is not in the table", record.id);
            return None;
        };
        Some(located(entry, ResolutionSource::Country))
    }

    fn from_culture(&self, record: &ArtifactRecord) -> Option<ResolvedLocation> {
        let culture = record.culture()?;
        let country = country_for_culture(self.gazetteer, culture)?;
        let Some(entry) = self.gazetteer.country(country) else {
            debug!(
                "artifact {}: culture {culture:?} maps to {country:?}, which has no coordinates",
                record.id
            );
            return None;
        };
        Some(located(entry, ResolutionSource::Culture))
    }

    fn from_description(&self, record: &ArtifactRecord) -> Option<ResolvedLocation> {
        let description = record.description()?;
        let entry = infer_country(self.gazetteer, &description)?;
        Some(located(entry, ResolutionSource::Description))
    }

    fn from_title(&self, record: &ArtifactRecord) -> Option<ResolvedLocation> {
        let title = record.title()?;
        let entry = infer_country(self.gazetteer, title)?;
        Some(located(entry, ResolutionSource::Title))
    }
}

fn located(entry: &CountryEntry, source: ResolutionSource) -> ResolvedLocation {
    ResolvedLocation::new(entry.name.clone(), entry.coordinates(), source)
}

/// Resolve a record against the embedded tables.
///
/// Shorthand for `LocationResolver::embedded().resolve(record)`.
#[must_use]
pub fn resolve_location(record: &ArtifactRecord) -> ResolvedLocation {
    LocationResolver::embedded().resolve(record)
}
