//! Reference tables linking names to countries and countries to coordinates.
//!
//! Three read-only tables make up the gazetteer:
//! - country name → representative coordinates;
//! - culture adjective → country (`"Flemish"` → Belgium);
//! - historical or modern place name → country (`"Ottoman Empire"` → Turkey).
//!
//! The tables ship embedded in the crate and are indexed once per process
//! by [`Gazetteer::embedded`]. A replacement set with the same shape can be
//! loaded from JSON, and [`Gazetteer::data`] exposes the tables for export.
//!
//! Country lookups trim the query and ignore ASCII and Unicode case, but not
//! diacritics: `"sao tome"` does not match `"São Tomé"`.

use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::LatLng;

mod error;
mod tables;

pub use error::GazetteerError;

/// Version tag of the embedded tables.
pub const GAZETTEER_VERSION: &str = "2024.1";

/// A country with representative coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryEntry {
    /// Canonical country name.
    pub name: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl CountryEntry {
    /// Coordinates as a [`LatLng`].
    #[must_use]
    pub const fn coordinates(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

/// A culture adjective and the country it denotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CultureEntry {
    /// Adjective as it appears at the start of a culture string.
    pub adjective: String,
    /// Country name in the country table.
    pub country: String,
}

/// A place name and the modern country it lies in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalEntry {
    /// Historical or modern place name.
    pub name: String,
    /// Country name in the country table.
    pub country: String,
}

/// Serialisable form of the reference tables.
///
/// Entry order is significant: culture adjectives and historical names are
/// tried in the order listed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GazetteerData {
    /// Version tag of the tables.
    pub version: String,
    /// Country coordinate table.
    pub countries: Vec<CountryEntry>,
    /// Culture adjective table.
    pub cultures: Vec<CultureEntry>,
    /// Historical name table.
    pub historical_names: Vec<HistoricalEntry>,
}

impl GazetteerData {
    /// Tables compiled into the crate.
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            version: GAZETTEER_VERSION.to_owned(),
            countries: tables::COUNTRIES
                .iter()
                .map(|&(name, lat, lng)| CountryEntry {
                    name: name.to_owned(),
                    lat,
                    lng,
                })
                .collect(),
            cultures: tables::CULTURES
                .iter()
                .map(|&(adjective, country)| CultureEntry {
                    adjective: adjective.to_owned(),
                    country: country.to_owned(),
                })
                .collect(),
            historical_names: tables::HISTORICAL_NAMES
                .iter()
                .map(|&(name, country)| HistoricalEntry {
                    name: name.to_owned(),
                    country: country.to_owned(),
                })
                .collect(),
        }
    }
}

static EMBEDDED: LazyLock<Gazetteer> =
    LazyLock::new(|| Gazetteer::index(GazetteerData::embedded()));

/// Indexed, immutable reference tables.
///
/// # Examples
///
/// ```
/// use atlas_core::Gazetteer;
///
/// let gazetteer = Gazetteer::embedded();
/// let japan = gazetteer.country("  japan ").unwrap();
/// assert_eq!(japan.name, "Japan");
/// ```
#[derive(Debug, Clone)]
pub struct Gazetteer {
    data: GazetteerData,
    country_index: HashMap<String, usize>,
    culture_keys: Vec<String>,
    historical_keys: Vec<String>,
}

impl Gazetteer {
    /// The embedded tables, indexed on first use.
    #[must_use]
    pub fn embedded() -> &'static Self {
        &EMBEDDED
    }

    /// Validate and index a set of tables.
    ///
    /// # Errors
    /// Returns [`GazetteerError`] when the country table is empty, a name is
    /// blank, coordinates are out of range, or a culture or historical entry
    /// refers to a country missing from the country table.
    pub fn from_data(data: GazetteerData) -> Result<Self, GazetteerError> {
        validate(&data)?;
        Ok(Self::index(data))
    }

    /// Load tables from a JSON reader.
    ///
    /// # Errors
    /// Returns [`GazetteerError::ParseJson`] for malformed input and the
    /// validation errors of [`Gazetteer::from_data`].
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, GazetteerError> {
        let data: GazetteerData = serde_json::from_reader(reader)
            .map_err(|source| GazetteerError::ParseJson { source })?;
        Self::from_data(data)
    }

    /// Load tables from a JSON string.
    ///
    /// # Errors
    /// See [`Gazetteer::from_json_reader`].
    pub fn from_json_str(json: &str) -> Result<Self, GazetteerError> {
        Self::from_json_reader(json.as_bytes())
    }

    pub(crate) fn index(data: GazetteerData) -> Self {
        let mut country_index = HashMap::with_capacity(data.countries.len());
        for (position, entry) in data.countries.iter().enumerate() {
            country_index
                .entry(entry.name.trim().to_lowercase())
                .or_insert(position);
        }
        let culture_keys = data
            .cultures
            .iter()
            .map(|entry| entry.adjective.to_lowercase())
            .collect();
        let historical_keys = data
            .historical_names
            .iter()
            .map(|entry| entry.name.to_lowercase())
            .collect();
        Self {
            data,
            country_index,
            culture_keys,
            historical_keys,
        }
    }

    /// Version tag of the loaded tables.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.data.version
    }

    /// Look up a country by name, trimming and ignoring case.
    #[must_use]
    pub fn country(&self, name: &str) -> Option<&CountryEntry> {
        let key = name.trim().to_lowercase();
        self.country_index
            .get(&key)
            .and_then(|&position| self.data.countries.get(position))
    }

    /// All countries in authored order.
    #[must_use]
    pub fn countries(&self) -> &[CountryEntry] {
        &self.data.countries
    }

    /// All culture adjectives in authored order.
    #[must_use]
    pub fn cultures(&self) -> &[CultureEntry] {
        &self.data.cultures
    }

    /// All historical names in authored order.
    #[must_use]
    pub fn historical_names(&self) -> &[HistoricalEntry] {
        &self.data.historical_names
    }

    /// Culture entries paired with their lowercased adjective.
    pub(crate) fn lowered_cultures(&self) -> impl Iterator<Item = (&str, &CultureEntry)> {
        self.culture_keys
            .iter()
            .map(String::as_str)
            .zip(&self.data.cultures)
    }

    /// Historical entries paired with their lowercased name.
    pub(crate) fn lowered_historical_names(
        &self,
    ) -> impl Iterator<Item = (&str, &HistoricalEntry)> {
        self.historical_keys
            .iter()
            .map(String::as_str)
            .zip(&self.data.historical_names)
    }

    /// The underlying tables.
    #[must_use]
    pub const fn data(&self) -> &GazetteerData {
        &self.data
    }
}

fn validate(data: &GazetteerData) -> Result<(), GazetteerError> {
    if data.countries.is_empty() {
        return Err(GazetteerError::NoCountries);
    }
    let mut known = HashSet::with_capacity(data.countries.len());
    for entry in &data.countries {
        if entry.name.trim().is_empty() {
            return Err(GazetteerError::BlankName { table: "country" });
        }
        if !entry.coordinates().is_valid() {
            return Err(GazetteerError::InvalidCoordinates {
                country: entry.name.clone(),
                lat: entry.lat,
                lng: entry.lng,
            });
        }
        known.insert(entry.name.trim().to_lowercase());
    }
    let links = data
        .cultures
        .iter()
        .map(|entry| ("culture", &entry.adjective, &entry.country))
        .chain(
            data.historical_names
                .iter()
                .map(|entry| ("historical", &entry.name, &entry.country)),
        );
    for (table, name, country) in links {
        if name.trim().is_empty() {
            return Err(GazetteerError::BlankName { table });
        }
        if !known.contains(&country.trim().to_lowercase()) {
            return Err(GazetteerError::UnknownCountry {
                table,
                entry: name.clone(),
                country: country.clone(),
            });
        }
    }
    Ok(())
}
