//! Player guesses.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::LatLng;

/// A player's answer for one round.
///
/// Serialises untagged: a pin is `{"lat": .., "lng": ..}` and a typed
/// answer is a plain string.
///
/// # Examples
///
/// ```
/// use atlas_core::{Guess, LatLng};
///
/// let pin: Guess = "48.85, 2.35".parse().unwrap();
/// assert_eq!(pin, Guess::Coordinates(LatLng::new(48.85, 2.35)));
///
/// let typed: Guess = "Japan".parse().unwrap();
/// assert_eq!(typed, Guess::Country("Japan".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Guess {
    /// A pin dropped on the globe.
    Coordinates(LatLng),
    /// A country name typed by the player, in whatever casing they used.
    Country(String),
}

impl Guess {
    /// Build a coordinate guess.
    #[must_use]
    pub const fn at(lat: f64, lng: f64) -> Self {
        Self::Coordinates(LatLng::new(lat, lng))
    }

    /// Build a country-name guess.
    #[must_use]
    pub fn country(name: impl Into<String>) -> Self {
        Self::Country(name.into())
    }
}

impl From<LatLng> for Guess {
    fn from(value: LatLng) -> Self {
        Self::Coordinates(value)
    }
}

/// Errors raised when parsing a guess from text.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GuessParseError {
    /// Both halves parsed as numbers but do not name a point on the globe.
    #[error("pin ({lat}, {lng}) is not a finite coordinate within range")]
    InvalidPin {
        /// Parsed latitude.
        lat: f64,
        /// Parsed longitude.
        lng: f64,
    },
}

impl FromStr for Guess {
    type Err = GuessParseError;

    /// Parse `"lat, lng"` as a pin; anything else is a country name.
    ///
    /// Numeric pairs outside the valid range, including `NaN` and
    /// infinities, are rejected rather than read as a country.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let pin = text.split_once(',').and_then(|(raw_lat, raw_lng)| {
            let lat = raw_lat.trim().parse::<f64>().ok()?;
            let lng = raw_lng.trim().parse::<f64>().ok()?;
            Some(LatLng::new(lat, lng))
        });
        match pin {
            Some(point) if point.is_valid() => Ok(Self::Coordinates(point)),
            Some(point) => Err(GuessParseError::InvalidPin {
                lat: point.lat,
                lng: point.lng,
            }),
            None => Ok(Self::Country(text.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0,0", Guess::at(0.0, 0.0))]
    #[case(" -33.86 , 151.21 ", Guess::at(-33.86, 151.21))]
    #[case("japan", Guess::country("japan"))]
    #[case("  Costa Rica ", Guess::country("Costa Rica"))]
    #[case("Bonaire, Sint Eustatius and Saba", Guess::country("Bonaire, Sint Eustatius and Saba"))]
    fn parses_pins_and_names(#[case] raw: &str, #[case] expected: Guess) {
        assert_eq!(raw.parse::<Guess>(), Ok(expected));
    }

    #[rstest]
    #[case("NaN, 0")]
    #[case("inf,0")]
    #[case("0, -infinity")]
    #[case("91, 0")]
    #[case("0, 180.5")]
    fn rejects_pins_off_the_globe(#[case] raw: &str) {
        let err = raw.parse::<Guess>().expect_err("pin should be rejected");
        assert!(matches!(err, GuessParseError::InvalidPin { .. }));
    }

    #[rstest]
    fn deserialises_untagged_shapes() {
        let pin: Guess = serde_json::from_str(r#"{"lat": 1.5, "lng": -2.5}"#).expect("pin");
        let name: Guess = serde_json::from_str(r#""Peru""#).expect("name");
        assert_eq!(pin, Guess::at(1.5, -2.5));
        assert_eq!(name, Guess::country("Peru"));
    }
}
