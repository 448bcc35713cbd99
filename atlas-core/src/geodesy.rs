//! Geographic coordinates and great-circle distance.

use geo::{Coord, Point};
use serde::{Deserialize, Serialize};

/// Mean Earth radius used for every distance in the game.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in decimal degrees.
///
/// Converts to and from [`geo`] types, which store longitude as `x` and
/// latitude as `y`.
///
/// # Examples
///
/// ```
/// use atlas_core::LatLng;
///
/// let paris = LatLng::new(48.8566, 2.3522);
/// let point: geo::Point<f64> = paris.into();
/// assert_eq!(point.x(), 2.3522);
/// assert_eq!(point.y(), 48.8566);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees, `-90.0..=90.0`.
    pub lat: f64,
    /// Longitude in degrees, `-180.0..=180.0`.
    pub lng: f64,
}

impl LatLng {
    /// Construct a coordinate pair.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Report whether both components fall inside valid degree ranges.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<LatLng> for Coord<f64> {
    fn from(value: LatLng) -> Self {
        Self {
            x: value.lng,
            y: value.lat,
        }
    }
}

impl From<Coord<f64>> for LatLng {
    fn from(value: Coord<f64>) -> Self {
        Self::new(value.y, value.x)
    }
}

impl From<LatLng> for Point<f64> {
    fn from(value: LatLng) -> Self {
        Self::from(Coord::from(value))
    }
}

impl From<Point<f64>> for LatLng {
    fn from(value: Point<f64>) -> Self {
        Self::from(value.0)
    }
}

/// Great-circle distance in kilometres between two coordinates.
///
/// Uses the Haversine formula over a sphere of radius [`EARTH_RADIUS_KM`].
/// Inputs are not range-checked.
///
/// # Examples
///
/// ```
/// use atlas_core::{LatLng, haversine_km};
///
/// let paris = LatLng::new(48.8566, 2.3522);
/// let london = LatLng::new(51.5074, -0.1278);
/// let km = haversine_km(paris, london);
/// assert!((km - 343.6).abs() < 0.5);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the Haversine formula is floating-point trigonometry"
)]
pub fn haversine_km(from: LatLng, to: LatLng) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();
    let a = ((d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn distance_to_self_is_zero() {
        let point = LatLng::new(35.8617, 104.1954);
        assert!(haversine_km(point, point).abs() < f64::EPSILON);
    }

    #[rstest]
    fn distance_is_symmetric() {
        let tokyo = LatLng::new(35.6762, 139.6503);
        let lima = LatLng::new(-12.0464, -77.0428);
        let there = haversine_km(tokyo, lima);
        let back = haversine_km(lima, tokyo);
        assert!((there - back).abs() < 1e-9);
    }

    #[rstest]
    fn antipodes_are_half_the_circumference() {
        let km = haversine_km(LatLng::new(0.0, 0.0), LatLng::new(0.0, 180.0));
        let half = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((km - half).abs() < 1e-6, "expected {half}, got {km}");
    }

    #[rstest]
    #[case(LatLng::new(0.0, 0.0), true)]
    #[case(LatLng::new(90.0, 180.0), true)]
    #[case(LatLng::new(-90.0, -180.0), true)]
    #[case(LatLng::new(90.5, 0.0), false)]
    #[case(LatLng::new(0.0, -180.5), false)]
    fn validates_degree_ranges(#[case] point: LatLng, #[case] valid: bool) {
        assert_eq!(point.is_valid(), valid);
    }

    #[rstest]
    fn geo_conversion_swaps_axes() {
        let coord: Coord<f64> = LatLng::new(10.0, 20.0).into();
        assert_eq!(coord, Coord { x: 20.0, y: 10.0 });
        assert_eq!(LatLng::from(coord), LatLng::new(10.0, 20.0));
    }
}
