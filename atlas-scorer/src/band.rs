//! Player-facing feedback helpers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse feedback tier for a single round score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// Below 300.
    Poor,
    /// 300 to 499.
    Fair,
    /// 500 to 699.
    Good,
    /// 700 to 899.
    Great,
    /// 900 and above.
    Excellent,
}

impl ScoreBand {
    /// Classify a round score.
    ///
    /// # Examples
    ///
    /// ```
    /// use atlas_scorer::ScoreBand;
    ///
    /// assert_eq!(ScoreBand::from_score(918), ScoreBand::Excellent);
    /// assert_eq!(ScoreBand::from_score(299), ScoreBand::Poor);
    /// ```
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        match score {
            900.. => Self::Excellent,
            700..=899 => Self::Great,
            500..=699 => Self::Good,
            300..=499 => Self::Fair,
            _ => Self::Poor,
        }
    }

    /// Lowercase label for the band.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::Great => "great",
            Self::Excellent => "excellent",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a distance for display.
///
/// Distances under one kilometre are shown in whole metres, everything else
/// in kilometres with one decimal place.
///
/// # Examples
///
/// ```
/// use atlas_scorer::format_distance;
///
/// assert_eq!(format_distance(0.85), "850 meters");
/// assert_eq!(format_distance(343.556), "343.6 km");
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "kilometres are converted to metres for short distances"
)]
pub fn format_distance(distance_km: f64) -> String {
    if distance_km < 1.0 {
        format!("{:.0} meters", distance_km * 1000.0)
    } else {
        format!("{distance_km:.1} km")
    }
}
