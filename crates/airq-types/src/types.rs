//! Location and estimate types.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use time::OffsetDateTime;

use crate::category::AqiCategory;
use crate::error::ParseError;
use crate::forecast::{ForecastPoint, ForecastSummary};
use crate::pollutant::PollutantReadings;

/// A place for which air quality is estimated.
///
/// The name is free text and is only used as a matching key; it is never
/// validated. Coordinates are checked by [`Location::new`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    /// Display name, e.g. `"Beijing, China"`.
    pub name: String,
    /// Latitude in degrees, -90 to 90.
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub latitude: f64,
    /// Longitude in degrees, -180 to 180.
    #[cfg_attr(feature = "serde", serde(alias = "lng"))]
    pub longitude: f64,
}

impl Location {
    /// Create a location, checking coordinate ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidLatitude`] or [`ParseError::InvalidLongitude`]
    /// when a coordinate is out of range or not a number.
    ///
    /// ```
    /// use airq_types::Location;
    ///
    /// let loc = Location::new("London, UK", 51.5074, -0.1278).unwrap();
    /// assert_eq!(loc.name, "London, UK");
    /// assert!(Location::new("Nowhere", 91.0, 0.0).is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, ParseError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ParseError::InvalidLatitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ParseError::InvalidLongitude(longitude));
        }
        Ok(Self {
            name: name.into(),
            latitude,
            longitude,
        })
    }

    /// Create a location for a bare map point, named after its coordinates.
    ///
    /// ```
    /// use airq_types::Location;
    ///
    /// let loc = Location::from_coordinates(11.55642, 104.92821).unwrap();
    /// assert_eq!(loc.name, "Location (11.5564, 104.9282)");
    /// ```
    pub fn from_coordinates(latitude: f64, longitude: f64) -> Result<Self, ParseError> {
        Self::new(
            format!("Location ({:.4}, {:.4})", latitude, longitude),
            latitude,
            longitude,
        )
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.4}, {:.4})",
            self.name, self.latitude, self.longitude
        )
    }
}

/// Where an estimate's numbers came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EstimateSource {
    /// Generated from the location profile.
    Synthetic,
    /// Observed by the named data provider.
    Provider(String),
}

impl EstimateSource {
    /// Whether the numbers were generated rather than observed.
    #[must_use]
    pub fn is_synthetic(&self) -> bool {
        matches!(self, EstimateSource::Synthetic)
    }
}

impl fmt::Display for EstimateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimateSource::Synthetic => write!(f, "synthetic"),
            EstimateSource::Provider(name) => write!(f, "{}", name),
        }
    }
}

/// Complete air-quality result for one location selection.
///
/// Every estimate is created fresh and fully replaces any previous one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AirQualityEstimate {
    /// The location the estimate was made for.
    pub location: Location,
    /// Current (baseline) AQI.
    pub aqi: i32,
    /// Health category of `aqi`.
    pub category: AqiCategory,
    /// Current pollutant concentrations.
    pub pollutants: PollutantReadings,
    /// Hourly forecast, ordered by timestamp.
    pub forecast: Vec<ForecastPoint>,
    /// Instant the estimate was made for (first forecast hour).
    #[cfg_attr(feature = "serde", serde(with = "time::serde::rfc3339"))]
    pub generated_at: OffsetDateTime,
    pub source: EstimateSource,
}

impl AirQualityEstimate {
    /// Summary of the forecast, `None` when the forecast is empty.
    #[must_use]
    pub fn forecast_summary(&self) -> Option<ForecastSummary> {
        ForecastSummary::from_points(&self.forecast)
    }
}


/// Property-based tests for location construction.
#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Exactly the in-range coordinates are accepted.
        #[test]
        fn location_accepts_only_valid_coordinates(
            latitude in -200.0f64..200.0,
            longitude in -400.0f64..400.0,
        ) {
            let valid = (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude);
            prop_assert_eq!(Location::new("p", latitude, longitude).is_ok(), valid);
        }

        /// Map points are named after their coordinates, rounded to four decimals.
        #[test]
        fn coordinates_name_round_trips(
            latitude in -90.0f64..=90.0,
            longitude in -180.0f64..=180.0,
        ) {
            let location = Location::from_coordinates(latitude, longitude).unwrap();
            let expected = format!("Location ({:.4}, {:.4})", latitude, longitude);
            prop_assert_eq!(location.name, expected);
        }
    }
}
