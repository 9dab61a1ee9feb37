//! Hourly forecast points and their summary.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use time::OffsetDateTime;

/// One hourly point of a forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ForecastPoint {
    /// Start of the forecast hour.
    #[cfg_attr(feature = "serde", serde(with = "time::serde::rfc3339"))]
    pub timestamp: OffsetDateTime,
    /// Projected AQI for the hour.
    pub aqi: i32,
    /// Projected PM2.5 concentration in μg/m³.
    pub pm25: u32,
}

/// Direction of a forecast from its first to its last point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Trend {
    /// AQI ends higher than it starts.
    Worsening,
    /// AQI ends lower than it starts.
    Improving,
    Stable,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Worsening => write!(f, "Worsening"),
            Trend::Improving => write!(f, "Improving"),
            Trend::Stable => write!(f, "Stable"),
        }
    }
}

/// Aggregate view of a forecast sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ForecastSummary {
    /// Mean AQI over all points, rounded to the nearest integer.
    pub average_aqi: i32,
    /// AQI of the first point.
    pub current_aqi: i32,
    /// AQI of the last point.
    pub final_aqi: i32,
    /// The point with the highest AQI (earliest one on ties).
    pub peak: ForecastPoint,
    pub trend: Trend,
}

impl ForecastSummary {
    /// Summarize a forecast. Returns `None` for an empty slice.
    ///
    /// ```
    /// use airq_types::{ForecastPoint, ForecastSummary, Trend};
    /// use time::OffsetDateTime;
    ///
    /// let t = OffsetDateTime::UNIX_EPOCH;
    /// let points = [
    ///     ForecastPoint { timestamp: t, aqi: 40, pm25: 10 },
    ///     ForecastPoint { timestamp: t + time::Duration::hours(1), aqi: 61, pm25: 17 },
    /// ];
    /// let summary = ForecastSummary::from_points(&points).unwrap();
    /// assert_eq!(summary.average_aqi, 51);
    /// assert_eq!(summary.trend, Trend::Worsening);
    /// ```
    #[must_use]
    pub fn from_points(points: &[ForecastPoint]) -> Option<Self> {
        let first = points.first()?;
        let last = points.last()?;

        let total: i64 = points.iter().map(|p| i64::from(p.aqi)).sum();
        let average = (total as f64 / points.len() as f64).round() as i32;

        let mut peak = *first;
        for point in &points[1..] {
            if point.aqi > peak.aqi {
                peak = *point;
            }
        }

        let trend = match last.aqi.cmp(&first.aqi) {
            core::cmp::Ordering::Greater => Trend::Worsening,
            core::cmp::Ordering::Less => Trend::Improving,
            core::cmp::Ordering::Equal => Trend::Stable,
        };

        Some(Self {
            average_aqi: average,
            current_aqi: first.aqi,
            final_aqi: last.aqi,
            peak,
            trend,
        })
    }
}
