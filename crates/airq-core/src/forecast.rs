//! Hourly forecast projection with diurnal variation.
//!
//! Starting at `now`, each forecast hour scales the baseline AQI by a
//! time-of-day multiplier (rush hours worse, nights better), adds bounded
//! jitter and clamps the result into `[aqi_min, aqi_max]`. PM2.5 for each
//! hour is recovered from the projected AQI through the inverse breakpoint
//! table, with a little spread of its own.
//!
//! # Example
//!
//! ```
//! use airq_core::{ForecastModel, SequenceSource};
//! use time::macros::datetime;
//!
//! let now = datetime!(2024-03-01 00:00 UTC);
//! let points = ForecastModel::default().project(100, now, &mut SequenceSource::constant(0.5));
//!
//! assert_eq!(points.len(), 24);
//! assert_eq!(points[0].timestamp, now);
//! assert_eq!(points[0].aqi, 80);  // night
//! assert_eq!(points[8].aqi, 120); // morning rush
//! ```

use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tracing::debug;

use airq_types::ForecastPoint;

use crate::aqi::pm25_from_aqi;
use crate::config::ValidationError;
use crate::rng::RandomSource;

/// Inclusive range of hours of the day. Wraps past midnight when
/// `start > end` (e.g. 22..=5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourWindow {
    pub start: u8,
    pub end: u8,
}

impl HourWindow {
    pub const fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }

    /// Whether `hour` (0-23) falls inside the window.
    #[must_use]
    pub fn contains(&self, hour: u8) -> bool {
        if self.start <= self.end {
            (self.start..=self.end).contains(&hour)
        } else {
            hour >= self.start || hour <= self.end
        }
    }

    fn validate(&self, field: &str) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.start > 23 || self.end > 23 {
            errors.push(ValidationError::new(
                field,
                format!(
                    "hours must be 0-23 (got {}..={})",
                    self.start, self.end
                ),
            ));
        }
        errors
    }
}

/// Time-of-day multipliers applied to the baseline AQI.
///
/// Windows are checked in order rush hours, midday, night; hours outside
/// every window use a multiplier of 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiurnalProfile {
    pub rush_multiplier: f64,
    pub midday_multiplier: f64,
    pub night_multiplier: f64,
    pub rush_hours: Vec<HourWindow>,
    pub midday: HourWindow,
    pub night: HourWindow,
}

impl Default for DiurnalProfile {
    fn default() -> Self {
        Self {
            rush_multiplier: 1.2,
            midday_multiplier: 1.1,
            night_multiplier: 0.8,
            rush_hours: vec![HourWindow::new(7, 9), HourWindow::new(17, 19)],
            midday: HourWindow::new(11, 15),
            night: HourWindow::new(22, 5),
        }
    }
}

impl DiurnalProfile {
    /// Multiplier for an hour of the day.
    #[must_use]
    pub fn multiplier(&self, hour: u8) -> f64 {
        if self.rush_hours.iter().any(|w| w.contains(hour)) {
            self.rush_multiplier
        } else if self.midday.contains(hour) {
            self.midday_multiplier
        } else if self.night.contains(hour) {
            self.night_multiplier
        } else {
            1.0
        }
    }

    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for (i, window) in self.rush_hours.iter().enumerate() {
            errors.extend(window.validate(&format!("forecast.diurnal.rush_hours[{}]", i)));
        }
        errors.extend(self.midday.validate("forecast.diurnal.midday"));
        errors.extend(self.night.validate("forecast.diurnal.night"));

        for (field, value) in [
            ("forecast.diurnal.rush_multiplier", self.rush_multiplier),
            ("forecast.diurnal.midday_multiplier", self.midday_multiplier),
            ("forecast.diurnal.night_multiplier", self.night_multiplier),
        ] {
            if !value.is_finite() || value <= 0.0 {
                errors.push(ValidationError::new(
                    field,
                    format!("multiplier must be positive (got {})", value),
                ));
            }
        }
        errors
    }
}

/// Parameters of the forecast projector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastModel {
    /// Number of hourly points.
    pub hours: u32,
    /// Lowest AQI a forecast point may take.
    pub aqi_min: i32,
    /// Highest AQI a forecast point may take.
    pub aqi_max: i32,
    /// Full width of the uniform AQI jitter (±variation/2).
    pub variation: f64,
    /// Full width of the uniform PM2.5 jitter (±spread/2).
    pub pm25_spread: f64,
    /// Smallest PM2.5 value ever reported.
    pub pm25_floor: u32,
    pub diurnal: DiurnalProfile,
}

impl Default for ForecastModel {
    fn default() -> Self {
        Self {
            hours: 24,
            aqi_min: 10,
            aqi_max: 300,
            variation: 40.0,
            pm25_spread: 6.0,
            pm25_floor: 5,
            diurnal: DiurnalProfile::default(),
        }
    }
}

impl ForecastModel {
    /// Project an hourly forecast starting at `now`.
    ///
    /// Hours of day are read in the UTC offset carried by `now`. Draws two
    /// values from `rng` per point (AQI jitter, then PM2.5 jitter). The
    /// sequence ends early when an hour falls past the last representable
    /// date.
    pub fn project<R: RandomSource + ?Sized>(
        &self,
        baseline_aqi: i32,
        now: OffsetDateTime,
        rng: &mut R,
    ) -> Vec<ForecastPoint> {
        let base = f64::from(baseline_aqi);

        let points: Vec<ForecastPoint> = (0..self.hours)
            .map_while(|i| now.checked_add(Duration::hours(i64::from(i))))
            .map(|timestamp| {
                let multiplier = self.diurnal.multiplier(timestamp.hour());

                let aqi = (base * multiplier + rng.symmetric(self.variation / 2.0)).round() as i32;
                // Not `clamp`: an unvalidated model may have aqi_min > aqi_max
                let aqi = aqi.max(self.aqi_min).min(self.aqi_max);

                let pm25 = (pm25_from_aqi(aqi) + rng.symmetric(self.pm25_spread / 2.0)).round();
                let pm25 = if pm25 <= f64::from(self.pm25_floor) {
                    self.pm25_floor
                } else {
                    pm25 as u32
                };

                ForecastPoint {
                    timestamp,
                    aqi,
                    pm25,
                }
            })
            .collect();

        debug!(
            baseline_aqi,
            hours = self.hours,
            start = %now,
            "projected forecast"
        );
        points
    }

    /// Validate ranges, jitter widths and the diurnal profile.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.hours == 0 {
            errors.push(ValidationError::new(
                "forecast.hours",
                "forecast must have at least one point",
            ));
        }
        if self.aqi_min < 0 {
            errors.push(ValidationError::new(
                "forecast.aqi_min",
                format!("cannot be negative (got {})", self.aqi_min),
            ));
        }
        if self.aqi_min >= self.aqi_max {
            errors.push(ValidationError::new(
                "forecast.aqi_max",
                format!(
                    "must be above aqi_min ({} >= {})",
                    self.aqi_min, self.aqi_max
                ),
            ));
        }
        if !self.variation.is_finite() || self.variation < 0.0 {
            errors.push(ValidationError::new(
                "forecast.variation",
                format!("must be a non-negative number (got {})", self.variation),
            ));
        }
        if !self.pm25_spread.is_finite() || self.pm25_spread < 0.0 {
            errors.push(ValidationError::new(
                "forecast.pm25_spread",
                format!("must be a non-negative number (got {})", self.pm25_spread),
            ));
        }
        errors.extend(self.diurnal.validate());
        errors
    }
}

/// Project a forecast with the default model.
pub fn project_forecast<R: RandomSource + ?Sized>(
    baseline_aqi: i32,
    now: OffsetDateTime,
    rng: &mut R,
) -> Vec<ForecastPoint> {
    ForecastModel::default().project(baseline_aqi, now, rng)
}
