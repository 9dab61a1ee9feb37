//! AQI classification and PM2.5 conversion.
//!
//! This module maps AQI values onto health categories and converts PM2.5
//! concentrations to AQI (and back) with the EPA piecewise-linear
//! breakpoint formula.
//!
//! # Example
//!
//! ```
//! use airq_core::aqi::{aqi_from_pm25, classify_aqi};
//! use airq_types::AqiCategory;
//!
//! let aqi = aqi_from_pm25(40.0);
//! assert_eq!(aqi, 112);
//! assert_eq!(classify_aqi(aqi), AqiCategory::UnhealthyForSensitiveGroups);
//! ```

use airq_types::AqiCategory;

/// One band of a breakpoint table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    /// Lowest concentration in the band (μg/m³).
    pub conc_low: f64,
    /// Highest concentration in the band (μg/m³).
    pub conc_high: f64,
    /// AQI at `conc_low`.
    pub aqi_low: i32,
    /// AQI at `conc_high`.
    pub aqi_high: i32,
}

impl Breakpoint {
    const fn new(conc_low: f64, conc_high: f64, aqi_low: i32, aqi_high: i32) -> Self {
        Self {
            conc_low,
            conc_high,
            aqi_low,
            aqi_high,
        }
    }

    /// AQI units per μg/m³ within this band.
    fn slope(&self) -> f64 {
        f64::from(self.aqi_high - self.aqi_low) / (self.conc_high - self.conc_low)
    }
}

/// PM2.5 breakpoints (24-hour, μg/m³) and the AQI range of each band.
pub const PM25_BREAKPOINTS: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 12.0, 0, 50),       // Good
    Breakpoint::new(12.1, 35.4, 51, 100),    // Moderate
    Breakpoint::new(35.5, 55.4, 101, 150),   // Unhealthy for Sensitive Groups
    Breakpoint::new(55.5, 150.4, 151, 200),  // Unhealthy
    Breakpoint::new(150.5, 250.4, 201, 300), // Very Unhealthy
    Breakpoint::new(250.5, 500.4, 301, 500), // Hazardous
];

const TOP_BAND: Breakpoint = PM25_BREAKPOINTS[PM25_BREAKPOINTS.len() - 1];

/// Classify an AQI value into its health category.
///
/// Total over all integers: values below zero are `Good`, anything above
/// 300 is `Hazardous`. No clamping is applied.
pub fn classify_aqi(aqi: i32) -> AqiCategory {
    AqiCategory::ALL
        .into_iter()
        .find(|category| category.upper_bound().is_none_or(|upper| aqi <= upper))
        .unwrap_or(AqiCategory::Hazardous)
}

/// Convert a PM2.5 concentration (μg/m³) to an AQI value.
///
/// The concentration is truncated to 0.1 μg/m³ before lookup, so values
/// between two bands (e.g. 12.05) resolve to the lower band. Negative or NaN
/// input is treated as zero. Concentrations above the top band extrapolate
/// along the top band's slope.
///
/// ```
/// use airq_core::aqi::aqi_from_pm25;
///
/// assert_eq!(aqi_from_pm25(0.0), 0);
/// assert_eq!(aqi_from_pm25(12.0), 50);
/// assert_eq!(aqi_from_pm25(12.1), 51);
/// assert_eq!(aqi_from_pm25(35.4), 100);
/// ```
pub fn aqi_from_pm25(pm25: f64) -> i32 {
    let concentration = truncate_tenths(pm25.max(0.0));

    let band = PM25_BREAKPOINTS
        .iter()
        .find(|bp| concentration <= bp.conc_high)
        .unwrap_or(&TOP_BAND);

    // AQI = ((AQIhigh - AQIlow) / (BPhigh - BPlow)) * (C - BPlow) + AQIlow
    let aqi = band.slope() * (concentration - band.conc_low) + f64::from(band.aqi_low);
    aqi.round() as i32
}

/// Convert an AQI value back to a PM2.5 concentration (μg/m³).
///
/// Inverse of [`aqi_from_pm25`] within each band. AQI values at or below zero
/// map to zero; values above 500 extrapolate along the top band.
pub fn pm25_from_aqi(aqi: i32) -> f64 {
    if aqi <= 0 {
        return 0.0;
    }

    let band = PM25_BREAKPOINTS
        .iter()
        .find(|bp| aqi <= bp.aqi_high)
        .unwrap_or(&TOP_BAND);

    f64::from(aqi - band.aqi_low) / band.slope() + band.conc_low
}

/// AQI and category for a PM2.5 concentration.
pub fn categorize_pm25(pm25: f64) -> (i32, AqiCategory) {
    let aqi = aqi_from_pm25(pm25);
    (aqi, classify_aqi(aqi))
}

fn truncate_tenths(value: f64) -> f64 {
    // The epsilon absorbs representation error such as 35.4 * 10 = 353.999...
    ((value * 10.0) + 1e-9).floor() / 10.0
}
