//! Output formatting utilities for text and JSON output.

use anyhow::Result;
use serde::Serialize;
use time::format_description::well_known::Rfc3339;

use airq_core::City;
use airq_types::{AirQualityEstimate, AqiCategory, ForecastPoint};

use crate::style;

/// Formatting options for output.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Disable colored output.
    pub no_color: bool,
    /// Use compact JSON output (no pretty-printing).
    pub compact: bool,
}

impl FormatOptions {
    pub fn new(no_color: bool) -> Self {
        Self {
            no_color,
            compact: false,
        }
    }

    /// Create with compact JSON option.
    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Serialize value to JSON string, respecting compact option.
    pub fn as_json<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.compact {
            serde_json::to_string(value)?
        } else {
            serde_json::to_string_pretty(value)?
        };
        Ok(json + "\n")
    }
}

// ============================================================================
// Reports
// ============================================================================

/// An AQI value with its category details.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryReport {
    pub aqi: i32,
    pub category: AqiCategory,
    pub label: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

impl CategoryReport {
    pub fn new(aqi: i32, category: AqiCategory) -> Self {
        Self {
            aqi,
            category,
            label: category.label(),
            color: category.color(),
            description: category.description(),
        }
    }
}

/// A PM2.5 concentration converted to AQI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pm25Report {
    pub pm25: f64,
    #[serde(flatten)]
    pub aqi: CategoryReport,
}

/// A gazetteer entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityReport {
    pub key: &'static str,
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&City> for CityReport {
    fn from(city: &City) -> Self {
        Self {
            key: city.key,
            name: city.name,
            latitude: city.latitude,
            longitude: city.longitude,
        }
    }
}

// ============================================================================
// Text Formatting
// ============================================================================

fn format_hour(point: &ForecastPoint) -> String {
    format!(
        "{:02}:{:02}",
        point.timestamp.hour(),
        point.timestamp.minute()
    )
}

/// Format a full estimate as text.
pub fn format_estimate_text(
    estimate: &AirQualityEstimate,
    opts: &FormatOptions,
) -> Result<String> {
    let no_color = opts.no_color;
    let mut out = String::new();

    out.push_str(&style::format_title(&estimate.location.to_string(), no_color));
    out.push('\n');
    out.push_str(&format!(
        "AQI:        {}  {}\n",
        style::format_aqi_colored(estimate.aqi, estimate.category, no_color),
        style::format_category_colored(estimate.category, no_color)
    ));
    out.push_str(&format!(
        "            {}\n",
        style::format_aqi_bar(estimate.aqi, estimate.category, no_color)
    ));
    out.push_str(&format!("Advice:     {}\n", estimate.category.description()));
    out.push_str(&format!("Source:     {}\n", estimate.source));
    out.push_str(&format!(
        "Generated:  {}\n",
        estimate.generated_at.format(&Rfc3339)?
    ));

    out.push('\n');
    out.push_str(&style::format_title("Pollutants", no_color));
    out.push('\n');
    for (pollutant, value) in estimate.pollutants.iter() {
        out.push_str(&format!(
            "{:<12} {:>5} {:<6} {}\n",
            pollutant.name(),
            value,
            pollutant.unit(),
            style::format_level_colored(pollutant.level(value), no_color)
        ));
    }

    if let Some(summary) = estimate.forecast_summary() {
        out.push('\n');
        out.push_str(&style::format_title(
            &format!("Forecast ({}h)", estimate.forecast.len()),
            no_color,
        ));
        out.push('\n');
        out.push_str(&format!(
            "Average {}  Peak {} at {}  Trend {} {}\n\n",
            summary.average_aqi,
            summary.peak.aqi,
            format_hour(&summary.peak),
            style::trend_indicator(summary.trend, no_color),
            summary.trend
        ));
        for point in &estimate.forecast {
            let category = airq_core::classify_aqi(point.aqi);
            out.push_str(&format!(
                "{}  {:>3}  {:>4} μg/m³  {}\n",
                format_hour(point),
                style::format_aqi_colored(point.aqi, category, no_color),
                point.pm25,
                style::format_aqi_bar(point.aqi, category, no_color)
            ));
        }
    }

    Ok(out)
}

/// Format an AQI classification as text.
pub fn format_category_text(report: &CategoryReport, opts: &FormatOptions) -> String {
    format!(
        "AQI {}: {}\n{}\n",
        style::format_aqi_colored(report.aqi, report.category, opts.no_color),
        style::format_category_colored(report.category, opts.no_color),
        report.description
    )
}

/// Format a PM2.5 conversion as text.
pub fn format_pm25_text(report: &Pm25Report, opts: &FormatOptions) -> String {
    format!(
        "PM2.5 {} μg/m³ → {}",
        report.pm25,
        format_category_text(&report.aqi, opts)
    )
}

/// Format the city list as text.
pub fn format_cities_text(cities: &[CityReport], opts: &FormatOptions) -> String {
    let mut out = style::format_title("Known cities", opts.no_color);
    out.push('\n');
    for city in cities {
        out.push_str(&format!(
            "{:<12} {:<24} ({:.4}, {:.4})\n",
            city.key, city.name, city.latitude, city.longitude
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use airq_core::{Estimator, SequenceSource, gazetteer};
    use time::macros::datetime;

    fn plain() -> FormatOptions {
        FormatOptions::new(true)
    }

    fn sample_estimate() -> AirQualityEstimate {
        let location = gazetteer::search("sydney").unwrap().into_location();
        Estimator::default().estimate(
            &location,
            datetime!(2024-06-01 00:00 UTC),
            &mut SequenceSource::constant(0.5),
        )
    }

    #[test]
    fn test_as_json_compact_and_pretty() {
        let report = CategoryReport::new(42, AqiCategory::Good);
        let pretty = plain().as_json(&report).unwrap();
        let compact = plain().with_compact(true).as_json(&report).unwrap();
        assert!(pretty.contains("\n  \"aqi\": 42"));
        assert_eq!(compact.lines().count(), 1);
        assert!(compact.ends_with('\n'));
    }

    #[test]
    fn test_estimate_text() {
        let text = format_estimate_text(&sample_estimate(), &plain()).unwrap();
        assert!(text.starts_with("Sydney, Australia (-33.8688, 151.2093)"));
        assert!(text.contains("AQI:        35  Good"));
        assert!(text.contains("Source:     synthetic"));
        assert!(text.contains("Generated:  2024-06-01T00:00:00Z"));
        assert!(text.contains("PM2.5"));
        assert!(text.contains("Forecast (24h)"));
        assert!(text.contains("Peak 42 at 07:00"));
        assert!(text.contains("08:00   42"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_estimate_json_round_trip() {
        let estimate = sample_estimate();
        let json = plain().as_json(&estimate).unwrap();
        let back: AirQualityEstimate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, estimate);
    }

    #[test]
    fn test_category_text() {
        let report = CategoryReport::new(175, AqiCategory::Unhealthy);
        let text = format_category_text(&report, &plain());
        assert!(text.starts_with("AQI 175: Unhealthy\n"));
        assert!(text.contains(AqiCategory::Unhealthy.description()));
    }

    #[test]
    fn test_pm25_report_json_is_flat() {
        let report = Pm25Report {
            pm25: 40.0,
            aqi: CategoryReport::new(112, AqiCategory::UnhealthyForSensitiveGroups),
        };
        let value: serde_json::Value =
            serde_json::from_str(&plain().as_json(&report).unwrap()).unwrap();
        assert_eq!(value["pm25"], 40.0);
        assert_eq!(value["aqi"], 112);
        assert_eq!(value["label"], "Unhealthy for Sensitive Groups");
        assert_eq!(value["color"], "orange");
    }

    #[test]
    fn test_cities_text() {
        let cities: Vec<CityReport> = gazetteer::CITIES.iter().map(CityReport::from).collect();
        let text = format_cities_text(&cities, &plain());
        assert_eq!(text.lines().count(), 2 + gazetteer::CITIES.len());
        assert!(text.contains("phnom penh   Phnom Penh, Cambodia"));
    }
}
