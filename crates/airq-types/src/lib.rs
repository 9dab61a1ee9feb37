//! Platform-agnostic data model for air-quality estimates.
//!
//! This crate provides the shared types produced by the estimation engine
//! (`airq-core`) and consumed by presentation layers such as the `airq` CLI.
//!
//! # Features
//!
//! - Locations with checked coordinates
//! - AQI health categories with labels and reporting colors
//! - Pollutant metadata, concentrations and per-pollutant levels
//! - Hourly forecast points and forecast summaries
//! - Error types for value parsing
//!
//! # Example
//!
//! ```
//! use airq_types::{AqiCategory, Location, Pollutant};
//!
//! let location = Location::new("Sydney, Australia", -33.8688, 151.2093).unwrap();
//! assert_eq!(AqiCategory::Good.label(), "Good");
//! assert_eq!(Pollutant::Co.unit(), "ppm");
//! # let _ = location;
//! ```

pub mod category;
pub mod error;
pub mod forecast;
pub mod pollutant;
pub mod types;

pub use category::AqiCategory;
pub use error::{ParseError, ParseResult};
pub use forecast::{ForecastPoint, ForecastSummary, Trend};
pub use pollutant::{Pollutant, PollutantLevel, PollutantReadings, PollutantReadingsBuilder};
pub use types::{AirQualityEstimate, EstimateSource, Location};
