//! Air-quality estimation and forecast engine.
//!
//! This crate turns a location into a complete air-quality picture: a
//! baseline AQI with its health category, six pollutant concentrations and
//! an hourly forecast. Numbers are synthesized from a location profile
//! table, or taken from an external [`AirQualityProvider`] when one is
//! available.
//!
//! # Features
//!
//! - **AQI classification**: EPA health categories and PM2.5 breakpoint conversion
//! - **Location profiles**: Configurable name-matching rules choose a baseline range
//! - **Pollutant derivation**: PM2.5, PM10, O₃, NO₂, SO₂ and CO from the baseline
//! - **Forecasts**: Hourly projection with rush-hour, midday and night variation
//! - **Reproducibility**: Every random draw goes through an injected [`RandomSource`]
//! - **Provider seam**: Real data when available, synthetic fallback otherwise
//! - **Gazetteer**: Offline lookup of well-known cities
//!
//! # Pipeline
//!
//! | Step | Module | Output |
//! |------|--------|--------|
//! | Resolve profile | [`profile`] | Baseline range for the location name |
//! | Draw baseline | [`rng`] | One integer AQI, shared by every later step |
//! | Classify | [`aqi`] | [`AqiCategory`](airq_types::AqiCategory) |
//! | Derive pollutants | [`pollutants`] | [`PollutantReadings`](airq_types::PollutantReadings) |
//! | Project forecast | [`forecast`] | Hourly [`ForecastPoint`](airq_types::ForecastPoint)s |
//!
//! # Quick Start
//!
//! ```
//! use airq_core::{gazetteer, Estimator, StdRandom};
//! use time::OffsetDateTime;
//!
//! let location = gazetteer::search("beijing").unwrap().into_location();
//! let estimate = Estimator::default().estimate(
//!     &location,
//!     OffsetDateTime::now_utc(),
//!     &mut StdRandom::seeded(42),
//! );
//!
//! println!("{}: AQI {} ({})", estimate.location.name, estimate.aqi, estimate.category);
//! assert!((150..250).contains(&estimate.aqi));
//! ```

pub mod aqi;
pub mod config;
pub mod error;
pub mod estimator;
pub mod forecast;
pub mod gazetteer;
pub mod mock;
pub mod pollutants;
pub mod profile;
pub mod provider;
pub mod rng;

// Core exports
pub use aqi::{aqi_from_pm25, categorize_pm25, classify_aqi, pm25_from_aqi};
pub use config::{ConfigError, EngineConfig, ValidationError, default_config_path};
pub use error::{Error, Result};
pub use estimator::{Estimator, estimate};
pub use forecast::{DiurnalProfile, ForecastModel, HourWindow, project_forecast};
pub use gazetteer::{City, SearchOutcome};
pub use mock::{MockProvider, MockProviderBuilder};
pub use pollutants::{PollutantModel, PollutantParams, derive_pollutants};
pub use profile::{BaselineRange, ProfileRule, ProfileTable, ResolvedProfile};
pub use provider::{AirQualityProvider, Observation};
pub use rng::{RandomSource, SequenceSource, StdRandom};

// Re-export from airq-types
pub use airq_types::{
    AirQualityEstimate, AqiCategory, EstimateSource, ForecastPoint, ForecastSummary, Location,
    Pollutant, PollutantLevel, PollutantReadings, Trend,
};
