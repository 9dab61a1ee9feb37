//! Estimation orchestrator.
//!
//! [`Estimator::estimate`] resolves the location profile, draws one baseline
//! AQI and feeds that same baseline to the classifier, the pollutant deriver
//! and the forecast projector. It never fails and has no side effects beyond
//! consuming values from the injected random source.
//!
//! [`Estimator::estimate_with_provider`] asks an [`AirQualityProvider`] first
//! and falls back to the synthetic path on any provider error.
//!
//! # Example
//!
//! ```
//! use airq_core::{Estimator, StdRandom};
//! use airq_types::{AqiCategory, Location};
//! use time::macros::datetime;
//!
//! let estimator = Estimator::default();
//! let location = Location::new("Sydney Harbour", -33.85, 151.21).unwrap();
//! let now = datetime!(2024-06-01 09:00 UTC);
//!
//! let estimate = estimator.estimate(&location, now, &mut StdRandom::seeded(1));
//! assert!((10..60).contains(&estimate.aqi));
//! assert!(estimate.category <= AqiCategory::Moderate);
//! assert_eq!(estimate.forecast.len(), 24);
//! ```

use time::OffsetDateTime;
use tracing::{debug, warn};

use airq_types::{AirQualityEstimate, EstimateSource, Location};

use crate::aqi::{aqi_from_pm25, classify_aqi};
use crate::config::{ConfigError, EngineConfig};
use crate::error::{Error, Result};
use crate::forecast::ForecastModel;
use crate::pollutants::PollutantModel;
use crate::profile::ProfileTable;
use crate::provider::{AirQualityProvider, Observation};
use crate::rng::RandomSource;

/// Composes the profile table, pollutant model and forecast model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Estimator {
    profiles: ProfileTable,
    pollutants: PollutantModel,
    forecast: ForecastModel,
}

impl Estimator {
    /// Create an estimator from its parts without validation.
    ///
    /// Invalid parts never panic: empty baseline ranges yield their `low`
    /// bound and inverted forecast bounds pin every point to `aqi_max`.
    pub fn new(
        profiles: ProfileTable,
        pollutants: PollutantModel,
        forecast: ForecastModel,
    ) -> Self {
        Self {
            profiles,
            pollutants,
            forecast,
        }
    }

    /// Create an estimator from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] listing every validation failure.
    pub fn from_config(config: EngineConfig) -> Result<Self> {
        match config.validate() {
            Ok(()) => {}
            Err(ConfigError::Validation(errors)) => {
                let message = errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ");
                return Err(Error::InvalidConfig(message));
            }
            Err(other) => return Err(Error::InvalidConfig(other.to_string())),
        }
        Ok(Self::new(config.profiles, config.pollutants, config.forecast))
    }

    pub fn profiles(&self) -> &ProfileTable {
        &self.profiles
    }

    pub fn pollutant_model(&self) -> &PollutantModel {
        &self.pollutants
    }

    pub fn forecast_model(&self) -> &ForecastModel {
        &self.forecast
    }

    /// Produce a synthetic estimate for `location` at `now`.
    ///
    /// Draws the baseline first, then six pollutant values, then two values
    /// per forecast hour. Identical `rng` sequences and `now` give identical
    /// estimates.
    pub fn estimate<R: RandomSource + ?Sized>(
        &self,
        location: &Location,
        now: OffsetDateTime,
        rng: &mut R,
    ) -> AirQualityEstimate {
        let profile = self.profiles.resolve(&location.name);
        let baseline = profile.range.draw(rng);
        let category = classify_aqi(baseline);

        debug!(
            location = %location.name,
            tier = profile.tier,
            baseline,
            category = %category,
            "drew baseline AQI"
        );

        let pollutants = self.pollutants.derive(baseline, rng);
        let forecast = self.forecast.project(baseline, now, rng);

        AirQualityEstimate {
            location: location.clone(),
            aqi: baseline,
            category,
            pollutants,
            forecast,
            generated_at: now,
            source: EstimateSource::Synthetic,
        }
    }

    /// Estimate from a provider, falling back to the synthetic path.
    ///
    /// The provider's PM2.5 reading is converted with
    /// [`aqi_from_pm25`](crate::aqi::aqi_from_pm25) and classified. When the
    /// provider supplies no forecast, one is projected from that AQI. Provider
    /// errors are logged and never returned.
    pub async fn estimate_with_provider<P, R>(
        &self,
        provider: &P,
        location: &Location,
        now: OffsetDateTime,
        rng: &mut R,
    ) -> AirQualityEstimate
    where
        P: AirQualityProvider + ?Sized,
        R: RandomSource + ?Sized,
    {
        debug!(provider = provider.name(), location = %location.name, "querying provider");

        match provider.observe(location).await {
            Ok(observation) => {
                self.estimate_from_observation(provider.name(), location, observation, now, rng)
            }
            Err(e) => {
                warn!(
                    provider = provider.name(),
                    location = %location.name,
                    error = %e,
                    "provider failed, using synthetic estimate"
                );
                self.estimate(location, now, rng)
            }
        }
    }

    /// Translate a provider observation into an estimate.
    pub fn estimate_from_observation<R: RandomSource + ?Sized>(
        &self,
        provider: &str,
        location: &Location,
        observation: Observation,
        now: OffsetDateTime,
        rng: &mut R,
    ) -> AirQualityEstimate {
        let aqi = aqi_from_pm25(f64::from(observation.pollutants.pm25));
        let category = classify_aqi(aqi);
        let forecast = observation
            .forecast
            .unwrap_or_else(|| self.forecast.project(aqi, now, rng));

        debug!(provider, aqi, category = %category, "converted provider observation");

        AirQualityEstimate {
            location: location.clone(),
            aqi,
            category,
            pollutants: observation.pollutants,
            forecast,
            generated_at: now,
            source: EstimateSource::Provider(provider.to_string()),
        }
    }
}

/// Produce a synthetic estimate with the default engine settings.
pub fn estimate<R: RandomSource + ?Sized>(
    location: &Location,
    now: OffsetDateTime,
    rng: &mut R,
) -> AirQualityEstimate {
    Estimator::default().estimate(location, now, rng)
}
