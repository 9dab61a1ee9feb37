//! Trait abstraction for external air quality data.
//!
//! This module provides the [`AirQualityProvider`] trait that abstracts over
//! real measurement sources and [`MockProvider`](crate::MockProvider) for
//! testing. The engine never talks to a network itself; a provider is any
//! type that can answer "what is the air like here".

use async_trait::async_trait;

use airq_types::{ForecastPoint, Location, PollutantReadings};

use crate::error::Result;

/// Measurements returned by a provider for one location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    /// Current pollutant concentrations.
    pub pollutants: PollutantReadings,
    /// Hourly forecast, if the provider offers one.
    pub forecast: Option<Vec<ForecastPoint>>,
}

impl Observation {
    /// Observation without a forecast.
    pub fn new(pollutants: PollutantReadings) -> Self {
        Self {
            pollutants,
            forecast: None,
        }
    }

    /// Attach a provider forecast.
    #[must_use]
    pub fn with_forecast(mut self, forecast: Vec<ForecastPoint>) -> Self {
        self.forecast = Some(forecast);
        self
    }
}

/// Source of measured air quality.
///
/// Implementations should return [`Error::Unavailable`](crate::Error::Unavailable)
/// when they have no data for a location and
/// [`Error::Provider`](crate::Error::Provider) for any other failure.
///
/// # Example
///
/// ```
/// use airq_core::{AirQualityProvider, Result};
/// use airq_types::Location;
///
/// async fn print_pm25<P: AirQualityProvider>(provider: &P, location: &Location) -> Result<()> {
///     let observation = provider.observe(location).await?;
///     println!("{}: PM2.5 {} μg/m³", provider.name(), observation.pollutants.pm25);
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait AirQualityProvider: Send + Sync {
    /// Short provider name, used to tag estimates.
    fn name(&self) -> &str;

    /// Fetch current measurements for a location.
    async fn observe(&self, location: &Location) -> Result<Observation>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_observation_without_forecast() {
        let readings = PollutantReadings::builder().pm25(12).build();
        let observation = Observation::new(readings);
        assert_eq!(observation.pollutants.pm25, 12);
        assert!(observation.forecast.is_none());
    }

    #[test]
    fn test_observation_with_forecast() {
        let point = ForecastPoint {
            timestamp: datetime!(2024-06-01 00:00 UTC),
            aqi: 60,
            pm25: 17,
        };
        let observation =
            Observation::new(PollutantReadings::default()).with_forecast(vec![point]);
        assert_eq!(observation.forecast, Some(vec![point]));
    }
}
