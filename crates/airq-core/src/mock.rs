//! Mock provider implementation for testing.
//!
//! This module provides a mock data provider that can be used for unit
//! testing and demo mode without any real measurement source.
//!
//! The [`MockProvider`] implements the [`AirQualityProvider`] trait, allowing
//! it to be used interchangeably with real providers in generic code.
//!
//! # Features
//!
//! - **Fixed readings**: Return the same concentrations for every location
//! - **Failure injection**: Fail every call, or only the next few
//! - **Latency simulation**: Add artificial delays to simulate slow sources

use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use airq_types::{ForecastPoint, Location, PollutantReadings};

use crate::error::{Error, Result};
use crate::provider::{AirQualityProvider, Observation};

/// A mock air quality provider for testing.
///
/// # Example
///
/// ```
/// use airq_core::{AirQualityProvider, MockProvider};
/// use airq_types::Location;
///
/// #[tokio::main]
/// async fn main() {
///     let provider = MockProvider::builder().pm25(42).build();
///     let location = Location::new("Test", 0.0, 0.0).unwrap();
///
///     let observation = provider.observe(&location).await.unwrap();
///     assert_eq!(observation.pollutants.pm25, 42);
///     assert_eq!(provider.call_count(), 1);
/// }
/// ```
pub struct MockProvider {
    name: String,
    readings: RwLock<PollutantReadings>,
    forecast: RwLock<Option<Vec<ForecastPoint>>>,
    call_count: AtomicU32,
    should_fail: AtomicBool,
    fail_message: RwLock<String>,
    unavailable: AtomicBool,
    /// Simulated response latency in milliseconds (0 = no delay).
    latency_ms: AtomicU64,
    /// Remaining calls that fail before the provider recovers.
    remaining_failures: AtomicU32,
}

impl std::fmt::Debug for MockProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockProvider")
            .field("name", &self.name)
            .field("call_count", &self.call_count.load(Ordering::Relaxed))
            .field("should_fail", &self.should_fail.load(Ordering::Relaxed))
            .finish()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        MockProviderBuilder::default().build()
    }
}

impl MockProvider {
    /// Create a mock provider returning `readings`.
    pub fn new(name: &str, readings: PollutantReadings) -> Self {
        Self {
            name: name.to_string(),
            readings: RwLock::new(readings),
            forecast: RwLock::new(None),
            call_count: AtomicU32::new(0),
            should_fail: AtomicBool::new(false),
            fail_message: RwLock::new("Mock failure".to_string()),
            unavailable: AtomicBool::new(false),
            latency_ms: AtomicU64::new(0),
            remaining_failures: AtomicU32::new(0),
        }
    }

    /// Start building a mock provider.
    pub fn builder() -> MockProviderBuilder {
        MockProviderBuilder::new()
    }

    /// Replace the readings returned by subsequent calls.
    pub async fn set_readings(&self, readings: PollutantReadings) {
        *self.readings.write().await = readings;
    }

    /// Set the PM2.5 concentration returned by subsequent calls.
    pub async fn set_pm25(&self, pm25: u32) {
        self.readings.write().await.pm25 = pm25;
    }

    /// Set or clear the forecast attached to observations.
    pub async fn set_forecast(&self, forecast: Option<Vec<ForecastPoint>>) {
        *self.forecast.write().await = forecast;
    }

    /// Make every call fail (or succeed again).
    pub async fn set_should_fail(&self, fail: bool, message: Option<&str>) {
        self.should_fail.store(fail, Ordering::Relaxed);
        if let Some(msg) = message {
            *self.fail_message.write().await = msg.to_string();
        }
    }

    /// Report that no data exists for any location.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::Relaxed);
    }

    /// Number of `observe` calls so far, including failed ones.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Reset the call counter.
    pub fn reset_call_count(&self) {
        self.call_count.store(0, Ordering::Relaxed);
    }

    /// Delay every call by `latency`.
    pub fn set_latency(&self, latency: Duration) {
        let millis = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
        self.latency_ms.store(millis, Ordering::Relaxed);
    }

    /// Fail the next `count` calls, then recover.
    ///
    /// Useful for testing fallback behavior:
    ///
    /// ```
    /// use airq_core::{AirQualityProvider, MockProvider};
    /// use airq_types::Location;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let provider = MockProvider::default();
    ///     provider.set_transient_failures(1);
    ///     let location = Location::new("Test", 0.0, 0.0).unwrap();
    ///
    ///     assert!(provider.observe(&location).await.is_err());
    ///     assert!(provider.observe(&location).await.is_ok());
    /// }
    /// ```
    pub fn set_transient_failures(&self, count: u32) {
        self.remaining_failures.store(count, Ordering::Relaxed);
    }

    /// Number of transient failures still pending.
    pub fn remaining_failures(&self) -> u32 {
        self.remaining_failures.load(Ordering::Relaxed)
    }

    async fn check_should_fail(&self, location: &Location) -> Result<()> {
        if self
            .remaining_failures
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_sub(1))
            .is_ok()
        {
            return Err(Error::provider(&self.name, "Transient mock failure"));
        }

        if self.should_fail.load(Ordering::Relaxed) {
            let message = self.fail_message.read().await.clone();
            return Err(Error::provider(&self.name, message));
        }

        if self.unavailable.load(Ordering::Relaxed) {
            return Err(Error::Unavailable(location.name.clone()));
        }
        Ok(())
    }
}

#[async_trait]
impl AirQualityProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn observe(&self, location: &Location) -> Result<Observation> {
        self.call_count.fetch_add(1, Ordering::Relaxed);

        let latency = self.latency_ms.load(Ordering::Relaxed);
        if latency > 0 {
            tokio::time::sleep(Duration::from_millis(latency)).await;
        }

        self.check_should_fail(location).await?;

        let observation = Observation::new(*self.readings.read().await);
        Ok(match self.forecast.read().await.clone() {
            Some(forecast) => observation.with_forecast(forecast),
            None => observation,
        })
    }
}

/// Builder for creating mock providers with custom settings.
#[derive(Debug)]
pub struct MockProviderBuilder {
    name: String,
    readings: PollutantReadings,
    forecast: Option<Vec<ForecastPoint>>,
    should_fail: bool,
    transient_failures: u32,
    latency: Duration,
}

impl Default for MockProviderBuilder {
    fn default() -> Self {
        Self {
            name: "mock".to_string(),
            readings: PollutantReadings {
                pm25: 18,
                pm10: 30,
                o3: 45,
                no2: 25,
                so2: 8,
                co: 3,
            },
            forecast: None,
            should_fail: false,
            transient_failures: 0,
            latency: Duration::ZERO,
        }
    }
}

impl MockProviderBuilder {
    /// Create a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the provider name.
    #[must_use]
    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Set every reading at once.
    #[must_use]
    pub fn readings(mut self, readings: PollutantReadings) -> Self {
        self.readings = readings;
        self
    }

    /// Set the PM2.5 concentration.
    #[must_use]
    pub fn pm25(mut self, pm25: u32) -> Self {
        self.readings.pm25 = pm25;
        self
    }

    /// Set the PM10 concentration.
    #[must_use]
    pub fn pm10(mut self, pm10: u32) -> Self {
        self.readings.pm10 = pm10;
        self
    }

    /// Attach a forecast to every observation.
    #[must_use]
    pub fn forecast(mut self, forecast: Vec<ForecastPoint>) -> Self {
        self.forecast = Some(forecast);
        self
    }

    /// Fail every call.
    #[must_use]
    pub fn failing(mut self) -> Self {
        self.should_fail = true;
        self
    }

    /// Fail the first `count` calls.
    #[must_use]
    pub fn transient_failures(mut self, count: u32) -> Self {
        self.transient_failures = count;
        self
    }

    /// Delay every call.
    #[must_use]
    pub fn latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Build the mock provider.
    #[must_use]
    pub fn build(self) -> MockProvider {
        let mut provider = MockProvider::new(&self.name, self.readings);
        provider.forecast = RwLock::new(self.forecast);
        provider.should_fail.store(self.should_fail, Ordering::Relaxed);
        provider.set_transient_failures(self.transient_failures);
        provider.set_latency(self.latency);
        provider
    }
}
