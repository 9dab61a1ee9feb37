//! Derivation of pollutant concentrations from a baseline AQI.
//!
//! Each concentration is `max(floor, floor(base × ratio ± jitter))`, where
//! `base` is the baseline AQI for every pollutant except PM10, which scales
//! from the derived PM2.5 value. Concentrations therefore rise with the
//! baseline while staying individually noisy and never dropping below their
//! floor.

use serde::{Deserialize, Serialize};
use tracing::trace;

use airq_types::PollutantReadings;

use crate::config::ValidationError;
use crate::rng::RandomSource;

/// Scaling parameters for one pollutant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PollutantParams {
    /// Multiplier applied to the base value.
    pub ratio: f64,
    /// Half-width of the uniform jitter added after scaling.
    pub jitter: f64,
    /// Smallest value ever reported.
    pub floor: u32,
}

impl PollutantParams {
    pub const fn new(ratio: f64, jitter: f64, floor: u32) -> Self {
        Self {
            ratio,
            jitter,
            floor,
        }
    }

    /// Scale `base`, add jitter and apply the floor.
    fn sample<R: RandomSource + ?Sized>(&self, base: f64, rng: &mut R) -> u32 {
        let raw = (base * self.ratio + rng.symmetric(self.jitter)).floor();
        if raw <= f64::from(self.floor) {
            self.floor
        } else {
            raw as u32
        }
    }

    fn validate(&self, field: &str) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if !self.ratio.is_finite() || self.ratio < 0.0 {
            errors.push(ValidationError::new(
                format!("{}.ratio", field),
                format!("ratio must be a non-negative number (got {})", self.ratio),
            ));
        }
        if !self.jitter.is_finite() || self.jitter < 0.0 {
            errors.push(ValidationError::new(
                format!("{}.jitter", field),
                format!("jitter must be a non-negative number (got {})", self.jitter),
            ));
        }
        errors
    }
}

/// Parameters for all six pollutants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollutantModel {
    /// PM2.5, scaled from the baseline AQI.
    pub pm25: PollutantParams,
    /// PM10, scaled from the derived PM2.5.
    pub pm10: PollutantParams,
    pub o3: PollutantParams,
    pub no2: PollutantParams,
    pub so2: PollutantParams,
    pub co: PollutantParams,
}

impl Default for PollutantModel {
    fn default() -> Self {
        Self {
            pm25: PollutantParams::new(0.25, 8.0, 5),
            pm10: PollutantParams::new(1.6, 12.0, 10),
            o3: PollutantParams::new(0.75, 18.0, 20),
            no2: PollutantParams::new(0.55, 12.0, 10),
            so2: PollutantParams::new(0.28, 8.0, 5),
            co: PollutantParams::new(0.09, 2.0, 1),
        }
    }
}

impl PollutantModel {
    /// Derive the six concentrations for a baseline AQI.
    ///
    /// Draws exactly six values from `rng`, in the order PM2.5, PM10, O3,
    /// NO2, SO2, CO. PM10 is never reported below PM2.5.
    ///
    /// ```
    /// use airq_core::{PollutantModel, SequenceSource};
    ///
    /// // A constant 0.5 source produces zero jitter.
    /// let readings = PollutantModel::default().derive(160, &mut SequenceSource::constant(0.5));
    /// assert_eq!(readings.pm25, 40);
    /// assert_eq!(readings.pm10, 64);
    /// assert_eq!(readings.o3, 120);
    /// ```
    pub fn derive<R: RandomSource + ?Sized>(
        &self,
        baseline_aqi: i32,
        rng: &mut R,
    ) -> PollutantReadings {
        let base = f64::from(baseline_aqi);

        let pm25 = self.pm25.sample(base, rng);
        let pm10 = self.pm10.sample(f64::from(pm25), rng).max(pm25);
        let o3 = self.o3.sample(base, rng);
        let no2 = self.no2.sample(base, rng);
        let so2 = self.so2.sample(base, rng);
        let co = self.co.sample(base, rng);

        let readings = PollutantReadings {
            pm25,
            pm10,
            o3,
            no2,
            so2,
            co,
        };
        trace!(baseline_aqi, ?readings, "derived pollutants");
        readings
    }

    /// Validate every parameter set.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        errors.extend(self.pm25.validate("pollutants.pm25"));
        errors.extend(self.pm10.validate("pollutants.pm10"));
        errors.extend(self.o3.validate("pollutants.o3"));
        errors.extend(self.no2.validate("pollutants.no2"));
        errors.extend(self.so2.validate("pollutants.so2"));
        errors.extend(self.co.validate("pollutants.co"));
        errors
    }
}

/// Derive pollutant concentrations with the default model.
pub fn derive_pollutants<R: RandomSource + ?Sized>(
    baseline_aqi: i32,
    rng: &mut R,
) -> PollutantReadings {
    PollutantModel::default().derive(baseline_aqi, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{SequenceSource, StdRandom};

    #[test]
    fn test_zero_jitter_values() {
        let readings = derive_pollutants(160, &mut SequenceSource::constant(0.5));
        assert_eq!(readings.pm25, 40);
        assert_eq!(readings.pm10, 64);
        assert_eq!(readings.o3, 120);
        assert_eq!(readings.no2, 88);
        assert_eq!(readings.so2, 44);
        assert_eq!(readings.co, 14);
    }

    #[test]
    fn test_low_baseline_hits_floors() {
        // Lowest jitter everywhere on a clean-air baseline.
        let readings = derive_pollutants(10, &mut SequenceSource::constant(0.0));
        let model = PollutantModel::default();
        assert_eq!(readings.pm25, model.pm25.floor);
        assert_eq!(readings.pm10, model.pm10.floor);
        assert_eq!(readings.o3, model.o3.floor);
        assert_eq!(readings.no2, model.no2.floor);
        assert_eq!(readings.so2, model.so2.floor);
        assert_eq!(readings.co, model.co.floor);
    }

    #[test]
    fn test_negative_baseline_reports_floors() {
        let readings = derive_pollutants(-40, &mut SequenceSource::constant(0.9));
        assert_eq!(readings.pm25, 5);
        assert!(readings.pm10 >= readings.pm25);
        assert_eq!(readings.co, 1);
    }

    #[test]
    fn test_pm10_never_below_pm25() {
        // High PM2.5 jitter, lowest PM10 jitter.
        let mut rng = SequenceSource::new(vec![0.999, 0.0, 0.5, 0.5, 0.5, 0.5]);
        let readings = derive_pollutants(60, &mut rng);
        assert_eq!(readings.pm25, 22);
        assert!(readings.pm10 >= readings.pm25);
    }

    #[test]
    fn test_draws_six_values() {
        let mut rng = SequenceSource::constant(0.5);
        derive_pollutants(100, &mut rng);
        assert_eq!(rng.draws(), 6);
    }

    #[test]
    fn test_jitter_is_bounded() {
        let model = PollutantModel::default();
        let mut rng = StdRandom::seeded(99);
        for _ in 0..500 {
            let r = model.derive(200, &mut rng);
            // 200 * 0.25 = 50, jitter 8
            assert!((42..=57).contains(&r.pm25), "pm25 {}", r.pm25);
            // 200 * 0.75 = 150, jitter 18
            assert!((132..=167).contains(&r.o3), "o3 {}", r.o3);
        }
    }

    #[test]
    fn test_validate_rejects_negative_and_nan() {
        let mut model = PollutantModel::default();
        assert!(model.validate().is_empty());

        model.o3.ratio = -1.0;
        model.co.jitter = f64::NAN;
        let errors = model.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "pollutants.o3.ratio");
        assert_eq!(errors[1].field, "pollutants.co.jitter");
    }
}

/// Property-based tests for the pollutant deriver.
#[cfg(test)]
mod proptests {
    use super::*;
    use crate::rng::{SequenceSource, StdRandom};
    use proptest::prelude::*;

    proptest! {
        /// Floors hold and PM10 >= PM2.5 for any baseline and seed.
        #[test]
        fn floors_and_pm10_invariant(baseline in 0i32..500, seed in any::<u64>()) {
            let model = PollutantModel::default();
            let r = model.derive(baseline, &mut StdRandom::seeded(seed));
            prop_assert!(r.pm25 >= model.pm25.floor);
            prop_assert!(r.pm10 >= model.pm10.floor);
            prop_assert!(r.o3 >= model.o3.floor);
            prop_assert!(r.no2 >= model.no2.floor);
            prop_assert!(r.so2 >= model.so2.floor);
            prop_assert!(r.co >= model.co.floor);
            prop_assert!(r.pm10 >= r.pm25);
        }

        /// With the jitter held fixed, every concentration is non-decreasing in the baseline.
        #[test]
        fn concentrations_rise_with_baseline(baseline in 0i32..499, u in 0.0f64..1.0) {
            let lower = derive_pollutants(baseline, &mut SequenceSource::constant(u));
            let higher = derive_pollutants(baseline + 1, &mut SequenceSource::constant(u));
            for (p, value) in lower.iter() {
                prop_assert!(
                    higher.get(p) >= value,
                    "{:?} fell from {} to {}",
                    p,
                    value,
                    higher.get(p)
                );
            }
        }
    }
}
