//! Pollutant identities, concentrations and per-pollutant levels.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// One of the six pollutants reported with every estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Pollutant {
    /// Fine particulate matter, diameter 2.5 µm and smaller.
    Pm25,
    /// Inhalable particulate matter, diameter 10 µm and smaller.
    Pm10,
    /// Ground-level ozone.
    O3,
    /// Nitrogen dioxide.
    No2,
    /// Sulfur dioxide.
    So2,
    /// Carbon monoxide.
    Co,
}

impl Pollutant {
    /// All pollutants in reporting order.
    pub const ALL: [Pollutant; 6] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::O3,
        Pollutant::No2,
        Pollutant::So2,
        Pollutant::Co,
    ];

    /// Short machine key (`pm25`, `pm10`, ...).
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "pm25",
            Pollutant::Pm10 => "pm10",
            Pollutant::O3 => "o3",
            Pollutant::No2 => "no2",
            Pollutant::So2 => "so2",
            Pollutant::Co => "co",
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::O3 => "Ozone (O3)",
            Pollutant::No2 => "Nitrogen Dioxide (NO2)",
            Pollutant::So2 => "Sulfur Dioxide (SO2)",
            Pollutant::Co => "Carbon Monoxide (CO)",
        }
    }

    /// Concentration unit.
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        match self {
            Pollutant::Pm25 | Pollutant::Pm10 => "μg/m³",
            Pollutant::O3 | Pollutant::No2 | Pollutant::So2 => "ppb",
            Pollutant::Co => "ppm",
        }
    }

    /// What the pollutant is and why it matters.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => {
                "Fine particulate matter that can penetrate deep into lungs and bloodstream"
            }
            Pollutant::Pm10 => "Inhalable particles that can cause lung inflammation",
            Pollutant::O3 => {
                "Ground-level ozone that causes respiratory symptoms in sensitive people"
            }
            Pollutant::No2 => "Gas from vehicle emissions and industrial sources",
            Pollutant::So2 => "Gas from industrial processes and fossil fuel burning",
            Pollutant::Co => "Colorless, odorless gas that impairs oxygen delivery in the body",
        }
    }

    /// Relative health risk of the pollutant.
    #[must_use]
    pub const fn health_risk(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "High",
            Pollutant::Pm10 | Pollutant::O3 | Pollutant::No2 => "Moderate",
            Pollutant::So2 => "Low to Moderate",
            Pollutant::Co => "High at elevated levels",
        }
    }

    /// Inclusive upper bounds of the Good and Moderate levels, if this
    /// pollutant has a level table.
    #[must_use]
    pub const fn level_bounds(&self) -> Option<(u32, u32)> {
        match self {
            Pollutant::Pm25 => Some((12, 35)),
            Pollutant::Pm10 => Some((54, 154)),
            Pollutant::O3 => Some((70, 100)),
            Pollutant::No2 | Pollutant::So2 | Pollutant::Co => None,
        }
    }

    /// Classify a concentration of this pollutant.
    ///
    /// Pollutants without a level table always report
    /// [`PollutantLevel::Moderate`].
    ///
    /// ```
    /// use airq_types::{Pollutant, PollutantLevel};
    ///
    /// assert_eq!(Pollutant::Pm25.level(12), PollutantLevel::Good);
    /// assert_eq!(Pollutant::Pm25.level(36), PollutantLevel::Unhealthy);
    /// assert_eq!(Pollutant::Co.level(1), PollutantLevel::Moderate);
    /// ```
    #[must_use]
    pub fn level(&self, value: u32) -> PollutantLevel {
        match self.level_bounds() {
            Some((good, _)) if value <= good => PollutantLevel::Good,
            Some((_, moderate)) if value <= moderate => PollutantLevel::Moderate,
            Some(_) => PollutantLevel::Unhealthy,
            None => PollutantLevel::Moderate,
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pollutant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| *c != '.')
            .flat_map(char::to_lowercase)
            .collect();
        Self::ALL
            .into_iter()
            .find(|p| p.key() == key)
            .ok_or_else(|| ParseError::UnknownPollutant(s.to_string()))
    }
}

/// Coarse per-pollutant level shown next to each concentration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PollutantLevel {
    Good,
    Moderate,
    Unhealthy,
}

impl fmt::Display for PollutantLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PollutantLevel::Good => write!(f, "Good"),
            PollutantLevel::Moderate => write!(f, "Moderate"),
            PollutantLevel::Unhealthy => write!(f, "Unhealthy"),
        }
    }
}

/// Concentrations of the six reported pollutants.
///
/// Particulates are in μg/m³, gases in ppb except CO which is in ppm.
/// All values are non-negative integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PollutantReadings {
    /// PM2.5 in μg/m³.
    pub pm25: u32,
    /// PM10 in μg/m³.
    pub pm10: u32,
    /// Ozone in ppb.
    pub o3: u32,
    /// Nitrogen dioxide in ppb.
    pub no2: u32,
    /// Sulfur dioxide in ppb.
    pub so2: u32,
    /// Carbon monoxide in ppm.
    pub co: u32,
}

impl PollutantReadings {
    /// Concentration of a single pollutant.
    #[must_use]
    pub fn get(&self, pollutant: Pollutant) -> u32 {
        match pollutant {
            Pollutant::Pm25 => self.pm25,
            Pollutant::Pm10 => self.pm10,
            Pollutant::O3 => self.o3,
            Pollutant::No2 => self.no2,
            Pollutant::So2 => self.so2,
            Pollutant::Co => self.co,
        }
    }

    /// Level of a single pollutant.
    #[must_use]
    pub fn level(&self, pollutant: Pollutant) -> PollutantLevel {
        pollutant.level(self.get(pollutant))
    }

    /// Iterate `(pollutant, concentration)` pairs in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (Pollutant, u32)> + '_ {
        Pollutant::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    /// Create a builder for constructing readings field by field.
    pub fn builder() -> PollutantReadingsBuilder {
        PollutantReadingsBuilder::default()
    }
}

/// Builder for [`PollutantReadings`].
#[derive(Debug, Default)]
#[must_use]
pub struct PollutantReadingsBuilder {
    readings: PollutantReadings,
}

impl PollutantReadingsBuilder {
    /// Set PM2.5.
    pub fn pm25(mut self, value: u32) -> Self {
        self.readings.pm25 = value;
        self
    }

    /// Set PM10.
    pub fn pm10(mut self, value: u32) -> Self {
        self.readings.pm10 = value;
        self
    }

    /// Set ozone.
    pub fn o3(mut self, value: u32) -> Self {
        self.readings.o3 = value;
        self
    }

    /// Set nitrogen dioxide.
    pub fn no2(mut self, value: u32) -> Self {
        self.readings.no2 = value;
        self
    }

    /// Set sulfur dioxide.
    pub fn so2(mut self, value: u32) -> Self {
        self.readings.so2 = value;
        self
    }

    /// Set carbon monoxide.
    pub fn co(mut self, value: u32) -> Self {
        self.readings.co = value;
        self
    }

    /// Build the readings.
    #[must_use]
    pub fn build(self) -> PollutantReadings {
        self.readings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_boundaries() {
        assert_eq!(Pollutant::Pm25.level(0), PollutantLevel::Good);
        assert_eq!(Pollutant::Pm25.level(12), PollutantLevel::Good);
        assert_eq!(Pollutant::Pm25.level(13), PollutantLevel::Moderate);
        assert_eq!(Pollutant::Pm25.level(35), PollutantLevel::Moderate);
        assert_eq!(Pollutant::Pm25.level(36), PollutantLevel::Unhealthy);

        assert_eq!(Pollutant::Pm10.level(54), PollutantLevel::Good);
        assert_eq!(Pollutant::Pm10.level(154), PollutantLevel::Moderate);
        assert_eq!(Pollutant::Pm10.level(155), PollutantLevel::Unhealthy);

        assert_eq!(Pollutant::O3.level(70), PollutantLevel::Good);
        assert_eq!(Pollutant::O3.level(101), PollutantLevel::Unhealthy);
    }

    #[test]
    fn test_untabled_pollutants_are_moderate() {
        for p in [Pollutant::No2, Pollutant::So2, Pollutant::Co] {
            assert_eq!(p.level(0), PollutantLevel::Moderate);
            assert_eq!(p.level(10_000), PollutantLevel::Moderate);
        }
    }

    #[test]
    fn test_units() {
        assert_eq!(Pollutant::Pm25.unit(), "μg/m³");
        assert_eq!(Pollutant::No2.unit(), "ppb");
        assert_eq!(Pollutant::Co.unit(), "ppm");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("pm2.5".parse::<Pollutant>(), Ok(Pollutant::Pm25));
        assert_eq!("PM10".parse::<Pollutant>(), Ok(Pollutant::Pm10));
        assert_eq!("NO2".parse::<Pollutant>(), Ok(Pollutant::No2));
        assert!("nh3".parse::<Pollutant>().is_err());
    }

    #[test]
    fn test_readings_get_and_iter() {
        let readings = PollutantReadings::builder()
            .pm25(40)
            .pm10(64)
            .o3(120)
            .no2(88)
            .so2(45)
            .co(14)
            .build();

        assert_eq!(readings.get(Pollutant::Pm25), 40);
        assert_eq!(readings.get(Pollutant::Co), 14);

        let pairs: Vec<(Pollutant, u32)> = readings.iter().collect();
        assert_eq!(pairs.len(), 6);
        assert_eq!(pairs[0], (Pollutant::Pm25, 40));
        assert_eq!(pairs[5], (Pollutant::Co, 14));
        assert_eq!(readings.level(Pollutant::Pm25), PollutantLevel::Unhealthy);
    }

    #[test]
    fn test_readings_serialization_keys() {
        let readings = PollutantReadings::builder().pm25(7).co(2).build();
        let json = serde_json::to_string(&readings).unwrap();
        assert!(json.contains("\"pm25\":7"));
        assert!(json.contains("\"co\":2"));
    }
}
