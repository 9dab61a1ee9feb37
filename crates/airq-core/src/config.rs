//! Engine configuration.
//!
//! Every tunable of the estimator lives here: the profile rule table, the
//! pollutant model and the forecast model. All sections are optional in the
//! TOML file and fall back to the built-in defaults.
//!
//! ```toml
//! [profiles.default]
//! low = 20
//! high = 170
//!
//! [[profiles.rules]]
//! name = "cambodia"
//! fragments = ["phnom penh", "siem reap"]
//! low = 60
//! high = 140
//!
//! [pollutants.o3]
//! ratio = 0.8
//! jitter = 10.0
//! floor = 20
//!
//! [forecast]
//! hours = 48
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::forecast::ForecastModel;
use crate::pollutants::PollutantModel;
use crate::profile::ProfileTable;

/// Estimator configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Location profile rules.
    pub profiles: ProfileTable,
    /// Pollutant derivation parameters.
    pub pollutants: PollutantModel,
    /// Forecast projection parameters.
    pub forecast: ForecastModel,
}

impl EngineConfig {
    /// Load configuration from the default path.
    ///
    /// A missing file yields the default configuration.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = default_config_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Read {
            path: path.as_ref().to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.as_ref().to_path_buf(),
            source: e,
        })
    }

    /// Load and validate configuration from a file.
    pub fn load_validated<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config = Self::load(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file, creating parent directories.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = self.to_toml()?;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        std::fs::write(path.as_ref(), content).map_err(|e| ConfigError::Write {
            path: path.as_ref().to_path_buf(),
            source: e,
        })
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Validate the configuration and return every violation found.
    ///
    /// This checks:
    /// - Baseline ranges are non-empty and non-negative
    /// - Every profile rule has a name and at least one fragment
    /// - Pollutant ratios and jitters are finite and non-negative
    /// - The forecast has at least one hour and `aqi_min < aqi_max`
    /// - Diurnal windows use hours 0-23 and multipliers are positive
    ///
    /// # Example
    ///
    /// ```
    /// use airq_core::EngineConfig;
    ///
    /// EngineConfig::default().validate().expect("default config is valid");
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.profiles.validate());
        errors.extend(self.pollutants.validate());
        errors.extend(self.forecast.validate());

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),
    #[error("Failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    Validation(Vec<ValidationError>),
}

/// A single validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field path (e.g., `forecast.hours` or `profiles.rules[0].fragments`).
    pub field: String,
    /// Description of the validation failure.
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {}", e))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Default configuration file path.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("airq")
        .join("config.toml")
}
