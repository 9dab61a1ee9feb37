//! Error types for airq-core.
//!
//! The estimation functions themselves are total and never fail. Errors only
//! arise at the edges of the engine:
//!
//! | Error | Raised by | Handling |
//! |-------|-----------|----------|
//! | [`Error::Provider`] | An [`AirQualityProvider`](crate::AirQualityProvider) | Fall back to the synthetic estimate |
//! | [`Error::Unavailable`] | A provider with no data for the location | Fall back to the synthetic estimate |
//! | [`Error::InvalidConfig`] | Building an [`Estimator`](crate::Estimator) from bad settings | Fix configuration and restart |
//! | [`Error::Types`] | Constructing a [`Location`](airq_types::Location) | Report to the user |
//!
//! [`Estimator::estimate_with_provider`](crate::Estimator::estimate_with_provider)
//! never propagates provider errors; it logs them and returns the synthetic
//! estimate instead.

use thiserror::Error;

use airq_types::ParseError;

/// Errors that can occur in the estimation engine.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A data provider failed to answer.
    #[error("Provider '{provider}' failed: {message}")]
    Provider { provider: String, message: String },

    /// A data provider has no data for the requested location.
    #[error("No data available for {0}")]
    Unavailable(String),

    /// Engine settings are invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A value could not be constructed.
    #[error(transparent)]
    Types(#[from] ParseError),
}

impl Error {
    /// Create a provider error.
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Whether the synthetic path should stand in for this error.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Provider { .. } | Error::Unavailable(_))
    }
}

/// Result type alias using airq-core's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_display() {
        let err = Error::provider("openaq", "HTTP 503");
        assert_eq!(err.to_string(), "Provider 'openaq' failed: HTTP 503");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_unavailable_display() {
        let err = Error::Unavailable("Atlantis".to_string());
        assert_eq!(err.to_string(), "No data available for Atlantis");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_config_error_not_recoverable() {
        let err = Error::InvalidConfig("aqi_min >= aqi_max".to_string());
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_from_parse_error() {
        let err: Error = ParseError::InvalidLatitude(100.0).into();
        assert!(matches!(err, Error::Types(_)));
        assert!(err.to_string().contains("latitude"));
    }
}
