//! Error types for value parsing in airq-types.

use thiserror::Error;

/// Errors that can occur when constructing or parsing air-quality values.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Latitude outside -90..=90 degrees (or not a number).
    #[error("Invalid latitude {0}: must be between -90 and 90 degrees")]
    InvalidLatitude(f64),

    /// Longitude outside -180..=180 degrees (or not a number).
    #[error("Invalid longitude {0}: must be between -180 and 180 degrees")]
    InvalidLongitude(f64),

    /// Text that does not name an AQI category.
    #[error("Unknown AQI category: {0}")]
    UnknownCategory(String),

    /// Text that does not name a pollutant.
    #[error("Unknown pollutant: {0}")]
    UnknownPollutant(String),
}

/// Result type alias using airq-types' ParseError type.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
