//! AQI health categories.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Health category for an Air Quality Index value.
///
/// # Ordering
///
/// Categories are ordered by severity: `Good < Moderate < ... < Hazardous`.
/// This allows comparisons like `if category >= AqiCategory::Unhealthy { warn!(...) }`.
///
/// # Display vs Serialization
///
/// **Note:** The `Display` trait returns the human-readable label
/// ("Unhealthy for Sensitive Groups"), while serde serialization uses the
/// variant names ("UnhealthyForSensitiveGroups").
///
/// ```
/// use airq_types::AqiCategory;
///
/// assert_eq!(
///     format!("{}", AqiCategory::UnhealthyForSensitiveGroups),
///     "Unhealthy for Sensitive Groups"
/// );
/// assert!(AqiCategory::Hazardous > AqiCategory::VeryUnhealthy);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AqiCategory {
    /// AQI 0-50.
    Good,
    /// AQI 51-100.
    Moderate,
    /// AQI 101-150.
    UnhealthyForSensitiveGroups,
    /// AQI 151-200.
    Unhealthy,
    /// AQI 201-300.
    VeryUnhealthy,
    /// AQI above 300.
    Hazardous,
}

impl AqiCategory {
    /// All categories in ascending severity order.
    pub const ALL: [AqiCategory; 6] = [
        AqiCategory::Good,
        AqiCategory::Moderate,
        AqiCategory::UnhealthyForSensitiveGroups,
        AqiCategory::Unhealthy,
        AqiCategory::VeryUnhealthy,
        AqiCategory::Hazardous,
    ];

    /// Inclusive upper AQI bound of this category, `None` for the open-ended top band.
    #[must_use]
    pub const fn upper_bound(&self) -> Option<i32> {
        match self {
            AqiCategory::Good => Some(50),
            AqiCategory::Moderate => Some(100),
            AqiCategory::UnhealthyForSensitiveGroups => Some(150),
            AqiCategory::Unhealthy => Some(200),
            AqiCategory::VeryUnhealthy => Some(300),
            AqiCategory::Hazardous => None,
        }
    }

    /// Severity rank, 0 for `Good` through 5 for `Hazardous`.
    #[must_use]
    pub const fn severity(&self) -> u8 {
        *self as u8
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }

    /// EPA reporting color name for the category.
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            AqiCategory::Good => "green",
            AqiCategory::Moderate => "yellow",
            AqiCategory::UnhealthyForSensitiveGroups => "orange",
            AqiCategory::Unhealthy => "red",
            AqiCategory::VeryUnhealthy => "purple",
            AqiCategory::Hazardous => "maroon",
        }
    }

    /// Short health guidance for the category.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Air quality is satisfactory and poses little or no risk",
            AqiCategory::Moderate => {
                "Acceptable; unusually sensitive people should limit prolonged exertion"
            }
            AqiCategory::UnhealthyForSensitiveGroups => {
                "Sensitive groups may experience health effects"
            }
            AqiCategory::Unhealthy => "Everyone may begin to experience health effects",
            AqiCategory::VeryUnhealthy => "Health alert: increased risk for everyone",
            AqiCategory::Hazardous => "Emergency conditions: everyone is likely to be affected",
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AqiCategory {
    type Err = ParseError;

    /// Parse either the variant name or the display label, ignoring case,
    /// spaces, dashes and underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        Self::ALL
            .into_iter()
            .find(|category| {
                let variant = format!("{:?}", category).to_lowercase();
                let label: String = category
                    .label()
                    .chars()
                    .filter(|c| *c != ' ')
                    .flat_map(char::to_lowercase)
                    .collect();
                key == variant || key == label
            })
            .ok_or_else(|| ParseError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_matches_ordering() {
        for pair in AqiCategory::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].severity() < pair[1].severity());
        }
        assert_eq!(AqiCategory::Good.severity(), 0);
        assert_eq!(AqiCategory::Hazardous.severity(), 5);
    }

    #[test]
    fn test_upper_bounds_increase() {
        let bounds: Vec<i32> = AqiCategory::ALL
            .iter()
            .filter_map(AqiCategory::upper_bound)
            .collect();
        assert_eq!(bounds, vec![50, 100, 150, 200, 300]);
        assert_eq!(AqiCategory::Hazardous.upper_bound(), None);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(AqiCategory::Good.to_string(), "Good");
        assert_eq!(AqiCategory::VeryUnhealthy.to_string(), "Very Unhealthy");
    }

    #[test]
    fn test_from_str_accepts_variant_and_label() {
        assert_eq!("Good".parse::<AqiCategory>(), Ok(AqiCategory::Good));
        assert_eq!(
            "unhealthy for sensitive groups".parse::<AqiCategory>(),
            Ok(AqiCategory::UnhealthyForSensitiveGroups)
        );
        assert_eq!(
            "VeryUnhealthy".parse::<AqiCategory>(),
            Ok(AqiCategory::VeryUnhealthy)
        );
        assert_eq!(
            "very-unhealthy".parse::<AqiCategory>(),
            Ok(AqiCategory::VeryUnhealthy)
        );
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "smoky".parse::<AqiCategory>().unwrap_err();
        assert_eq!(err, ParseError::UnknownCategory("smoky".to_string()));
    }

    #[test]
    fn test_colors_are_distinct() {
        let mut colors: Vec<&str> = AqiCategory::ALL.iter().map(AqiCategory::color).collect();
        colors.sort_unstable();
        colors.dedup();
        assert_eq!(colors.len(), 6);
    }
}

/// Property-based tests for category parsing and ordering.
#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_category() -> impl Strategy<Value = AqiCategory> {
        prop::sample::select(AqiCategory::ALL.to_vec())
    }

    proptest! {
        /// Labels parse back regardless of case.
        #[test]
        fn label_round_trips(category in any_category(), upper in any::<bool>()) {
            let label = if upper {
                category.label().to_uppercase()
            } else {
                category.label().to_string()
            };
            prop_assert_eq!(label.parse::<AqiCategory>().unwrap(), category);
        }

        /// Severity order agrees with the upper bounds.
        #[test]
        fn severity_follows_bounds(a in any_category(), b in any_category()) {
            let bound = |c: AqiCategory| c.upper_bound().unwrap_or(i32::MAX);
            prop_assert_eq!(a.cmp(&b), bound(a).cmp(&bound(b)));
        }
    }
}
