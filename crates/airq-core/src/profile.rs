//! Location profiles: baseline AQI ranges chosen by location name.
//!
//! A [`ProfileTable`] is an ordered list of rules. Each rule carries a set of
//! name fragments; the first rule with a fragment contained in the location
//! name (case-insensitive) wins, and unmatched names use the default range.
//!
//! # Example
//!
//! ```
//! use airq_core::ProfileTable;
//!
//! let table = ProfileTable::default();
//! let resolved = table.resolve("Beijing Test Site");
//! assert_eq!(resolved.tier, "high");
//! assert_eq!((resolved.range.low, resolved.range.high), (150, 250));
//!
//! // Unmatched names fall through to the default range
//! assert_eq!(table.resolve("Reykjavik").tier, "default");
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ValidationError;
use crate::rng::RandomSource;

/// Tier name reported when no rule matches.
pub const DEFAULT_TIER: &str = "default";

/// Half-open range `[low, high)` from which a baseline AQI is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineRange {
    /// Smallest baseline that can be drawn.
    pub low: i32,
    /// One past the largest baseline that can be drawn.
    pub high: i32,
}

impl BaselineRange {
    pub const fn new(low: i32, high: i32) -> Self {
        Self { low, high }
    }

    /// Draw a uniformly distributed baseline from the range.
    pub fn draw<R: RandomSource + ?Sized>(&self, rng: &mut R) -> i32 {
        rng.int_in(self.low, self.high)
    }

    /// Whether `aqi` can be drawn from this range.
    #[must_use]
    pub fn contains(&self, aqi: i32) -> bool {
        (self.low..self.high).contains(&aqi)
    }

    pub(crate) fn validate(&self, field: &str) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.low < 0 {
            errors.push(ValidationError::new(
                format!("{}.low", field),
                format!("baseline cannot be negative (got {})", self.low),
            ));
        }
        if self.low >= self.high {
            errors.push(ValidationError::new(
                field,
                format!("empty range: low {} must be below high {}", self.low, self.high),
            ));
        }
        errors
    }
}

/// One rule of the profile table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRule {
    /// Tier name reported when this rule matches (e.g. `"high"`).
    pub name: String,
    /// Name fragments; any one contained in the location name matches.
    pub fragments: Vec<String>,
    pub low: i32,
    pub high: i32,
}

impl ProfileRule {
    /// Create a rule from a tier name, fragments and a baseline range.
    pub fn new(name: &str, fragments: &[&str], low: i32, high: i32) -> Self {
        Self {
            name: name.to_string(),
            fragments: fragments.iter().map(|f| f.to_lowercase()).collect(),
            low,
            high,
        }
    }

    /// Baseline range of this rule.
    #[must_use]
    pub fn range(&self) -> BaselineRange {
        BaselineRange::new(self.low, self.high)
    }

    /// Whether the lowercased location name contains one of the fragments.
    fn matches(&self, name_lower: &str) -> bool {
        self.fragments
            .iter()
            .any(|fragment| name_lower.contains(&fragment.to_lowercase()))
    }

    pub(crate) fn validate(&self, prefix: &str) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(ValidationError::new(
                format!("{}.name", prefix),
                "tier name cannot be empty",
            ));
        }
        if self.fragments.is_empty() {
            errors.push(ValidationError::new(
                format!("{}.fragments", prefix),
                "at least one name fragment is required",
            ));
        }
        if self.fragments.iter().any(|f| f.trim().is_empty()) {
            errors.push(ValidationError::new(
                format!("{}.fragments", prefix),
                "fragments cannot be empty strings",
            ));
        }
        errors.extend(self.range().validate(prefix));
        errors
    }
}

/// Outcome of resolving a location name against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedProfile<'a> {
    /// Name of the matching tier, or [`DEFAULT_TIER`].
    pub tier: &'a str,
    pub range: BaselineRange,
}

/// Ordered rule table mapping location names to baseline ranges.
///
/// A configured `rules` list replaces the built-in rules entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileTable {
    /// Rules in priority order; earlier rules win.
    pub rules: Vec<ProfileRule>,
    /// Range for names no rule matches.
    pub default: BaselineRange,
}

impl Default for ProfileTable {
    fn default() -> Self {
        Self {
            rules: vec![
                ProfileRule::new("high", &["beijing", "delhi", "mumbai"], 150, 250),
                ProfileRule::new("moderate", &["london", "new york", "paris"], 50, 100),
                ProfileRule::new("clean", &["sydney", "singapore", "toronto"], 10, 60),
            ],
            default: BaselineRange::new(20, 170),
        }
    }
}

impl ProfileTable {
    /// Create a table from rules and a default range.
    pub fn new(rules: Vec<ProfileRule>, default: BaselineRange) -> Self {
        Self { rules, default }
    }

    /// Append a rule with the lowest priority (still above the default).
    #[must_use]
    pub fn with_rule(mut self, rule: ProfileRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Resolve a location name to its tier and baseline range.
    pub fn resolve(&self, location_name: &str) -> ResolvedProfile<'_> {
        let name_lower = location_name.to_lowercase();

        let resolved = self
            .rules
            .iter()
            .find(|rule| rule.matches(&name_lower))
            .map(|rule| ResolvedProfile {
                tier: rule.name.as_str(),
                range: rule.range(),
            })
            .unwrap_or(ResolvedProfile {
                tier: DEFAULT_TIER,
                range: self.default,
            });

        debug!(
            location = location_name,
            tier = resolved.tier,
            low = resolved.range.low,
            high = resolved.range.high,
            "resolved location profile"
        );
        resolved
    }

    /// Baseline range for a location name.
    pub fn resolve_baseline(&self, location_name: &str) -> BaselineRange {
        self.resolve(location_name).range
    }

    /// Validate every rule and the default range.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for (i, rule) in self.rules.iter().enumerate() {
            errors.extend(rule.validate(&format!("profiles.rules[{}]", i)));
        }
        errors.extend(self.default.validate("profiles.default"));
        errors
    }
}
