//! Offline city lookup.
//!
//! A fixed table of well-known cities stands in for a geocoding service.
//! Queries are matched case-insensitively: first an exact key match, then a
//! partial match in either direction ("york" finds New York, and so does
//! "new york city"). Unknown queries fall back to New York so that a search
//! always produces a location to estimate.

use tracing::{debug, warn};

use airq_types::Location;

/// One gazetteer entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    /// Lowercase lookup key.
    pub key: &'static str,
    /// Display name, e.g. `"Tokyo, Japan"`.
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl City {
    const fn new(key: &'static str, name: &'static str, latitude: f64, longitude: f64) -> Self {
        Self {
            key,
            name,
            latitude,
            longitude,
        }
    }

    /// The city as an estimable location.
    pub fn location(&self) -> Location {
        Location {
            name: self.name.to_string(),
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Known cities, in match priority order.
pub const CITIES: [City; 20] = [
    City::new("new york", "New York, NY, USA", 40.7128, -74.0060),
    City::new("london", "London, UK", 51.5074, -0.1278),
    City::new("tokyo", "Tokyo, Japan", 35.6762, 139.6503),
    City::new("paris", "Paris, France", 48.8566, 2.3522),
    City::new("sydney", "Sydney, Australia", -33.8688, 151.2093),
    City::new("berlin", "Berlin, Germany", 52.5200, 13.4050),
    City::new("moscow", "Moscow, Russia", 55.7558, 37.6176),
    City::new("beijing", "Beijing, China", 39.9042, 116.4074),
    City::new("mumbai", "Mumbai, India", 19.0760, 72.8777),
    City::new("cairo", "Cairo, Egypt", 30.0444, 31.2357),
    City::new("los angeles", "Los Angeles, CA, USA", 34.0522, -118.2437),
    City::new("bangkok", "Bangkok, Thailand", 13.7563, 100.5018),
    City::new("phnom penh", "Phnom Penh, Cambodia", 11.5564, 104.9282),
    City::new("singapore", "Singapore", 1.3521, 103.8198),
    City::new("toronto", "Toronto, Canada", 43.6532, -79.3832),
    City::new("mexico city", "Mexico City, Mexico", 19.4326, -99.1332),
    City::new("jakarta", "Jakarta, Indonesia", -6.2088, 106.8456),
    City::new("rome", "Rome, Italy", 41.9028, 12.4964),
    City::new("madrid", "Madrid, Spain", 40.4168, -3.7038),
    City::new("amsterdam", "Amsterdam, Netherlands", 52.3676, 4.9041),
];

const FALLBACK: City = CITIES[0];

/// Result of a gazetteer search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The query matched a known city.
    Found(Location),
    /// Nothing matched; the fallback city was used instead.
    Fallback { query: String, location: Location },
}

impl SearchOutcome {
    /// The selected location.
    pub fn location(&self) -> &Location {
        match self {
            SearchOutcome::Found(location) => location,
            SearchOutcome::Fallback { location, .. } => location,
        }
    }

    /// Take the selected location.
    pub fn into_location(self) -> Location {
        match self {
            SearchOutcome::Found(location) => location,
            SearchOutcome::Fallback { location, .. } => location,
        }
    }

    /// Whether the query was not recognised.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, SearchOutcome::Fallback { .. })
    }
}

/// Find the city matching `query`.
///
/// Returns `None` for an empty (or all-whitespace) query.
///
/// ```
/// use airq_core::gazetteer::search;
///
/// let found = search("Phnom Penh").unwrap();
/// assert_eq!(found.location().name, "Phnom Penh, Cambodia");
/// assert!(!found.is_fallback());
///
/// let fallback = search("Atlantis").unwrap();
/// assert!(fallback.is_fallback());
/// assert_eq!(fallback.location().name, "New York, NY, USA");
///
/// assert!(search("   ").is_none());
/// ```
pub fn search(query: &str) -> Option<SearchOutcome> {
    let key = query.trim().to_lowercase();
    if key.is_empty() {
        return None;
    }

    match lookup(&key) {
        Some(city) => {
            debug!(query, city = city.name, "gazetteer match");
            Some(SearchOutcome::Found(city.location()))
        }
        None => {
            warn!(
                query,
                fallback = FALLBACK.name,
                "location not found, using fallback city"
            );
            Some(SearchOutcome::Fallback {
                query: query.trim().to_string(),
                location: FALLBACK.location(),
            })
        }
    }
}

/// Exact key match first, then partial match in either direction.
fn lookup(key: &str) -> Option<&'static City> {
    CITIES.iter().find(|city| city.key == key).or_else(|| {
        CITIES
            .iter()
            .find(|city| city.key.contains(key) || key.contains(city.key))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_case_insensitive() {
        let outcome = search("  TOKYO ").unwrap();
        assert_eq!(
            outcome,
            SearchOutcome::Found(Location {
                name: "Tokyo, Japan".to_string(),
                latitude: 35.6762,
                longitude: 139.6503,
            })
        );
    }

    #[test]
    fn test_partial_match_query_inside_key() {
        assert_eq!(search("york").unwrap().location().name, "New York, NY, USA");
        assert_eq!(search("angeles").unwrap().location().name, "Los Angeles, CA, USA");
    }

    #[test]
    fn test_partial_match_key_inside_query() {
        let outcome = search("Downtown Madrid, Spain").unwrap();
        assert_eq!(outcome.location().name, "Madrid, Spain");
        assert!(!outcome.is_fallback());
    }

    #[test]
    fn test_partial_match_uses_table_order() {
        // "par" is only inside "paris"; "o" is first found in "new york".
        assert_eq!(search("par").unwrap().location().name, "Paris, France");
        assert_eq!(search("o").unwrap().location().name, "New York, NY, USA");
    }

    #[test]
    fn test_unknown_falls_back_to_new_york() {
        let outcome = search("Atlantis").unwrap();
        assert!(outcome.is_fallback());
        match &outcome {
            SearchOutcome::Fallback { query, location } => {
                assert_eq!(query, "Atlantis");
                assert_eq!(location.name, "New York, NY, USA");
            }
            SearchOutcome::Found(_) => panic!("expected fallback"),
        }
        assert_eq!(outcome.into_location().latitude, 40.7128);
    }

    #[test]
    fn test_empty_query() {
        assert!(search("").is_none());
        assert!(search(" \t").is_none());
    }

    #[test]
    fn test_table_entries_are_valid_locations() {
        for city in &CITIES {
            assert_eq!(city.key, city.key.to_lowercase());
            assert!(Location::new(city.name, city.latitude, city.longitude).is_ok());
            assert_eq!(search(city.key).unwrap().location(), &city.location());
        }
    }
}
