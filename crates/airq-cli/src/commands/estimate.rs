//! Estimate command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use airq_core::{
    EngineConfig, Estimator, MockProvider, RandomSource, SearchOutcome, StdRandom, gazetteer,
};
use airq_types::Location;

use crate::cli::{EstimateArgs, OutputFormat};
use crate::format::{FormatOptions, format_estimate_text};
use crate::style;
use crate::util::{local_now, write_output};

/// Name reported by the `--mock-pm25` provider.
const DEMO_PROVIDER: &str = "demo-station";

/// Turn the command line into a location.
///
/// Coordinates win over the gazetteer. A query given alongside coordinates
/// becomes the display name of the point.
pub fn resolve_location(
    query: Option<&str>,
    coordinates: Option<(f64, f64)>,
) -> Result<SearchOutcome> {
    if let Some((lat, lng)) = coordinates {
        let location = match query.map(str::trim).filter(|q| !q.is_empty()) {
            Some(name) => Location::new(name, lat, lng),
            None => Location::from_coordinates(lat, lng),
        }
        .context("Invalid coordinates")?;
        return Ok(SearchOutcome::Found(location));
    }

    let query = query.unwrap_or_default();
    match gazetteer::search(query) {
        Some(outcome) => Ok(outcome),
        None => bail!("Search query is empty. Pass a city name or --lat/--lng."),
    }
}

pub async fn cmd_estimate(
    args: EstimateArgs,
    config: EngineConfig,
    json: bool,
    output: Option<&PathBuf>,
    quiet: bool,
    opts: &FormatOptions,
) -> Result<()> {
    let format = args.output.resolve(json);
    let coordinates = args.lat.zip(args.lng);

    let outcome = resolve_location(args.query.as_deref(), coordinates)?;
    if let SearchOutcome::Fallback { query, location } = &outcome
        && !quiet
    {
        eprintln!(
            "{}",
            style::format_warning(
                &format!("No city matches '{}', showing {}", query, location.name),
                opts.no_color,
            )
        );
    }
    let location = outcome.into_location();

    let estimator = Estimator::from_config(config)?;
    let now = args.now.unwrap_or_else(local_now);
    let mut rng: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(StdRandom::seeded(seed)),
        None => Box::new(StdRandom::from_entropy()),
    };

    let estimate = match args.mock_pm25 {
        Some(pm25) => {
            let mut builder = MockProvider::builder().name(DEMO_PROVIDER).pm25(pm25);
            if args.mock_fail {
                builder = builder.failing();
            }
            let provider = builder.build();
            estimator
                .estimate_with_provider(&provider, &location, now, rng.as_mut())
                .await
        }
        None => estimator.estimate(&location, now, rng.as_mut()),
    };

    tracing::debug!(aqi = estimate.aqi, source = %estimate.source, "estimate ready");

    let content = match format {
        OutputFormat::Json => opts.as_json(&estimate)?,
        OutputFormat::Text => format_estimate_text(&estimate, opts)?,
    };

    write_output(output, &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_city() {
        let outcome = resolve_location(Some("tokyo"), None).unwrap();
        assert!(!outcome.is_fallback());
        assert_eq!(outcome.location().name, "Tokyo, Japan");
    }

    #[test]
    fn test_resolve_unknown_city_falls_back() {
        let outcome = resolve_location(Some("Atlantis"), None).unwrap();
        assert!(outcome.is_fallback());
        assert_eq!(outcome.location().name, "New York, NY, USA");
    }

    #[test]
    fn test_resolve_empty_query_is_error() {
        assert!(resolve_location(Some("   "), None).is_err());
        assert!(resolve_location(None, None).is_err());
    }

    #[test]
    fn test_resolve_coordinates() {
        let outcome = resolve_location(None, Some((11.55642, 104.92821))).unwrap();
        assert_eq!(outcome.location().name, "Location (11.5564, 104.9282)");

        let named = resolve_location(Some("Riverside"), Some((11.5, 104.9))).unwrap();
        assert_eq!(named.location().name, "Riverside");
    }

    #[test]
    fn test_resolve_invalid_coordinates() {
        let err = resolve_location(None, Some((95.0, 0.0))).unwrap_err();
        assert!(err.to_string().contains("Invalid coordinates"));
    }
}
