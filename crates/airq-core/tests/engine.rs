//! End-to-end tests for the estimation engine.
//!
//! These exercise the public API only: gazetteer lookup, configuration
//! loading and the estimator with both synthetic and provider paths.

use airq_core::{
    AirQualityProvider, AqiCategory, EngineConfig, EstimateSource, Estimator, MockProvider,
    SequenceSource, StdRandom, Trend, gazetteer,
};
use time::OffsetDateTime;
use time::macros::datetime;

const NOW: OffsetDateTime = datetime!(2024-06-01 00:00 UTC);

#[test]
fn test_search_then_estimate() {
    let location = gazetteer::search("beijing").unwrap().into_location();
    let estimate = Estimator::default().estimate(&location, NOW, &mut StdRandom::seeded(1));

    assert_eq!(estimate.location.name, "Beijing, China");
    assert!((150..250).contains(&estimate.aqi));
    assert!(estimate.category >= AqiCategory::UnhealthyForSensitiveGroups);
    assert!(estimate.pollutants.pm10 >= estimate.pollutants.pm25);
    assert_eq!(estimate.forecast.len(), 24);
}

#[test]
fn test_every_gazetteer_city_estimates() {
    let estimator = Estimator::default();
    let mut rng = StdRandom::seeded(7);
    for city in &gazetteer::CITIES {
        let estimate = estimator.estimate(&city.location(), NOW, &mut rng);
        let model = estimator.forecast_model();
        assert!(
            estimate
                .forecast
                .iter()
                .all(|p| (model.aqi_min..=model.aqi_max).contains(&p.aqi)),
            "{} forecast out of range",
            city.name
        );
    }
}

#[test]
fn test_forecast_summary_of_flat_estimate() {
    let location = gazetteer::search("toronto").unwrap().into_location();
    let mut rng = SequenceSource::constant(0.5);
    let estimate = Estimator::default().estimate(&location, NOW, &mut rng);

    // Clean tier 10..60 with u = 0.5
    assert_eq!(estimate.aqi, 35);
    let summary = estimate.forecast_summary().unwrap();
    // 00:00 and 23:00 are both night hours.
    assert_eq!(summary.current_aqi, summary.final_aqi);
    assert_eq!(summary.trend, Trend::Stable);
    // Rush hours peak at 35 * 1.2 = 42, first at 07:00.
    assert_eq!(summary.peak.aqi, 42);
    assert_eq!(summary.peak.timestamp.hour(), 7);
}

#[test]
fn test_config_file_drives_estimator() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[[profiles.rules]]
name = "cambodia"
fragments = ["phnom penh", "siem reap"]
low = 60
high = 140

[forecast]
hours = 12
"#,
    )
    .unwrap();

    let config = EngineConfig::load_validated(&path).unwrap();
    let estimator = Estimator::from_config(config).unwrap();
    let location = gazetteer::search("phnom penh").unwrap().into_location();
    let estimate = estimator.estimate(&location, NOW, &mut SequenceSource::constant(0.5));

    assert_eq!(estimate.aqi, 100);
    assert_eq!(estimate.category, AqiCategory::Moderate);
    assert_eq!(estimate.forecast.len(), 12);
}

#[test]
fn test_estimate_json_shape() {
    let location = gazetteer::search("london").unwrap().into_location();
    let estimate = Estimator::default().estimate(&location, NOW, &mut StdRandom::seeded(5));
    let json = serde_json::to_value(&estimate).unwrap();

    assert_eq!(json["location"]["name"], "London, UK");
    assert_eq!(json["source"], "synthetic");
    assert_eq!(json["generated_at"], "2024-06-01T00:00:00Z");
    assert_eq!(json["forecast"].as_array().unwrap().len(), 24);
    assert!(json["pollutants"]["pm25"].is_u64());
}

#[tokio::test]
async fn test_provider_round_trip_through_trait_object() {
    let provider: Box<dyn AirQualityProvider> =
        Box::new(MockProvider::builder().name("station-1").pm25(60).build());
    let location = gazetteer::search("cairo").unwrap().into_location();

    let estimate = Estimator::default()
        .estimate_with_provider(provider.as_ref(), &location, NOW, &mut StdRandom::seeded(2))
        .await;

    assert_eq!(estimate.source, EstimateSource::Provider("station-1".to_string()));
    assert_eq!(estimate.category, AqiCategory::Unhealthy);
    assert_eq!(estimate.pollutants.pm25, 60);
}

#[tokio::test]
async fn test_failing_provider_never_surfaces_error() {
    let provider = MockProvider::builder().failing().build();
    let location = gazetteer::search("Atlantis").unwrap().into_location();

    let estimate = Estimator::default()
        .estimate_with_provider(&provider, &location, NOW, &mut StdRandom::seeded(4))
        .await;

    assert_eq!(estimate.location.name, "New York, NY, USA");
    assert_eq!(estimate.source, EstimateSource::Synthetic);
    assert!((50..100).contains(&estimate.aqi));
}
