//! Example: Estimating Air Quality for a City
//!
//! This example looks a city up in the built-in gazetteer, produces a
//! synthetic estimate and prints the current AQI, the pollutant breakdown
//! and a summary of the 24-hour forecast. It then repeats the estimate
//! through a mock data provider.
//!
//! Run with: `cargo run --example estimate_city -- <CITY> [SEED]`

use std::env;

use airq_core::{Estimator, MockProvider, StdRandom, gazetteer};
use time::OffsetDateTime;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let query = if args.len() > 1 {
        &args[1]
    } else {
        eprintln!("Usage: {} <CITY> [SEED]", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} \"Phnom Penh\"", args[0]);
        eprintln!("  {} london 42", args[0]);
        std::process::exit(1);
    };
    let seed: u64 = match args.get(2) {
        Some(s) => s.parse()?,
        None => 42,
    };

    let Some(outcome) = gazetteer::search(query) else {
        eprintln!("Please enter a location to search");
        std::process::exit(1);
    };
    if outcome.is_fallback() {
        println!("\"{}\" not found, showing {} instead", query, outcome.location().name);
    }
    let location = outcome.into_location();

    let estimator = Estimator::default();
    // Diurnal windows follow the local clock, or UTC when its offset is unknown
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let mut rng = StdRandom::seeded(seed);
    let estimate = estimator.estimate(&location, now, &mut rng);

    println!();
    println!("{}", estimate.location);
    println!("  AQI:      {} ({})", estimate.aqi, estimate.category);
    println!("  Advice:   {}", estimate.category.description());
    println!();
    println!("Pollutants:");
    for (pollutant, value) in estimate.pollutants.iter() {
        println!(
            "  {:<6} {:>4} {:<6} {}",
            pollutant.name(),
            value,
            pollutant.unit(),
            pollutant.level(value)
        );
    }

    if let Some(summary) = estimate.forecast_summary() {
        println!();
        println!("Forecast (24h):");
        println!("  Average:  {}", summary.average_aqi);
        println!(
            "  Peak:     {} at {:02}:00",
            summary.peak.aqi,
            summary.peak.timestamp.hour()
        );
        println!("  Trend:    {}", summary.trend);
    }

    // Same location through a provider
    let provider = MockProvider::builder().name("demo-station").pm25(22).build();
    let observed = estimator
        .estimate_with_provider(&provider, &location, now, &mut rng)
        .await;
    println!();
    println!(
        "Provider {}: AQI {} ({})",
        observed.source, observed.aqi, observed.category
    );

    Ok(())
}
