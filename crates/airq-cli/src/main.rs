use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod format;
mod style;
mod util;

use cli::{Cli, Commands};
use commands::{cmd_cities, cmd_classify, cmd_config, cmd_estimate, cmd_pm25};
use format::FormatOptions;
use util::load_engine_config;

// Single-threaded so that the local UTC offset stays readable on Unix
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle completions command early (before tracing init)
    if let Commands::Completions { shell } = cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "airq", &mut io::stdout());
        return Ok(());
    }

    // Initialize tracing on stderr, stdout carries command output
    let filter = if cli.quiet {
        EnvFilter::new("warn")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(!cli.no_color)
        .init();

    if let Some(ref path) = cli.output {
        tracing::debug!("Output will be written to: {}", path.display());
    }

    let opts = FormatOptions::new(cli.no_color).with_compact(cli.compact);
    let output = cli.output.as_ref();
    let config = cli.config.as_ref();

    match cli.command {
        Commands::Estimate(args) => {
            tracing::info!(
                query = args.query.as_deref().unwrap_or(""),
                seed = ?args.seed,
                "Estimating air quality"
            );
            let engine = load_engine_config(config)?;
            cmd_estimate(args, engine, cli.json, output, cli.quiet, &opts).await?;
        }
        Commands::Classify { aqi, output: fmt } => {
            tracing::info!("Classifying AQI {}", aqi);
            cmd_classify(aqi, fmt.resolve(cli.json), output, &opts)?;
        }
        Commands::Pm25 {
            concentration,
            output: fmt,
        } => {
            tracing::info!("Converting PM2.5 {} μg/m³", concentration);
            cmd_pm25(concentration, fmt.resolve(cli.json), output, &opts)?;
        }
        Commands::Cities { output: fmt } => {
            cmd_cities(fmt.resolve(cli.json), output, &opts)?;
        }
        Commands::Config { action } => {
            tracing::info!(?action, "Config command");
            cmd_config(action, config, output, &opts)?;
        }
        // Handled before tracing init
        Commands::Completions { .. } => {}
    }

    Ok(())
}
