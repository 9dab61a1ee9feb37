//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Output format for commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Reusable output format arguments
#[derive(Debug, Clone, Args)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl OutputArgs {
    /// Resolve the format: the global --json flag wins over --format.
    pub fn resolve(&self, json: bool) -> OutputFormat {
        if json { OutputFormat::Json } else { self.format }
    }
}

#[derive(Parser)]
#[command(name = "airq")]
#[command(author, version, about = "Air quality estimates and forecasts", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output as JSON (shorthand for --format json)
    #[arg(long, global = true)]
    pub json: bool,

    /// Output compact JSON (no pretty-printing)
    #[arg(long, global = true)]
    pub compact: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Engine configuration file (defaults to the platform config directory)
    #[arg(long, global = true, env = "AIRQ_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write output to file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments of the `estimate` command
#[derive(Debug, Clone, Args)]
pub struct EstimateArgs {
    /// City to search for, or a display name when --lat/--lng are given
    #[arg(required_unless_present_all = ["lat", "lng"])]
    pub query: Option<String>,

    /// Latitude of a map point
    #[arg(long, requires = "lng", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude of a map point
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lng: Option<f64>,

    /// Seed for reproducible estimates
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Start of the forecast (RFC 3339), defaults to now
    #[arg(long, value_parser = parse_rfc3339)]
    pub now: Option<OffsetDateTime>,

    /// Use a demo data provider reporting this PM2.5 value (μg/m³)
    #[arg(long, value_name = "PM25")]
    pub mock_pm25: Option<u32>,

    /// Make the demo provider fail, exercising the synthetic fallback
    #[arg(long, requires = "mock_pm25")]
    pub mock_fail: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate air quality and a 24-hour forecast for a location
    Estimate(EstimateArgs),

    /// Show the health category of an AQI value
    Classify {
        /// AQI value
        #[arg(allow_hyphen_values = true)]
        aqi: i32,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Convert a PM2.5 concentration (μg/m³) to AQI
    Pm25 {
        /// PM2.5 concentration in μg/m³
        #[arg(allow_hyphen_values = true)]
        concentration: f64,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the cities known to the search
    Cities {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Manage engine configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Configuration subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Show configuration file path
    Path,

    /// Write the default configuration to the configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Check the configuration file for errors
    Validate,
}

/// Parse an RFC 3339 timestamp
fn parse_rfc3339(s: &str) -> Result<OffsetDateTime, String> {
    OffsetDateTime::parse(s, &Rfc3339)
        .map_err(|e| format!("'{}' is not an RFC 3339 timestamp: {}", s, e))
}
