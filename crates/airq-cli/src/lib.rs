//! Command-line interface for the airq air-quality engine.
//!
//! The `airq` binary estimates air quality for a city or map point, prints a
//! 24-hour forecast and exposes the AQI helpers of `airq-core`.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `estimate` | Estimate AQI, pollutants and a forecast for a location |
//! | `classify` | Show the health category of an AQI value |
//! | `pm25` | Convert a PM2.5 concentration to AQI |
//! | `cities` | List the cities known to the search |
//! | `config` | Show, initialize or validate the engine configuration |
//! | `completions` | Generate shell completions |
//!
//! # Output Formats
//!
//! - **Text** (default): Human-readable colored output
//! - **JSON**: Machine-readable JSON (`--json` or `--format json`)
//!
//! # Configuration
//!
//! Engine settings are read from `~/.config/airq/config.toml` (or platform
//! equivalent) when that file exists. `--config` or `AIRQ_CONFIG` point at
//! another file. `airq config init` writes the built-in defaults.
//!
//! # Environment Variables
//!
//! - `AIRQ_CONFIG`: Configuration file path
//! - `NO_COLOR`: Disable colored output
//! - `RUST_LOG`: Log filter for diagnostics written to stderr
//!
//! # Reproducibility
//!
//! `--seed` and `--now` pin every random draw and the forecast start, so the
//! same invocation prints the same estimate:
//!
//! ```text
//! airq estimate beijing --seed 7 --now 2024-06-01T00:00:00Z --json
//! ```

// This crate is primarily a binary CLI application.
// The command implementations are in main.rs and its modules.

// Re-export core dependencies for convenience
pub use airq_core;
pub use airq_types;
