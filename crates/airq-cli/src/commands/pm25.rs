//! PM2.5 conversion command implementation.

use std::path::PathBuf;

use anyhow::{Result, bail};
use airq_core::categorize_pm25;

use crate::cli::OutputFormat;
use crate::format::{CategoryReport, FormatOptions, Pm25Report, format_pm25_text};
use crate::util::write_output;

pub fn cmd_pm25(
    concentration: f64,
    format: OutputFormat,
    output: Option<&PathBuf>,
    opts: &FormatOptions,
) -> Result<()> {
    if !concentration.is_finite() || concentration < 0.0 {
        bail!("PM2.5 concentration must be a non-negative number, got {}", concentration);
    }

    let (aqi, category) = categorize_pm25(concentration);
    let report = Pm25Report {
        pm25: concentration,
        aqi: CategoryReport::new(aqi, category),
    };

    let content = match format {
        OutputFormat::Json => opts.as_json(&report)?,
        OutputFormat::Text => format_pm25_text(&report, opts),
    };

    write_output(output, &content)
}
