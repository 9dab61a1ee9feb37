//! Classify command implementation.

use std::path::PathBuf;

use anyhow::Result;
use airq_core::classify_aqi;

use crate::cli::OutputFormat;
use crate::format::{CategoryReport, FormatOptions, format_category_text};
use crate::util::write_output;

pub fn cmd_classify(
    aqi: i32,
    format: OutputFormat,
    output: Option<&PathBuf>,
    opts: &FormatOptions,
) -> Result<()> {
    let report = CategoryReport::new(aqi, classify_aqi(aqi));

    let content = match format {
        OutputFormat::Json => opts.as_json(&report)?,
        OutputFormat::Text => format_category_text(&report, opts),
    };

    write_output(output, &content)
}
