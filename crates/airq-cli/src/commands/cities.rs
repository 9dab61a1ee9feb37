//! Cities command implementation.

use std::path::PathBuf;

use anyhow::Result;
use airq_core::gazetteer::CITIES;

use crate::cli::OutputFormat;
use crate::format::{CityReport, FormatOptions, format_cities_text};
use crate::util::write_output;

pub fn cmd_cities(
    format: OutputFormat,
    output: Option<&PathBuf>,
    opts: &FormatOptions,
) -> Result<()> {
    let cities: Vec<CityReport> = CITIES.iter().map(CityReport::from).collect();

    let content = match format {
        OutputFormat::Json => opts.as_json(&cities)?,
        OutputFormat::Text => format_cities_text(&cities, opts),
    };

    write_output(output, &content)
}
