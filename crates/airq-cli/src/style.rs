//! Visual styling utilities for the CLI.
//!
//! This module provides consistent styling across all CLI output:
//! AQI values colored by their health category, per-pollutant levels,
//! status messages and section headers.

use owo_colors::OwoColorize;

use airq_types::{AqiCategory, PollutantLevel, Trend};

// ============================================================================
// Colored Value Formatting
// ============================================================================

/// Color `text` with the reporting color of an AQI category.
pub fn paint_category(text: &str, category: AqiCategory, no_color: bool) -> String {
    if no_color {
        return text.to_string();
    }

    match category {
        AqiCategory::Good => format!("{}", text.green()),
        AqiCategory::Moderate => format!("{}", text.yellow()),
        // Orange color (RGB: 255, 165, 0)
        AqiCategory::UnhealthyForSensitiveGroups => format!("{}", text.truecolor(255, 165, 0)),
        AqiCategory::Unhealthy => format!("{}", text.red()),
        AqiCategory::VeryUnhealthy => format!("{}", text.magenta()),
        // Maroon color (RGB: 128, 0, 0)
        AqiCategory::Hazardous => format!("{}", text.truecolor(128, 0, 0).bold()),
    }
}

/// Format an AQI value with the color of its category.
pub fn format_aqi_colored(aqi: i32, category: AqiCategory, no_color: bool) -> String {
    paint_category(&aqi.to_string(), category, no_color)
}

/// Format a category label with its color.
pub fn format_category_colored(category: AqiCategory, no_color: bool) -> String {
    paint_category(category.label(), category, no_color)
}

/// Format a pollutant level with appropriate color.
pub fn format_level_colored(level: PollutantLevel, no_color: bool) -> String {
    let label = level.to_string();
    if no_color {
        return label;
    }

    match level {
        PollutantLevel::Good => format!("{}", label.green()),
        PollutantLevel::Moderate => format!("{}", label.yellow()),
        PollutantLevel::Unhealthy => format!("{}", label.red()),
    }
}

/// Short bar whose length follows the AQI (one cell per 10 AQI, capped).
pub fn format_aqi_bar(aqi: i32, category: AqiCategory, no_color: bool) -> String {
    const MAX_CELLS: i32 = 30;
    let cells = (aqi / 10).clamp(0, MAX_CELLS) as usize;
    let bar = if no_color {
        "#".repeat(cells)
    } else {
        "█".repeat(cells)
    };
    paint_category(&bar, category, no_color)
}

// ============================================================================
// Status Messages
// ============================================================================

/// Format a success message.
pub fn format_success(message: &str, no_color: bool) -> String {
    if no_color {
        format!("[OK] {}", message)
    } else {
        format!("{} {}", "[OK]".green(), message)
    }
}

/// Format a warning message.
pub fn format_warning(message: &str, no_color: bool) -> String {
    if no_color {
        format!("[!!] {}", message)
    } else {
        format!("{} {}", "[!!]".yellow(), message)
    }
}

// ============================================================================
// Trend Indicators
// ============================================================================

/// Arrow for a forecast trend.
pub fn trend_indicator(trend: Trend, no_color: bool) -> &'static str {
    match trend {
        Trend::Stable => "-",
        Trend::Worsening if no_color => "^",
        Trend::Worsening => "↑",
        Trend::Improving if no_color => "v",
        Trend::Improving => "↓",
    }
}

// ============================================================================
// Section Headers
// ============================================================================

/// Format a title header.
pub fn format_title(title: &str, no_color: bool) -> String {
    let underline = if no_color { "=" } else { "━" };
    let width = title.chars().count();
    if no_color {
        format!("{}\n{}", title, underline.repeat(width))
    } else {
        format!("{}\n{}", title.bold(), underline.repeat(width).dimmed())
    }
}
