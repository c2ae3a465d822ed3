pub mod formatter;

pub use formatter::{
    format_breakdown, format_compact, format_comparison_table, format_comparison_tsv,
    format_forecast, format_forecast_tsv, format_outcome, format_outcome_counts, format_score,
    format_score_result, format_score_tsv, should_use_colors,
};

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::dashboard::Report;

/// How a report is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Table,
    /// Tab-separated values for scripting (no colors)
    Tsv,
    /// Pretty-printed JSON
    Json,
}

/// Render a module report in the requested format
pub fn render_report(
    report: &Report,
    format: OutputFormat,
    use_colors: bool,
    verbose: bool,
) -> Result<String> {
    let rendered = match (format, report) {
        (OutputFormat::Json, _) => {
            serde_json::to_string_pretty(report).context("Failed to serialize report")?
        }
        (OutputFormat::Tsv, Report::Survival(result)) => format_score_tsv(result),
        (OutputFormat::Tsv, Report::Forecast(result)) => format_forecast_tsv(result),
        (OutputFormat::Tsv, Report::Comparison(comparison)) => format_comparison_tsv(comparison),
        (OutputFormat::Table, Report::Survival(result)) => {
            format_score_result(result, use_colors, verbose)
        }
        (OutputFormat::Table, Report::Forecast(result)) => format_forecast(result, use_colors),
        (OutputFormat::Table, Report::Comparison(comparison)) => {
            format_comparison_table(comparison, use_colors)
        }
    };
    Ok(rendered)
}
