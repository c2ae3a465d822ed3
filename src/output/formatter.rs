use owo_colors::OwoColorize;
use std::collections::BTreeMap;
use std::io::IsTerminal;
use terminal_size::{Width, terminal_size};

use crate::compare::Comparison;
use crate::forecast::{Breakeven, ForecastResult};
use crate::scoring::{Outcome, ScoreBreakdown, ScoreResult};

/// Widest a brand label column may get before truncation
const MAX_LABEL_WIDTH: usize = 30;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format an amount in compact notation (1.5k, 2.3M, 847), keeping the sign
pub fn format_compact(value: f64) -> String {
    let magnitude = value.abs();
    let formatted = if magnitude >= 1_000_000.0 {
        format!("{:.1}M", magnitude / 1_000_000.0)
    } else if magnitude >= 1_000.0 {
        format!("{:.1}k", magnitude / 1_000.0)
    } else {
        format!("{:.0}", magnitude)
    };

    // Trim trailing .0 (e.g., "1.0k" -> "1k")
    let trimmed = formatted.replace(".0M", "M").replace(".0k", "k");

    if value < 0.0 && trimmed != "0" {
        format!("-{}", trimmed)
    } else {
        trimmed
    }
}

/// Format a survival score with one decimal
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

/// Outcome label, traffic-light colored when colors are enabled
pub fn format_outcome(outcome: Outcome, use_colors: bool) -> String {
    if !use_colors {
        return outcome.label().to_string();
    }
    match outcome {
        Outcome::Succeed => outcome.label().green().bold().to_string(),
        Outcome::AtRisk => outcome.label().yellow().bold().to_string(),
        Outcome::Fail => outcome.label().red().bold().to_string(),
    }
}

/// Format the factor-by-factor breakdown of a survival score
pub fn format_breakdown(breakdown: &ScoreBreakdown) -> String {
    let mut lines = vec![format!(
        "  {:<20} {:>7}",
        "Gross margin",
        format_score(breakdown.base_score)
    )];
    for factor in &breakdown.factors {
        lines.push(format!(
            "  {:<20} {:>7}  ({})",
            factor.label,
            format_score(factor.after),
            factor.description
        ));
    }
    lines.join("\n")
}

/// Format a single survival score result
pub fn format_score_result(result: &ScoreResult, use_colors: bool, verbose: bool) -> String {
    let score = format_score(result.score);
    let score = if use_colors {
        score.bold().to_string()
    } else {
        score
    };

    let mut out = format!(
        "Survival score: {}\nOutcome: {}",
        score,
        format_outcome(result.outcome, use_colors)
    );
    if verbose {
        out.push_str("\nBreakdown:\n");
        out.push_str(&format_breakdown(&result.breakdown));
    }
    out
}

/// Format a forecast as labelled lines
pub fn format_forecast(result: &ForecastResult, use_colors: bool) -> String {
    let rows = [
        ("Forecasted customers", format_compact(result.forecasted_customers)),
        ("Forecasted revenue", format_compact(result.forecasted_revenue)),
        (
            "Revenue per distribution point",
            format_compact(result.revenue_per_distribution_point),
        ),
        (
            "Weekly sales per point",
            format_compact(result.weekly_sales_per_point),
        ),
        ("Total monthly burn", format_compact(result.total_monthly_burn)),
        ("Breakeven surplus", format_compact(result.breakeven_surplus)),
        ("Slotting fee", format_compact(result.slotting_fee)),
    ];

    let mut lines: Vec<String> = rows
        .iter()
        .map(|(label, value)| format!("{:<31} {:>8}", label, value))
        .collect();

    let breakeven = result.breakeven();
    let message = if use_colors {
        match breakeven {
            Breakeven::Surplus => breakeven.message().green().to_string(),
            Breakeven::Shortfall => breakeven.message().red().to_string(),
        }
    } else {
        breakeven.message().to_string()
    };
    lines.push(message);
    lines.join("\n")
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a label to fit available width, accounting for Unicode
fn truncate_label(label: &str, max_width: usize) -> String {
    let chars: Vec<char> = label.chars().collect();
    if chars.len() <= max_width {
        label.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Width of the label column: the longest label, capped by the terminal and MAX_LABEL_WIDTH
fn label_column_width(labels: &[&str], term_width: Option<usize>) -> usize {
    // Index (3) + score (7) + outcome (~25) + separators
    let fixed_width = 3 + 1 + 7 + 2 + 25 + 2;
    let longest = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let cap = match term_width {
        Some(width) if width > fixed_width + 10 => (width - fixed_width).min(MAX_LABEL_WIDTH),
        Some(_) => 10,
        None => MAX_LABEL_WIDTH,
    };
    longest.min(cap)
}

/// Format a brand comparison as a table followed by the outcome distribution.
/// Index column: 3 chars (fits "99."), right-aligned
/// Score column is right-aligned, 7 chars wide
pub fn format_comparison_table(comparison: &Comparison, use_colors: bool) -> String {
    if comparison.results.is_empty() {
        return "No brands to compare.".to_string();
    }

    let labels: Vec<&str> = comparison
        .results
        .iter()
        .map(|b| b.brand_label.as_str())
        .collect();
    let label_width = label_column_width(&labels, get_terminal_width());

    let rows: Vec<String> = comparison
        .results
        .iter()
        .enumerate()
        .map(|(idx, brand)| {
            let index_str = format!("{:>2}.", idx + 1);
            let label = truncate_label(&brand.brand_label, label_width);
            let score = format!("{:>7}", format_score(brand.result.score));
            let outcome = format_outcome(brand.result.outcome, use_colors);
            if use_colors {
                format!(
                    "{} {:<width$}  {}  {}",
                    index_str.dimmed(),
                    label,
                    score.bold(),
                    outcome,
                    width = label_width
                )
            } else {
                format!(
                    "{} {:<width$}  {}  {}",
                    index_str,
                    label,
                    score,
                    outcome,
                    width = label_width
                )
            }
        })
        .collect();

    format!(
        "{}\n\nOutcome distribution:\n{}",
        rows.join("\n"),
        format_outcome_counts(&comparison.outcome_counts, use_colors)
    )
}

/// Format outcome counts, most successful outcome first
pub fn format_outcome_counts(counts: &BTreeMap<Outcome, usize>, use_colors: bool) -> String {
    counts
        .iter()
        .rev()
        .map(|(outcome, count)| {
            // Pad before coloring so escape codes don't skew alignment
            let padded = format!("{:<26}", outcome.label());
            let label = if use_colors {
                padded.replace(outcome.label(), &format_outcome(*outcome, true))
            } else {
                padded
            };
            format!("  {}{}", label, count)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Survival score as a single TSV row: score, outcome
pub fn format_score_tsv(result: &ScoreResult) -> String {
    format!("{}\t{}", format_score(result.score), result.outcome.as_str())
}

/// Forecast as TSV rows of field name and value
pub fn format_forecast_tsv(result: &ForecastResult) -> String {
    let rows = [
        ("forecasted_customers", result.forecasted_customers),
        ("forecasted_revenue", result.forecasted_revenue),
        (
            "revenue_per_distribution_point",
            result.revenue_per_distribution_point,
        ),
        ("weekly_sales_per_point", result.weekly_sales_per_point),
        ("total_monthly_burn", result.total_monthly_burn),
        ("breakeven_surplus", result.breakeven_surplus),
        ("slotting_fee", result.slotting_fee),
    ];
    rows.iter()
        .map(|(name, value)| format!("{}\t{:.2}", name, value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Comparison as TSV rows: label, score, outcome (no headers, no colors)
pub fn format_comparison_tsv(comparison: &Comparison) -> String {
    comparison
        .results
        .iter()
        .map(|brand| {
            format!(
                "{}\t{}\t{}",
                brand.brand_label,
                format_score(brand.result.score),
                brand.result.outcome.as_str()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
