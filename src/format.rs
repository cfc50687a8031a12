//! Report formatters: a fixed text template and JSON.
//!
//! Both formats carry numerically identical summary values; only the
//! presentation differs.

use crate::error::{ReportError, Result};
use crate::report::Report;
use std::str::FromStr;

/// Output format selector for the rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ReportError::UnknownFormat(other.to_string())),
        }
    }
}

/// Renders the report in the requested format.
pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_text(report)),
        OutputFormat::Json => format_json(report),
    }
}

/// Renders the fixed text template callers scrape line by line.
///
/// The heading and the five indented summary lines are stable; no
/// trailing newline is appended.
pub fn format_text(report: &Report) -> String {
    let summary = &report.summary;
    let lines = [
        "Transaction report:".to_string(),
        format!("  total_rows: {}", summary.total_rows),
        format!("  completed: {}", summary.completed),
        format!("  failed: {}", summary.failed),
        format!("  sum_completed_amount: {}", summary.sum_completed_amount),
        format!("  avg_amount: {}", summary.avg_amount),
    ];

    lines.join("\n")
}

/// Renders compact JSON with `summary` and `meta` objects.
///
/// Keys are sorted alphabetically at every level, so the output is
/// byte-stable across runs apart from the timing field.
pub fn format_json(report: &Report) -> Result<String> {
    let value = serde_json::to_value(report)?;
    Ok(value.to_string())
}

/// Pretty-printed variant of [`format_json`], 2-space indentation and
/// the same sorted key order.
pub fn format_json_pretty(report: &Report) -> Result<String> {
    let value = serde_json::to_value(report)?;
    Ok(serde_json::to_string_pretty(&value)?)
}
