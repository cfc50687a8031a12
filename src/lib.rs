//! # Transaction Report
//!
//! A streaming CSV summarizer that turns a payment transaction log into
//! a small financial report, rendered as text or JSON.
//!
//! ## Design Principles
//!
//! - **Streaming processing**: One pass, one row in memory at a time
//! - **Integer cents**: Amounts stay `i64` end to end, no float drift
//! - **Skip, never abort**: Malformed rows are counted and logged, not fatal
//! - **Deterministic output**: Stable key order, identical values across formats
//!
//! ## Example
//!
//! ```no_run
//! let summary = txn_report::generate_report("transactions.csv").unwrap();
//! println!("completed: {}", summary["completed"]);
//! ```

pub mod aggregator;
pub mod error;
pub mod format;
pub mod reader;
pub mod report;
pub mod transaction;

pub use aggregator::ReportAggregator;
pub use error::{ReportError, Result};
pub use format::OutputFormat;
pub use report::{Meta, Report, Summary};
pub use transaction::{RawRecord, Transaction};

use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Streams the CSV at `path` and returns the full structured report.
pub fn generate_structured_report<P: AsRef<Path>>(path: P) -> Result<Report> {
    let rows = reader::stream_transactions(path)?;
    let mut aggregator = ReportAggregator::new();
    aggregator.consume(rows);
    Ok(aggregator.finish())
}

/// Streams the CSV at `path` and returns the flat summary mapping.
///
/// This is the stable entry point for callers that look figures up by
/// key name: `total_rows`, `completed`, `failed`, `sum_completed_amount`
/// and `avg_amount`.
pub fn generate_report<P: AsRef<Path>>(path: P) -> Result<BTreeMap<String, Value>> {
    Ok(generate_structured_report(path)?.summary.to_map())
}
