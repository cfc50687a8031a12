//! Final report snapshot: financial summary plus run diagnostics.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Financial aggregates over one pass of the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Data rows decoded from the file (the header is not a data row).
    pub total_rows: u64,
    /// Rows whose status is exactly `completed`.
    pub completed: u64,
    /// Rows whose status is exactly `failed`.
    pub failed: u64,
    /// Sum of `amount_cents` over completed rows only.
    pub sum_completed_amount: i64,
    /// Mean completed amount, `0.0` when nothing completed.
    pub avg_amount: f64,
}

/// Read-time diagnostics, kept apart from the financial figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meta {
    /// Every row the reader attempted, including unparseable ones.
    pub rows_read: u64,
    /// Rows with a non-numeric amount plus rows skipped outright.
    pub rows_invalid: u64,
    /// Wall-clock seconds from aggregator creation to finish.
    pub duration_seconds: f64,
}

/// Immutable snapshot handed to the formatters once aggregation ends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub summary: Summary,
    pub meta: Meta,
}

impl Summary {
    /// Flattens the summary into the mapping shape external callers
    /// look up by key name.
    pub fn to_map(&self) -> BTreeMap<String, Value> {
        BTreeMap::from([
            ("total_rows".to_string(), Value::from(self.total_rows)),
            ("completed".to_string(), Value::from(self.completed)),
            ("failed".to_string(), Value::from(self.failed)),
            (
                "sum_completed_amount".to_string(),
                Value::from(self.sum_completed_amount),
            ),
            ("avg_amount".to_string(), Value::from(self.avg_amount)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> Report {
        Report {
            summary: Summary {
                total_rows: 5,
                completed: 4,
                failed: 1,
                sum_completed_amount: 3000,
                avg_amount: 750.0,
            },
            meta: Meta {
                rows_read: 5,
                rows_invalid: 1,
                duration_seconds: 0.25,
            },
        }
    }

    #[test]
    fn test_to_map_exposes_exactly_the_summary_keys() {
        let map = sample_report().summary.to_map();

        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "avg_amount",
                "completed",
                "failed",
                "sum_completed_amount",
                "total_rows"
            ]
        );

        assert_eq!(map["total_rows"], Value::from(5u64));
        assert_eq!(map["completed"], Value::from(4u64));
        assert_eq!(map["failed"], Value::from(1u64));
        assert_eq!(map["sum_completed_amount"], Value::from(3000i64));
        assert_eq!(map["avg_amount"], Value::from(750.0));
    }

    #[test]
    fn test_report_serializes_as_summary_and_meta_objects() {
        let value = serde_json::to_value(sample_report()).unwrap();

        assert!(value["summary"].is_object());
        assert!(value["meta"].is_object());
        assert_eq!(value["summary"]["sum_completed_amount"], 3000);
        assert_eq!(value["meta"]["duration_seconds"], 0.25);
    }
}
