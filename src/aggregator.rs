//! Streaming aggregation of transaction rows into report counters.

use crate::report::{Meta, Report, Summary};
use crate::transaction::{RawRecord, Transaction};
use log::{debug, warn};
use std::time::Instant;

/// Folds a transaction stream into running totals in a single left to
/// right pass.
///
/// Counters accumulate here until [`finish`](ReportAggregator::finish)
/// seals them into an immutable [`Report`]. Statuses other than
/// `completed` and `failed` count toward `total_rows` only, so
/// `completed + failed <= total_rows` holds at every step.
#[derive(Debug)]
pub struct ReportAggregator {
    total_rows: u64,
    completed: u64,
    failed: u64,
    sum_completed_amount: i64,
    rows_read: u64,
    rows_invalid: u64,
    started: Instant,
}

impl ReportAggregator {
    /// Creates an empty aggregator; the elapsed-time clock starts here.
    pub fn new() -> Self {
        ReportAggregator {
            total_rows: 0,
            completed: 0,
            failed: 0,
            sum_completed_amount: 0,
            rows_read: 0,
            rows_invalid: 0,
            started: Instant::now(),
        }
    }

    /// Folds one decoded transaction into the running totals.
    pub fn record(&mut self, tx: &Transaction) {
        self.rows_read += 1;
        self.total_rows += 1;

        if tx.amount_invalid {
            self.rows_invalid += 1;
        }

        match tx.status.as_str() {
            "completed" => {
                self.completed += 1;
                self.sum_completed_amount += tx.amount_cents;
            }
            "failed" => self.failed += 1,
            _ => {}
        }
    }

    /// Counts a row the CSV layer could not decode at all.
    ///
    /// Such rows show up in `rows_read` and `rows_invalid` but never in
    /// `total_rows`.
    pub fn note_skipped_row(&mut self) {
        self.rows_read += 1;
        self.rows_invalid += 1;
    }

    /// Drains an entire row stream, normalizing and recording each row.
    ///
    /// Unparseable rows are logged at warn level and counted, never
    /// fatal. Row numbers in log lines are 1-indexed and account for
    /// the header row.
    pub fn consume<I>(&mut self, rows: I)
    where
        I: IntoIterator<Item = csv::Result<RawRecord>>,
    {
        for (row_idx, result) in rows.into_iter().enumerate() {
            let row_num = row_idx + 2;

            match result {
                Ok(raw) => {
                    let tx = raw.normalize();
                    if tx.amount_invalid {
                        debug!("Row {}: non-numeric amount, substituting 0", row_num);
                    }
                    self.record(&tx);
                }
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                    self.note_skipped_row();
                }
            }
        }
    }

    /// Seals the totals into the final report snapshot.
    ///
    /// `avg_amount` is derived here rather than maintained incrementally,
    /// so it is always `sum_completed_amount / completed` exactly.
    pub fn finish(self) -> Report {
        let avg_amount = if self.completed > 0 {
            self.sum_completed_amount as f64 / self.completed as f64
        } else {
            0.0
        };

        Report {
            summary: Summary {
                total_rows: self.total_rows,
                completed: self.completed,
                failed: self.failed,
                sum_completed_amount: self.sum_completed_amount,
                avg_amount,
            },
            meta: Meta {
                rows_read: self.rows_read,
                rows_invalid: self.rows_invalid,
                duration_seconds: self.started.elapsed().as_secs_f64(),
            },
        }
    }

    /// Verifies the bucketing invariant: `completed + failed <= total_rows`.
    #[cfg(debug_assertions)]
    pub fn check_invariant(&self) -> bool {
        self.completed + self.failed <= self.total_rows
    }
}

impl Default for ReportAggregator {
    fn default() -> Self {
        Self::new()
    }
}
