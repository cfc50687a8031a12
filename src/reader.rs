//! Streaming row source for transaction CSV files.
//!
//! Rows are yielded one at a time in file order; the file is never
//! buffered whole.

use crate::error::{ReportError, Result};
use crate::transaction::RawRecord;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Opens a transaction CSV and returns a lazy iterator over its data rows.
///
/// The first row is taken as the header. A missing path fails with
/// [`ReportError::FileNotFound`]; any other open failure surfaces as an
/// I/O error.
pub fn stream_transactions<P: AsRef<Path>>(
    path: P,
) -> Result<impl Iterator<Item = csv::Result<RawRecord>>> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ReportError::FileNotFound(path.display().to_string()))
        }
        Err(e) => return Err(e.into()),
    };

    stream_from_reader(BufReader::new(file))
}

/// Streams rows from any reader, e.g. an in-memory buffer in tests.
///
/// Headers and fields are whitespace-trimmed, and rows may deviate from
/// the header's column count; each data row is zipped against the header
/// into a [`RawRecord`]. Rows the CSV layer cannot parse at all are
/// yielded as errors so the consumer can count and skip them.
pub fn stream_from_reader<R: Read>(
    reader: R,
) -> Result<impl Iterator<Item = csv::Result<RawRecord>>> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();

    Ok(csv_reader
        .into_records()
        .map(move |result| result.map(|row| RawRecord::from_row(&headers, &row))))
}
