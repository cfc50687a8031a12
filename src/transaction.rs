//! Transaction models: raw CSV rows and their normalized form.

use csv::StringRecord;

/// Raw transaction row as read from CSV, before any type coercion.
///
/// Built by zipping the header row against a data row, so a short row
/// simply leaves its trailing columns absent and extra fields are
/// dropped. Column names outside the expected header are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub id: Option<String>,
    pub timestamp: Option<String>,
    pub amount_cents: Option<String>,
    pub currency: Option<String>,
    pub status: Option<String>,
}

impl RawRecord {
    /// Builds a raw record by pairing header names with row fields.
    ///
    /// When the same header name appears twice the later field wins.
    pub fn from_row(headers: &StringRecord, row: &StringRecord) -> Self {
        let mut raw = RawRecord::default();
        for (name, value) in headers.iter().zip(row.iter()) {
            match name {
                "id" => raw.id = Some(value.to_string()),
                "timestamp" => raw.timestamp = Some(value.to_string()),
                "amount_cents" => raw.amount_cents = Some(value.to_string()),
                "currency" => raw.currency = Some(value.to_string()),
                "status" => raw.status = Some(value.to_string()),
                _ => {}
            }
        }
        raw
    }

    /// Normalizes the raw row into a typed [`Transaction`].
    ///
    /// A missing or empty amount defaults to 0. Non-empty text that fails
    /// integer parsing also becomes 0, but sets `amount_invalid` so the
    /// aggregator can count the substitution. Normalization never fails.
    pub fn normalize(self) -> Transaction {
        let (amount_cents, amount_invalid) = match self.amount_cents.as_deref().map(str::trim) {
            None | Some("") => (0, false),
            Some(text) => match text.parse::<i64>() {
                Ok(value) => (value, false),
                Err(_) => (0, true),
            },
        };

        Transaction {
            id: self.id.unwrap_or_default(),
            timestamp: self.timestamp.unwrap_or_default(),
            amount_cents,
            currency: self.currency.unwrap_or_default(),
            status: self.status.map(|s| s.trim().to_string()).unwrap_or_default(),
            amount_invalid,
        }
    }
}

/// A normalized transaction ready for aggregation.
///
/// One is created per row and dropped as soon as the aggregator has
/// folded it into the running totals.
#[derive(Debug, Clone)]
pub struct Transaction {
    /// Row identifier, kept as text
    pub id: String,

    /// Event timestamp, kept as text (never interpreted)
    pub timestamp: String,

    /// Amount in cents; 0 when the source text was absent or unparseable
    pub amount_cents: i64,

    /// Currency code, kept as text
    pub currency: String,

    /// Free-form status; only `completed` and `failed` carry aggregation
    /// semantics
    pub status: String,

    /// True when 0 was substituted for unparseable amount text
    pub amount_invalid: bool,
}
