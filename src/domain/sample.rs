//! Price sample representation and monthly log naming.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Timestamp layout written to column 1 of each log row.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// One recorded observation: the wall-clock timestamp at fetch time and the
/// last traded price. Built fresh per invocation and discarded after the
/// append.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSample {
    pub timestamp: String,
    pub price: f64,
}

impl PriceSample {
    pub fn new(at: NaiveDateTime, price: f64) -> Self {
        Self {
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
            price,
        }
    }
}

/// Name of the monthly log a given date falls into: `YYYYMM`, zero-padded.
pub fn monthly_log_name(date: NaiveDate) -> String {
    format!("{:04}{:02}", date.year(), date.month())
}
