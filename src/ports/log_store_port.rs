//! Monthly log storage port trait.
//!
//! A store holds named, ordered, growable 2-column tables. Rows and columns
//! are 1-indexed; `last_row` is 0 for an empty log.

use crate::domain::error::PricelogError;

pub trait LogStorePort {
    fn log_exists(&self, name: &str) -> Result<bool, PricelogError>;

    /// Create a new empty log. Overwrites nothing; callers check
    /// [`log_exists`](Self::log_exists) first.
    fn create_log(&self, name: &str) -> Result<(), PricelogError>;

    /// Index of the last populated row, or 0 when the log is empty.
    fn last_row(&self, name: &str) -> Result<usize, PricelogError>;

    fn set_cell(
        &self,
        name: &str,
        row: usize,
        col: usize,
        value: &str,
    ) -> Result<(), PricelogError>;

    /// All rows of a log as (timestamp, price) pairs, in row order.
    fn read_rows(&self, name: &str) -> Result<Vec<(String, f64)>, PricelogError>;
}
