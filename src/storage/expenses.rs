//! Expense store backed by a CSV file
//!
//! The file holds a header row followed by one row per expense, in the order
//! the expenses were recorded. Rows are only ever appended.

use std::path::{Path, PathBuf};

use csv::StringRecord;
use tracing::debug;

use crate::error::TrackerResult;
use crate::models::Expense;

use super::file_io::{append_csv_record, read_csv_records};

/// Header row of the expense store
pub const HEADER: [&str; 4] = ["Date", "Amount", "Category", "Description"];

/// One row of the store as raw text
///
/// Nothing is parsed here, so a malformed row can still be displayed and each
/// report decides how to treat it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoreRow {
    pub date: String,
    pub amount: String,
    pub category: String,
    pub description: String,
}

impl StoreRow {
    /// Build a row from a CSV record, padding missing fields with empty text
    fn from_record(record: &StringRecord) -> Self {
        let field = |i: usize| record.get(i).unwrap_or_default().to_string();
        Self {
            date: field(0),
            amount: field(1),
            category: field(2),
            description: field(3),
        }
    }

    /// The `YYYY-MM` prefix of the date, or the whole date if it is shorter
    pub fn month_key(&self) -> &str {
        match self.date.char_indices().nth(7) {
            Some((idx, _)) => &self.date[..idx],
            None => &self.date,
        }
    }
}

/// Append/read access to the expense CSV file
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store for the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one expense to the end of the store
    pub fn append(&self, expense: &Expense) -> TrackerResult<()> {
        append_csv_record(&self.path, expense.to_fields())?;
        debug!(path = %self.path.display(), %expense, "appended expense");
        Ok(())
    }

    /// Read every expense row in file order, skipping the header
    ///
    /// Returns `TrackerError::StoreNotFound` if the file does not exist.
    pub fn read_all(&self) -> TrackerResult<Vec<StoreRow>> {
        let rows: Vec<StoreRow> = read_csv_records(&self.path)?
            .iter()
            .map(StoreRow::from_record)
            .collect();
        debug!(path = %self.path.display(), count = rows.len(), "read expense rows");
        Ok(rows)
    }
}
