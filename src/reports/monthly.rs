//! Monthly Summary Report
//!
//! Totals expenses per `YYYY-MM` month key. Months are listed in the order
//! they are first seen in the store, which is not necessarily chronological.

use tracing::warn;

use super::row_amount;
use crate::error::TrackerResult;
use crate::models::Money;
use crate::storage::{Storage, StoreRow};

/// Total spending for one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthTotal {
    /// Month key (`YYYY-MM`)
    pub month: String,
    /// Sum of all amounts recorded in this month
    pub total: Money,
}

/// Monthly Summary Report
#[derive(Debug, Clone, Default)]
pub struct MonthlySummary {
    /// Month totals in first-seen order
    pub months: Vec<MonthTotal>,
}

impl MonthlySummary {
    /// Generate the summary from the expense store
    pub fn generate(storage: &Storage) -> TrackerResult<Self> {
        let rows = storage.expenses.read_all()?;
        Ok(Self::from_rows(&rows))
    }

    /// Aggregate rows into month totals
    ///
    /// Rows whose amount cannot be parsed are skipped, as are rows that would
    /// overflow their month's total.
    pub fn from_rows(rows: &[StoreRow]) -> Self {
        let mut months: Vec<MonthTotal> = Vec::new();

        for row in rows {
            let Some(amount) = row_amount(row, "monthly summary") else {
                continue;
            };

            let month = row.month_key();
            match months.iter().position(|m| m.month == month) {
                Some(i) => match months[i].total.checked_add(amount) {
                    Some(total) => months[i].total = total,
                    None => warn!(
                        date = %row.date,
                        "skipping row in monthly summary: total for {} would overflow", month
                    ),
                },
                None => months.push(MonthTotal {
                    month: month.to_string(),
                    total: amount,
                }),
            }
        }

        Self { months }
    }

    /// Look up the total for a month
    pub fn total_for(&self, month: &str) -> Option<Money> {
        self.months.iter().find(|m| m.month == month).map(|m| m.total)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();
        for entry in &self.months {
            output.push_str(&format!(
                "Month: {}, Total Expense: {}\n",
                entry.month,
                entry.total.format_with_symbol(currency_symbol)
            ));
        }
        output
    }
}
