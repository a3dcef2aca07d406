//! Reports module for the expense tracker
//!
//! Provides the read-only summaries: totals per month and totals per
//! category.

pub mod category;
pub mod monthly;

pub use category::{CategorySummary, CategoryTotal};
pub use monthly::{MonthTotal, MonthlySummary};

use tracing::warn;

use crate::models::{Money, MoneyParseError};
use crate::storage::StoreRow;

/// Amount of a stored row as counted by the reports
///
/// Amounts with more than two decimals are rounded to the nearest cent and
/// logged. Rows whose amount cannot be read return `None`.
fn row_amount(row: &StoreRow, report: &str) -> Option<Money> {
    let parsed = match Money::parse(&row.amount) {
        Err(MoneyParseError::TooManyDecimals(_)) => {
            Money::parse_rounded(&row.amount).inspect(|rounded| {
                warn!(
                    date = %row.date,
                    "rounding amount '{}' to {} in {}", row.amount, rounded, report
                )
            })
        }
        parsed => parsed,
    };

    match parsed {
        Ok(amount) => Some(amount),
        Err(e) => {
            warn!(date = %row.date, "skipping row in {}: {}", report, e);
            None
        }
    }
}
