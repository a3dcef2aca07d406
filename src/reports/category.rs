//! Category Summary Report
//!
//! Totals expenses per category. Every category is listed, in the fixed
//! category order, even when nothing was spent in it.

use tracing::warn;

use super::row_amount;
use crate::error::TrackerResult;
use crate::models::{Category, Money};
use crate::storage::{Storage, StoreRow};

/// Total spending for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
}

/// Category Summary Report
#[derive(Debug, Clone)]
pub struct CategorySummary {
    /// One total per category, in `Category::all()` order
    pub categories: Vec<CategoryTotal>,
}

impl Default for CategorySummary {
    fn default() -> Self {
        Self {
            categories: Category::all()
                .iter()
                .map(|&category| CategoryTotal {
                    category,
                    total: Money::zero(),
                })
                .collect(),
        }
    }
}

impl CategorySummary {
    /// Generate the summary from the expense store
    pub fn generate(storage: &Storage) -> TrackerResult<Self> {
        let rows = storage.expenses.read_all()?;
        Ok(Self::from_rows(&rows))
    }

    /// Aggregate rows into category totals
    ///
    /// Rows with an unknown category are counted under `Others`. Rows whose
    /// amount cannot be parsed are skipped, as are rows that would overflow
    /// their category's total.
    pub fn from_rows(rows: &[StoreRow]) -> Self {
        let mut report = Self::default();

        for row in rows {
            let Some(amount) = row_amount(row, "category summary") else {
                continue;
            };

            let category = row.category.parse::<Category>().unwrap_or_else(|e| {
                warn!(date = %row.date, "{}, counting it under Others", e);
                Category::Others
            });

            let entry = &mut report.categories[category.position()];
            match entry.total.checked_add(amount) {
                Some(total) => entry.total = total,
                None => warn!(
                    date = %row.date,
                    "skipping row in category summary: total for {} would overflow", category
                ),
            }
        }

        report
    }

    /// Look up the total for a category
    pub fn total_for(&self, category: Category) -> Money {
        self.categories[category.position()].total
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();
        for entry in &self.categories {
            output.push_str(&format!(
                "Category: {}, Total Expense: {}\n",
                entry.category,
                entry.total.format_with_symbol(currency_symbol)
            ));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrackerPaths;
    use tempfile::TempDir;

    fn row(category: &str, amount: &str) -> StoreRow {
        StoreRow {
            date: "2024-03-01".to_string(),
            amount: amount.to_string(),
            category: category.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_every_category_listed() {
        let report = CategorySummary::from_rows(&[row("Bills", "800")]);

        assert_eq!(report.categories.len(), 6);
        assert_eq!(
            report.format_terminal("₹"),
            "Category: Food, Total Expense: ₹0.00\n\
             Category: Transportation, Total Expense: ₹0.00\n\
             Category: Entertainment, Total Expense: ₹0.00\n\
             Category: Bills, Total Expense: ₹800.00\n\
             Category: Shopping, Total Expense: ₹0.00\n\
             Category: Others, Total Expense: ₹0.00\n"
        );
    }

    #[test]
    fn test_sums_per_category() {
        let rows = vec![
            row("Food", "500"),
            row("Food", "0.75"),
            row("Shopping", "1500"),
        ];

        let report = CategorySummary::from_rows(&rows);
        assert_eq!(report.total_for(Category::Food), Money::from_cents(50075));
        assert_eq!(report.total_for(Category::Shopping), Money::from_cents(150000));
        assert_eq!(report.total_for(Category::Bills), Money::zero());
    }

    #[test]
    fn test_unknown_category_counts_as_others() {
        let rows = vec![row("Groceries", "40"), row("Others", "2")];

        let report = CategorySummary::from_rows(&rows);
        assert_eq!(report.total_for(Category::Others), Money::from_cents(4200));
    }

    #[test]
    fn test_unparseable_amount_is_skipped() {
        let rows = vec![row("Food", ""), row("Food", "3")];

        let report = CategorySummary::from_rows(&rows);
        assert_eq!(report.total_for(Category::Food), Money::from_cents(300));
    }

    #[test]
    fn test_extra_decimals_round_to_nearest_cent() {
        let rows = vec![row("Bills", "1.999"), row("Bills", "0.125")];

        let report = CategorySummary::from_rows(&rows);
        assert_eq!(report.total_for(Category::Bills), Money::from_cents(213));
    }

    #[test]
    fn test_overflowing_row_is_skipped() {
        let rows = vec![
            row("Shopping", "50000000000000000"),
            row("Shopping", "50000000000000000"),
            row("Food", "50000000000000000"),
        ];

        let report = CategorySummary::from_rows(&rows);
        let max_row = Money::from_cents(5_000_000_000_000_000_000);
        assert_eq!(report.total_for(Category::Shopping), max_row);
        assert_eq!(report.total_for(Category::Food), max_row);
    }

    #[test]
    fn test_generate_from_sample_store() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        crate::storage::initialize_store(&paths).unwrap();
        let storage = Storage::new(paths);

        let report = CategorySummary::generate(&storage).unwrap();
        assert_eq!(report.total_for(Category::Food), Money::from_cents(180000));
        assert_eq!(report.total_for(Category::Transportation), Money::from_cents(63000));
        assert_eq!(report.total_for(Category::Entertainment), Money::from_cents(110000));
        assert_eq!(report.total_for(Category::Bills), Money::from_cents(220000));
        assert_eq!(report.total_for(Category::Shopping), Money::from_cents(430000));
        assert_eq!(report.total_for(Category::Others), Money::zero());
    }

    #[test]
    fn test_generate_from_missing_store() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(TrackerPaths::with_base_dir(temp_dir.path().to_path_buf()));

        assert!(CategorySummary::generate(&storage)
            .unwrap_err()
            .is_store_not_found());
    }
}
