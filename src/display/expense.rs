//! Expense display formatting
//!
//! Formats stored expense rows and the category picker for terminal output.

use crate::models::Category;
use crate::storage::StoreRow;

/// Format one stored expense as a single line
///
/// The amount is shown as stored, prefixed with the currency symbol.
pub fn format_expense_line(row: &StoreRow, currency_symbol: &str) -> String {
    format!(
        "Date: {}, Amount: {}{}, Category: {}, Description: {}",
        row.date, currency_symbol, row.amount, row.category, row.description
    )
}

/// Format every stored expense, one per line, in store order
pub fn format_expense_list(rows: &[StoreRow], currency_symbol: &str) -> String {
    let mut output = String::new();
    for row in rows {
        output.push_str(&format_expense_line(row, currency_symbol));
        output.push('\n');
    }
    output
}

/// Format the numbered category list shown when adding an expense
pub fn format_category_menu() -> String {
    let mut output = String::from("Select category:\n");
    for (i, category) in Category::all().iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, category));
    }
    output
}
