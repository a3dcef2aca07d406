//! Expense service
//!
//! Validation for interactive expense input and recording of new expenses.
//! Parsing happens entirely in memory, so a rejected input never touches the
//! store.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, Expense, Money};
use crate::storage::{Storage, StoreRow};

/// Service for recording and listing expenses
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense dated today
    pub fn add(
        &self,
        amount: Money,
        category: Category,
        description: impl Into<String>,
    ) -> TrackerResult<Expense> {
        let expense = Expense::today(amount, category, description);
        self.storage.expenses.append(&expense)?;
        Ok(expense)
    }

    /// List every stored expense row in store order
    pub fn list(&self) -> TrackerResult<Vec<StoreRow>> {
        self.storage.expenses.read_all()
    }
}

/// Parse the amount typed by the user
///
/// Amounts must be numeric, not negative, and have at most two decimals.
pub fn parse_amount(input: &str) -> TrackerResult<Money> {
    let amount = Money::parse(input).map_err(|e| TrackerError::invalid_input(e.to_string()))?;

    if amount.is_negative() {
        return Err(TrackerError::invalid_input(format!(
            "Amount cannot be negative: {}",
            input.trim()
        )));
    }

    Ok(amount)
}

/// Parse the 1-based category number typed by the user
pub fn parse_category_index(input: &str) -> TrackerResult<Category> {
    let input = input.trim();
    let index: usize = input
        .parse()
        .map_err(|_| TrackerError::invalid_input(format!("Not a category number: '{}'", input)))?;

    Category::from_menu_index(index).ok_or_else(|| {
        TrackerError::invalid_input(format!(
            "Category number must be between 1 and {}: {}",
            Category::all().len(),
            index
        ))
    })
}
