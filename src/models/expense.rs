//! Expense model
//!
//! An expense is a single recorded spending event. Expenses are created once,
//! appended to the store and never modified.

use chrono::NaiveDate;
use std::fmt;

use super::category::Category;
use super::money::Money;

/// Date format used in the store and for month keys
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    /// Day the expense was recorded
    pub date: NaiveDate,

    /// Amount spent
    pub amount: Money,

    /// Spending category
    pub category: Category,

    /// Free-form description, may be empty
    pub description: String,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        date: NaiveDate,
        amount: Money,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            category,
            description: description.into(),
        }
    }

    /// Create a new expense stamped with today's local date
    pub fn today(amount: Money, category: Category, description: impl Into<String>) -> Self {
        Self::new(
            chrono::Local::now().date_naive(),
            amount,
            category,
            description,
        )
    }

    /// The four CSV fields of this expense, in store order
    pub fn to_fields(&self) -> [String; 4] {
        [
            self.date.format(DATE_FORMAT).to_string(),
            self.amount.to_string(),
            self.category.name().to_string(),
            self.description.clone(),
        ]
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format(DATE_FORMAT),
            self.amount,
            self.category,
            self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_fields() {
        let expense = Expense::new(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            Money::from_cents(12345),
            Category::Food,
            "Lunch, with friends",
        );

        assert_eq!(
            expense.to_fields(),
            [
                "2024-03-01".to_string(),
                "123.45".to_string(),
                "Food".to_string(),
                "Lunch, with friends".to_string()
            ]
        );
    }

    #[test]
    fn test_today_uses_local_date() {
        let expense = Expense::today(Money::from_cents(100), Category::Others, "");
        assert_eq!(expense.date, chrono::Local::now().date_naive());
        assert!(expense.description.is_empty());
    }
}
