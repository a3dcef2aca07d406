//! Display formatting for terminal output
//!
//! Provides utilities for formatting stored expenses and menus for terminal
//! display.

pub mod expense;

pub use expense::{format_category_menu, format_expense_line, format_expense_list};
