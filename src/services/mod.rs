//! Service layer for the expense tracker
//!
//! The service layer provides input validation and recording on top of the
//! storage layer.

pub mod expense;

pub use expense::{parse_amount, parse_category_index, ExpenseService};
