//! Core data models for the expense tracker
//!
//! This module contains the data structures that represent the expense
//! domain: the expense record, its category and the money amount.

pub mod category;
pub mod expense;
pub mod money;

pub use category::{Category, UnknownCategory};
pub use expense::{Expense, DATE_FORMAT};
pub use money::{Money, MoneyParseError};
