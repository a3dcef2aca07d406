//! Expense Tracker - menu-driven personal expense tracking
//!
//! This library provides the core functionality for the expense tracker: a
//! single-user tool that records expenses into a CSV file and summarizes them
//! by month and by category.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and optional user settings
//! - `error`: Custom error types
//! - `models`: Core data models (expense, category, money)
//! - `storage`: CSV store and first-run initialization
//! - `services`: Input validation and expense recording
//! - `reports`: Monthly and category summaries
//! - `display`: Terminal formatting
//! - `cli`: The interactive menu loop
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::cli::MenuLoop;
//! use expense_tracker::config::{Settings, TrackerPaths};
//! use expense_tracker::storage::Storage;
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_default(&paths)?;
//! let storage = Storage::new(settings.apply_to(paths));
//! let stdin = std::io::stdin();
//! MenuLoop::new(&storage, &settings, stdin.lock(), std::io::stdout()).run()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
