//! Storage layer for the expense tracker
//!
//! Provides the CSV-backed expense store, first-run initialization and the
//! file helpers both are built on.

pub mod expenses;
pub mod file_io;
pub mod init;

pub use expenses::{ExpenseStore, StoreRow, HEADER};
pub use init::{initialize_store, needs_initialization, SAMPLE_EXPENSES};

use crate::config::paths::TrackerPaths;

/// Main storage coordinator
pub struct Storage {
    paths: TrackerPaths,
    pub expenses: ExpenseStore,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TrackerPaths) -> Self {
        Self {
            expenses: ExpenseStore::new(paths.store_file()),
            paths,
        }
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }
}
