//! Path management for the expense tracker
//!
//! Every file lives directly in a base directory, which defaults to the
//! process working directory.

use std::path::{Path, PathBuf};

use crate::error::TrackerError;

/// Default file name of the expense store
pub const DEFAULT_STORE_FILE: &str = "expenses.csv";

/// File name of the optional settings file
pub const SETTINGS_FILE: &str = "expense_tracker.json";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// Directory holding the store and the settings file
    base_dir: PathBuf,
    /// File name of the CSV store inside `base_dir`
    store_file_name: String,
}

impl TrackerPaths {
    /// Create a new TrackerPaths rooted at the current working directory
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn new() -> Result<Self, TrackerError> {
        let base_dir = std::env::current_dir().map_err(|e| {
            TrackerError::Config(format!("Could not determine working directory: {}", e))
        })?;

        Ok(Self::with_base_dir(base_dir))
    }

    /// Create TrackerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            store_file_name: DEFAULT_STORE_FILE.to_string(),
        }
    }

    /// Use a different file name for the store
    pub fn with_store_file_name(mut self, name: impl Into<String>) -> Self {
        self.store_file_name = name.into();
        self
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the CSV store
    pub fn store_file(&self) -> PathBuf {
        self.base_dir.join(&self.store_file_name)
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join(SETTINGS_FILE)
    }
}
