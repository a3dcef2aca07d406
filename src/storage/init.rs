//! Storage initialization
//!
//! Handles first-run setup: creates the expense store and seeds it with
//! sample expenses.

use tracing::{debug, info};

use crate::config::paths::TrackerPaths;
use crate::error::TrackerError;

use super::expenses::HEADER;
use super::file_io::write_csv_atomic;

/// Sample expenses written to a freshly created store
pub const SAMPLE_EXPENSES: [[&str; 4]; 15] = [
    ["2024-03-01", "500", "Food", "Lunch at a restaurant"],
    ["2024-03-02", "200", "Transportation", "Bus fare"],
    ["2024-03-03", "1500", "Shopping", "New shoes"],
    ["2024-03-04", "800", "Bills", "Electricity bill"],
    ["2024-03-05", "300", "Entertainment", "Movie ticket"],
    ["2024-03-06", "600", "Food", "Grocery shopping"],
    ["2024-03-07", "250", "Transportation", "Taxi ride"],
    ["2024-03-08", "1200", "Shopping", "Clothing purchase"],
    ["2024-03-09", "500", "Bills", "Internet bill"],
    ["2024-03-10", "450", "Entertainment", "Concert ticket"],
    ["2024-03-11", "700", "Food", "Dinner at a cafe"],
    ["2024-03-12", "180", "Transportation", "Subway ticket"],
    ["2024-03-13", "1600", "Shopping", "Smartphone accessories"],
    ["2024-03-14", "900", "Bills", "Water bill"],
    ["2024-03-15", "350", "Entertainment", "Amusement park"],
];

/// Initialize storage for a fresh installation
///
/// Creates the store with sample expenses if it doesn't exist. An existing
/// store is left untouched.
pub fn initialize_store(paths: &TrackerPaths) -> Result<(), TrackerError> {
    let store_file = paths.store_file();

    if !needs_initialization(paths) {
        debug!(path = %store_file.display(), "expense store already exists");
        return Ok(());
    }

    write_csv_atomic(&store_file, &HEADER, SAMPLE_EXPENSES)?;
    info!(
        path = %store_file.display(),
        samples = SAMPLE_EXPENSES.len(),
        "created expense store"
    );

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &TrackerPaths) -> bool {
    !paths.store_file().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::ExpenseStore;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_store() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(needs_initialization(&paths));

        initialize_store(&paths).unwrap();

        assert!(!needs_initialization(&paths));
        assert!(paths.store_file().exists());
    }

    #[test]
    fn test_sample_expenses_created() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_store(&paths).unwrap();

        let content = std::fs::read_to_string(paths.store_file()).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 16);
        assert_eq!(lines[0], "Date,Amount,Category,Description");
        assert_eq!(lines[1], "2024-03-01,500,Food,Lunch at a restaurant");
        assert_eq!(lines[15], "2024-03-15,350,Entertainment,Amusement park");

        let rows = ExpenseStore::new(paths.store_file()).read_all().unwrap();
        assert_eq!(rows.len(), 15);
        assert_eq!(rows[12].description, "Smartphone accessories");
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_store(&paths).unwrap();
        let first = std::fs::read(paths.store_file()).unwrap();

        initialize_store(&paths).unwrap();
        initialize_store(&paths).unwrap();
        let after = std::fs::read(paths.store_file()).unwrap();

        assert_eq!(first, after);
    }

    #[test]
    fn test_doesnt_overwrite_existing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let custom = "Date,Amount,Category,Description\n2025-01-01,1,Food,Tea\n";
        std::fs::write(paths.store_file(), custom).unwrap();

        initialize_store(&paths).unwrap();

        let content = std::fs::read_to_string(paths.store_file()).unwrap();
        assert_eq!(content, custom);
    }
}
