//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - Path resolution for the store and settings files
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;
