//! Interactive command-line front end
//!
//! This module contains the menu loop that bridges terminal input with the
//! service layer and the reports.

pub mod menu;

pub use menu::{MenuChoice, MenuLoop};
