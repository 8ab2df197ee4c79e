//! Utils - Formatting and local storage helpers

pub mod config_store;
pub mod format;
