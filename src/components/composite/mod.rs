//! Composite Components
//!
//! Tables and dialogs assembled from primitives.

pub mod data_table;
pub mod modal;
