//! Features - Vertical Feature Slices
//!
//! Each feature contains its page and, where it issues requests, a controller.

pub mod blocks;
pub mod cells;
pub mod finalized_blocks;
pub mod processing;
pub mod request_logs;
pub mod settings;
pub mod slot_list;
pub mod states;
