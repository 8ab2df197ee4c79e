//! Finalized Blocks Feature

pub mod page;
