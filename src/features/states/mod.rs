//! States Feature

pub mod page;
pub mod table;
