//! DataTable Component
//!
//! Expandable table plus the pagination footer shared by the list pages.

pub mod column;
pub mod data_table;
pub mod pagination;

pub use column::Column;
pub use data_table::DataTable;
pub use pagination::Pagination;
