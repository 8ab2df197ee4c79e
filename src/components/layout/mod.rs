//! Layout Components
//!
//! Header, sidebar and log panel framing every page.

pub mod header;
pub mod log_panel;
pub mod sidebar;
