//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Sidebar navigation width in pixels
pub const SIDEBAR_WIDTH: f32 = 200.0;

/// Header bar height
pub const HEADER_HEIGHT: f32 = 56.0;

/// Log panel heights
pub const LOG_PANEL_HEIGHT: f32 = 160.0;
pub const LOG_PANEL_COLLAPSED_HEIGHT: f32 = 32.0;

/// Entries rendered by the log panel, newest first
pub const LOG_PANEL_VISIBLE_ENTRIES: usize = 100;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 820.0;
pub const MIN_WINDOW_WIDTH: f32 = 900.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;
