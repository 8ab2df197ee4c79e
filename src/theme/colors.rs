//! Colors - Dashboard palette

use gpui::{Rgba, rgb, rgba};

/// Dashboard color palette, accessed via associated functions
pub struct DashColors;

impl DashColors {
    // Chrome
    pub fn header_bg() -> Rgba { rgb(0x1c2536) }
    pub fn header_rule() -> Rgba { rgb(0xd9baa4) }
    pub fn accent() -> Rgba { rgb(0x5664d2) }
    pub fn accent_soft() -> Rgba { rgba(0x5664d222) }

    // Backgrounds
    pub fn background() -> Rgba { rgb(0xf4f6f8) }
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    pub fn sidebar_bg() -> Rgba { rgb(0xffffff) }
    pub fn log_panel_bg() -> Rgba { rgb(0x1a2332) }
    /// Inline code chips for hashes and roots
    pub fn code_bg() -> Rgba { rgb(0xe7edf3) }

    // Text
    pub fn text_primary() -> Rgba { rgb(0x172b4d) }
    pub fn text_secondary() -> Rgba { rgb(0x6b778c) }
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Status
    pub fn success() -> Rgba { rgb(0x22c55e) }
    pub fn warning() -> Rgba { rgb(0xf59e0b) }
    pub fn danger() -> Rgba { rgb(0xe53935) }

    // Borders
    pub fn border() -> Rgba { rgb(0xe5e7eb) }

    // Buttons
    pub fn button_primary_bg() -> Rgba { rgb(0x5664d2) }
    pub fn button_primary_hover() -> Rgba { rgb(0x4553c0) }
    pub fn button_primary_text() -> Rgba { rgb(0xffffff) }
    pub fn button_secondary_bg() -> Rgba { rgb(0xe5e7eb) }
    pub fn button_secondary_hover() -> Rgba { rgb(0xd1d5db) }
    pub fn button_danger_bg() -> Rgba { rgb(0xe53935) }
    pub fn button_danger_hover() -> Rgba { rgb(0xc62828) }
    pub fn button_ghost_text() -> Rgba { rgb(0x6b778c) }
    pub fn button_ghost_hover() -> Rgba { rgb(0xf3f4f6) }

    // Tables
    pub fn table_header_bg() -> Rgba { rgb(0xf9fafb) }
    pub fn table_row_hover() -> Rgba { rgb(0xf3f4f6) }
    pub fn table_row_alt() -> Rgba { rgb(0xfafbfc) }
    /// Missed slot (no block, or a block without shard headers)
    pub fn table_row_missed() -> Rgba { rgb(0xffebee) }
    pub fn table_detail_bg() -> Rgba { rgb(0xf8fafc) }

    // Inputs
    pub fn input_border() -> Rgba { rgb(0xd1d5db) }
}
