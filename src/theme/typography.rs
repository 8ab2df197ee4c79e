//! Typography - Font sizes used across the dashboard

pub struct Typography;

impl Typography {
    pub const TEXT_XS: f32 = 11.0;
    pub const TEXT_SM: f32 = 13.0;
    pub const TEXT_BASE: f32 = 14.0;
    pub const TEXT_LG: f32 = 18.0;

    /// Font for roots, points and signatures
    pub const MONO_FONT: &'static str = "Menlo";
}
