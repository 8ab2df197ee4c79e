//! Theme - Colors and type scale

pub mod colors;
pub mod typography;
