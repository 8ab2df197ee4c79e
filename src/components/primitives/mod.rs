//! Primitive Components
//!
//! Basic building blocks like buttons, switches and form fields. Text entry
//! itself comes from `gpui_component::input`.

pub mod button;
pub mod form_field;
pub mod radio_group;
pub mod switch;
