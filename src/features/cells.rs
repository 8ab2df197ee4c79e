//! Table cell fragments shared by the chain pages

use gpui::{div, prelude::*, px, AnyElement, IntoElement, ParentElement, SharedString, Styled};

use crate::domain::bytes::Bytes;
use crate::domain::chain::Commitment;
use crate::theme::colors::DashColors;
use crate::theme::typography::Typography;

pub fn text(value: impl Into<SharedString>) -> AnyElement {
    div()
        .text_size(px(Typography::TEXT_SM))
        .text_color(DashColors::text_primary())
        .child(value.into())
        .into_any_element()
}

/// Monospace `0x…` rendering of a byte field
pub fn bytes(value: &Bytes) -> AnyElement {
    mono(value.display())
}

pub fn mono(value: impl Into<SharedString>) -> AnyElement {
    div()
        .px_1()
        .rounded_sm()
        .bg(DashColors::code_bg())
        .font_family(Typography::MONO_FONT)
        .text_size(px(Typography::TEXT_XS))
        .text_color(DashColors::text_primary())
        .child(value.into())
        .into_any_element()
}

/// `Point` on one line, `Length` below
pub fn commitment(value: &Commitment, length_label: SharedString) -> AnyElement {
    div()
        .flex()
        .flex_col()
        .gap_1()
        .py_1()
        .child(bytes(&value.point))
        .child(text(format!("{length_label}: {}", value.length)))
        .into_any_element()
}

/// Section heading inside an expanded row
pub fn section_title(title: impl Into<SharedString>) -> AnyElement {
    div()
        .text_size(px(Typography::TEXT_BASE))
        .font_weight(gpui::FontWeight::SEMIBOLD)
        .text_color(DashColors::text_primary())
        .child(title.into())
        .into_any_element()
}

/// Placeholder shown when a nested table has no rows
pub fn none(label: impl Into<SharedString>) -> AnyElement {
    div()
        .text_size(px(Typography::TEXT_SM))
        .text_color(DashColors::text_muted())
        .child(label.into())
        .into_any_element()
}
