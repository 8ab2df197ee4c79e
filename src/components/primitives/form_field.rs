//! FormField Component
//!
//! Label, control and inline error stacked vertically.

use gpui::{
    prelude::*, AnyElement, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window, div,
};

use crate::theme::colors::DashColors;

#[derive(IntoElement)]
pub struct FormField {
    label: SharedString,
    control: AnyElement,
    hint: Option<SharedString>,
    error: Option<SharedString>,
}

impl FormField {
    /// Create a labelled field around a control
    pub fn new(label: impl Into<SharedString>, control: impl IntoElement) -> Self {
        Self {
            label: label.into(),
            control: control.into_any_element(),
            hint: None,
            error: None,
        }
    }

    /// Set the hint shown under the control
    pub fn hint(mut self, hint: impl Into<SharedString>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Set the validation error, replacing the hint
    pub fn error(mut self, error: Option<SharedString>) -> Self {
        self.error = error;
        self
    }
}

impl RenderOnce for FormField {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let has_error = self.error.is_some();

        div()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(if has_error {
                        DashColors::danger()
                    } else {
                        DashColors::text_secondary()
                    })
                    .child(self.label),
            )
            .child(self.control)
            .when_some(self.error.or(self.hint), |el, note| {
                el.child(
                    div()
                        .text_xs()
                        .text_color(if has_error {
                            DashColors::danger()
                        } else {
                            DashColors::text_muted()
                        })
                        .child(note),
                )
            })
    }
}
