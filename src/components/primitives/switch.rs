//! Switch Component
//!
//! On/off pill with a label, used for the auto-mining toggle.

use gpui::{
    prelude::*, App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::theme::colors::DashColors;

type ChangeHandler = Box<dyn Fn(bool, &mut Window, &mut App) + 'static>;

#[derive(IntoElement)]
pub struct Switch {
    id: ElementId,
    on: bool,
    label: Option<SharedString>,
    disabled: bool,
    on_change: Option<ChangeHandler>,
}

impl Switch {
    /// Create a new switch
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            on: false,
            label: None,
            disabled: false,
            on_change: None,
        }
    }

    /// Set whether the switch is on
    pub fn on(mut self, on: bool) -> Self {
        self.on = on;
        self
    }

    /// Set the label shown beside the switch
    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set whether the switch is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Called with the requested new state
    pub fn on_change(mut self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Switch {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let on = self.on;
        let track = if on {
            DashColors::accent()
        } else {
            DashColors::input_border()
        };

        let knob = div()
            .size(px(16.0))
            .rounded_full()
            .bg(DashColors::content_bg());

        let mut element = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_2()
            .child(
                div()
                    .w(px(36.0))
                    .h(px(20.0))
                    .p(px(2.0))
                    .rounded_full()
                    .bg(track)
                    .flex()
                    .map(|el| if on { el.justify_end() } else { el.justify_start() })
                    .child(knob),
            );

        if let Some(label) = self.label {
            element = element.child(
                div()
                    .text_sm()
                    .text_color(DashColors::text_primary())
                    .child(label),
            );
        }

        if self.disabled {
            element = element.opacity(0.5);
        } else if let Some(handler) = self.on_change {
            element = element
                .cursor_pointer()
                .on_click(move |_event, window, cx| handler(!on, window, cx));
        }

        element
    }
}
