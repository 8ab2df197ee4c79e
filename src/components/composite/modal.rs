//! Modal Component
//!
//! Centered dialog over a dimmed backdrop. Clicking the backdrop or the
//! confirm button closes it.

use std::rc::Rc;

use gpui::{
    prelude::*, AnyElement, App, ClickEvent, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::components::primitives::button::Button;
use crate::theme::colors::DashColors;

#[derive(IntoElement)]
pub struct Modal {
    title: Option<SharedString>,
    children: Vec<AnyElement>,
    confirm_label: SharedString,
    on_close: Option<Rc<dyn Fn(&mut Window, &mut App) + 'static>>,
}

impl Modal {
    /// Create a new modal
    pub fn new() -> Self {
        Self {
            title: None,
            children: Vec::new(),
            confirm_label: "OK".into(),
            on_close: None,
        }
    }

    /// Set the modal title
    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add body content
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Set the confirm button label
    pub fn confirm_label(mut self, label: impl Into<SharedString>) -> Self {
        self.confirm_label = label.into();
        self
    }

    /// Set the close handler
    pub fn on_close(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_close = Some(Rc::new(handler));
        self
    }
}

impl Default for Modal {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for Modal {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let backdrop_close = self.on_close.clone();
        let confirm_close = self.on_close;

        let mut confirm = Button::primary("modal-confirm", self.confirm_label);
        if let Some(handler) = confirm_close {
            confirm = confirm.on_click(move |_event, window, cx| handler(window, cx));
        }

        div()
            .id("modal-backdrop")
            .absolute()
            .inset_0()
            .bg(gpui::rgba(0x00000088))
            .flex()
            .items_center()
            .justify_center()
            .when_some(backdrop_close, |el, handler| {
                el.on_click(move |_event: &ClickEvent, window, cx| handler(window, cx))
            })
            .child(
                div()
                    .id("modal-dialog")
                    .bg(DashColors::content_bg())
                    .rounded_lg()
                    .shadow_lg()
                    .min_w(px(320.0))
                    .max_w(px(520.0))
                    .flex()
                    .flex_col()
                    // keep clicks inside the dialog from reaching the backdrop
                    .on_click(|_event: &ClickEvent, _window, cx| cx.stop_propagation())
                    .when_some(self.title, |el, title| {
                        el.child(
                            div()
                                .px_6()
                                .pt_4()
                                .text_size(px(16.0))
                                .font_weight(gpui::FontWeight::SEMIBOLD)
                                .text_color(DashColors::text_primary())
                                .child(title),
                        )
                    })
                    .child(
                        div()
                            .px_6()
                            .py_4()
                            .flex()
                            .flex_col()
                            .gap_3()
                            .text_color(DashColors::text_primary())
                            .children(self.children),
                    )
                    .child(
                        div()
                            .px_6()
                            .pb_4()
                            .flex()
                            .justify_end()
                            .child(confirm),
                    ),
            )
    }
}
