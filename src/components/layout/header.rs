//! Header Component
//!
//! Title, current slot, server address, mining status and the language toggle.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, FontWeight, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};
use gpui_component::Icon;

use crate::app::entities::AppEntities;
use crate::assets::CustomIconName;
use crate::constants::HEADER_HEIGHT;
use crate::i18n::t;
use crate::state::head_state::HeadSnapshot;
use crate::theme::colors::DashColors;
use crate::theme::typography::Typography;
use crate::utils::format::format_number;

/// Header component
pub struct Header {
    entities: AppEntities,
    head: HeadSnapshot,
}

impl Header {
    /// Create a new header
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.simulator, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.config, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            head: HeadSnapshot::default(),
        }
    }

    /// Pushed by the workspace whenever the poller records a new head
    pub fn set_head(&mut self, head: HeadSnapshot, cx: &mut Context<Self>) {
        if self.head != head {
            self.head = head;
            cx.notify();
        }
    }

    fn render_figure(
        &self,
        label: SharedString,
        value: impl Into<SharedString>,
        dot: Option<gpui::Rgba>,
    ) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .child(
                div()
                    .text_color(DashColors::text_muted())
                    .text_size(px(11.0))
                    .child(label),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_1()
                    .when_some(dot, |el, color| {
                        el.child(div().text_color(color).text_size(px(10.0)).child("●"))
                    })
                    .child(
                        div()
                            .text_color(DashColors::text_light())
                            .text_size(px(14.0))
                            .font_weight(FontWeight::SEMIBOLD)
                            .child(value.into()),
                    ),
            )
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let base_url = self.entities.config.read(cx).base_url();
        let mining_key = self.entities.simulator.read(cx).mining_status_key();

        let reachable = if self.head.reachable {
            DashColors::success()
        } else {
            DashColors::danger()
        };
        let entities = self.entities.clone();

        div()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .bg(DashColors::header_bg())
            .border_b_2()
            .border_color(DashColors::header_rule())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            // Left side: logo and title
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        Icon::from(CustomIconName::Beacon)
                            .size_6()
                            .text_color(DashColors::header_rule()),
                    )
                    .child(
                        div()
                            .text_color(DashColors::text_light())
                            .text_size(px(Typography::TEXT_LG))
                            .font_weight(FontWeight::SEMIBOLD)
                            .child(t(locale, "app.title")),
                    ),
            )
            // Right side: figures and language toggle
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_6()
                    .child(self.render_figure(
                        t(locale, "header.current_slot"),
                        format_number(self.head.display_slot()),
                        Some(reachable),
                    ))
                    .child(self.render_figure(t(locale, "header.server"), base_url, None))
                    .child(self.render_figure(
                        t(locale, "header.mining_status"),
                        t(locale, mining_key),
                        None,
                    ))
                    .child(
                        div()
                            .id("lang-switcher")
                            .flex()
                            .items_center()
                            .gap_1()
                            .px_3()
                            .py_1()
                            .rounded_md()
                            .bg(gpui::rgba(0xffffff22))
                            .text_color(DashColors::text_light())
                            .text_size(px(13.0))
                            .cursor_pointer()
                            .hover(|s| s.bg(gpui::rgba(0xffffff44)))
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                entities.i18n.update(cx, |i18n, cx| {
                                    i18n.toggle_locale();
                                    cx.notify();
                                });
                            })
                            .child(Icon::from(CustomIconName::Languages).size_4())
                            .child(locale.toggled().display_name()),
                    ),
            )
    }
}
