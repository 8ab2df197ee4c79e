//! Log Panel Component
//!
//! Dashboard log lines at the bottom of the window, newest first.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, FontWeight, InteractiveElement, IntoElement,
    ParentElement, Render, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::constants::{LOG_PANEL_COLLAPSED_HEIGHT, LOG_PANEL_HEIGHT, LOG_PANEL_VISIBLE_ENTRIES};
use crate::i18n::t;
use crate::state::log_state::{LogEntry, LogLevel};
use crate::theme::colors::DashColors;
use crate::theme::typography::Typography;
use crate::utils::format::format_time_ms;

/// Log panel component
pub struct LogPanel {
    entities: AppEntities,
    expanded: bool,
}

impl LogPanel {
    /// Create a new log panel
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.logs, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            expanded: true,
        }
    }

    fn toggle_expanded(&mut self, cx: &mut Context<Self>) {
        self.expanded = !self.expanded;
        cx.notify();
    }

    fn render_log_entry(&self, entry: &LogEntry) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .items_center()
            .gap_2()
            .py_px()
            .font_family(Typography::MONO_FONT)
            .child(
                div()
                    .text_color(DashColors::text_muted())
                    .text_size(px(11.0))
                    .min_w(px(85.0))
                    .child(format_time_ms(&entry.timestamp)),
            )
            .child(
                div()
                    .text_color(entry.level.color())
                    .text_size(px(11.0))
                    .min_w(px(45.0))
                    .child(entry.level.label()),
            )
            .child(
                div()
                    .text_color(DashColors::text_light())
                    .text_size(px(12.0))
                    .flex_1()
                    .child(entry.message.clone()),
            )
    }

    fn render_action(
        &self,
        id: &'static str,
        label: impl IntoElement,
    ) -> gpui::Stateful<gpui::Div> {
        div()
            .id(id)
            .px_2()
            .py_1()
            .rounded_sm()
            .text_color(DashColors::text_muted())
            .text_size(px(11.0))
            .cursor_pointer()
            .hover(|s| s.bg(gpui::rgba(0xffffff22)))
            .child(label)
    }
}

impl Render for LogPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let logs = self.entities.logs.read(cx);
        let errors = logs.count_at_least(LogLevel::Warn);

        let height = if self.expanded {
            px(LOG_PANEL_HEIGHT)
        } else {
            px(LOG_PANEL_COLLAPSED_HEIGHT)
        };

        let entities = self.entities.clone();

        let mut panel = div()
            .h(height)
            .w_full()
            .bg(DashColors::log_panel_bg())
            .flex()
            .flex_col()
            .child(
                div()
                    .h(px(LOG_PANEL_COLLAPSED_HEIGHT))
                    .w_full()
                    .px_4()
                    .flex()
                    .items_center()
                    .justify_between()
                    .border_b_1()
                    .border_color(gpui::rgba(0xffffff22))
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                div()
                                    .text_color(DashColors::text_light())
                                    .text_size(px(13.0))
                                    .font_weight(FontWeight::MEDIUM)
                                    .child(t(locale, "log.title")),
                            )
                            .child(
                                div()
                                    .text_color(DashColors::text_muted())
                                    .text_size(px(11.0))
                                    .child(format!("({})", logs.len())),
                            )
                            .when(errors > 0, |el| {
                                el.child(
                                    div()
                                        .text_color(DashColors::warning())
                                        .text_size(px(11.0))
                                        .child(format!("⚠ {errors}")),
                                )
                            }),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                self.render_action("clear-logs", t(locale, "log.clear"))
                                    .on_click(move |_event: &ClickEvent, _window, cx| {
                                        entities.logs.update(cx, |logs, cx| {
                                            logs.clear();
                                            cx.notify();
                                        });
                                    }),
                            )
                            .child(
                                self.render_action(
                                    "toggle-logs",
                                    if self.expanded { "▼" } else { "▲" },
                                )
                                .on_click(cx.listener(
                                    |this, _event: &ClickEvent, _window, cx| {
                                        this.toggle_expanded(cx);
                                    },
                                )),
                            ),
                    ),
            );

        if self.expanded {
            let entries: Vec<_> = logs
                .entries()
                .iter()
                .rev()
                .take(LOG_PANEL_VISIBLE_ENTRIES)
                .collect();

            panel = panel.child(
                div()
                    .id("log-entries")
                    .flex_1()
                    .overflow_y_scroll()
                    .px_4()
                    .py_1()
                    .children(entries.into_iter().map(|entry| self.render_log_entry(entry))),
            );
        }

        panel
    }
}
