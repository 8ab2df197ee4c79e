//! Request Logs Page
//!
//! Requests the simulator has served, newest first.

use gpui::{
    div, prelude::*, ClickEvent, Context, FontWeight, IntoElement, ParentElement, Render, Styled,
    Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::data_table::{Column, DataTable, Pagination};
use crate::components::primitives::button::Button;
use crate::domain::simulator::RequestLog;
use crate::features::cells;
use crate::features::request_logs::controller::RequestLogsController;
use crate::i18n::t;
use crate::state::slot_list_state::LoadState;
use crate::theme::colors::DashColors;

pub struct RequestLogsPage {
    entities: AppEntities,
    controller: RequestLogsController,
}

impl RequestLogsPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = RequestLogsController::new(entities.clone());

        cx.observe(&entities.request_logs, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            controller,
        }
    }
}

impl Render for RequestLogsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let state = self.entities.request_logs.read(cx);
        let rows = state.visible_rows().to_vec();
        let window = state.window();
        let total = state.total_rows();
        let load = state.load_state().clone();
        let loading = load == LoadState::Loading;

        let columns = vec![
            Column::new("log-id", t(locale, "table.log_id"), |log: &RequestLog| {
                cells::text(log.log_id.to_string())
            })
            .fixed_width(90.0)
            .align_end(),
            Column::new("date", t(locale, "table.date"), |log: &RequestLog| {
                cells::text(log.date.clone())
            })
            .fixed_width(200.0),
            Column::new("endpoint", t(locale, "table.endpoint"), |log: &RequestLog| {
                cells::mono(log.endpoint.clone())
            })
            .flex_width(300.0),
        ];

        let on_page = self.controller.clone();
        let on_count = self.controller.clone();

        div()
            .id("request-logs-page")
            .size_full()
            .flex()
            .flex_col()
            .p_4()
            .gap_4()
            .overflow_y_scroll()
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_xl()
                            .font_weight(FontWeight::SEMIBOLD)
                            .child(t(locale, "nav.request_logs")),
                    )
                    .child(
                        Button::secondary("refresh-request-logs", t(locale, "action.refresh"))
                            .busy(loading, t(locale, "table.loading"))
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.controller.refresh(cx);
                            })),
                    ),
            )
            .when_some(
                match load {
                    LoadState::Failed(message) => Some(message),
                    _ => None,
                },
                |el, message| {
                    el.child(
                        div()
                            .text_sm()
                            .text_color(DashColors::danger())
                            .child(format!("{}: {message}", t(locale, "table.load_failed"))),
                    )
                },
            )
            .child(
                DataTable::new("request-logs", columns, rows)
                    .loading(loading, t(locale, "table.loading"))
                    .empty_message(t(locale, "table.no_data"))
                    .footer(
                        Pagination::new("request-logs-pagination", window, total)
                            .labels(
                                t(locale, "pagination.rows"),
                                t(locale, "pagination.per_page"),
                            )
                            .on_page_change(move |page, _window, cx| on_page.set_page(page, cx))
                            .on_count_change(move |count, _window, cx| {
                                on_count.set_count(count, cx)
                            }),
                    ),
            )
    }
}
