//! Pagination Component
//!
//! Page navigation and rows-per-page choice under a table. Pages are
//! zero-based here and shown one-based.

use std::rc::Rc;

use gpui::{
    prelude::*, App, ClickEvent, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div,
};

use crate::components::primitives::radio_group::RadioGroup;
use crate::domain::slot_window::{PageWindow, ROWS_PER_PAGE_OPTIONS};
use crate::theme::colors::DashColors;

type PageHandler = Rc<dyn Fn(u64, &mut Window, &mut App)>;

#[derive(IntoElement)]
pub struct Pagination {
    id: SharedString,
    window: PageWindow,
    page_count: u64,
    total_rows: u64,
    rows_label: SharedString,
    per_page_label: SharedString,
    on_page_change: Option<PageHandler>,
    on_count_change: Option<PageHandler>,
}

impl Pagination {
    /// Create a pager for the given window
    pub fn new(id: impl Into<SharedString>, window: PageWindow, total_rows: u64) -> Self {
        Self {
            id: id.into(),
            window,
            page_count: window.page_count(total_rows),
            total_rows,
            rows_label: "rows".into(),
            per_page_label: "Rows per page".into(),
            on_page_change: None,
            on_count_change: None,
        }
    }

    /// Set the localized labels
    pub fn labels(
        mut self,
        rows_label: impl Into<SharedString>,
        per_page_label: impl Into<SharedString>,
    ) -> Self {
        self.rows_label = rows_label.into();
        self.per_page_label = per_page_label.into();
        self
    }

    /// Set the page change handler
    pub fn on_page_change(mut self, handler: impl Fn(u64, &mut Window, &mut App) + 'static) -> Self {
        self.on_page_change = Some(Rc::new(handler));
        self
    }

    /// Set the page size handler
    pub fn on_count_change(
        mut self,
        handler: impl Fn(u64, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_count_change = Some(Rc::new(handler));
        self
    }
}

fn nav_button(
    id: SharedString,
    glyph: &'static str,
    target: Option<u64>,
    handler: Option<PageHandler>,
) -> impl IntoElement {
    let enabled = target.is_some() && handler.is_some();
    div()
        .id(id)
        .px_2()
        .py_1()
        .rounded_sm()
        .text_sm()
        .text_color(if enabled {
            DashColors::text_primary()
        } else {
            DashColors::text_muted()
        })
        .child(glyph)
        .when_some(target.zip(handler), |el, (page, handler)| {
            el.cursor_pointer()
                .hover(|s| s.bg(DashColors::table_row_hover()))
                .on_click(move |_event: &ClickEvent, window, cx| handler(page, window, cx))
        })
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let page = self.window.page();
        let last = self.page_count.saturating_sub(1);
        let prev = page.checked_sub(1).map(|p| p.min(last));
        let next = (page < last).then_some(page + 1);
        let id = self.id;

        let mut per_page = RadioGroup::new(format!("{id}-per-page"))
            .horizontal()
            .options(
                ROWS_PER_PAGE_OPTIONS
                    .iter()
                    .map(|count| (*count, SharedString::from(count.to_string()))),
            )
            .selected(self.window.count());
        if let Some(handler) = self.on_count_change {
            per_page = per_page.on_select(move |count, window, cx| handler(count, window, cx));
        }

        div()
            .w_full()
            .px_4()
            .py_2()
            .flex()
            .items_center()
            .justify_between()
            .border_t_1()
            .border_color(DashColors::border())
            .child(
                div()
                    .text_sm()
                    .text_color(DashColors::text_secondary())
                    .child(format!("{} {}", self.total_rows, self.rows_label)),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_6()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(DashColors::text_secondary())
                                    .child(self.per_page_label),
                            )
                            .child(per_page),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(nav_button(
                                format!("{id}-first").into(),
                                "«",
                                (page > 0).then_some(0),
                                self.on_page_change.clone(),
                            ))
                            .child(nav_button(
                                format!("{id}-prev").into(),
                                "‹",
                                prev,
                                self.on_page_change.clone(),
                            ))
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(DashColors::text_primary())
                                    .child(format!("{} / {}", page + 1, self.page_count)),
                            )
                            .child(nav_button(
                                format!("{id}-next").into(),
                                "›",
                                next,
                                self.on_page_change.clone(),
                            ))
                            .child(nav_button(
                                format!("{id}-last").into(),
                                "»",
                                (page < last).then_some(last),
                                self.on_page_change,
                            )),
                    ),
            )
    }
}
