//! DataTable Component
//!
//! Rows with optional expandable detail panels and per-row highlighting.
//! Built fresh on every render from the page's view state.

use std::rc::Rc;

use gpui::{
    prelude::*, AnyElement, App, Div, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, Rgba, SharedString, StatefulInteractiveElement, Styled, Window, div, px,
};

use super::column::{Align, Column, ColumnWidth};
use crate::theme::colors::DashColors;

const ROW_HEIGHT: f32 = 36.0;
const HEADER_HEIGHT: f32 = 40.0;
const CHEVRON_WIDTH: f32 = 36.0;

type RowPredicate<R> = Box<dyn Fn(&R) -> bool>;
type RowRenderer<R> = Box<dyn Fn(&R) -> AnyElement>;
type RowHandler<R> = Rc<dyn Fn(&R, &mut Window, &mut App)>;

struct Expansion<R> {
    is_open: RowPredicate<R>,
    detail: RowRenderer<R>,
    on_toggle: RowHandler<R>,
}

#[derive(IntoElement)]
pub struct DataTable<R: Clone + 'static> {
    id: SharedString,
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    loading: bool,
    empty_message: SharedString,
    loading_message: SharedString,
    expansion: Option<Expansion<R>>,
    row_tone: Option<Box<dyn Fn(&R) -> Option<Rgba>>>,
    footer: Option<AnyElement>,
}

impl<R: Clone + 'static> DataTable<R> {
    /// Create a new table
    pub fn new(id: impl Into<SharedString>, columns: Vec<Column<R>>, rows: Vec<R>) -> Self {
        Self {
            id: id.into(),
            columns,
            rows,
            loading: false,
            empty_message: "No data".into(),
            loading_message: "Loading...".into(),
            expansion: None,
            row_tone: None,
            footer: None,
        }
    }

    /// Show the loading message instead of an empty body
    pub fn loading(mut self, loading: bool, message: impl Into<SharedString>) -> Self {
        self.loading = loading;
        self.loading_message = message.into();
        self
    }

    /// Set the message shown with no rows
    pub fn empty_message(mut self, message: impl Into<SharedString>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Rows get a chevron; open rows render `detail` underneath
    pub fn expandable(
        mut self,
        is_open: impl Fn(&R) -> bool + 'static,
        detail: impl Fn(&R) -> AnyElement + 'static,
        on_toggle: impl Fn(&R, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.expansion = Some(Expansion {
            is_open: Box::new(is_open),
            detail: Box::new(detail),
            on_toggle: Rc::new(on_toggle),
        });
        self
    }

    /// Background override per row
    pub fn row_tone(mut self, tone: impl Fn(&R) -> Option<Rgba> + 'static) -> Self {
        self.row_tone = Some(Box::new(tone));
        self
    }

    /// Element below the rows, usually pagination
    pub fn footer(mut self, footer: impl IntoElement) -> Self {
        self.footer = Some(footer.into_any_element());
        self
    }
}

fn sized_cell(width: ColumnWidth, align: Align) -> Div {
    let cell = match width {
        ColumnWidth::Fixed(w) => div().w(px(w)).flex_none(),
        ColumnWidth::Flex { min } => div().flex_1().min_w(px(min)),
    };
    let cell = cell.px_3().flex().items_center().overflow_hidden();
    match align {
        Align::Start => cell.justify_start(),
        Align::End => cell.justify_end(),
    }
}

impl<R: Clone + 'static> RenderOnce for DataTable<R> {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let Self {
            id,
            columns,
            rows,
            loading,
            empty_message,
            loading_message,
            expansion,
            row_tone,
            footer,
        } = self;
        let has_chevron = expansion.is_some();

        let header = div()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .flex()
            .items_center()
            .bg(DashColors::table_header_bg())
            .border_b_1()
            .border_color(DashColors::border())
            .when(has_chevron, |el| el.child(div().w(px(CHEVRON_WIDTH)).flex_none()))
            .children(columns.iter().map(|col| {
                sized_cell(col.width, col.align)
                    .text_xs()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(DashColors::text_secondary())
                    .child(col.label.clone())
            }));

        let status = |message: SharedString| {
            div()
                .w_full()
                .py_8()
                .flex()
                .items_center()
                .justify_center()
                .text_sm()
                .text_color(DashColors::text_muted())
                .child(message)
        };

        let body: AnyElement = if rows.is_empty() {
            status(if loading { loading_message } else { empty_message }).into_any_element()
        } else {
            let mut body = div().w_full().flex().flex_col();
            for (index, row) in rows.into_iter().enumerate() {
                let zebra = if index % 2 == 0 {
                    DashColors::content_bg()
                } else {
                    DashColors::table_row_alt()
                };
                let bg = row_tone
                    .as_ref()
                    .and_then(|tone| tone(&row))
                    .unwrap_or(zebra);
                let open = expansion
                    .as_ref()
                    .is_some_and(|expansion| (expansion.is_open)(&row));

                let mut line = div()
                    .id(ElementId::Name(format!("{id}-row-{index}").into()))
                    .min_h(px(ROW_HEIGHT))
                    .w_full()
                    .flex()
                    .items_center()
                    .bg(bg)
                    .border_b_1()
                    .border_color(DashColors::border())
                    .text_sm()
                    .text_color(DashColors::text_primary());

                if let Some(expansion) = &expansion {
                    let handler = expansion.on_toggle.clone();
                    let clicked = row.clone();
                    line = line
                        .cursor_pointer()
                        .hover(|s| s.bg(DashColors::table_row_hover()))
                        .on_click(move |_event, window, cx| handler(&clicked, window, cx))
                        .child(
                            div()
                                .w(px(CHEVRON_WIDTH))
                                .flex_none()
                                .flex()
                                .justify_center()
                                .text_color(DashColors::text_secondary())
                                .child(if open { "▾" } else { "▸" }),
                        );
                }

                line = line.children(columns.iter().map(|col| {
                    sized_cell(col.width, col.align).child(col.render_cell(&row))
                }));
                body = body.child(line);

                if open {
                    if let Some(expansion) = &expansion {
                        body = body.child(
                            div()
                                .w_full()
                                .px_6()
                                .py_3()
                                .bg(DashColors::table_detail_bg())
                                .border_b_1()
                                .border_color(DashColors::border())
                                .child((expansion.detail)(&row)),
                        );
                    }
                }
            }
            body.into_any_element()
        };

        div()
            .w_full()
            .flex()
            .flex_col()
            .bg(DashColors::content_bg())
            .border_1()
            .border_color(DashColors::border())
            .rounded_md()
            .overflow_hidden()
            .child(header)
            .child(body)
            .when_some(footer, |el, footer| el.child(footer))
    }
}
