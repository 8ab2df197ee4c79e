//! RadioGroup Component
//!
//! One-of-many choice, laid out as a vertical list or a horizontal strip.

use std::rc::Rc;

use gpui::{
    prelude::*, App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::theme::colors::DashColors;

type SelectHandler<T> = Rc<dyn Fn(T, &mut Window, &mut App) + 'static>;

#[derive(IntoElement)]
pub struct RadioGroup<T: Copy + PartialEq + 'static> {
    id: SharedString,
    options: Vec<(T, SharedString)>,
    selected: Option<T>,
    horizontal: bool,
    disabled: bool,
    on_select: Option<SelectHandler<T>>,
}

impl<T: Copy + PartialEq + 'static> RadioGroup<T> {
    /// Create an empty radio group
    pub fn new(id: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            options: Vec::new(),
            selected: None,
            horizontal: false,
            disabled: false,
            on_select: None,
        }
    }

    /// Add an option
    pub fn option(mut self, value: T, label: impl Into<SharedString>) -> Self {
        self.options.push((value, label.into()));
        self
    }

    /// Add several options
    pub fn options(mut self, options: impl IntoIterator<Item = (T, SharedString)>) -> Self {
        self.options.extend(options);
        self
    }

    /// Set the selected value
    pub fn selected(mut self, value: T) -> Self {
        self.selected = Some(value);
        self
    }

    /// Lay options out in a row
    pub fn horizontal(mut self) -> Self {
        self.horizontal = true;
        self
    }

    /// Set whether the group is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the selection handler
    pub fn on_select(mut self, handler: impl Fn(T, &mut Window, &mut App) + 'static) -> Self {
        self.on_select = Some(Rc::new(handler));
        self
    }
}

impl<T: Copy + PartialEq + 'static> RenderOnce for RadioGroup<T> {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let group_id = self.id;
        let selected = self.selected;
        let disabled = self.disabled;
        let horizontal = self.horizontal;
        let on_select = self.on_select;

        let items = self
            .options
            .into_iter()
            .enumerate()
            .map(|(index, (value, label))| {
                let checked = selected == Some(value);
                let dot = div()
                    .size(px(16.0))
                    .rounded_full()
                    .border_1()
                    .border_color(if checked {
                        DashColors::accent()
                    } else {
                        DashColors::input_border()
                    })
                    .flex()
                    .items_center()
                    .justify_center()
                    .when(checked, |el| {
                        el.child(div().size(px(8.0)).rounded_full().bg(DashColors::accent()))
                    });

                div()
                    .id(ElementId::Name(format!("{group_id}-{index}").into()))
                    .flex()
                    .items_center()
                    .gap_2()
                    .py_1()
                    .child(dot)
                    .child(
                        div()
                            .text_sm()
                            .text_color(DashColors::text_primary())
                            .child(label),
                    )
                    .when(disabled, |el| el.opacity(0.5))
                    .when_some(
                        on_select.clone().filter(|_| !disabled && !checked),
                        |el, handler| {
                            el.cursor_pointer()
                                .on_click(move |_event, window, cx| handler(value, window, cx))
                        },
                    )
            });

        div()
            .flex()
            .map(|el| {
                if horizontal {
                    el.flex_row().gap_4()
                } else {
                    el.flex_col().gap_1()
                }
            })
            .children(items)
    }
}
