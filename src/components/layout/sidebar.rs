//! Sidebar Component
//!
//! Navigation sidebar with page links.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Window,
};
use gpui_component::Icon;

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::constants::SIDEBAR_WIDTH;
use crate::i18n::{t, Locale};
use crate::theme::colors::DashColors;

/// Sidebar component
pub struct Sidebar {
    entities: AppEntities,
}

impl Sidebar {
    /// Create a new sidebar
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.nav, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_nav_item(
        &self,
        page: ActivePage,
        locale: Locale,
        active_page: ActivePage,
    ) -> impl IntoElement {
        let is_active = page == active_page;
        let label = t(locale, page.title_key());
        let nav = self.entities.nav.clone();

        let (bg_color, text_color, border_color) = if is_active {
            (
                DashColors::accent_soft(),
                DashColors::accent(),
                DashColors::accent(),
            )
        } else {
            (
                gpui::rgba(0x00000000),
                DashColors::text_secondary(),
                gpui::rgba(0x00000000),
            )
        };

        div()
            .id(SharedString::from(format!("nav-{:?}", page)))
            .w_full()
            .flex()
            .items_center()
            .gap_2()
            .px_4()
            .py_2()
            .bg(bg_color)
            .border_l_2()
            .border_color(border_color)
            .text_color(text_color)
            .text_size(px(14.0))
            .cursor_pointer()
            .hover(|s| s.bg(DashColors::table_row_hover()))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                nav.update(cx, |nav, cx| {
                    if nav.set_active_page(page) {
                        cx.notify();
                    }
                });
            })
            .child(Icon::from(page.icon()).size_4())
            .child(label)
    }
}

impl Render for Sidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let active_page = self.entities.nav.read(cx).active_page;

        div()
            .w(px(SIDEBAR_WIDTH))
            .h_full()
            .bg(DashColors::sidebar_bg())
            .border_r_1()
            .border_color(DashColors::border())
            .flex()
            .flex_col()
            .pt_4()
            .children(
                ActivePage::all()
                    .iter()
                    .map(|page| self.render_nav_item(*page, locale, active_page)),
            )
    }
}
