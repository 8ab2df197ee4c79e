//! States Page
//!
//! One backend page of states at a time. Pages are slot windows counted down
//! from the head; slots the simulator skipped are filled in.

use gpui::{
    div, prelude::*, ClickEvent, Context, FontWeight, IntoElement, ParentElement, Render, Styled,
    Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::data_table::{DataTable, Pagination};
use crate::components::primitives::button::Button;
use crate::domain::chain::BeaconState;
use crate::domain::row_expansion::RowId;
use crate::features::slot_list::SlotListController;
use crate::features::states::table::{state_columns, state_detail, state_tone};
use crate::i18n::t;
use crate::state::slot_list_state::LoadState;
use crate::theme::colors::DashColors;

pub struct StatesPage {
    entities: AppEntities,
    controller: SlotListController<BeaconState>,
}

impl StatesPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = SlotListController::states(&entities);

        cx.observe(&entities.states, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            controller,
        }
    }
}

impl Render for StatesPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let list = self.entities.states.read(cx);
        let rows = list.visible_rows().to_vec();
        let window = list.window();
        let total = list.total_rows();
        let loading = list.is_loading();
        let failure = match list.load_state() {
            LoadState::Failed(message) => Some(message.clone()),
            _ => None,
        };
        let expanded = list.expanded().clone();
        let detail_expanded = expanded.clone();

        let detail_controller = self.controller.clone();
        let on_toggle = self.controller.clone();
        let on_page = self.controller.clone();
        let on_count = self.controller.clone();

        div()
            .id("states-page")
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
                            .child(t(locale, "nav.states")),
                    )
                    .child(
                        Button::secondary("refresh-states", t(locale, "action.refresh"))
                            .busy(loading, t(locale, "table.loading"))
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.controller.refresh(cx);
                            })),
                    ),
            )
            .when_some(failure, |el, message| {
                el.child(
                    div()
                        .text_sm()
                        .text_color(DashColors::danger())
                        .child(format!("{}: {message}", t(locale, "table.load_failed"))),
                )
            })
            .child(
                DataTable::new("states", state_columns(locale), rows)
                    .loading(loading, t(locale, "table.loading"))
                    .empty_message(t(locale, "table.no_data"))
                    .row_tone(state_tone)
                    .expandable(
                        move |state: &BeaconState| expanded.is_expanded(RowId::details(state.slot)),
                        move |state: &BeaconState| {
                            state_detail(state, locale, &detail_expanded, &detail_controller)
                        },
                        move |state: &BeaconState, _window, cx| {
                            on_toggle.toggle(RowId::details(state.slot), cx)
                        },
                    )
                    .footer(
                        Pagination::new("states-pagination", window, total)
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
