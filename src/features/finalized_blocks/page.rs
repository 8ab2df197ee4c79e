//! Finalized Blocks Page
//!
//! Finalized blocks one backend page at a time. Only blocks the backend
//! returns are shown; gaps are not filled.

use gpui::{
    div, prelude::*, ClickEvent, Context, FontWeight, IntoElement, ParentElement, Render, Styled,
    Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::data_table::{DataTable, Pagination};
use crate::components::primitives::button::Button;
use crate::domain::chain::BeaconBlock;
use crate::domain::row_expansion::RowId;
use crate::features::blocks::table::{block_columns, block_tone, shard_headers_detail};
use crate::features::slot_list::SlotListController;
use crate::i18n::t;
use crate::state::slot_list_state::LoadState;
use crate::theme::colors::DashColors;

pub struct FinalizedBlocksPage {
    entities: AppEntities,
    controller: SlotListController<BeaconBlock>,
}

impl FinalizedBlocksPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = SlotListController::finalized_blocks(&entities);

        cx.observe(&entities.finalized, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            controller,
        }
    }
}

impl Render for FinalizedBlocksPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let list = self.entities.finalized.read(cx);
        let rows = list.visible_rows().to_vec();
        let window = list.window();
        let total = list.total_rows();
        let loading = list.is_loading();
        let failure = match list.load_state() {
            LoadState::Failed(message) => Some(message.clone()),
            _ => None,
        };
        let expanded = list.expanded().clone();

        let on_toggle = self.controller.clone();
        let on_page = self.controller.clone();
        let on_count = self.controller.clone();

        div()
            .id("finalized-blocks-page")
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
                            .child(t(locale, "nav.finalized_blocks")),
                    )
                    .child(
                        Button::secondary("refresh-finalized", t(locale, "action.refresh"))
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
                DataTable::new("finalized-blocks", block_columns(locale), rows)
                    .loading(loading, t(locale, "table.loading"))
                    .empty_message(t(locale, "table.no_data"))
                    .row_tone(block_tone)
                    .expandable(
                        move |block: &BeaconBlock| expanded.is_expanded(RowId::details(block.slot)),
                        move |block: &BeaconBlock| shard_headers_detail(block, locale),
                        move |block: &BeaconBlock, _window, cx| {
                            on_toggle.toggle(RowId::details(block.slot), cx)
                        },
                    )
                    .footer(
                        Pagination::new("finalized-pagination", window, total)
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
