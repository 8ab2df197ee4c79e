//! State table columns and the three nested header sections

use gpui::{
    div, prelude::*, AnyElement, ClickEvent, InteractiveElement, IntoElement, ParentElement,
    SharedString, StatefulInteractiveElement, Styled,
};

use crate::components::composite::data_table::{Column, DataTable};
use crate::domain::chain::{BeaconState, Commitment, PendingShardHeader, Shard};
use crate::domain::row_expansion::{ExpandedRows, RowId, RowSection};
use crate::domain::slot_window::SlotRecord;
use crate::features::cells;
use crate::features::slot_list::SlotListController;
use crate::i18n::{t, Locale};
use crate::theme::colors::DashColors;

pub fn state_columns(locale: Locale) -> Vec<Column<BeaconState>> {
    let epoch_label = t(locale, "table.epoch");
    vec![
        Column::new("slot", t(locale, "table.slot"), |state: &BeaconState| {
            cells::text(state.slot.to_string())
        })
        .fixed_width(90.0)
        .align_end(),
        Column::new("gas-price", t(locale, "table.shard_gasprice"), |state: &BeaconState| {
            match state.shard_gasprice {
                Some(price) => cells::text(format!("{price} Gwei")),
                None => cells::text("-"),
            }
        })
        .fixed_width(160.0)
        .align_end(),
        Column::new(
            "checkpoint",
            t(locale, "table.finalized_checkpoint"),
            move |state: &BeaconState| match &state.finalized_checkpoint {
                Some(checkpoint) => div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .py_1()
                    .child(cells::text(format!("{epoch_label}: {}", checkpoint.epoch)))
                    .child(cells::bytes(&checkpoint.root))
                    .into_any_element(),
                None => cells::text("-"),
            },
        )
        .flex_width(260.0),
    ]
}

/// Filled-in slots the simulator has no state for
pub fn state_tone(state: &BeaconState) -> Option<gpui::Rgba> {
    state.is_placeholder().then(DashColors::table_row_missed)
}

fn pending_headers_table(
    id: String,
    headers: &[PendingShardHeader],
    locale: Locale,
) -> AnyElement {
    if headers.is_empty() {
        return cells::none(t(locale, "table.none"));
    }
    let length_label = t(locale, "table.length");
    let yes = t(locale, "table.yes");
    let no = t(locale, "table.no");
    let columns = vec![
        Column::new("slot", t(locale, "table.slot"), |h: &PendingShardHeader| {
            cells::text(h.slot.to_string())
        })
        .fixed_width(80.0)
        .align_end(),
        Column::new("shard", t(locale, "table.shard"), |h: &PendingShardHeader| {
            cells::text(h.shard.to_string())
        })
        .fixed_width(80.0)
        .align_end(),
        Column::new(
            "commitment",
            t(locale, "table.commitment"),
            move |h: &PendingShardHeader| cells::commitment(&h.commitment, length_label.clone()),
        )
        .flex_width(240.0),
        Column::new("root", t(locale, "table.root"), |h: &PendingShardHeader| {
            cells::bytes(&h.root)
        })
        .flex_width(200.0),
        Column::new(
            "confirmed",
            t(locale, "table.confirmed"),
            move |h: &PendingShardHeader| {
                cells::text(if h.confirmed { yes.clone() } else { no.clone() })
            },
        )
        .fixed_width(100.0),
    ];
    DataTable::new(id, columns, headers.to_vec()).into_any_element()
}

#[derive(Clone)]
struct ConfirmedCommitment {
    shard: Shard,
    slot_in_epoch: usize,
    commitment: Commitment,
}

fn grandparent_table(id: String, state: &BeaconState, locale: Locale) -> AnyElement {
    let rows: Vec<ConfirmedCommitment> = state
        .grandparent_epoch_confirmed_commitments
        .iter()
        .enumerate()
        .flat_map(|(shard, commitments)| {
            commitments
                .iter()
                .enumerate()
                .map(move |(slot_in_epoch, commitment)| ConfirmedCommitment {
                    shard: shard as Shard,
                    slot_in_epoch,
                    commitment: commitment.clone(),
                })
        })
        .collect();
    if rows.is_empty() {
        return cells::none(t(locale, "table.none"));
    }

    let length_label = t(locale, "table.length");
    let columns = vec![
        Column::new("shard", t(locale, "table.shard"), |c: &ConfirmedCommitment| {
            cells::text(c.shard.to_string())
        })
        .fixed_width(80.0)
        .align_end(),
        Column::new(
            "slot-in-epoch",
            t(locale, "table.slot_in_epoch"),
            |c: &ConfirmedCommitment| cells::text(c.slot_in_epoch.to_string()),
        )
        .fixed_width(120.0)
        .align_end(),
        Column::new(
            "commitment",
            t(locale, "table.commitment"),
            move |c: &ConfirmedCommitment| cells::commitment(&c.commitment, length_label.clone()),
        )
        .flex_width(240.0),
    ];
    DataTable::new(id, columns, rows).into_any_element()
}

fn section(
    state: &BeaconState,
    section: RowSection,
    title: SharedString,
    count: usize,
    expanded: &ExpandedRows,
    controller: &SlotListController<BeaconState>,
    body: impl FnOnce() -> AnyElement,
) -> AnyElement {
    let id = RowId::new(state.slot, section);
    let open = expanded.is_expanded(id);
    let controller = controller.clone();

    div()
        .flex()
        .flex_col()
        .gap_2()
        .child(
            div()
                .id(SharedString::from(format!("state-section-{id}")))
                .flex()
                .items_center()
                .gap_2()
                .cursor_pointer()
                .text_color(DashColors::text_primary())
                .hover(|s| s.text_color(DashColors::accent()))
                .on_click(move |_event: &ClickEvent, _window, cx| controller.toggle(id, cx))
                .child(div().w_4().child(if open { "▾" } else { "▸" }))
                .child(cells::section_title(format!("{title} ({count})"))),
        )
        .when(open, |el| el.child(body()))
        .into_any_element()
}

/// Current epoch, previous epoch and grandparent sections of one state
pub fn state_detail(
    state: &BeaconState,
    locale: Locale,
    expanded: &ExpandedRows,
    controller: &SlotListController<BeaconState>,
) -> AnyElement {
    let slot = state.slot;
    div()
        .flex()
        .flex_col()
        .gap_3()
        .p_3()
        .child(section(
            state,
            RowSection::CurrentEpoch,
            t(locale, "states.current_epoch_headers"),
            state.current_epoch_pending_shard_headers.len(),
            expanded,
            controller,
            || {
                pending_headers_table(
                    format!("current-{slot}"),
                    &state.current_epoch_pending_shard_headers,
                    locale,
                )
            },
        ))
        .child(section(
            state,
            RowSection::PreviousEpoch,
            t(locale, "states.previous_epoch_headers"),
            state.previous_epoch_pending_shard_headers.len(),
            expanded,
            controller,
            || {
                pending_headers_table(
                    format!("previous-{slot}"),
                    &state.previous_epoch_pending_shard_headers,
                    locale,
                )
            },
        ))
        .child(section(
            state,
            RowSection::Grandparent,
            t(locale, "states.grandparent_commitments"),
            state.grandparent_commitment_count(),
            expanded,
            controller,
            || grandparent_table(format!("grandparent-{slot}"), state, locale),
        ))
        .into_any_element()
}
