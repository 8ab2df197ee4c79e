//! Block table columns and the shard-header detail panel.
//!
//! Shared by the blocks and finalized blocks pages.

use gpui::{div, prelude::*, AnyElement, IntoElement, ParentElement, Styled};

use crate::components::composite::data_table::{Column, DataTable};
use crate::domain::chain::{BeaconBlock, SignedShardHeader};
use crate::features::cells;
use crate::i18n::{t, Locale};
use crate::theme::colors::DashColors;

pub fn block_columns(locale: Locale) -> Vec<Column<BeaconBlock>> {
    vec![
        Column::new("slot", t(locale, "table.slot"), |block: &BeaconBlock| {
            cells::text(block.slot.to_string())
        })
        .fixed_width(90.0)
        .align_end(),
        Column::new(
            "shard-headers",
            t(locale, "table.shard_header_count"),
            |block: &BeaconBlock| {
                // missed slots have no header list worth counting
                if block.state_root.is_some() {
                    cells::text(block.shard_headers.len().to_string())
                } else {
                    cells::text("-")
                }
            },
        )
        .fixed_width(150.0)
        .align_end(),
        Column::new("parent-root", t(locale, "table.parent_root"), |block: &BeaconBlock| {
            match &block.parent_root {
                Some(root) => cells::bytes(root),
                None => cells::text(""),
            }
        })
        .flex_width(200.0),
        Column::new("state-root", t(locale, "table.state_root"), |block: &BeaconBlock| {
            match &block.state_root {
                Some(root) => cells::bytes(root),
                None => cells::text(""),
            }
        })
        .flex_width(200.0),
    ]
}

/// Tone for slots where nothing was proposed or included
pub fn block_tone(block: &BeaconBlock) -> Option<gpui::Rgba> {
    block.is_missed().then(DashColors::table_row_missed)
}

/// Shard headers of one block
pub fn shard_headers_detail(block: &BeaconBlock, locale: Locale) -> AnyElement {
    let body = if block.state_root.is_some() && !block.shard_headers.is_empty() {
        let length_label = t(locale, "table.length");
        let columns = vec![
            Column::new("slot", t(locale, "table.slot"), |h: &SignedShardHeader| {
                cells::text(h.message.slot.to_string())
            })
            .fixed_width(80.0)
            .align_end(),
            Column::new("shard", t(locale, "table.shard"), |h: &SignedShardHeader| {
                cells::text(h.message.shard.to_string())
            })
            .fixed_width(80.0)
            .align_end(),
            Column::new(
                "commitment",
                t(locale, "table.commitment"),
                move |h: &SignedShardHeader| {
                    cells::commitment(&h.message.commitment, length_label.clone())
                },
            )
            .flex_width(240.0),
            Column::new("signature", t(locale, "table.signature"), |h: &SignedShardHeader| {
                cells::bytes(&h.signature)
            })
            .flex_width(240.0),
        ];
        DataTable::new(
            format!("shard-headers-{}", block.slot),
            columns,
            block.shard_headers.clone(),
        )
        .into_any_element()
    } else {
        cells::none(t(locale, "table.none"))
    };

    div()
        .flex()
        .flex_col()
        .gap_2()
        .p_3()
        .child(cells::section_title(t(locale, "blocks.shard_headers")))
        .child(body)
        .into_any_element()
}
