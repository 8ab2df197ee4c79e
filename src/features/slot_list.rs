//! SlotListController - Fetch and paging actions shared by the slot-keyed pages
//!
//! The blocks, finalized blocks and states pages differ only in which
//! [`SlotListState`] they drive and which command fetches it.

use gpui::{App, Entity};
use tracing::debug;

use crate::app::entities::AppEntities;
use crate::domain::chain::{BeaconBlock, BeaconState};
use crate::domain::row_expansion::RowId;
use crate::domain::slot_window::{Slot, SlotRecord};
use crate::services::service_hub::{ServiceCommand, ServiceHub};
use crate::state::slot_list_state::{FetchTicket, SlotListState};

pub struct SlotListController<R: SlotRecord + 'static> {
    list: Entity<SlotListState<R>>,
    request: fn(FetchTicket) -> ServiceCommand,
    name: &'static str,
}

impl<R: SlotRecord + 'static> Clone for SlotListController<R> {
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
            request: self.request,
            name: self.name,
        }
    }
}

impl SlotListController<BeaconBlock> {
    pub fn blocks(entities: &AppEntities) -> Self {
        Self::new(entities.blocks.clone(), "blocks", |ticket| {
            ServiceCommand::FetchBlocks { ticket }
        })
    }

    pub fn finalized_blocks(entities: &AppEntities) -> Self {
        Self::new(entities.finalized.clone(), "finalized blocks", |ticket| {
            ServiceCommand::FetchFinalizedBlocks { ticket }
        })
    }
}

impl SlotListController<BeaconState> {
    pub fn states(entities: &AppEntities) -> Self {
        Self::new(entities.states.clone(), "states", |ticket| {
            ServiceCommand::FetchStates { ticket }
        })
    }
}

impl<R: SlotRecord + 'static> SlotListController<R> {
    pub fn new(
        list: Entity<SlotListState<R>>,
        name: &'static str,
        request: fn(FetchTicket) -> ServiceCommand,
    ) -> Self {
        Self {
            list,
            request,
            name,
        }
    }

    /// Issue a fetch for the current window; older in-flight results become stale
    pub fn refresh(&self, cx: &mut App) {
        let ticket = self.list.update(cx, |state, cx| {
            let ticket = state.begin_fetch();
            cx.notify();
            ticket
        });
        debug!(
            list = self.name,
            generation = ticket.generation,
            page = ticket.window.page(),
            count = ticket.window.count(),
            "Fetching"
        );

        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.send((self.request)(ticket));
        }
    }

    pub fn set_page(&self, page: u64, cx: &mut App) {
        let refetch = self.list.update(cx, |state, cx| {
            let refetch = state.set_page(page);
            cx.notify();
            refetch
        });
        if refetch {
            self.refresh(cx);
        }
    }

    pub fn set_count(&self, count: u64, cx: &mut App) {
        let refetch = self.list.update(cx, |state, cx| {
            let refetch = state.set_count(count);
            cx.notify();
            refetch
        });
        if refetch {
            self.refresh(cx);
        }
    }

    /// Hand the list a new head snapshot. Returns whether it changed.
    pub fn set_head(&self, head: Option<Slot>, cx: &mut App) -> bool {
        self.list.update(cx, |state, cx| {
            let changed = state.set_head(head);
            if changed {
                cx.notify();
            }
            changed
        })
    }

    pub fn toggle(&self, id: RowId, cx: &mut App) {
        self.list.update(cx, |state, cx| {
            state.toggle(id);
            cx.notify();
        });
    }
}
