//! SlotListState - View model shared by the slot-keyed list pages
//!
//! Holds the reconciled rows, the page window, the row-expansion set and the
//! fetch bookkeeping. Every fetch is issued against a [`FetchTicket`]; a
//! result is only applied when its ticket is the latest one issued, so a slow
//! response for an old page never overwrites a newer page. Failures leave the
//! rows untouched.

use ahash::AHashSet;

use crate::domain::row_expansion::{ExpandedRows, RowId};
use crate::domain::slot_window::{
    PageWindow, PaginationMode, Slot, SlotRecord, page_slice, reconcile_client_list,
    reconcile_server_page,
};

/// Progress of the latest fetch
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Identifies one issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub window: PageWindow,
}

#[derive(Debug)]
pub struct SlotListState<R> {
    mode: PaginationMode,
    window: PageWindow,
    /// Client mode: the full ordered list. Server mode: the current page.
    rows: Vec<R>,
    expanded: ExpandedRows,
    load: LoadState,
    generation: u64,
    head: Option<Slot>,
    /// Highest slot seen on page 0 of a server-paginated list
    highest_seen: Option<Slot>,
}

impl<R: SlotRecord> SlotListState<R> {
    pub fn new(mode: PaginationMode, rows_per_page: u64) -> Self {
        Self {
            mode,
            window: PageWindow::new(rows_per_page, 0),
            rows: Vec::new(),
            expanded: ExpandedRows::default(),
            load: LoadState::Idle,
            generation: 0,
            head: None,
            highest_seen: None,
        }
    }

    pub fn mode(&self) -> PaginationMode {
        self.mode
    }

    pub fn window(&self) -> PageWindow {
        self.window
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    pub fn head(&self) -> Option<Slot> {
        self.head
    }

    /// Start a fetch for the current window
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.load = LoadState::Loading;
        FetchTicket {
            generation: self.generation,
            window: self.window,
        }
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Replace the rows with a fetch result. Returns `false` for stale tickets.
    pub fn apply_fetch(&mut self, ticket: FetchTicket, fetched: Vec<R>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        self.rows = match self.mode {
            PaginationMode::Client { densify } => reconcile_client_list(fetched, densify),
            PaginationMode::Server { densify } => {
                let mut rows = reconcile_server_page(fetched, self.head, ticket.window, densify);
                // the backend returns its whole list while it is shorter than one page
                rows.truncate(usize::try_from(ticket.window.count()).unwrap_or(usize::MAX));
                rows
            }
        };

        if self.mode.is_server() && ticket.window.page() == 0 {
            self.highest_seen = self.rows.first().map(SlotRecord::slot);
        }

        let present: AHashSet<Slot> = self.rows.iter().map(SlotRecord::slot).collect();
        self.expanded.retain_slots(|slot| present.contains(&slot));
        self.load = LoadState::Ready;
        true
    }

    /// Record a failed fetch; rows stay as they were. Returns `false` for stale tickets.
    pub fn apply_failure(&mut self, ticket: FetchTicket, message: impl Into<String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.load = LoadState::Failed(message.into());
        true
    }

    /// Move to `page`. Returns whether the backend must be asked again.
    pub fn set_page(&mut self, page: u64) -> bool {
        if page == self.window.page() {
            return false;
        }
        self.window = self.window.with_page(page);
        self.mode.is_server()
    }

    /// Change the page size (back to the first page). Returns whether to refetch.
    pub fn set_count(&mut self, count: u64) -> bool {
        if count == self.window.count() {
            return false;
        }
        self.window = self.window.with_count(count);
        self.mode.is_server()
    }

    /// Take a new head snapshot. Returns whether it changed.
    pub fn set_head(&mut self, head: Option<Slot>) -> bool {
        let changed = self.head != head;
        self.head = head;
        changed
    }

    /// Rows of the current page, highest slot first
    pub fn visible_rows(&self) -> &[R] {
        match self.mode {
            PaginationMode::Client { .. } => page_slice(&self.rows, self.window),
            PaginationMode::Server { .. } => &self.rows,
        }
    }

    /// Row count the pagination control is based on
    pub fn total_rows(&self) -> u64 {
        let len = self.rows.len() as u64;
        match self.mode {
            PaginationMode::Client { .. } => len,
            PaginationMode::Server { densify: true } => self.head.map_or(len, |head| head + 1),
            PaginationMode::Server { densify: false } => {
                self.highest_seen.map_or(len, |slot| slot + 1)
            }
        }
    }

    pub fn page_count(&self) -> u64 {
        self.window.page_count(self.total_rows())
    }

    /// Flip a row between collapsed and expanded; returns the new state
    pub fn toggle(&mut self, id: RowId) -> bool {
        self.expanded.toggle(id)
    }

    pub fn is_expanded(&self, id: RowId) -> bool {
        self.expanded.is_expanded(id)
    }

    pub fn expanded(&self) -> &ExpandedRows {
        &self.expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::row_expansion::RowSection;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Row {
        slot: Slot,
        filled: bool,
    }

    impl SlotRecord for Row {
        fn slot(&self) -> Slot {
            self.slot
        }

        fn placeholder(slot: Slot) -> Self {
            Row {
                slot,
                filled: false,
            }
        }

        fn is_placeholder(&self) -> bool {
            !self.filled
        }
    }

    fn rows(slots: &[Slot]) -> Vec<Row> {
        slots
            .iter()
            .map(|&slot| Row { slot, filled: true })
            .collect()
    }

    fn slots(list: &[Row]) -> Vec<Slot> {
        list.iter().map(|row| row.slot).collect()
    }

    #[test]
    fn client_list_is_densified_from_genesis_and_sliced() {
        let mut state = SlotListState::new(PaginationMode::Client { densify: true }, 2);
        let ticket = state.begin_fetch();
        assert!(state.apply_fetch(ticket, rows(&[1, 4])));

        assert_eq!(slots(state.visible_rows()), vec![4, 3]);
        assert_eq!(state.total_rows(), 5);
        assert_eq!(state.page_count(), 3);

        assert!(!state.set_page(2));
        assert_eq!(slots(state.visible_rows()), vec![0]);
        assert!(state.visible_rows()[0].is_placeholder());
    }

    #[test]
    fn server_page_is_densified_against_head() {
        let mut state = SlotListState::new(PaginationMode::Server { densify: true }, 3);
        state.set_head(Some(10));
        let ticket = state.begin_fetch();
        state.apply_fetch(ticket, rows(&[8, 10]));

        assert_eq!(slots(state.visible_rows()), vec![10, 9, 8]);
        assert!(state.visible_rows()[1].is_placeholder());
        assert_eq!(state.total_rows(), 11);
    }

    #[test]
    fn server_page_without_head_is_taken_as_is() {
        let mut state = SlotListState::new(PaginationMode::Server { densify: true }, 10);
        let ticket = state.begin_fetch();
        state.apply_fetch(ticket, rows(&[2, 5]));
        assert_eq!(slots(state.visible_rows()), vec![5, 2]);
    }

    #[test]
    fn sparse_server_list_is_truncated_and_totals_from_page_zero() {
        let mut state = SlotListState::new(PaginationMode::Server { densify: false }, 2);
        let ticket = state.begin_fetch();
        state.apply_fetch(ticket, rows(&[0, 32, 64]));
        assert_eq!(slots(state.visible_rows()), vec![64, 32]);
        assert_eq!(state.total_rows(), 65);

        assert!(state.set_page(1));
        let ticket = state.begin_fetch();
        state.apply_fetch(ticket, rows(&[0]));
        assert_eq!(state.total_rows(), 65);
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut state = SlotListState::new(PaginationMode::Server { densify: false }, 5);
        let old = state.begin_fetch();
        state.set_page(1);
        let new = state.begin_fetch();

        assert!(state.apply_fetch(new, rows(&[3])));
        assert!(!state.apply_fetch(old, rows(&[9])));
        assert!(!state.apply_failure(old, "late"));
        assert_eq!(slots(state.visible_rows()), vec![3]);
        assert_eq!(state.load_state(), &LoadState::Ready);
    }

    #[test]
    fn failure_keeps_previous_rows() {
        let mut state = SlotListState::new(PaginationMode::Client { densify: false }, 10);
        let ticket = state.begin_fetch();
        state.apply_fetch(ticket, rows(&[1, 2]));

        let ticket = state.begin_fetch();
        assert!(state.is_loading());
        assert!(state.apply_failure(ticket, "connection refused"));
        assert_eq!(slots(state.visible_rows()), vec![2, 1]);
        assert_eq!(
            state.load_state(),
            &LoadState::Failed("connection refused".to_string())
        );
    }

    #[test]
    fn page_size_change_resets_page() {
        let mut state: SlotListState<Row> =
            SlotListState::new(PaginationMode::Server { densify: true }, 10);
        state.set_page(4);
        assert!(state.set_count(25));
        assert_eq!(state.window(), PageWindow::new(25, 0));
        assert!(!state.set_count(25));
    }

    #[test]
    fn client_page_change_needs_no_refetch() {
        let mut state: SlotListState<Row> =
            SlotListState::new(PaginationMode::Client { densify: true }, 10);
        assert!(!state.set_page(1));
        assert!(!state.set_count(5));
        assert_eq!(state.window().page(), 0);
    }

    #[test]
    fn expansion_is_pruned_to_fetched_slots() {
        let mut state = SlotListState::new(PaginationMode::Client { densify: false }, 10);
        let ticket = state.begin_fetch();
        state.apply_fetch(ticket, rows(&[1, 2, 3]));

        assert!(state.toggle(RowId::details(2)));
        assert!(state.toggle(RowId::new(3, RowSection::CurrentEpoch)));

        let ticket = state.begin_fetch();
        state.apply_fetch(ticket, rows(&[3, 4]));
        assert!(!state.is_expanded(RowId::details(2)));
        assert!(state.is_expanded(RowId::new(3, RowSection::CurrentEpoch)));
    }

    #[test]
    fn head_change_is_reported() {
        let mut state: SlotListState<Row> =
            SlotListState::new(PaginationMode::Server { densify: true }, 10);
        assert!(state.set_head(Some(1)));
        assert!(!state.set_head(Some(1)));
        assert!(state.set_head(Some(2)));
    }
}
