//! Slot Window - Gap filling, ordering and pagination over the slot number line
//!
//! The backend hands out sparse, ascending, slot-tagged records. The list views
//! show them newest first, one row per slot, with explicit placeholder rows for
//! slots that have no data. Everything here is pure and independent of GPUI.
//!
//! ```text
//! fetch(count, page) ──► densify(min..=max) ──► present (reverse) ──► page slice
//! ```

use std::ops::RangeInclusive;

use tracing::warn;

/// Slot number
pub type Slot = u64;

/// Page sizes offered by the list views
pub const ROWS_PER_PAGE_OPTIONS: [u64; 5] = [5, 10, 25, 50, 100];

/// Page size used until the user picks another
pub const DEFAULT_ROWS_PER_PAGE: u64 = 10;

/// Highest slot a client-paginated list is gap-filled up to
pub const MAX_CLIENT_DENSIFY_SLOT: Slot = 100_000;

/// A record keyed by slot that can stand in for a missing slot
pub trait SlotRecord: Clone {
    /// Slot this record belongs to
    fn slot(&self) -> Slot;

    /// An empty record for a slot the backend returned nothing for
    fn placeholder(slot: Slot) -> Self;

    /// Whether this record was synthesized by [`densify`]
    fn is_placeholder(&self) -> bool;
}

/// Page size plus zero-based page index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageWindow {
    count: u64,
    page: u64,
}

impl PageWindow {
    /// A zero page size is clamped to one
    pub fn new(count: u64, page: u64) -> Self {
        Self {
            count: count.max(1),
            page,
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn with_page(self, page: u64) -> Self {
        Self { page, ..self }
    }

    /// New page size; the page index goes back to the first page
    pub fn with_count(self, count: u64) -> Self {
        Self::new(count, 0)
    }

    /// Index range of this page inside a list of `len` rows
    pub fn index_range(&self, len: usize) -> std::ops::Range<usize> {
        let start = usize::try_from(self.page.saturating_mul(self.count))
            .unwrap_or(usize::MAX)
            .min(len);
        let end = usize::try_from(self.count)
            .map(|count| start.saturating_add(count))
            .unwrap_or(usize::MAX)
            .min(len);
        start..end
    }

    /// Number of pages needed for `total` rows (at least one)
    pub fn page_count(&self, total: u64) -> u64 {
        total.div_ceil(self.count).max(1)
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS_PER_PAGE, 0)
    }
}

/// How a list view obtains its page of rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationMode {
    /// Fetch everything once, then reverse and slice locally.
    /// With `densify`, gaps between genesis and the highest slot are filled.
    Client { densify: bool },
    /// Ask the backend for one `{count, page}` window.
    /// With `densify`, the window is filled using the head slot.
    Server { densify: bool },
}

impl PaginationMode {
    pub fn is_server(&self) -> bool {
        matches!(self, PaginationMode::Server { .. })
    }
}

/// Slots covered by `window` when the highest known slot is `head`.
///
/// Page 0 is always the `count` most recent slots. Returns `None` when the
/// window lies entirely before genesis.
pub fn slot_window(head: Slot, window: PageWindow) -> Option<RangeInclusive<Slot>> {
    let skipped = window.page.checked_mul(window.count)?;
    let max = head.checked_sub(skipped)?;
    let min = max.saturating_sub(window.count - 1);
    Some(min..=max)
}

/// One entry per slot in `min_slot..=max_slot`, ascending.
///
/// `sparse` must be sorted ascending by slot without duplicates. Slots with a
/// record keep it; every other slot gets [`SlotRecord::placeholder`]. Records
/// outside the range are dropped. An empty range yields an empty sequence.
pub fn densify<R: SlotRecord>(sparse: Vec<R>, min_slot: Slot, max_slot: Slot) -> Vec<R> {
    if max_slot < min_slot {
        return Vec::new();
    }

    let span = usize::try_from(max_slot - min_slot)
        .unwrap_or(usize::MAX)
        .saturating_add(1);
    let mut dense = Vec::with_capacity(span.min(1 << 16));
    let mut cursor = sparse.into_iter().peekable();

    for slot in min_slot..=max_slot {
        while cursor.next_if(|record| record.slot() < slot).is_some() {}

        match cursor.next_if(|record| record.slot() == slot) {
            Some(record) => dense.push(record),
            None => dense.push(R::placeholder(slot)),
        }
    }

    dense
}

/// Highest slot first
pub fn present<R>(mut dense: Vec<R>) -> Vec<R> {
    dense.reverse();
    dense
}

/// The rows of `window` out of an already ordered list
pub fn page_slice<R>(ordered: &[R], window: PageWindow) -> &[R] {
    &ordered[window.index_range(ordered.len())]
}

/// Rows for a server-paginated fetch.
///
/// With `densify` and a known head, the fetched window is gap-filled over
/// the slot range the window maps to. Without a head there is nothing to
/// anchor the range to, so the fetched records are taken as complete.
pub fn reconcile_server_page<R: SlotRecord>(
    fetched: Vec<R>,
    head: Option<Slot>,
    window: PageWindow,
    densify_gaps: bool,
) -> Vec<R> {
    match (densify_gaps, head) {
        (true, Some(head)) => match slot_window(head, window) {
            Some(range) => present(densify(fetched, *range.start(), *range.end())),
            None => Vec::new(),
        },
        _ => present(fetched),
    }
}

/// Full ordered list for a client-paginated fetch.
///
/// Gap-filling starts at slot 0, so a record past [`MAX_CLIENT_DENSIFY_SLOT`]
/// leaves the list sparse rather than allocating a placeholder per slot.
pub fn reconcile_client_list<R: SlotRecord>(fetched: Vec<R>, densify_gaps: bool) -> Vec<R> {
    if !densify_gaps {
        return present(fetched);
    }
    match fetched.last().map(SlotRecord::slot) {
        Some(last) if last > MAX_CLIENT_DENSIFY_SLOT => {
            warn!(
                last_slot = last,
                limit = MAX_CLIENT_DENSIFY_SLOT,
                "Slot span too large to gap-fill, showing fetched rows only"
            );
            present(fetched)
        }
        Some(last) => present(densify(fetched, 0, last)),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Row {
        slot: Slot,
        real: bool,
    }

    impl Row {
        fn real(slot: Slot) -> Self {
            Self { slot, real: true }
        }
    }

    impl SlotRecord for Row {
        fn slot(&self) -> Slot {
            self.slot
        }

        fn placeholder(slot: Slot) -> Self {
            Self { slot, real: false }
        }

        fn is_placeholder(&self) -> bool {
            !self.real
        }
    }

    fn slots(rows: &[Row]) -> Vec<Slot> {
        rows.iter().map(|r| r.slot).collect()
    }

    #[test]
    fn densify_fills_missing_slots_with_placeholders() {
        let dense = densify(vec![Row::real(2), Row::real(4)], 0, 4);
        assert_eq!(
            dense,
            vec![
                Row::placeholder(0),
                Row::placeholder(1),
                Row::real(2),
                Row::placeholder(3),
                Row::real(4),
            ]
        );
    }

    #[test]
    fn densify_length_and_positions_match_range() {
        let sparse = vec![Row::real(11), Row::real(12), Row::real(17), Row::real(20)];
        for (min, max) in [(10, 20), (11, 20), (0, 25), (11, 17)] {
            let dense = densify(sparse.clone(), min, max);
            assert_eq!(dense.len() as u64, max - min + 1);
            for (offset, entry) in dense.iter().enumerate() {
                assert_eq!(entry.slot, min + offset as u64);
            }
        }
    }

    #[test]
    fn densify_is_idempotent() {
        let sparse = vec![Row::real(3), Row::real(5), Row::real(9)];
        let once = densify(sparse, 1, 10);
        let twice = densify(once.clone(), 1, 10);
        assert_eq!(once, twice);
    }

    #[test]
    fn densify_empty_input() {
        let empty: Vec<Row> = Vec::new();
        assert!(densify(empty.clone(), 5, 4).is_empty());

        let dense = densify(empty, 3, 5);
        assert_eq!(slots(&dense), vec![3, 4, 5]);
        assert!(dense.iter().all(Row::is_placeholder));
    }

    #[test]
    fn densify_drops_records_outside_range() {
        let sparse = vec![Row::real(1), Row::real(4), Row::real(9)];
        let dense = densify(sparse, 3, 5);
        assert_eq!(
            dense,
            vec![Row::placeholder(3), Row::real(4), Row::placeholder(5)]
        );
    }

    #[test]
    fn window_maps_pages_onto_the_slot_line() {
        assert_eq!(slot_window(9, PageWindow::new(5, 0)), Some(5..=9));
        assert_eq!(slot_window(9, PageWindow::new(5, 1)), Some(0..=4));
        assert_eq!(slot_window(9, PageWindow::new(5, 2)), None);
    }

    #[test]
    fn window_clamps_at_genesis() {
        assert_eq!(slot_window(3, PageWindow::new(10, 0)), Some(0..=3));
        assert_eq!(slot_window(0, PageWindow::new(10, 0)), Some(0..=0));
        assert_eq!(slot_window(12, PageWindow::new(5, 2)), Some(0..=2));
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let window = PageWindow::new(0, 3);
        assert_eq!(window.count(), 1);
        assert_eq!(window.page(), 3);
    }

    #[test]
    fn changing_page_size_returns_to_first_page() {
        let window = PageWindow::new(10, 4).with_count(25);
        assert_eq!(window, PageWindow::new(25, 0));
    }

    #[test]
    fn present_reverses_and_is_self_inverse() {
        let rows = vec![Row::real(1), Row::real(2), Row::real(3)];
        let shown = present(rows.clone());
        assert_eq!(slots(&shown), vec![3, 2, 1]);
        assert_eq!(present(shown), rows);
    }

    #[test]
    fn pages_cover_presented_list_without_overlap() {
        let dense = densify(vec![Row::real(0), Row::real(6), Row::real(12)], 0, 12);
        let shown = present(dense);

        for count in 1..=15 {
            let window = PageWindow::new(count, 0);
            let pages = window.page_count(shown.len() as u64);
            let mut rebuilt = Vec::new();
            for page in 0..pages {
                rebuilt.extend_from_slice(page_slice(&shown, window.with_page(page)));
            }
            assert_eq!(rebuilt, shown, "page size {count}");
        }
    }

    #[test]
    fn page_slice_past_the_end_is_empty() {
        let rows = vec![Row::real(1), Row::real(2)];
        assert!(page_slice(&rows, PageWindow::new(5, 3)).is_empty());
    }

    #[test]
    fn server_page_densifies_against_head() {
        let fetched = vec![Row::real(6), Row::real(8)];
        let rows = reconcile_server_page(fetched, Some(9), PageWindow::new(5, 0), true);
        assert_eq!(slots(&rows), vec![9, 8, 7, 6, 5]);
        assert!(rows[0].is_placeholder());
        assert!(!rows[1].is_placeholder());
    }

    #[test]
    fn server_page_without_head_keeps_fetched_rows() {
        let fetched = vec![Row::real(6), Row::real(8)];
        let rows = reconcile_server_page(fetched, None, PageWindow::new(5, 0), true);
        assert_eq!(rows, vec![Row::real(8), Row::real(6)]);
    }

    #[test]
    fn server_page_beyond_genesis_is_empty() {
        let rows = reconcile_server_page(vec![Row::real(1)], Some(3), PageWindow::new(5, 1), true);
        assert!(rows.is_empty());
    }

    #[test]
    fn client_list_densifies_from_genesis() {
        let rows = reconcile_client_list(vec![Row::real(1), Row::real(3)], true);
        assert_eq!(slots(&rows), vec![3, 2, 1, 0]);
        assert!(rows[1].is_placeholder());
        assert!(rows[3].is_placeholder());

        let plain = reconcile_client_list(vec![Row::real(1), Row::real(3)], false);
        assert_eq!(slots(&plain), vec![3, 1]);
    }

    #[test]
    fn client_list_past_the_gap_fill_limit_stays_sparse() {
        let far = u64::MAX / 2;
        let rows = reconcile_client_list(vec![Row::real(1), Row::real(far)], true);
        assert_eq!(slots(&rows), vec![far, 1]);
        assert!(rows.iter().all(|r| !r.is_placeholder()));

        let edge = reconcile_client_list(vec![Row::real(MAX_CLIENT_DENSIFY_SLOT)], true);
        assert_eq!(edge.len() as u64, MAX_CLIENT_DENSIFY_SLOT + 1);
    }
}
