//! HeadState - Current slot reported by the head poller
//!
//! Written only by the head poller. Everything else receives a copied
//! [`HeadSnapshot`] pushed to it by the workspace.

use crate::domain::slot_window::Slot;

/// Read-only view of the chain head at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeadSnapshot {
    /// `None` until the backend has processed genesis (or was never reached)
    pub slot: Option<Slot>,
    /// Whether the last poll got an answer
    pub reachable: bool,
}

impl HeadSnapshot {
    /// Slot shown in the header; an unknown head reads as 0
    pub fn display_slot(&self) -> Slot {
        self.slot.unwrap_or(0)
    }
}

#[derive(Debug, Default)]
pub struct HeadState {
    snapshot: HeadSnapshot,
    last_error: Option<String>,
}

impl HeadState {
    pub fn snapshot(&self) -> HeadSnapshot {
        self.snapshot
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Record a successful poll. Returns whether the snapshot changed.
    pub fn record_head(&mut self, slot: Option<Slot>) -> bool {
        let next = HeadSnapshot {
            slot,
            reachable: true,
        };
        let changed = next != self.snapshot;
        self.snapshot = next;
        self.last_error = None;
        changed
    }

    /// Record a failed poll; the last known slot is kept.
    /// Returns `true` only on the transition from reachable to unreachable.
    pub fn record_failure(&mut self, message: impl Into<String>) -> bool {
        let was_reachable = self.snapshot.reachable || self.last_error.is_none();
        self.snapshot.reachable = false;
        self.last_error = Some(message.into());
        was_reachable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_head_displays_as_zero() {
        assert_eq!(HeadSnapshot::default().display_slot(), 0);
    }

    #[test]
    fn head_change_is_reported_once() {
        let mut state = HeadState::default();
        assert!(state.record_head(Some(3)));
        assert!(!state.record_head(Some(3)));
        assert!(state.record_head(Some(4)));
        assert_eq!(state.snapshot().slot, Some(4));
    }

    #[test]
    fn failure_keeps_last_slot_and_reports_transition() {
        let mut state = HeadState::default();
        state.record_head(Some(7));

        assert!(state.record_failure("timeout"));
        assert!(!state.record_failure("timeout"));
        assert_eq!(state.snapshot().slot, Some(7));
        assert!(!state.snapshot().reachable);
        assert_eq!(state.last_error(), Some("timeout"));

        assert!(state.record_head(Some(7)));
        assert_eq!(state.last_error(), None);
    }
}
