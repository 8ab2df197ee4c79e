//! Row Expansion - Which table rows and nested sections are open
//!
//! Ids are keyed by slot, so a row stays open across re-pagination as long as
//! its slot is still rendered.

use std::fmt;
use std::str::FromStr;

use ahash::AHashSet;

use super::slot_window::Slot;

/// The expandable part of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowSection {
    /// The row's own detail panel
    Details,
    /// Current epoch pending shard headers of a state row
    CurrentEpoch,
    /// Previous epoch pending shard headers of a state row
    PreviousEpoch,
    /// Grandparent epoch confirmed commitments of a state row
    Grandparent,
}

impl RowSection {
    pub fn suffix(&self) -> &'static str {
        match self {
            RowSection::Details => "",
            RowSection::CurrentEpoch => "current",
            RowSection::PreviousEpoch => "previous",
            RowSection::Grandparent => "grandparent",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "" => Some(RowSection::Details),
            "current" => Some(RowSection::CurrentEpoch),
            "previous" => Some(RowSection::PreviousEpoch),
            "grandparent" => Some(RowSection::Grandparent),
            _ => None,
        }
    }
}

/// Identifier of one expandable element, written `<slot><suffix>` (e.g. `3current`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId {
    pub slot: Slot,
    pub section: RowSection,
}

impl RowId {
    pub fn new(slot: Slot, section: RowSection) -> Self {
        Self { slot, section }
    }

    pub fn details(slot: Slot) -> Self {
        Self::new(slot, RowSection::Details)
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.slot, self.section.suffix())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRowIdError(String);

impl fmt::Display for ParseRowIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid row id: {:?}", self.0)
    }
}

impl std::error::Error for ParseRowIdError {}

impl FromStr for RowId {
    type Err = ParseRowIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.bytes().take_while(u8::is_ascii_digit).count();
        let (slot, suffix) = s.split_at(digits);
        let slot = slot.parse().map_err(|_| ParseRowIdError(s.to_string()))?;
        let section = RowSection::from_suffix(suffix).ok_or_else(|| ParseRowIdError(s.to_string()))?;
        Ok(Self { slot, section })
    }
}

/// Set of currently expanded row ids
#[derive(Debug, Clone, Default)]
pub struct ExpandedRows {
    open: AHashSet<RowId>,
}

impl ExpandedRows {
    /// Flip `id`; returns whether it is now expanded
    pub fn toggle(&mut self, id: RowId) -> bool {
        if self.open.remove(&id) {
            false
        } else {
            self.open.insert(id);
            true
        }
    }

    pub fn is_expanded(&self, id: RowId) -> bool {
        self.open.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Forget ids whose slot is no longer rendered
    pub fn retain_slots(&mut self, mut rendered: impl FnMut(Slot) -> bool) {
        self.open.retain(|id| rendered(id.slot));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_the_set() {
        let mut rows = ExpandedRows::default();
        let id: RowId = "3current".parse().expect("parse id");

        assert!(rows.toggle(id));
        assert!(rows.is_expanded(id));
        assert!(!rows.toggle(id));
        assert!(!rows.is_expanded(id));
        assert!(rows.is_empty());
    }

    #[test]
    fn nested_sections_toggle_independently() {
        let mut rows = ExpandedRows::default();
        rows.toggle(RowId::details(3));
        rows.toggle(RowId::new(3, RowSection::PreviousEpoch));

        assert!(rows.is_expanded(RowId::details(3)));
        assert!(rows.is_expanded(RowId::new(3, RowSection::PreviousEpoch)));
        assert!(!rows.is_expanded(RowId::new(3, RowSection::CurrentEpoch)));
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn composite_ids_round_trip() {
        for text in ["0", "3current", "12previous", "40grandparent"] {
            let id: RowId = text.parse().expect("parse id");
            assert_eq!(id.to_string(), text);
        }
        assert_eq!(
            "7current".parse::<RowId>(),
            Ok(RowId::new(7, RowSection::CurrentEpoch))
        );
    }

    #[test]
    fn malformed_ids_are_rejected() {
        assert!("current".parse::<RowId>().is_err());
        assert!("3sideways".parse::<RowId>().is_err());
        assert!("".parse::<RowId>().is_err());
    }

    #[test]
    fn pruning_keeps_only_rendered_slots() {
        let mut rows = ExpandedRows::default();
        rows.toggle(RowId::details(1));
        rows.toggle(RowId::new(5, RowSection::CurrentEpoch));
        rows.toggle(RowId::details(9));

        rows.retain_slots(|slot| (4..=9).contains(&slot));
        assert!(!rows.is_expanded(RowId::details(1)));
        assert!(rows.is_expanded(RowId::new(5, RowSection::CurrentEpoch)));
        assert!(rows.is_expanded(RowId::details(9)));
    }
}
