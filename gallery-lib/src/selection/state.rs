//! Session-wide selection data.

use std::collections::HashSet;
use std::num::NonZeroUsize;

use crate::model::RecordId;

/// The selected identifiers and the outstanding select-N target.
///
/// Read-only outside this module; [`SelectionManager`](super::SelectionManager)
/// is the only writer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_ids: HashSet<RecordId>,
    /// Once set, only replaced by a newer request. Never cleared.
    pending_target: Option<NonZeroUsize>,
}

impl SelectionState {
    /// Returns the selected identifiers.
    pub fn selected_ids(&self) -> &HashSet<RecordId> {
        &self.selected_ids
    }

    /// Returns the selected identifiers in ascending order.
    pub fn sorted_ids(&self) -> Vec<RecordId> {
        let mut ids: Vec<_> = self.selected_ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Returns `true` if the identifier is selected.
    pub fn contains(&self, id: RecordId) -> bool {
        self.selected_ids.contains(&id)
    }

    /// Returns the number of selected identifiers.
    pub fn len(&self) -> usize {
        self.selected_ids.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected_ids.is_empty()
    }

    /// Returns the select-N target, if one was requested.
    pub fn pending_target(&self) -> Option<NonZeroUsize> {
        self.pending_target
    }

    /// How many more records the target still needs, 0 if met or absent.
    pub fn deficit(&self) -> usize {
        self.pending_target
            .map_or(0, |target| target.get().saturating_sub(self.selected_ids.len()))
    }

    pub(super) fn insert(&mut self, id: RecordId) -> bool {
        self.selected_ids.insert(id)
    }

    pub(super) fn remove(&mut self, id: RecordId) -> bool {
        self.selected_ids.remove(&id)
    }

    pub(super) fn set_target(&mut self, target: NonZeroUsize) {
        self.pending_target = Some(target);
    }
}
