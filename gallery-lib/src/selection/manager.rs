//! Selection manager: the only writer of [`SelectionState`].

use std::collections::HashSet;
use std::num::NonZeroUsize;

use super::SelectionState;
use crate::api::Page;
use crate::model::Identified;
use crate::model::RecordId;

/// Net effect of a selection operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionChange {
    /// Identifiers newly added to the selection.
    pub added: usize,
    /// Identifiers removed from the selection.
    pub removed: usize,
}

impl SelectionChange {
    /// Returns `true` if the operation changed nothing.
    pub fn is_empty(&self) -> bool {
        self.added == 0 && self.removed == 0
    }
}

/// Owns the session's [`SelectionState`] and applies every change to it.
///
/// Rows of a page are checked if their identifier is in the selection set.
/// The page itself is never mutated; pass it in to each operation.
///
/// # Example
///
/// ```
/// use gallery_lib::api::Page;
/// use gallery_lib::model::RecordId;
/// use gallery_lib::selection::SelectionManager;
///
/// let ids: Vec<RecordId> = (1..=12).map(RecordId::new).collect();
/// let page = Page::new(1, 12, ids.clone(), 24);
///
/// let mut selection = SelectionManager::new();
/// selection.apply_page_edit(&page, &ids[..3]);
/// assert_eq!(selection.state().len(), 3);
///
/// selection.apply_toggle_all(&page, false);
/// assert!(selection.state().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    state: SelectionState,
}

impl SelectionManager {
    /// Creates an empty selection with no target.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current selection state.
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    // =========================================================================
    // Derived views
    // =========================================================================

    /// Returns the page's records that are selected, in page order.
    pub fn visible_selection<'p, R: Identified>(&self, page: &'p Page<R>) -> Vec<&'p R> {
        page.records()
            .iter()
            .filter(|r| self.state.contains(r.id()))
            .collect()
    }

    /// Returns the identifiers of the page's selected records, in page order.
    pub fn visible_selected_ids<R: Identified>(&self, page: &Page<R>) -> Vec<RecordId> {
        page.ids().filter(|id| self.state.contains(*id)).collect()
    }

    /// Returns `true` if the page has rows and all of them are selected.
    ///
    /// Drives the "select all on this page" header checkbox.
    pub fn all_visible_selected<R: Identified>(&self, page: &Page<R>) -> bool {
        !page.is_empty() && page.ids().all(|id| self.state.contains(id))
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Makes the page's checked rows the selection for that page.
    ///
    /// Every record on `page` ends up selected if it is in `checked` and
    /// unselected otherwise. Records on other pages are untouched, and
    /// entries in `checked` that are not on the page are ignored. Applying the
    /// same edit twice is the same as applying it once.
    pub fn apply_page_edit<R, I>(&mut self, page: &Page<R>, checked: I) -> SelectionChange
    where
        R: Identified,
        I: IntoIterator,
        I::Item: Identified,
    {
        let checked: HashSet<RecordId> = checked.into_iter().map(|r| r.id()).collect();
        let mut change = SelectionChange::default();

        for id in page.ids() {
            if checked.contains(&id) {
                if self.state.insert(id) {
                    change.added += 1;
                }
            } else if self.state.remove(id) {
                change.removed += 1;
            }
        }

        log::debug!(
            "Page {} edit: +{} -{} ({} selected)",
            page.page_index(),
            change.added,
            change.removed,
            self.state.len()
        );
        change
    }

    /// Selects every record on the page, or clears every record on it.
    pub fn apply_toggle_all<R: Identified>(&mut self, page: &Page<R>, select_all: bool) -> SelectionChange {
        if select_all {
            self.apply_page_edit(page, page.records())
        } else {
            self.apply_page_edit(page, std::iter::empty::<RecordId>())
        }
    }

    /// Sets the select-first-N target, replacing any previous one.
    ///
    /// A count of zero is rejected and leaves the state unchanged; returns
    /// whether the target was accepted. Nothing is selected here: call
    /// [`reconcile_target`](Self::reconcile_target) with the loaded page.
    pub fn request_select_first_n(&mut self, n: usize) -> bool {
        let Some(target) = NonZeroUsize::new(n) else {
            log::debug!("Ignoring select-first request for 0 records");
            return false;
        };
        self.state.set_target(target);
        log::debug!(
            "Select-first target set to {} ({} already selected)",
            target,
            self.state.len()
        );
        true
    }

    /// Advances an unmet select-N target using the rows of `page`.
    ///
    /// Takes unselected records in page order until the target is met or the
    /// page runs out. The target stays set afterwards, so a later deselection
    /// is refilled the next time a page is reconciled. Returns the identifiers
    /// that were added.
    pub fn reconcile_target<R: Identified>(&mut self, page: &Page<R>) -> Vec<RecordId> {
        let deficit = self.state.deficit();
        if deficit == 0 {
            return Vec::new();
        }

        let mut picked = Vec::new();
        for id in page.ids() {
            if picked.len() == deficit {
                break;
            }
            if self.state.insert(id) {
                picked.push(id);
            }
        }

        if !picked.is_empty() {
            log::debug!(
                "Select-first filled {} from page {}, {} still outstanding",
                picked.len(),
                page.page_index(),
                self.state.deficit()
            );
        }
        picked
    }
}
