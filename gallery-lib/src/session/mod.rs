//! Browse session: one loaded page plus the session-wide selection.
//!
//! The session ties a [`PageLoader`] to a [`SelectionManager`]. Page loads are
//! split in two steps so the caller can run the fetch anywhere (inline, or in
//! a spawned task) while the session stays single-owner:
//!
//! 1. [`BrowseSession::request_page`] issues a [`PageRequest`] with a fresh epoch
//! 2. [`BrowseSession::apply_load`] takes the request back with the loader's
//!    result, and applies it only if no newer request was issued since
//!
//! Applying a page runs select-N reconciliation against it.
//!
//! # Example
//!
//! ```ignore
//! let mut session = BrowseSession::new(client, 12);
//!
//! session.navigate(1).await;
//! session.request_select_first_n(15);
//! session.navigate(2).await;
//!
//! assert_eq!(session.selection().state().len(), 15);
//! ```

mod epoch;

pub use epoch::PageRequest;

use epoch::EpochCounter;

use crate::api::Page;
use crate::api::PageLoader;
use crate::api::Paginator;
use crate::error::FetchError;
use crate::model::Artwork;
use crate::model::Identified;
use crate::model::RecordId;
use crate::selection::SelectionChange;
use crate::selection::SelectionManager;

/// Progress of the most recent page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// No request outstanding; the current page (if any) is up to date.
    Idle,
    /// A request is in flight.
    Loading {
        /// Page being fetched.
        page_index: u32,
    },
    /// The latest request failed. The previous page is still shown.
    Failed {
        /// Page that could not be fetched.
        page_index: u32,
        /// Error description.
        message: String,
    },
}

impl LoadState {
    /// Returns `true` while a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }
}

/// What [`BrowseSession::apply_load`] did with a result.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The page became current.
    Applied {
        /// Index of the page now shown.
        page_index: u32,
        /// Identifiers selected by select-N reconciliation on this page.
        reconciled: Vec<RecordId>,
    },
    /// A newer request was issued after this one; the result was dropped.
    Stale {
        /// Index of the dropped page.
        page_index: u32,
    },
    /// The latest request failed. Nothing changed except the load state.
    Failed(FetchError),
}

/// A browsing session over one paginated data source.
///
/// Selection survives navigation; only the current page is held in memory.
/// All selection changes go through the session's operations, there is no
/// direct setter for the selected identifiers or the target.
pub struct BrowseSession<L, R = Artwork> {
    loader: L,
    selection: SelectionManager,
    page: Option<Page<R>>,
    page_size: u32,
    epochs: EpochCounter,
    load_state: LoadState,
}

impl<L, R> BrowseSession<L, R>
where
    L: PageLoader<R>,
    R: Identified,
{
    /// Creates a session with an empty selection and no page loaded.
    pub fn new(loader: L, page_size: u32) -> Self {
        Self {
            loader,
            selection: SelectionManager::new(),
            page: None,
            page_size: page_size.max(1),
            epochs: EpochCounter::default(),
            load_state: LoadState::Idle,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the page loader.
    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Returns the selection manager (read-only).
    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    /// Returns the current page, if one has been loaded.
    pub fn page(&self) -> Option<&Page<R>> {
        self.page.as_ref()
    }

    /// Returns the configured page size.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Returns the state of the latest page request.
    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// Returns paginator info for the current page.
    pub fn paginator(&self) -> Option<Paginator> {
        self.page
            .as_ref()
            .map(|p| Paginator::new(p.page_index(), p.page_size(), p.total_count()))
    }

    /// Returns paginator info positioned where navigation should continue.
    ///
    /// While a request is in flight this is the requested page rather than
    /// the one shown, so repeated `next`/`prev` steps keep advancing. The
    /// total comes from the shown page. `None` until a page has loaded.
    pub fn navigation(&self) -> Option<Paginator> {
        let mut paginator = self.paginator()?;
        if let LoadState::Loading { page_index } = self.load_state {
            paginator.page_index = page_index;
        }
        Some(paginator)
    }

    /// Returns the current page's selected records, in page order.
    pub fn visible_selection(&self) -> Vec<&R> {
        match &self.page {
            Some(page) => self.selection.visible_selection(page),
            None => Vec::new(),
        }
    }

    /// Returns `true` if every row of the current page is selected.
    pub fn all_visible_selected(&self) -> bool {
        self.page
            .as_ref()
            .is_some_and(|page| self.selection.all_visible_selected(page))
    }

    // =========================================================================
    // Page loading
    // =========================================================================

    /// Issues a request for a page. Any earlier request becomes stale.
    ///
    /// Indexes below 1 are clamped to 1.
    pub fn request_page(&mut self, page_index: u32) -> PageRequest {
        let page_index = page_index.max(1);
        let request = PageRequest::new(self.epochs.next(), page_index, self.page_size);
        self.load_state = LoadState::Loading { page_index };
        log::debug!("Requesting page {} (epoch {})", page_index, request.epoch());
        request
    }

    /// Re-issues a request for the page that is shown or last failed.
    pub fn reload(&mut self) -> PageRequest {
        let page_index = match &self.load_state {
            LoadState::Failed { page_index, .. } | LoadState::Loading { page_index } => *page_index,
            LoadState::Idle => self.page.as_ref().map_or(1, |p| p.page_index()),
        };
        self.request_page(page_index)
    }

    /// Applies the result of a page request.
    ///
    /// Results for anything but the latest request are discarded without
    /// touching the session. A successful result replaces the current page and
    /// advances an outstanding select-N target from its rows.
    pub fn apply_load(&mut self, request: PageRequest, result: Result<Page<R>, FetchError>) -> LoadOutcome {
        let page_index = request.page_index();

        if !self.epochs.is_current(request.epoch()) {
            log::debug!(
                "Discarding stale page {} (epoch {})",
                page_index,
                request.epoch()
            );
            return LoadOutcome::Stale { page_index };
        }

        match result {
            Ok(page) => {
                let reconciled = self.selection.reconcile_target(&page);
                log::info!(
                    "Loaded page {} ({} records, {} total)",
                    page.page_index(),
                    page.len(),
                    page.total_count()
                );
                self.page = Some(page);
                self.load_state = LoadState::Idle;
                LoadOutcome::Applied {
                    page_index,
                    reconciled,
                }
            }
            Err(e) => {
                log::warn!("Failed to load page {}: {}", page_index, e);
                self.load_state = LoadState::Failed {
                    page_index,
                    message: e.to_string(),
                };
                LoadOutcome::Failed(e)
            }
        }
    }

    /// Requests, fetches and applies a page in one step.
    pub async fn navigate(&mut self, page_index: u32) -> LoadOutcome {
        let request = self.request_page(page_index);
        let result = self
            .loader
            .load_page(request.page_index(), request.page_size())
            .await;
        self.apply_load(request, result)
    }

    // =========================================================================
    // Selection operations on the current page
    // =========================================================================

    /// Makes `checked` the selection for the current page's rows.
    ///
    /// No-op when no page is loaded.
    pub fn apply_page_edit<I>(&mut self, checked: I) -> SelectionChange
    where
        I: IntoIterator,
        I::Item: Identified,
    {
        match &self.page {
            Some(page) => self.selection.apply_page_edit(page, checked),
            None => SelectionChange::default(),
        }
    }

    /// Selects or clears every row on the current page.
    pub fn toggle_all(&mut self, select_all: bool) -> SelectionChange {
        match &self.page {
            Some(page) => self.selection.apply_toggle_all(page, select_all),
            None => SelectionChange::default(),
        }
    }

    /// Flips one row of the current page.
    ///
    /// Returns the row's new checked state, or `None` if the identifier is
    /// not on the current page.
    pub fn toggle_record(&mut self, id: RecordId) -> Option<bool> {
        let page = self.page.as_ref()?;
        if !page.contains(id) {
            return None;
        }

        let now_checked = !self.selection.state().contains(id);
        let mut checked = self.selection.visible_selected_ids(page);
        if now_checked {
            checked.push(id);
        } else {
            checked.retain(|other| *other != id);
        }
        self.selection.apply_page_edit(page, checked);
        Some(now_checked)
    }

    /// Sets the select-first-N target and fills it from the current page.
    ///
    /// Returns the identifiers selected right away, or `None` if `n` is 0 and
    /// the request was rejected.
    pub fn request_select_first_n(&mut self, n: usize) -> Option<Vec<RecordId>> {
        if !self.selection.request_select_first_n(n) {
            return None;
        }
        Some(match &self.page {
            Some(page) => self.selection.reconcile_target(page),
            None => Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;

    /// Numbered records `1..=total`, sliced into pages.
    struct NumberedLoader {
        total: u64,
    }

    impl NumberedLoader {
        fn page(&self, page_index: u32, page_size: u32) -> Page<RecordId> {
            let start = u64::from(page_index - 1) * u64::from(page_size) + 1;
            let end = (start + u64::from(page_size) - 1).min(self.total);
            let records = (start..=end).map(RecordId::new).collect();
            Page::new(page_index, page_size, records, self.total)
        }
    }

    #[async_trait]
    impl PageLoader<RecordId> for NumberedLoader {
        async fn load_page(&self, page_index: u32, page_size: u32) -> Result<Page<RecordId>, FetchError> {
            Ok(self.page(page_index, page_size))
        }
    }

    fn session() -> BrowseSession<NumberedLoader, RecordId> {
        BrowseSession::new(NumberedLoader { total: 100 }, 12)
    }

    fn ids(range: std::ops::RangeInclusive<u64>) -> Vec<RecordId> {
        range.map(RecordId::new).collect()
    }

    fn load(session: &mut BrowseSession<NumberedLoader, RecordId>, page_index: u32) -> LoadOutcome {
        let request = session.request_page(page_index);
        let page = session.loader().page(request.page_index(), request.page_size());
        session.apply_load(request, Ok(page))
    }

    #[test]
    fn test_stale_response_discarded() {
        let mut s = session();
        let third = s.request_page(3);
        let fourth = s.request_page(4);

        let page4 = s.loader().page(4, 12);
        assert!(matches!(s.apply_load(fourth, Ok(page4)), LoadOutcome::Applied { page_index: 4, .. }));

        let page3 = s.loader().page(3, 12);
        assert!(matches!(s.apply_load(third, Ok(page3)), LoadOutcome::Stale { page_index: 3 }));

        assert_eq!(s.page().map(|p| p.page_index()), Some(4));
        assert_eq!(s.load_state(), &LoadState::Idle);
    }

    #[test]
    fn test_stale_failure_discarded() {
        let mut s = session();
        let third = s.request_page(3);
        let fourth = s.request_page(4);

        let page4 = s.loader().page(4, 12);
        s.apply_load(fourth, Ok(page4));

        let outcome = s.apply_load(third, Err(FetchError::http(503, "unavailable")));

        assert!(matches!(outcome, LoadOutcome::Stale { page_index: 3 }));
        assert_eq!(s.page().map(|p| p.page_index()), Some(4));
        assert_eq!(s.load_state(), &LoadState::Idle);
    }

    #[test]
    fn test_stale_response_before_latest() {
        let mut s = session();
        let third = s.request_page(3);
        let fourth = s.request_page(4);

        let page3 = s.loader().page(3, 12);
        assert!(matches!(s.apply_load(third, Ok(page3)), LoadOutcome::Stale { .. }));
        assert!(s.page().is_none());
        assert!(s.load_state().is_loading());

        let page4 = s.loader().page(4, 12);
        s.apply_load(fourth, Ok(page4));
        assert_eq!(s.page().map(|p| p.page_index()), Some(4));
    }

    #[test]
    fn test_stale_response_does_not_reconcile() {
        let mut s = session();
        s.request_select_first_n(5);
        let first = s.request_page(1);
        let second = s.request_page(2);

        let page1 = s.loader().page(1, 12);
        s.apply_load(first, Ok(page1));
        assert!(s.selection().state().is_empty());

        let page2 = s.loader().page(2, 12);
        s.apply_load(second, Ok(page2));
        assert_eq!(s.selection().state().sorted_ids(), ids(13..=17));
    }

    #[test]
    fn test_failed_load_keeps_page() {
        let mut s = session();
        load(&mut s, 1);

        let request = s.request_page(2);
        let outcome = s.apply_load(request, Err(FetchError::http(503, "unavailable")));

        assert!(matches!(outcome, LoadOutcome::Failed(_)));
        assert_eq!(s.page().map(|p| p.page_index()), Some(1));
        assert_eq!(
            s.load_state(),
            &LoadState::Failed {
                page_index: 2,
                message: "HTTP 503: unavailable".to_string()
            }
        );

        assert_eq!(s.reload().page_index(), 2);
    }

    #[test]
    fn test_edit_previous_page_while_loading() {
        let mut s = session();
        load(&mut s, 1);

        let request = s.request_page(2);
        s.apply_page_edit(ids(1..=2));
        assert_eq!(s.selection().state().len(), 2);

        let page2 = s.loader().page(2, 12);
        s.apply_load(request, Ok(page2));
        assert_eq!(s.selection().state().sorted_ids(), ids(1..=2));
        assert!(s.visible_selection().is_empty());
    }

    #[test]
    fn test_edit_and_toggle_scenario() {
        let mut s = session();
        load(&mut s, 1);

        s.apply_page_edit(ids(1..=3));
        assert_eq!(s.selection().state().sorted_ids(), ids(1..=3));

        s.toggle_all(false);
        assert!(s.selection().state().is_empty());
    }

    #[test]
    fn test_edits_without_page_are_noops() {
        let mut s = session();
        assert!(s.apply_page_edit(ids(1..=3)).is_empty());
        assert!(s.toggle_all(true).is_empty());
        assert_eq!(s.toggle_record(RecordId::new(1)), None);
        assert!(s.selection().state().is_empty());
        assert!(!s.all_visible_selected());
    }

    #[test]
    fn test_toggle_record() {
        let mut s = session();
        load(&mut s, 1);

        assert_eq!(s.toggle_record(RecordId::new(5)), Some(true));
        assert_eq!(s.toggle_record(RecordId::new(6)), Some(true));
        assert_eq!(s.toggle_record(RecordId::new(5)), Some(false));
        assert_eq!(s.toggle_record(RecordId::new(50)), None);

        assert_eq!(s.selection().state().sorted_ids(), vec![RecordId::new(6)]);
    }

    #[test]
    fn test_select_first_n_scenario() {
        let mut s = session();
        load(&mut s, 1);

        let immediate = s.request_select_first_n(15).unwrap();
        assert_eq!(immediate, ids(1..=12));
        assert_eq!(s.selection().state().deficit(), 3);

        let outcome = load(&mut s, 2);
        match outcome {
            LoadOutcome::Applied { reconciled, .. } => assert_eq!(reconciled, ids(13..=15)),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(s.selection().state().sorted_ids(), ids(1..=15));

        load(&mut s, 3);
        assert_eq!(s.selection().state().len(), 15);
    }

    #[test]
    fn test_select_first_n_rejects_zero() {
        let mut s = session();
        load(&mut s, 1);
        assert_eq!(s.request_select_first_n(0), None);
        assert_eq!(s.selection().state().pending_target(), None);
        assert!(s.selection().state().is_empty());
    }

    #[test]
    fn test_edit_under_target_not_refilled_on_same_page() {
        let mut s = session();
        load(&mut s, 1);
        s.request_select_first_n(3);

        s.apply_page_edit(ids(1..=1));
        assert_eq!(s.selection().visible_selected_ids(s.page().unwrap()), ids(1..=1));

        load(&mut s, 2);
        assert_eq!(s.selection().state().sorted_ids(), vec![
            RecordId::new(1),
            RecordId::new(13),
            RecordId::new(14)
        ]);
    }

    #[test]
    fn test_paginator() {
        let mut s = session();
        assert!(s.paginator().is_none());

        load(&mut s, 2);
        let paginator = s.paginator().unwrap();
        assert_eq!(paginator.page_count(), 9);
        assert_eq!(paginator.first_offset(), 12);
        assert_eq!(paginator.next_index(), Some(3));
    }

    #[test]
    fn test_navigation_follows_pending_request() {
        let mut s = session();
        assert!(s.navigation().is_none());

        load(&mut s, 1);
        assert_eq!(s.navigation().and_then(|p| p.next_index()), Some(2));

        s.request_page(2);
        assert_eq!(s.navigation().and_then(|p| p.next_index()), Some(3));
        assert_eq!(s.navigation().and_then(|p| p.prev_index()), Some(1));
        assert_eq!(s.paginator().map(|p| p.page_index), Some(1));

        let request = s.request_page(9);
        assert_eq!(s.navigation().and_then(|p| p.next_index()), None);

        s.apply_load(request, Err(FetchError::http(503, "unavailable")));
        assert_eq!(s.navigation().and_then(|p| p.next_index()), Some(2));
    }

    #[test]
    fn test_request_page_clamps_index() {
        let mut s = session();
        assert_eq!(s.request_page(0).page_index(), 1);
    }

    #[tokio::test]
    async fn test_navigate() {
        let mut s = session();
        s.request_select_first_n(20);

        s.navigate(1).await;
        s.navigate(2).await;

        assert_eq!(s.selection().state().sorted_ids(), ids(1..=20));
        assert_eq!(s.page().map(|p| p.len()), Some(12));
    }
}
