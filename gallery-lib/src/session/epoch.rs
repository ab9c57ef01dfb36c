//! Request tagging for "last request wins".

/// A page request tagged with the epoch it was issued in.
///
/// Returned by [`BrowseSession::request_page`](super::BrowseSession::request_page)
/// and handed back with the loader's result. Only the request with the latest
/// epoch may change session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    epoch: u64,
    page_index: u32,
    page_size: u32,
}

impl PageRequest {
    pub(super) fn new(epoch: u64, page_index: u32, page_size: u32) -> Self {
        Self {
            epoch,
            page_index,
            page_size,
        }
    }

    /// Sequence number of this request within the session.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// 1-based page index requested.
    pub fn page_index(&self) -> u32 {
        self.page_index
    }

    /// Page size requested.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}

/// Monotonic request counter.
#[derive(Debug, Default)]
pub(super) struct EpochCounter {
    latest: u64,
}

impl EpochCounter {
    /// Issues the next epoch; every earlier one becomes stale.
    pub fn next(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Returns `true` if `epoch` is the most recently issued one.
    pub fn is_current(&self, epoch: u64) -> bool {
        epoch == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_is_current() {
        let mut counter = EpochCounter::default();
        let first = counter.next();
        assert!(counter.is_current(first));

        let second = counter.next();
        assert!(second > first);
        assert!(!counter.is_current(first));
        assert!(counter.is_current(second));
    }

    #[test]
    fn test_nothing_current_before_first_request() {
        let counter = EpochCounter::default();
        assert!(!counter.is_current(1));
    }
}
