//! Paginator geometry derived from the current page.

/// Position of the current page within the dataset.
///
/// Only used to drive the pagination controls; selection logic never
/// looks at the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    /// 1-based index of the current page.
    pub page_index: u32,
    /// Records per page.
    pub page_size: u32,
    /// Total records reported by the server.
    pub total_count: u64,
}

impl Paginator {
    /// Creates paginator info for a page.
    pub fn new(page_index: u32, page_size: u32, total_count: u64) -> Self {
        Self {
            page_index: page_index.max(1),
            page_size,
            total_count,
        }
    }

    /// Number of pages needed to show every record (at least one).
    pub fn page_count(&self) -> u32 {
        if self.page_size == 0 {
            return 1;
        }
        let pages = self.total_count.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX).max(1)
    }

    /// Zero-based offset of the first record on the current page.
    pub fn first_offset(&self) -> u64 {
        u64::from(self.page_index.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// Returns `true` if there is a page before this one.
    pub fn has_prev(&self) -> bool {
        self.page_index > 1
    }

    /// Returns `true` if there is a page after this one.
    pub fn has_next(&self) -> bool {
        self.page_index < self.page_count()
    }

    /// Index of the previous page, if any.
    pub fn prev_index(&self) -> Option<u32> {
        self.has_prev().then(|| self.page_index - 1)
    }

    /// Index of the next page, if any.
    pub fn next_index(&self) -> Option<u32> {
        self.has_next().then(|| self.page_index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(Paginator::new(1, 12, 24).page_count(), 2);
        assert_eq!(Paginator::new(1, 12, 25).page_count(), 3);
        assert_eq!(Paginator::new(1, 12, 0).page_count(), 1);
        assert_eq!(Paginator::new(1, 0, 100).page_count(), 1);
    }

    #[test]
    fn test_first_offset() {
        assert_eq!(Paginator::new(1, 12, 10_000).first_offset(), 0);
        assert_eq!(Paginator::new(3, 12, 10_000).first_offset(), 24);
    }

    #[test]
    fn test_neighbours() {
        let first = Paginator::new(1, 12, 30);
        assert_eq!(first.prev_index(), None);
        assert_eq!(first.next_index(), Some(2));

        let last = Paginator::new(3, 12, 30);
        assert_eq!(last.prev_index(), Some(2));
        assert_eq!(last.next_index(), None);
    }

    #[test]
    fn test_index_clamped() {
        assert_eq!(Paginator::new(0, 12, 30).page_index, 1);
    }
}
