//! Page type for paginated results.

use crate::model::Artwork;
use crate::model::Identified;
use crate::model::RecordId;

/// One page of records fetched from the data source.
///
/// Pages are ephemeral: a new one is built for every fetch and dropped once a
/// newer page replaces it. Selection state never lives here.
///
/// # Example
///
/// ```
/// use gallery_lib::api::Page;
/// use gallery_lib::model::Artwork;
///
/// let page = Page::new(1, 12, vec![Artwork::new(10u64, "Nighthawks")], 120);
///
/// assert_eq!(page.len(), 1);
/// assert_eq!(page.total_count(), 120);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Page<R = Artwork> {
    records: Vec<R>,
    /// 1-based page number.
    page_index: u32,
    /// Page size the page was requested with.
    page_size: u32,
    /// Total record count across all pages, as reported by the server.
    total_count: u64,
}

impl<R> Page<R> {
    /// Creates a page from its records and pagination info.
    pub fn new(page_index: u32, page_size: u32, records: Vec<R>, total_count: u64) -> Self {
        Self {
            records,
            page_index,
            page_size,
            total_count,
        }
    }

    /// Creates a page with no records.
    pub fn empty(page_index: u32, page_size: u32, total_count: u64) -> Self {
        Self::new(page_index, page_size, Vec::new(), total_count)
    }

    /// Returns a reference to the records in this page, in page order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Consumes the page and returns the records.
    pub fn into_records(self) -> Vec<R> {
        self.records
    }

    /// Returns the 1-based page number.
    pub fn page_index(&self) -> u32 {
        self.page_index
    }

    /// Returns the page size this page was requested with.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Returns the total record count across all pages.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Returns `true` if this page has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records in this page.
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

impl<R: Identified> Page<R> {
    /// Iterates over the record identifiers in page order.
    pub fn ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.records.iter().map(Identified::id)
    }

    /// Returns `true` if a record with this identifier is on the page.
    pub fn contains(&self, id: RecordId) -> bool {
        self.records.iter().any(|r| r.id() == id)
    }

    /// Returns the record with this identifier, if it is on the page.
    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }
}
