//! Page loader seam

use async_trait::async_trait;

use super::Page;
use crate::error::FetchError;

/// Total used when the server reports no usable count.
///
/// Keeps the paginator renderable when the count is missing.
pub const DEFAULT_TOTAL_COUNT: u64 = 10_000;

/// Retrieves exactly one page of records from a data source.
///
/// Implementations never touch selection state. Malformed response bodies are
/// recovered as empty pages; only transport failures and non-success statuses
/// are returned as errors.
#[async_trait]
pub trait PageLoader<R = crate::model::Artwork>: Send + Sync {
    /// Loads page `page_index` (1-based) with `page_size` records per page.
    async fn load_page(&self, page_index: u32, page_size: u32) -> Result<Page<R>, FetchError>;
}
