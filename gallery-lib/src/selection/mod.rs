//! Cross-page selection state.
//!
//! The selection set outlives every page: it is keyed by [`RecordId`] and
//! only ever compared against the rows of the page currently loaded. What a
//! page shows as checked is derived on demand, never stored.
//!
//! All mutation goes through [`SelectionManager`]:
//!
//! - [`SelectionManager::apply_page_edit`] - the page's checked rows replace
//!   the selection for that page's identifiers
//! - [`SelectionManager::apply_toggle_all`] - select or clear every row on
//!   the page
//! - [`SelectionManager::request_select_first_n`] - set a target that is
//!   filled page by page as pages are loaded
//!
//! [`RecordId`]: crate::model::RecordId

mod input;
mod manager;
mod state;

pub use input::parse_select_count;
pub use manager::*;
pub use state::SelectionState;
