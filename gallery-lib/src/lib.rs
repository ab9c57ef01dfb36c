//! Gallery browsing library
//!
//! Browse a remotely paginated artwork collection one page at a time while
//! keeping a selection of record identifiers that survives navigation.
//!
//! - [`api`] - pages, the [`PageLoader`](api::PageLoader) seam and paginator info
//! - [`selection`] - the cross-page selection set and select-first-N target
//! - [`session`] - a loader plus a selection, with stale-response protection
//! - [`ArticClient`] - HTTP loader for the Art Institute of Chicago API

pub mod api;
pub mod error;
pub mod model;
pub mod selection;
pub mod session;

mod client;

pub use client::*;
pub use session::BrowseSession;
