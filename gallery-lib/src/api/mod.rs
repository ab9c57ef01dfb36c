//! Paged data source access

mod loader;
mod page;
mod paginator;
pub(crate) mod wire;

pub use loader::*;
pub use page::Page;
pub use paginator::Paginator;
