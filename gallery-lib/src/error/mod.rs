//! Error types

mod fetch;
mod select;

pub use fetch::*;
pub use select::*;

/// Top-level error for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A page could not be fetched.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The client could not be constructed.
    #[error("Failed to build client: {0}")]
    Build(String),
}
