//! Select-N input errors

/// A "select first N" count that cannot be used.
///
/// Returned by [`parse_select_count`](crate::selection::parse_select_count).
/// Callers drop the request and leave the selection untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSelectCount {
    /// The input is not an integer.
    #[error("'{input}' is not a number")]
    NotANumber { input: String },

    /// The input is a positive integer too large to count records with.
    #[error("count {input} is too large")]
    TooLarge { input: String },

    /// The input is zero or negative.
    #[error("count must be positive, got {value}")]
    NotPositive { value: i64 },
}
