//! Error types for map construction.

use thiserror::Error;

/// Errors that can occur when building a [`crate::ChainedHashMap`].
///
/// Lookup misses are not errors; `get` and `remove` signal them with
/// `Option::None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// The requested bucket count was zero. A zero-length table would make
    /// the index reduction (a remainder by the table length) undefined, so
    /// construction is rejected before any allocation happens.
    #[error("invalid table size: {0} (bucket count must be at least 1)")]
    InvalidTableSize(usize),
}

/// Result type for fallible map construction.
pub type Result<T> = std::result::Result<T, MapError>;
