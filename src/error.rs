//! Error types for container access.
//!
//! Every accessor that can find "nothing there" reports it through
//! [`CollectionError`] instead of panicking. Callers who prefer a default
//! value should reach for the non-failing variants (`head_option`,
//! `last_option`, `find`, `get_or_else`).

use thiserror::Error;

/// The ways a container access can fail.
///
/// # Examples
///
/// ```rust
/// use combinate::collection::Sequence;
/// use combinate::error::CollectionError;
///
/// let empty: Sequence<i32> = Sequence::new();
/// assert_eq!(
///     empty.max(),
///     Err(CollectionError::EmptyAccess { operation: "max" })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CollectionError {
    /// An element was requested from a container with no elements.
    #[error("{operation} called on an empty container")]
    EmptyAccess {
        /// The operation that needed an element.
        operation: &'static str,
    },
    /// A value was read where none is available: `get` on an empty
    /// optional, or `current` on an exhausted cursor.
    #[error("no value available to read")]
    InvalidAccess,
    /// An index fell outside `[0, size)`.
    #[error("index {index} out of range for container of size {size}")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The size of the container at the time of the request.
        size: usize,
    },
    /// `tail` was requested from a container with no elements.
    #[error("tail of an empty container")]
    TailOnEmpty,
}

/// Shorthand for results carrying a [`CollectionError`].
pub type Result<T> = std::result::Result<T, CollectionError>;
