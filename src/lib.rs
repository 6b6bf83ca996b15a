//! # combinate
//!
//! Three containers that share one combinator protocol, for callers who
//! would rather transform data with expressions than with loops.
//!
//! ## Overview
//!
//! - **[`Sequence`](collection::Sequence)**: Ordered, index-addressable,
//!   duplicates allowed
//! - **[`UniqueSet`](collection::UniqueSet)**: Ordered, no two elements
//!   equal, with union, intersection and difference
//! - **[`Optional`](collection::Optional)**: Zero or one value, as a tagged
//!   variant
//!
//! All three implement [`Combinators`](typeclass::Combinators) and hand out
//! independent [`Cursor`](typeclass::Cursor)s for explicit traversal.
//! Accessors that may find nothing return
//! [`CollectionError`](error::CollectionError) instead of panicking.
//!
//! ## Feature Flags
//!
//! - `logging` (default): trace in-place mutations and debug access
//!   failures through the `log` facade
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use combinate::prelude::*;
//!
//! let scores = Sequence::from(vec![3, 1, 4, 1, 5]);
//!
//! let distinct = scores.to_unique_set();
//! assert_eq!(distinct.size(), 4);
//!
//! let best = scores.sort().reverse().take(2);
//! assert_eq!(best, Sequence::from(vec![5, 4]));
//!
//! let first_even = scores.find(|score| score % 2 == 0).cloned();
//! assert_eq!(first_even.get_or_else(0), 4);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

#[macro_use]
mod logging;

/// Prelude module for convenient imports.
///
/// Re-exports the containers, the shared traits and the error type.
///
/// # Usage
///
/// ```rust
/// use combinate::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::*;
    pub use crate::error::CollectionError;
    pub use crate::typeclass::*;
}

pub mod collection;
pub mod error;
pub mod typeclass;
