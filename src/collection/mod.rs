//! The containers.
//!
//! - [`Sequence`]: Ordered, duplicates allowed, index-addressable
//! - [`UniqueSet`]: Ordered, duplicate-free, with set algebra
//! - [`Optional`]: Zero or one value
//!
//! Each container implements [`Combinators`](crate::typeclass::Combinators)
//! and hands out its own cursor type ([`SliceCursor`] or
//! [`OptionalCursor`]).
//!
//! # Value Semantics
//!
//! Combinators always build a new container with storage of its own. The
//! only operations that change a container in place are
//! [`Sequence::push`], [`Sequence::push_first`], [`Sequence::pop`],
//! [`Sequence::pop_first`], [`UniqueSet::insert`] and
//! [`UniqueSet::delete`].
//!
//! ```rust
//! use combinate::prelude::*;
//!
//! let original = Sequence::from(vec![1, 2, 3]);
//! let doubled = original.map(|x| x * 2);
//!
//! assert_eq!(original, Sequence::from(vec![1, 2, 3]));
//! assert_eq!(doubled, Sequence::from(vec![2, 4, 6]));
//! ```
//!
//! # Converting Between Containers
//!
//! ```rust
//! use combinate::prelude::*;
//!
//! let sequence = Sequence::from(vec![1, 1, 2]);
//! let set = sequence.to_unique_set();
//! assert_eq!(set.to_sequence(), Sequence::from(vec![1, 2]));
//!
//! let first: Optional<i32> = sequence.head_option().cloned();
//! assert_eq!(first, Optional::Present(1));
//! ```

mod cursor;
mod optional;
mod sequence;
mod unique_set;

pub use cursor::{OptionalCursor, SliceCursor};
pub use optional::Optional;
pub use sequence::Sequence;
pub use unique_set::UniqueSet;
