//! Traits shared by every container.
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation, so that `map` can
//!   change the element type while keeping the container kind
//! - [`Cursor`]: The restartable iteration protocol
//! - [`Combinators`]: The combinator contract (`map`, `filter`,
//!   `fold_left`, `zip`, ...) built on cursors
//!
//! # Examples
//!
//! ```rust
//! use combinate::prelude::*;
//!
//! fn total<C: Combinators<Inner = i32>>(container: &C) -> i32 {
//!     container.fold_left(0, |sum, element| sum + element)
//! }
//!
//! assert_eq!(total(&Sequence::from(vec![1, 2, 3])), 6);
//! assert_eq!(total(&UniqueSet::from(vec![1, 1, 2])), 3);
//! assert_eq!(total(&Optional::Present(4)), 4);
//! assert_eq!(total(&Optional::Empty), 0);
//! ```

mod combinators;
mod cursor;
mod higher;

pub use combinators::Combinators;
pub use cursor::Cursor;
pub use higher::TypeConstructor;
