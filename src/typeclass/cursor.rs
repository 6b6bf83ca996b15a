//! The iteration protocol shared by every container.
//!
//! A cursor is a traversal position that lives outside the container it
//! walks. Each call to `Combinators::cursor` hands out a fresh one, so two
//! traversals of the same container never disturb each other and nothing
//! has to be rewound after use.
//!
//! # Examples
//!
//! ```rust
//! use combinate::prelude::*;
//!
//! let sequence = Sequence::from(vec![1, 2, 3]);
//! let mut cursor = sequence.cursor();
//!
//! assert_eq!(cursor.current(), Ok(&1));
//! cursor.advance();
//! cursor.advance();
//! assert_eq!(cursor.position(), 2);
//! cursor.advance();
//! assert!(cursor.at_end());
//!
//! cursor.restart();
//! assert_eq!(cursor.current(), Ok(&1));
//! ```

use crate::error::Result;

/// A restartable, finite, single-pass traversal over borrowed elements.
///
/// Cursors only ever yield a finite number of elements before reporting
/// [`at_end`](Cursor::at_end). Calling [`restart`](Cursor::restart) puts the
/// cursor back where it started so the same elements can be walked again.
///
/// Concrete cursors also implement [`Iterator`], where `next` is
/// `current` followed by `advance`.
pub trait Cursor<'a> {
    /// The element type the cursor walks over.
    type Element: 'a;

    /// Returns the element under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidAccess`](crate::error::CollectionError::InvalidAccess)
    /// when the cursor is at its end.
    fn current(&self) -> Result<&'a Self::Element>;

    /// Moves one step forward. Does nothing once the end is reached.
    fn advance(&mut self);

    /// Returns `true` when there is no element under the cursor.
    fn at_end(&self) -> bool;

    /// Moves the cursor back to its initial position.
    fn restart(&mut self);

    /// The index of the element under the cursor.
    ///
    /// For positional containers this is in `[0, len]`, where `len` marks
    /// exhaustion.
    fn position(&self) -> usize;
}
