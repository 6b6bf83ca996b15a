//! Concrete cursors.
//!
//! - [`SliceCursor`] walks the backing storage of [`Sequence`](super::Sequence)
//!   and [`UniqueSet`](super::UniqueSet) by index.
//! - [`OptionalCursor`] walks an [`Optional`](super::Optional): a present
//!   value is yielded once, then the cursor is exhausted until restarted.

use std::iter::FusedIterator;

use crate::error::{CollectionError, Result};
use crate::typeclass::Cursor;

/// An index-based cursor over a slice.
///
/// The position ranges over `[0, len]`; `len` means exhausted.
#[derive(Debug, Clone)]
pub struct SliceCursor<'a, T> {
    elements: &'a [T],
    index: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Creates a cursor at the start of `elements`.
    #[inline]
    #[must_use]
    pub const fn new(elements: &'a [T]) -> Self {
        Self { elements, index: 0 }
    }

    /// The elements not yet walked over.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> &'a [T] {
        self.elements.get(self.index..).unwrap_or_default()
    }
}

impl<'a, T> Cursor<'a> for SliceCursor<'a, T> {
    type Element = T;

    fn current(&self) -> Result<&'a T> {
        self.elements
            .get(self.index)
            .ok_or_else(|| {
                debug_failure!("current read past the end at position {}", self.index);
                CollectionError::InvalidAccess
            })
    }

    #[inline]
    fn advance(&mut self) {
        if self.index < self.elements.len() {
            self.index += 1;
        }
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.index >= self.elements.len()
    }

    #[inline]
    fn restart(&mut self) {
        self.index = 0;
    }

    #[inline]
    fn position(&self) -> usize {
        self.index
    }
}

impl<'a, T> Iterator for SliceCursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.elements.get(self.index)?;
        self.index += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining().len();
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for SliceCursor<'_, T> {}

impl<T> FusedIterator for SliceCursor<'_, T> {}

/// A one-shot cursor over an optional value.
///
/// For a present value the cursor starts on it, and a single
/// [`advance`](Cursor::advance) exhausts it. For an empty optional the
/// cursor is always at its end and `advance`/`restart` change nothing
/// observable.
#[derive(Debug, Clone)]
pub struct OptionalCursor<'a, T> {
    value: Option<&'a T>,
    pending: bool,
}

impl<'a, T> OptionalCursor<'a, T> {
    /// Creates a cursor over `value`, positioned before consumption.
    #[inline]
    #[must_use]
    pub const fn new(value: Option<&'a T>) -> Self {
        Self {
            value,
            pending: true,
        }
    }
}

impl<'a, T> Cursor<'a> for OptionalCursor<'a, T> {
    type Element = T;

    fn current(&self) -> Result<&'a T> {
        match self.value {
            Some(value) if self.pending => Ok(value),
            _ => {
                debug_failure!("current read from an exhausted optional cursor");
                Err(CollectionError::InvalidAccess)
            }
        }
    }

    #[inline]
    fn advance(&mut self) {
        self.pending = false;
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.value.is_none() || !self.pending
    }

    #[inline]
    fn restart(&mut self) {
        self.pending = true;
    }

    /// `0` while a present value is pending, `1` once it was consumed.
    /// Always `0` for an empty optional.
    #[inline]
    fn position(&self) -> usize {
        usize::from(self.value.is_some() && !self.pending)
    }
}

impl<'a, T> Iterator for OptionalCursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.value.filter(|_| self.pending)?;
        self.pending = false;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(!self.at_end());
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for OptionalCursor<'_, T> {}

impl<T> FusedIterator for OptionalCursor<'_, T> {}

static_assertions::assert_impl_all!(SliceCursor<'static, i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(OptionalCursor<'static, i32>: Send, Sync, Clone);
