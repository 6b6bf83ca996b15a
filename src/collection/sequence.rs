//! An ordered, index-addressable sequence.
//!
//! [`Sequence`] keeps its elements in insertion order and allows
//! duplicates. Besides the shared [`Combinators`] it offers positional
//! access, slicing (`take`/`drop` and their right-hand variants), sorting
//! and a small set of in-place mutations (`push`, `push_first`, `pop`,
//! `pop_first`).
//!
//! # Examples
//!
//! ```rust
//! use combinate::prelude::*;
//!
//! let mut sequence = Sequence::from(vec![2, 3]);
//! sequence.push_first(1);
//! sequence.push(4);
//!
//! assert_eq!(sequence.at(0), Ok(&1));
//! assert_eq!(sequence.drop(1).take(2), Sequence::from(vec![2, 3]));
//! assert_eq!(sequence.pop(), Ok(4));
//! assert_eq!(sequence.size(), 3);
//! ```

use std::cmp::Ordering;

use super::cursor::SliceCursor;
use super::unique_set::UniqueSet;
use crate::error::{CollectionError, Result};
use crate::typeclass::{Combinators, TypeConstructor};

/// An ordered sequence of elements; duplicates allowed.
///
/// Indices are 0-based and contiguous. All operations other than `push`,
/// `push_first`, `pop` and `pop_first` return a new sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence<T> {
    elements: Vec<T>,
}

impl<T> Sequence<T> {
    /// Creates an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinate::collection::Sequence;
    ///
    /// let sequence: Sequence<i32> = Sequence::new();
    /// assert!(sequence.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence has no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Views the elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns a cursor over the elements.
    #[inline]
    pub fn iter(&self) -> SliceCursor<'_, T> {
        SliceCursor::new(&self.elements)
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`] if `index` is not in
    /// `[0, len)`.
    pub fn at(&self, index: usize) -> Result<&T> {
        self.elements.get(index).ok_or_else(|| {
            debug_failure!("index {index} out of range for sequence of length {}", self.len());
            CollectionError::OutOfRange {
                index,
                size: self.elements.len(),
            }
        })
    }

    /// Returns the smallest element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyAccess`] if the sequence is empty.
    pub fn min(&self) -> Result<&T>
    where
        T: Ord,
    {
        self.elements
            .iter()
            .min()
            .ok_or_else(|| {
                debug_failure!("min called on an empty sequence");
                CollectionError::EmptyAccess { operation: "min" }
            })
    }

    /// Returns the largest element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyAccess`] if the sequence is empty.
    pub fn max(&self) -> Result<&T>
    where
        T: Ord,
    {
        self.elements
            .iter()
            .max()
            .ok_or_else(|| {
                debug_failure!("max called on an empty sequence");
                CollectionError::EmptyAccess { operation: "max" }
            })
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyAccess`] if the sequence is empty;
    /// the sequence is left unchanged.
    pub fn pop(&mut self) -> Result<T> {
        let element = self.elements.pop().ok_or_else(|| {
            debug_failure!("pop on an empty sequence");
            CollectionError::EmptyAccess { operation: "pop" }
        })?;
        trace_mutation!("sequence pop, {} elements left", self.elements.len());
        Ok(element)
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyAccess`] if the sequence is empty;
    /// the sequence is left unchanged.
    pub fn pop_first(&mut self) -> Result<T> {
        if self.elements.is_empty() {
            debug_failure!("pop_first on an empty sequence");
            return Err(CollectionError::EmptyAccess {
                operation: "pop_first",
            });
        }
        let element = self.elements.remove(0);
        trace_mutation!("sequence pop_first, {} elements left", self.elements.len());
        Ok(element)
    }

    /// Appends `element` at the end.
    pub fn push(&mut self, element: T) {
        self.elements.push(element);
        trace_mutation!("sequence push, {} elements", self.elements.len());
    }

    /// Prepends `element` at the start.
    pub fn push_first(&mut self, element: T) {
        self.elements.insert(0, element);
        trace_mutation!("sequence push_first, {} elements", self.elements.len());
    }

    /// Maps every element to a collection and concatenates the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinate::collection::Sequence;
    ///
    /// let words = Sequence::from(vec!["ab", "c"]);
    /// let letters = words.flat_map_collection(|word| word.chars().collect::<Vec<_>>());
    /// assert_eq!(letters, Sequence::from(vec!['a', 'b', 'c']));
    /// ```
    pub fn flat_map_collection<U, I, F>(&self, mut function: F) -> Sequence<U>
    where
        F: FnMut(&T) -> I,
        I: IntoIterator<Item = U>,
    {
        self.elements
            .iter()
            .flat_map(|element| function(element))
            .collect()
    }

    /// Sorts by a caller-supplied comparator into a new sequence.
    ///
    /// The comparator should be a consistent total order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinate::collection::Sequence;
    ///
    /// let sequence = Sequence::from(vec![1, 3, 2]);
    /// let descending = sequence.sort_with(|left, right| right.cmp(left));
    /// assert_eq!(descending, Sequence::from(vec![3, 2, 1]));
    /// ```
    #[must_use]
    pub fn sort_with<F>(&self, comparator: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
        T: Clone,
    {
        let mut elements = self.elements.clone();
        elements.sort_by(comparator);
        Self { elements }
    }

    /// Sorts ascending by the natural order into a new sequence.
    #[must_use]
    pub fn sort(&self) -> Self
    where
        T: Ord + Clone,
    {
        self.sort_with(T::cmp)
    }

    /// Returns the elements in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self
    where
        T: Clone,
    {
        self.elements.iter().rev().cloned().collect()
    }

    /// Returns this sequence followed by the elements of `other`.
    ///
    /// `other` may be any container with the same element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinate::prelude::*;
    ///
    /// let sequence = Sequence::from(vec![1, 2]);
    /// assert_eq!(
    ///     sequence.concat(&Optional::Present(3)),
    ///     Sequence::from(vec![1, 2, 3])
    /// );
    /// ```
    #[must_use]
    pub fn concat<C>(&self, other: &C) -> Self
    where
        C: Combinators<Inner = T>,
        T: Clone,
    {
        self.elements
            .iter()
            .chain(other.cursor())
            .cloned()
            .collect()
    }

    /// Returns the first `count` elements, or all of them if there are
    /// fewer.
    #[must_use]
    pub fn take(&self, count: usize) -> Self
    where
        T: Clone,
    {
        let end = count.min(self.elements.len());
        self.elements[..end].to_vec().into()
    }

    /// Returns the last `count` elements, or all of them if there are
    /// fewer.
    #[must_use]
    pub fn take_right(&self, count: usize) -> Self
    where
        T: Clone,
    {
        let start = self.elements.len().saturating_sub(count);
        self.elements[start..].to_vec().into()
    }

    /// Returns everything except the first `count` elements.
    ///
    /// Empty when `count` is at least the length.
    #[must_use]
    pub fn drop(&self, count: usize) -> Self
    where
        T: Clone,
    {
        let start = count.min(self.elements.len());
        self.elements[start..].to_vec().into()
    }

    /// Returns everything except the last `count` elements.
    ///
    /// Empty when `count` is at least the length.
    #[must_use]
    pub fn drop_right(&self, count: usize) -> Self
    where
        T: Clone,
    {
        let end = self.elements.len().saturating_sub(count);
        self.elements[..end].to_vec().into()
    }

    /// Keeps one representative per distinct value, in order of first
    /// occurrence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinate::collection::Sequence;
    ///
    /// let sequence = Sequence::from(vec![3, 1, 3, 2, 1]);
    /// assert_eq!(sequence.unique(), Sequence::from(vec![3, 1, 2]));
    /// ```
    #[must_use]
    pub fn unique(&self) -> Self
    where
        T: PartialEq + Clone,
    {
        self.to_unique_set().into_sequence()
    }

    /// Builds a [`UniqueSet`] from the elements, dropping repeats.
    pub fn to_unique_set(&self) -> UniqueSet<T>
    where
        T: PartialEq + Clone,
    {
        self.elements.iter().cloned().collect()
    }

    /// Consumes the sequence, returning its backing vector.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T> Default for Sequence<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    #[inline]
    fn from(elements: [T; N]) -> Self {
        Self {
            elements: elements.into(),
        }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        Self {
            elements: iterable.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterable: I) {
        self.elements.extend(iterable);
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = SliceCursor<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> TypeConstructor for Sequence<T> {
    type Inner = T;
    type WithType<B> = Sequence<B>;
}

impl<T> Combinators for Sequence<T> {
    type Cursor<'a>
        = SliceCursor<'a, T>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> SliceCursor<'_, T> {
        self.iter()
    }

    #[inline]
    fn emptied(&self) -> Self {
        Self::new()
    }

    /// Optimized implementation for Sequence.
    #[inline]
    fn size(&self) -> usize {
        self.elements.len()
    }

    /// Optimized implementation for Sequence.
    #[inline]
    fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.elements.contains(element)
    }

    fn last(&self) -> Result<&T> {
        self.elements
            .last()
            .ok_or_else(|| {
                debug_failure!("last called on an empty sequence");
                CollectionError::EmptyAccess { operation: "last" }
            })
    }

    fn last_option(&self) -> super::Optional<&T> {
        self.elements.last().into()
    }
}

static_assertions::assert_impl_all!(Sequence<i32>: Send, Sync, Clone, Default);
