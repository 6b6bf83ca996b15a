//! An ordered collection of unique values.
//!
//! [`UniqueSet`] keeps elements in the order they were first seen and never
//! holds two elements that compare equal. The invariant is established on
//! construction (repeats are dropped, keeping the first occurrence) and
//! preserved by every mutation: [`insert`](UniqueSet::insert) ignores
//! values already present and [`delete`](UniqueSet::delete) removes the
//! matching element.
//!
//! Only [`PartialEq`] is required of the element type; membership is a
//! linear scan.
//!
//! # Set Operations
//!
//! | Operation   | Result order                                      |
//! |-------------|---------------------------------------------------|
//! | `union`     | `self`, then unseen elements of `other`           |
//! | `intersect` | `self`                                            |
//! | `diff`      | `self`                                            |
//!
//! # Examples
//!
//! ```rust
//! use combinate::prelude::*;
//!
//! let left = UniqueSet::from(vec![1, 2, 3, 4, 5, 1]);
//! let right = UniqueSet::from(vec![4, 5, 6, 7, 8, 8, 8]);
//!
//! assert_eq!(left.size(), 5);
//! assert_eq!(left.diff(&right), UniqueSet::from(vec![1, 2, 3]));
//! assert_eq!(left.intersect(&right), UniqueSet::from(vec![4, 5]));
//! assert_eq!(left.union(&right).size(), 8);
//! ```

use super::cursor::SliceCursor;
use super::sequence::Sequence;
use crate::error::{CollectionError, Result};
use crate::typeclass::{Combinators, TypeConstructor};

/// An ordered collection in which no two elements are equal.
///
/// Equality between two sets compares elements in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UniqueSet<T> {
    elements: Vec<T>,
}

impl<T> UniqueSet<T> {
    /// Creates an empty set.
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

    /// Returns `true` if the set has no elements.
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

    /// Returns the smallest element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyAccess`] if the set is empty.
    pub fn min(&self) -> Result<&T>
    where
        T: Ord,
    {
        self.elements
            .iter()
            .min()
            .ok_or_else(|| {
                debug_failure!("min called on an empty unique set");
                CollectionError::EmptyAccess { operation: "min" }
            })
    }

    /// Returns the largest element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyAccess`] if the set is empty.
    pub fn max(&self) -> Result<&T>
    where
        T: Ord,
    {
        self.elements
            .iter()
            .max()
            .ok_or_else(|| {
                debug_failure!("max called on an empty unique set");
                CollectionError::EmptyAccess { operation: "max" }
            })
    }

    /// Copies the elements into a [`Sequence`], keeping their order.
    pub fn to_sequence(&self) -> Sequence<T>
    where
        T: Clone,
    {
        self.elements.clone().into()
    }

    /// Consumes the set, turning it into a [`Sequence`].
    #[inline]
    pub fn into_sequence(self) -> Sequence<T> {
        self.elements.into()
    }
}

impl<T: PartialEq> UniqueSet<T> {
    /// Adds `element` unless an equal one is already present.
    ///
    /// Returns `true` if the set grew.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinate::collection::UniqueSet;
    ///
    /// let mut set = UniqueSet::from(vec![1, 2]);
    /// assert!(set.insert(3));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.as_slice(), &[1, 2, 3]);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        if self.elements.contains(&element) {
            return false;
        }
        self.elements.push(element);
        trace_mutation!("unique set insert, {} elements", self.elements.len());
        true
    }

    /// Removes the element equal to `element`, if any.
    ///
    /// Returns `true` if something was removed.
    pub fn delete(&mut self, element: &T) -> bool {
        let before = self.elements.len();
        self.elements.retain(|candidate| candidate != element);
        let removed = self.elements.len() != before;
        if removed {
            trace_mutation!("unique set delete, {} elements left", self.elements.len());
        }
        removed
    }

    /// Elements of `self` that are not in `other`.
    #[must_use]
    pub fn diff(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        Self {
            elements: self
                .elements
                .iter()
                .filter(|element| !other.elements.contains(element))
                .cloned()
                .collect(),
        }
    }

    /// Elements present in both `self` and `other`.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        Self {
            elements: self
                .elements
                .iter()
                .filter(|element| other.elements.contains(element))
                .cloned()
                .collect(),
        }
    }

    /// Elements present in either `self` or `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let mut elements = self.elements.clone();
        elements.extend(
            other
                .elements
                .iter()
                .filter(|element| !self.elements.contains(element))
                .cloned(),
        );
        Self { elements }
    }

    /// Maps every element to a collection and gathers the results,
    /// dropping repeats.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinate::collection::UniqueSet;
    ///
    /// let set = UniqueSet::from(vec![1, 2]);
    /// let spread = set.flat_map_collection(|x| vec![*x, x + 1]);
    /// assert_eq!(spread, UniqueSet::from(vec![1, 2, 3]));
    /// ```
    pub fn flat_map_collection<U, I, F>(&self, mut function: F) -> UniqueSet<U>
    where
        F: FnMut(&T) -> I,
        I: IntoIterator<Item = U>,
        U: PartialEq,
    {
        self.elements
            .iter()
            .flat_map(|element| function(element))
            .collect()
    }
}

impl<T> Default for UniqueSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> From<Vec<T>> for UniqueSet<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: PartialEq, const N: usize> From<[T; N]> for UniqueSet<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: PartialEq> From<Sequence<T>> for UniqueSet<T> {
    fn from(sequence: Sequence<T>) -> Self {
        sequence.into_iter().collect()
    }
}

impl<T> From<UniqueSet<T>> for Sequence<T> {
    #[inline]
    fn from(set: UniqueSet<T>) -> Self {
        set.into_sequence()
    }
}

/// Keeps the first occurrence of each value.
impl<T: PartialEq> FromIterator<T> for UniqueSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        let mut set = Self::new();
        set.extend(iterable);
        set
    }
}

impl<T: PartialEq> Extend<T> for UniqueSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterable: I) {
        for element in iterable {
            if !self.elements.contains(&element) {
                self.elements.push(element);
            }
        }
    }
}

impl<T> IntoIterator for UniqueSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a UniqueSet<T> {
    type Item = &'a T;
    type IntoIter = SliceCursor<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> TypeConstructor for UniqueSet<T> {
    type Inner = T;
    type WithType<B> = UniqueSet<B>;
}

impl<T> Combinators for UniqueSet<T> {
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

    /// Optimized implementation for UniqueSet.
    #[inline]
    fn size(&self) -> usize {
        self.elements.len()
    }

    /// Optimized implementation for UniqueSet.
    #[inline]
    fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn last(&self) -> Result<&T> {
        self.elements
            .last()
            .ok_or_else(|| {
                debug_failure!("last called on an empty unique set");
                CollectionError::EmptyAccess { operation: "last" }
            })
    }

    fn last_option(&self) -> super::Optional<&T> {
        self.elements.last().into()
    }
}

static_assertions::assert_impl_all!(UniqueSet<String>: Send, Sync, Clone, Default);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![1, 2, 3, 4, 5, 1], vec![1, 2, 3, 4, 5])]
    #[case(vec![4, 5, 6, 7, 8, 8, 8], vec![4, 5, 6, 7, 8])]
    #[case(vec![3, 3, 3], vec![3])]
    #[case(vec![], vec![])]
    fn test_construction_keeps_first_occurrence(
        #[case] input: Vec<i32>,
        #[case] expected: Vec<i32>,
    ) {
        assert_eq!(UniqueSet::from(input).as_slice(), expected.as_slice());
    }

    #[rstest]
    fn test_insert_is_noop_for_present_value() {
        let mut set = UniqueSet::from(vec![1, 2]);
        assert!(!set.insert(2));
        assert_eq!(set.len(), 2);
    }

    #[rstest]
    fn test_delete() {
        let mut set = UniqueSet::from(vec![1, 2, 3]);
        assert!(set.delete(&2));
        assert!(!set.delete(&2));
        assert_eq!(set.as_slice(), &[1, 3]);
    }

    #[rstest]
    fn test_tail_of_empty_set_is_an_error() {
        let set: UniqueSet<i32> = UniqueSet::new();
        assert_eq!(set.tail(), Err(CollectionError::TailOnEmpty));
        assert_eq!(
            UniqueSet::from(vec![1, 2]).tail(),
            Ok(UniqueSet::from(vec![2]))
        );
    }

    #[rstest]
    fn test_map_collapses_collisions() {
        let set = UniqueSet::from(vec![1, 2, 3, 4]);
        let parities = set.map(|x| x % 2);
        assert_eq!(parities, UniqueSet::from(vec![1, 0]));
    }

    #[rstest]
    fn test_union_order() {
        let left = UniqueSet::from(vec![3, 1]);
        let right = UniqueSet::from(vec![2, 1, 4]);
        assert_eq!(left.union(&right).as_slice(), &[3, 1, 2, 4]);
    }

    #[rstest]
    fn test_sequence_round_trip() {
        let set = UniqueSet::from(vec![5, 4, 5]);
        let sequence = set.to_sequence();
        assert_eq!(sequence, Sequence::from(vec![5, 4]));
        assert_eq!(UniqueSet::from(sequence), set);
    }
}
