//! The combinator contract - one operation set, three containers.
//!
//! [`Combinators`] defines the shared higher-order operations
//! (`map`, `filter`, `fold_left`, `zip`, ...) once, on top of the
//! [`Cursor`](super::Cursor) protocol. Containers only have to say how to
//! hand out a cursor and how to build an empty instance of themselves;
//! everything else has a provided implementation that containers may
//! override when they can answer more directly.
//!
//! # Laws
//!
//! For pure `f`, `g` and `p`:
//!
//! ```text
//! c.map(f).map(g)      == c.map(|x| g(&f(x)))
//! c.filter(p).for_all(p) == true
//! c.zip(d).size()      == min(c.size(), d.size())
//! c.fold_left(z, op)   == z                       // when c is empty
//! ```
//!
//! # Examples
//!
//! ```rust
//! use combinate::prelude::*;
//!
//! let numbers = Sequence::from(vec![1, 2, 3, 4]);
//!
//! assert_eq!(numbers.filter(|x| x % 2 == 0), Sequence::from(vec![2, 4]));
//! assert_eq!(numbers.fold_left(0, |sum, x| sum + x), 10);
//! assert!(numbers.exists(|x| *x > 3));
//! assert_eq!(numbers.find(|x| *x > 2), Optional::Present(&3));
//! ```

use super::{Cursor, TypeConstructor};
use crate::collection::Optional;
use crate::error::{CollectionError, Result};

/// Operations every container supports.
///
/// All operations take `&self` and leave the container untouched; those
/// that produce a container build a fresh one with its own storage.
pub trait Combinators: TypeConstructor + Sized {
    /// The cursor type handed out by [`cursor`](Combinators::cursor).
    type Cursor<'a>: super::Cursor<'a, Element = Self::Inner> + Iterator<Item = &'a Self::Inner>
    where
        Self: 'a;

    /// Returns a new cursor positioned at the first element.
    fn cursor(&self) -> Self::Cursor<'_>;

    /// Returns an empty container of the same kind.
    #[must_use]
    fn emptied(&self) -> Self;

    /// Returns the number of elements.
    fn size(&self) -> usize {
        self.cursor().count()
    }

    /// Returns `true` if the container has no elements.
    fn is_empty(&self) -> bool {
        self.cursor().at_end()
    }

    /// Returns `true` if the container has at least one element.
    fn non_empty(&self) -> bool {
        !Combinators::is_empty(self)
    }

    /// Returns `true` if some element compares equal to `element`.
    fn contains(&self, element: &Self::Inner) -> bool
    where
        Self::Inner: PartialEq,
    {
        self.cursor().any(|candidate| candidate == element)
    }

    /// Returns `true` if `element` is a reference to one of this container's
    /// own elements.
    ///
    /// This is identity, not equality: an equal value living elsewhere does
    /// not count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinate::prelude::*;
    ///
    /// let sequence = Sequence::from(vec![7, 8]);
    /// let own = sequence.at(1).unwrap();
    ///
    /// assert!(sequence.contains_identical(own));
    /// assert!(!sequence.contains_identical(&8));
    /// ```
    fn contains_identical(&self, element: &Self::Inner) -> bool {
        self.cursor()
            .any(|candidate| std::ptr::eq(candidate, element))
    }

    /// Counts the elements satisfying `predicate`.
    fn count<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        self.cursor().filter(|element| predicate(element)).count()
    }

    /// Returns `true` if at least one element satisfies `predicate`.
    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        self.cursor().any(predicate)
    }

    /// Returns `true` if every element satisfies `predicate`, including
    /// vacuously when there are no elements.
    fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        self.cursor().all(predicate)
    }

    /// Returns the first element satisfying `predicate`.
    fn find<P>(&self, mut predicate: P) -> Optional<&Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        self.cursor().find(|element| predicate(element)).into()
    }

    /// Keeps the elements satisfying `predicate`, in order.
    #[must_use]
    fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&Self::Inner) -> bool,
        Self::Inner: Clone,
        Self: FromIterator<Self::Inner>,
    {
        self.cursor()
            .filter(|element| predicate(element))
            .cloned()
            .collect()
    }

    /// Transforms every element, in order, into a container of the same
    /// kind.
    fn map<U, F>(&self, function: F) -> Self::WithType<U>
    where
        F: FnMut(&Self::Inner) -> U,
        Self::WithType<U>: FromIterator<U>,
    {
        self.cursor().map(function).collect()
    }

    /// Accumulates from left to right, starting at `init`.
    ///
    /// Returns `init` unchanged for an empty container.
    fn fold_left<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(B, &Self::Inner) -> B,
    {
        self.cursor().fold(init, function)
    }

    /// Calls `function` on every element for its side effects.
    fn for_each<F>(&self, function: F)
    where
        F: FnMut(&Self::Inner),
    {
        self.cursor().for_each(function);
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyAccess`] if there are no elements.
    fn head(&self) -> Result<&Self::Inner> {
        self.cursor()
            .next()
            .ok_or_else(|| {
                debug_failure!("head called on an empty container");
                CollectionError::EmptyAccess { operation: "head" }
            })
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyAccess`] if there are no elements.
    fn last(&self) -> Result<&Self::Inner> {
        self.cursor()
            .last()
            .ok_or_else(|| {
                debug_failure!("last called on an empty container");
                CollectionError::EmptyAccess { operation: "last" }
            })
    }

    /// Returns the first element, or [`Optional::Empty`].
    fn head_option(&self) -> Optional<&Self::Inner> {
        self.cursor().next().into()
    }

    /// Returns the last element, or [`Optional::Empty`].
    fn last_option(&self) -> Optional<&Self::Inner> {
        self.cursor().last().into()
    }

    /// Returns every element except the first.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::TailOnEmpty`] if there are no elements.
    fn tail(&self) -> Result<Self>
    where
        Self::Inner: Clone,
        Self: FromIterator<Self::Inner>,
    {
        let mut cursor = self.cursor();
        if cursor.at_end() {
            debug_failure!("tail requested from an empty container");
            return Err(CollectionError::TailOnEmpty);
        }
        cursor.advance();
        Ok(cursor.cloned().collect())
    }

    /// Returns a snapshot of the elements in traversal order.
    fn to_vec(&self) -> Vec<Self::Inner>
    where
        Self::Inner: Clone,
    {
        self.cursor().cloned().collect()
    }

    /// Pairs elements positionally with those of `other`.
    ///
    /// The result has `min(self.size(), other.size())` elements. Both
    /// inputs are walked through cursors of their own, so neither is
    /// affected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinate::prelude::*;
    ///
    /// let left = Sequence::from(vec![1, 2, 3]);
    /// let right = Sequence::from(vec!['a', 'b']);
    ///
    /// assert_eq!(left.zip(&right), Sequence::from(vec![(1, 'a'), (2, 'b')]));
    /// ```
    fn zip<C>(&self, other: &C) -> Self::WithType<(Self::Inner, C::Inner)>
    where
        C: Combinators,
        Self::Inner: Clone,
        C::Inner: Clone,
        Self::WithType<(Self::Inner, C::Inner)>: FromIterator<(Self::Inner, C::Inner)>,
    {
        self.cursor()
            .zip(other.cursor())
            .map(|(left, right)| (left.clone(), right.clone()))
            .collect()
    }
}
