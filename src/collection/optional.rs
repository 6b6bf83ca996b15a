//! A container of zero or one value.
//!
//! [`Optional`] is a tagged variant: either [`Optional::Empty`] or
//! [`Optional::Present`]. It takes part in the same combinator protocol as
//! the other containers, behaving like a collection of at most one element,
//! and adds [`get`](Optional::get) and [`get_or_else`](Optional::get_or_else).
//!
//! # Examples
//!
//! ```rust
//! use combinate::prelude::*;
//!
//! let present = Optional::Present(42);
//! let empty: Optional<i32> = Optional::Empty;
//!
//! assert_eq!(present.get(), Ok(&42));
//! assert_eq!(empty.get(), Err(CollectionError::InvalidAccess));
//! assert_eq!(empty.get_or_else(666), 666);
//!
//! let next = present.flat_map_optional(|x| Optional::Present(x + 1));
//! assert_eq!(next, Optional::Present(43));
//! ```

use super::cursor::OptionalCursor;
use crate::error::{CollectionError, Result};
use crate::typeclass::{Combinators, TypeConstructor};

/// Zero or one value of type `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Optional<T> {
    /// No value.
    Empty,
    /// Exactly one value.
    Present(T),
}

impl<T> Optional<T> {
    /// Returns `true` for [`Optional::Present`].
    #[inline]
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` for [`Optional::Empty`].
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the value.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidAccess`] for [`Optional::Empty`].
    pub fn get(&self) -> Result<&T> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Empty => {
                debug_failure!("get called on an empty optional");
                Err(CollectionError::InvalidAccess)
            }
        }
    }

    /// Returns the value, or `default` when empty.
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Empty => default,
        }
    }

    /// Borrows the value, if any.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Empty => Optional::Empty,
        }
    }

    /// Chains a computation that may itself produce nothing.
    ///
    /// `Present(v)` becomes `function(&v)`; `Empty` stays `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinate::prelude::*;
    ///
    /// let halve = |x: &i32| {
    ///     if x % 2 == 0 { Optional::Present(x / 2) } else { Optional::Empty }
    /// };
    ///
    /// assert_eq!(Optional::Present(8).flat_map_optional(halve), Optional::Present(4));
    /// assert_eq!(Optional::Present(7).flat_map_optional(halve), Optional::Empty);
    /// assert_eq!(Optional::Empty.flat_map_optional(halve), Optional::Empty);
    /// ```
    pub fn flat_map_optional<U, F>(&self, function: F) -> Optional<U>
    where
        F: FnOnce(&T) -> Optional<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Empty => Optional::Empty,
        }
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T: Clone> Optional<&T> {
    /// Clones the borrowed value into an owned optional.
    #[must_use]
    pub fn cloned(self) -> Optional<T> {
        match self {
            Self::Present(value) => Optional::Present(value.clone()),
            Self::Empty => Optional::Empty,
        }
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Empty, Self::Present)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Optional::Present(value) => Some(value),
            Optional::Empty => None,
        }
    }
}

/// Keeps the first element of the iterator, if any.
impl<T> FromIterator<T> for Optional<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        iterable.into_iter().next().into()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = OptionalCursor<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

impl<T> TypeConstructor for Optional<T> {
    type Inner = T;
    type WithType<B> = Optional<B>;
}

impl<T> Combinators for Optional<T> {
    type Cursor<'a>
        = OptionalCursor<'a, T>
    where
        Self: 'a;

    fn cursor(&self) -> OptionalCursor<'_, T> {
        OptionalCursor::new(self.as_ref().into_option())
    }

    #[inline]
    fn emptied(&self) -> Self {
        Self::Empty
    }

    /// Optimized implementation for Optional.
    #[inline]
    fn size(&self) -> usize {
        usize::from(self.is_present())
    }

    /// Optimized implementation for Optional.
    #[inline]
    fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        matches!(self, Self::Present(value) if value == element)
    }

    fn head(&self) -> Result<&T> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Empty => {
                debug_failure!("head requested from an empty optional");
                Err(CollectionError::EmptyAccess { operation: "head" })
            }
        }
    }

    fn last(&self) -> Result<&T> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Empty => {
                debug_failure!("last requested from an empty optional");
                Err(CollectionError::EmptyAccess { operation: "last" })
            }
        }
    }

    fn head_option(&self) -> Optional<&T> {
        self.as_ref()
    }

    fn last_option(&self) -> Optional<&T> {
        self.as_ref()
    }
}

static_assertions::assert_impl_all!(Optional<i32>: Send, Sync, Copy, Default);
