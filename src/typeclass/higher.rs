//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Sequence<_>` as a type constructor directly.
//! [`TypeConstructor`] works around this with a generic associated type,
//! which lets the combinator contract say "`map` returns the same kind of
//! container with a different element type".
//!
//! # Example
//!
//! ```rust
//! use combinate::prelude::*;
//!
//! fn relabel<C>(container: &C) -> C::WithType<String>
//! where
//!     C: Combinators,
//!     C::Inner: ToString,
//!     C::WithType<String>: FromIterator<String>,
//! {
//!     container.map(|element| element.to_string())
//! }
//!
//! let labels: Sequence<String> = relabel(&Sequence::from(vec![1, 2]));
//! assert_eq!(labels, Sequence::from(vec!["1".to_string(), "2".to_string()]));
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The element type the constructor is currently applied to.
/// - `WithType<B>`: The same constructor applied to a different type `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`, `<F as TypeConstructor>::WithType<F::Inner>`
/// should be `F` itself.
pub trait TypeConstructor {
    /// The element type, for example `i32` for `Sequence<i32>`.
    type Inner;

    /// The same constructor applied to `B`, for example `Sequence<String>`
    /// for `Sequence<i32>`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::{Optional, Sequence, UniqueSet};
    use rstest::rstest;

    #[rstest]
    fn sequence_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Sequence<i32>>();
    }

    #[rstest]
    fn unique_set_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = String>>() {}
        assert_inner::<UniqueSet<String>>();
    }

    #[rstest]
    fn optional_with_type_produces_correct_type() {
        fn transform<T: TypeConstructor>(_value: T) -> T::WithType<String>
        where
            T::WithType<String>: Default,
        {
            Default::default()
        }

        let result: Optional<String> = transform(Optional::Present(42));
        assert_eq!(result, Optional::Empty);
    }
}
