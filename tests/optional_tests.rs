//! Unit tests for Optional.
//!
//! Optional is a tagged variant over Empty and Present. These tests cover
//! access, the combinators seen as a container of at most one element,
//! and the one-shot cursor.

use combinate::prelude::*;
use rstest::rstest;

// =============================================================================
// Access
// =============================================================================

#[rstest]
fn test_present_access() {
    let optional = Optional::Present(42);
    assert_eq!(optional.get(), Ok(&42));
    assert_eq!(optional.get_or_else(666), 42);
}

#[rstest]
fn test_empty_access() {
    let optional: Optional<i32> = Optional::Empty;
    assert_eq!(optional.get(), Err(CollectionError::InvalidAccess));
    assert_eq!(optional.get_or_else(666), 666);
}

// =============================================================================
// Iteration
// =============================================================================

#[rstest]
fn test_present_iterates_once() {
    let optional = Optional::Present(42);
    let mut visits = 0;
    for value in &optional {
        assert_eq!(*value, 42);
        visits += 1;
    }
    assert_eq!(visits, 1);
}

#[rstest]
fn test_empty_never_iterates() {
    let optional: Optional<i32> = Optional::Empty;
    let mut hit = false;
    for _ in &optional {
        hit = true;
    }
    assert!(!hit);
}

#[rstest]
fn test_present_cursor_restarts() {
    let optional = Optional::Present('x');
    let mut cursor = optional.cursor();

    assert_eq!(cursor.current(), Ok(&'x'));
    cursor.advance();
    assert!(cursor.at_end());
    assert_eq!(cursor.current(), Err(CollectionError::InvalidAccess));
    cursor.restart();
    assert_eq!(cursor.current(), Ok(&'x'));
}

#[rstest]
fn test_empty_cursor_current_fails() {
    let optional: Optional<char> = Optional::Empty;
    let mut cursor = optional.cursor();

    assert!(cursor.at_end());
    cursor.restart();
    assert_eq!(cursor.current(), Err(CollectionError::InvalidAccess));
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
fn test_find() {
    let present = Optional::Present(42);
    assert_eq!(present.find(|x| *x == 42), Optional::Present(&42));
    assert_eq!(present.find(|x| *x == 666), Optional::Empty);
}

#[rstest]
#[case(|_: &i32| true)]
#[case(|_: &i32| false)]
fn test_empty_find_ignores_predicate(#[case] predicate: fn(&i32) -> bool) {
    let optional: Optional<i32> = Optional::Empty;
    assert_eq!(optional.find(predicate), Optional::Empty);
}

#[rstest]
fn test_flat_map_optional() {
    assert_eq!(
        Optional::Present(42).flat_map_optional(|x| Optional::Present(x + 1)),
        Optional::Present(43)
    );
    assert_eq!(
        Optional::<i32>::Empty.flat_map_optional(|x| Optional::Present(x + 1)),
        Optional::Empty
    );
}

#[rstest]
#[case(Optional::Present(4), 1, true, true)]
#[case(Optional::Present(3), 0, false, false)]
#[case(Optional::Empty, 0, false, true)]
fn test_quantifiers(
    #[case] optional: Optional<i32>,
    #[case] expected_count: usize,
    #[case] expected_exists: bool,
    #[case] expected_for_all: bool,
) {
    let is_even = |x: &i32| x % 2 == 0;
    assert_eq!(optional.count(is_even), expected_count);
    assert_eq!(optional.exists(is_even), expected_exists);
    assert_eq!(optional.for_all(is_even), expected_for_all);
}

#[rstest]
fn test_fold_left() {
    assert_eq!(Optional::Present(5).fold_left(10, |sum, x| sum + x), 15);
    assert_eq!(Optional::<i32>::Empty.fold_left(10, |sum, x| sum + x), 10);
}

#[rstest]
fn test_head_last_and_options() {
    let present = Optional::Present(7);
    assert_eq!(present.head(), Ok(&7));
    assert_eq!(present.last(), Ok(&7));
    assert_eq!(present.head_option(), Optional::Present(&7));

    let empty: Optional<i32> = Optional::Empty;
    assert_eq!(
        empty.head(),
        Err(CollectionError::EmptyAccess { operation: "head" })
    );
    assert_eq!(empty.last_option(), Optional::Empty);
}

#[rstest]
fn test_tail() {
    assert_eq!(Optional::Present(1).tail(), Ok(Optional::Empty));
    assert_eq!(
        Optional::<i32>::Empty.tail(),
        Err(CollectionError::TailOnEmpty)
    );
}

#[rstest]
fn test_zip_with_other_containers() {
    let present = Optional::Present(1);
    assert_eq!(
        present.zip(&Sequence::from(vec!['a', 'b'])),
        Optional::Present((1, 'a'))
    );
    assert_eq!(present.zip(&Sequence::<char>::new()), Optional::Empty);
    assert_eq!(
        Optional::<i32>::Empty.zip(&Sequence::from(vec!['a'])),
        Optional::Empty
    );
}

#[rstest]
fn test_to_vec_and_size() {
    assert_eq!(Optional::Present(42).to_vec(), vec![42]);
    assert_eq!(Optional::<i32>::Empty.to_vec(), Vec::<i32>::new());
    assert_eq!(Optional::Present(42).size(), 1);
    assert!(Optional::Present(42).non_empty());
    assert!(Optional::Present(42).emptied().is_empty());
}

#[rstest]
fn test_contains() {
    assert!(Optional::Present(3).contains(&3));
    assert!(!Optional::Present(3).contains(&4));
    assert!(!Optional::<i32>::Empty.contains(&3));
}
