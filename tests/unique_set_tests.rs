//! Unit tests for UniqueSet.
//!
//! Exercises the uniqueness invariant across construction and mutation,
//! and the set algebra (diff, intersect, union).

use combinate::prelude::*;
use rstest::{fixture, rstest};

#[fixture]
fn left() -> UniqueSet<i32> {
    UniqueSet::from(vec![1, 2, 3, 4, 5, 1])
}

#[fixture]
fn right() -> UniqueSet<i32> {
    UniqueSet::from(vec![4, 5, 6, 7, 8, 8, 8])
}

#[rstest]
fn test_size_after_deduplication(left: UniqueSet<i32>, right: UniqueSet<i32>) {
    assert_eq!(left.size(), 5);
    assert_eq!(right.size(), 5);
}

#[rstest]
fn test_diff(left: UniqueSet<i32>, right: UniqueSet<i32>) {
    let left_minus_right = left.diff(&right);
    let right_minus_left = right.diff(&left);

    assert_eq!(left_minus_right.size(), 3);
    for value in [1, 2, 3] {
        assert!(left_minus_right.contains(&value));
    }
    assert_eq!(right_minus_left.size(), 3);
    for value in [6, 7, 8] {
        assert!(right_minus_left.contains(&value));
    }
}

#[rstest]
fn test_intersect(left: UniqueSet<i32>, right: UniqueSet<i32>) {
    let both = left.intersect(&right);

    assert_eq!(both.size(), 2);
    assert!(both.contains(&4));
    assert!(both.contains(&5));
}

#[rstest]
fn test_union(left: UniqueSet<i32>, right: UniqueSet<i32>) {
    let either = left.union(&right);

    assert_eq!(either.size(), 8);
    for value in 1..=8 {
        assert!(either.contains(&value));
    }
}

#[rstest]
fn test_union_with_empty_is_identity(left: UniqueSet<i32>) {
    assert_eq!(left.union(&left.emptied()), left);
    assert_eq!(left.emptied().union(&left), left);
}

#[rstest]
fn test_insert_keeps_invariant(mut left: UniqueSet<i32>) {
    assert!(!left.insert(3));
    assert!(left.insert(9));
    assert_eq!(left.as_slice(), &[1, 2, 3, 4, 5, 9]);
}

#[rstest]
fn test_delete_missing_is_noop(mut left: UniqueSet<i32>) {
    assert!(!left.delete(&42));
    assert_eq!(left.size(), 5);
    assert!(left.delete(&1));
    assert!(!left.contains(&1));
}

#[rstest]
fn test_filter_and_map(left: UniqueSet<i32>) {
    assert_eq!(left.filter(|x| x % 2 == 1), UniqueSet::from(vec![1, 3, 5]));
    assert_eq!(left.map(|x| x / 2), UniqueSet::from(vec![0, 1, 2]));
}

#[rstest]
fn test_zip_pairs_positionally(left: UniqueSet<i32>, right: UniqueSet<i32>) {
    let pairs = left.zip(&right);
    assert_eq!(pairs.size(), 5);
    assert_eq!(pairs.head(), Ok(&(1, 4)));
}

#[rstest]
fn test_head_last(left: UniqueSet<i32>) {
    assert_eq!(left.head(), Ok(&1));
    assert_eq!(left.last(), Ok(&5));
    assert_eq!(left.last_option(), Optional::Present(&5));
}

#[rstest]
fn test_tail(left: UniqueSet<i32>) {
    assert_eq!(left.tail(), Ok(UniqueSet::from(vec![2, 3, 4, 5])));
    assert_eq!(
        UniqueSet::<i32>::new().tail(),
        Err(CollectionError::TailOnEmpty)
    );
}

#[rstest]
fn test_min_max(right: UniqueSet<i32>) {
    assert_eq!(right.min(), Ok(&4));
    assert_eq!(right.max(), Ok(&8));
    assert_eq!(
        UniqueSet::<i32>::new().max(),
        Err(CollectionError::EmptyAccess { operation: "max" })
    );
}

#[rstest]
fn test_to_sequence_is_lossless(left: UniqueSet<i32>) {
    let sequence = left.to_sequence();
    assert_eq!(sequence.size(), left.size());
    assert_eq!(sequence.to_unique_set(), left);
}

#[rstest]
fn test_find_and_fold(left: UniqueSet<i32>) {
    assert_eq!(left.find(|x| *x > 3), Optional::Present(&4));
    assert_eq!(left.fold_left(0, |sum, x| sum + x), 15);
}

#[rstest]
fn test_structural_elements() {
    let set = UniqueSet::from(vec![
        "alpha".to_string(),
        "beta".to_string(),
        "alpha".to_string(),
    ]);
    assert_eq!(set.size(), 2);
    assert!(set.contains(&"beta".to_string()));
}

#[rstest]
fn test_extend_skips_present_values() {
    let mut set: UniqueSet<i32> = (1..=3).collect();
    set.extend(vec![2, 3, 4, 4]);
    assert_eq!(set.as_slice(), &[1, 2, 3, 4]);
}
