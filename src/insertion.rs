//! Insertion sort.

use std::cmp::Ordering;

use crate::compare::Compare;

sort_impl!("insertion_stable");

/// Sorts a copy of `v` with `compare`.
///
/// O(n²) in the worst case, O(n) for nearly sorted input. Stable, only elements strictly greater
/// than the one being inserted are shifted.
pub fn sort_with<T, C>(v: &[T], mut compare: C) -> Vec<T>
where
    T: Clone,
    C: Compare<T>,
{
    let mut v = v.to_vec();
    insertion_sort(&mut v, &mut compare);
    v
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn insertion_sort<T, C>(v: &mut [T], compare: &mut C)
where
    C: Compare<T>,
{
    let len = v.len();

    for i in 1..len {
        insert_tail(&mut v[..=i], compare);
    }
}

/// Inserts `v[v.len() - 1]` into the sorted prefix `v[..v.len() - 1]`.
fn insert_tail<T, C>(v: &mut [T], compare: &mut C)
where
    C: Compare<T>,
{
    let key = v.len() - 1;

    let mut hole = key;
    while hole > 0 && compare.is_greater(&v[hole - 1], &v[key]) {
        hole -= 1;
    }

    // Shifts v[hole..key] one to the right and drops the key into the hole.
    v[hole..].rotate_right(1);
}
