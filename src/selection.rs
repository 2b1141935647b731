//! Selection sort.

use std::cmp::Ordering;

use crate::compare::Compare;

sort_impl!("selection_unstable");

/// Sorts a copy of `v` with `compare`.
///
/// Always O(n²) comparisons. Not stable, the exchange can carry an element past others that
/// compare equal to it.
pub fn sort_with<T, C>(v: &[T], mut compare: C) -> Vec<T>
where
    T: Clone,
    C: Compare<T>,
{
    let mut v = v.to_vec();
    selection_sort(&mut v, &mut compare);
    v
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn selection_sort<T, C>(v: &mut [T], compare: &mut C)
where
    C: Compare<T>,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut swaps = 0usize;
    for i in 0..len - 1 {
        // Only a strictly smaller element replaces the candidate, so the first minimum wins.
        let mut min_idx = i;
        for j in (i + 1)..len {
            if compare.is_less(&v[j], &v[min_idx]) {
                min_idx = j;
            }
        }

        if min_idx != i {
            v.swap(i, min_idx);
            swaps += 1;
        }
    }

    log::trace!("selection sort: len {len}, {swaps} swaps");
}
