//! Bubble sort with early exit on a pass without swaps.

use std::cmp::Ordering;

use crate::compare::Compare;

sort_impl!("bubble_stable");

/// Sorts a copy of `v` with `compare`.
///
/// O(n²) comparisons in the worst case, O(n) on already sorted input. Stable, only a pair where
/// the left element is strictly greater gets swapped.
pub fn sort_with<T, C>(v: &[T], mut compare: C) -> Vec<T>
where
    T: Clone,
    C: Compare<T>,
{
    let mut v = v.to_vec();
    bubble_sort(&mut v, &mut compare);
    v
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn bubble_sort<T, C>(v: &mut [T], compare: &mut C)
where
    C: Compare<T>,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut passes = 0;
    for i in 0..len - 1 {
        passes += 1;

        // After pass i the largest i + 1 elements are in their final place.
        let mut swapped = false;
        for j in 0..len - 1 - i {
            if compare.is_greater(&v[j], &v[j + 1]) {
                v.swap(j, j + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }

    log::trace!("bubble sort: len {len}, {passes} passes");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_input_takes_one_pass() {
        let mut comps = 0;
        let out = sort_by(&[1, 2, 3, 4, 5, 6], |a: &i32, b: &i32| {
            comps += 1;
            a.cmp(b)
        });

        assert_eq!(out, [1, 2, 3, 4, 5, 6]);
        assert_eq!(comps, 5);
    }

    #[test]
    fn reversed_input() {
        assert_eq!(sort(&[5, 4, 3, 2, 1]), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn ties_keep_order() {
        let input = [(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
        let out = sort_by(&input, |a, b| a.0.cmp(&b.0));
        assert_eq!(out, [(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')]);
    }
}
