//! In-place heapsort on a binary max-heap.

use std::cmp::Ordering;

use crate::compare::Compare;

sort_impl!("heap_unstable");

/// Sorts a copy of `v` with `compare`.
///
/// O(n log n) in all cases, the copy is sorted in place with O(1) additional memory. Not stable.
pub fn sort_with<T, C>(v: &[T], mut compare: C) -> Vec<T>
where
    T: Clone,
    C: Compare<T>,
{
    let mut v = v.to_vec();
    heapsort(&mut v, &mut compare);
    v
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn heapsort<T, C>(v: &mut [T], compare: &mut C)
where
    C: Compare<T>,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // Build the heap in linear time, starting at the parent of the last element.
    for node in (0..len / 2).rev() {
        sift_down(v, node, len, compare);
    }

    // Pop maximal elements from the heap.
    for end in (1..len).rev() {
        v.swap(0, end);
        sift_down(v, 0, end, compare);
    }
}

/// Restores the max-heap property of `v[..end]` for the sub-tree rooted at `node`, assuming both
/// child sub-trees already are max-heaps.
fn sift_down<T, C>(v: &mut [T], mut node: usize, end: usize, compare: &mut C)
where
    C: Compare<T>,
{
    loop {
        let left = 2 * node + 1;
        if left >= end {
            break;
        }

        // Pick the greater child, the left one on ties.
        let mut child = left;
        let right = left + 1;
        if right < end && compare.is_less(&v[left], &v[right]) {
            child = right;
        }

        // Stop if the invariant holds at `node`.
        if !compare.is_less(&v[node], &v[child]) {
            break;
        }

        v.swap(node, child);
        node = child;
    }
}
