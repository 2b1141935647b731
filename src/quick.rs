//! Three-way partitioning quicksort with a fixed middle pivot.
//!
//! The pivot is always the element at index `len / 2` of the current sub-sequence. There is no
//! randomization and no median-of-three, so specially constructed inputs degrade to O(n²)
//! comparisons. The recursion of the textbook formulation is replaced by an explicit work-stack on
//! the heap, such inputs cost time but can never overflow the call stack.

use std::cmp::Ordering;

use crate::compare::Compare;

sort_impl!("quick_unstable");

/// Sorts a copy of `v` with `compare`.
///
/// Expected O(n log n), worst case O(n²). Elements equal to a pivot keep their relative order,
/// global stability is not guaranteed.
pub fn sort_with<T, C>(v: &[T], mut compare: C) -> Vec<T>
where
    T: Clone,
    C: Compare<T>,
{
    quicksort(v.to_vec(), &mut compare)
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

enum Job<T> {
    /// Partition this sub-sequence further.
    Sort(Vec<T>),
    /// Already in final order, append as is.
    Emit(Vec<T>),
}

fn quicksort<T, C>(v: Vec<T>, compare: &mut C) -> Vec<T>
where
    T: Clone,
    C: Compare<T>,
{
    let len = v.len();
    if len < 2 {
        return v;
    }

    let mut out = Vec::with_capacity(len);

    // LIFO, so jobs are pushed in reverse of the less, equal, greater output order.
    let mut jobs = vec![Job::Sort(v)];
    let mut max_jobs = jobs.len();

    while let Some(job) = jobs.pop() {
        match job {
            Job::Sort(v) if v.len() < 2 => out.extend(v),
            Job::Sort(v) => {
                let Partition {
                    less,
                    equal,
                    greater,
                } = partition(v, compare);

                jobs.push(Job::Sort(greater));
                jobs.push(Job::Emit(equal));
                jobs.push(Job::Sort(less));

                max_jobs = max_jobs.max(jobs.len());
            }
            Job::Emit(v) => out.extend(v),
        }
    }

    debug_assert_eq!(out.len(), len);

    if max_jobs > 2 * (usize::BITS - len.leading_zeros()) as usize + 3 {
        // Far deeper than log2(len), a recursive version would be at risk here.
        log::debug!("quicksort: len {len} needed {max_jobs} pending jobs");
    }

    out
}

struct Partition<T> {
    less: Vec<T>,
    equal: Vec<T>,
    greater: Vec<T>,
}

/// Splits `v` around its middle element in a single scan.
///
/// Every bucket keeps the relative input order of its elements. The pivot itself always lands in
/// `equal`, so `less` and `greater` are strictly shorter than `v` even if `compare` is not a valid
/// total preorder.
fn partition<T, C>(v: Vec<T>, compare: &mut C) -> Partition<T>
where
    T: Clone,
    C: Compare<T>,
{
    let pivot_pos = v.len() / 2;
    let pivot = v[pivot_pos].clone();

    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();

    for (i, elem) in v.into_iter().enumerate() {
        if i == pivot_pos {
            equal.push(elem);
            continue;
        }

        match compare.compare(&elem, &pivot) {
            Ordering::Less => less.push(elem),
            Ordering::Equal => equal.push(elem),
            Ordering::Greater => greater.push(elem),
        }
    }

    Partition {
        less,
        equal,
        greater,
    }
}
