//! Classic sorting algorithms over borrowed slices.
//!
//! Every algorithm lives in its own module and leaves its input untouched, returning a freshly
//! ordered `Vec`. The comparison sorts expose `sort` (natural order), `sort_by` (closure
//! comparator) and `sort_with` (any [`Compare`] value). The integer sorts `counting` and `radix`
//! work on primitive integer values instead of a comparator.

macro_rules! sort_impl {
    ($name:expr) => {
        pub const NAME: &str = $name;

        /// Sorts a copy of `v` by the natural order of `T`.
        #[inline]
        pub fn sort<T>(v: &[T]) -> Vec<T>
        where
            T: Ord + Clone,
        {
            sort_with(v, $crate::compare::Natural)
        }

        /// Sorts a copy of `v` with the three-way comparator `compare`.
        #[inline]
        pub fn sort_by<T, F>(v: &[T], compare: F) -> Vec<T>
        where
            T: Clone,
            F: FnMut(&T, &T) -> Ordering,
        {
            sort_with(v, compare)
        }
    };
}

pub mod compare;
pub mod error;
pub mod int_key;

pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

pub mod counting;
pub mod radix;

pub mod algorithm;

pub use algorithm::Algorithm;
pub use compare::Compare;
pub use error::{Result, SortError};
pub use int_key::IntKey;

pub use bubble::sort_by as bubble_sort;
pub use counting::sort as counting_sort;
pub use heap::sort_by as heap_sort;
pub use insertion::sort_by as insertion_sort;
pub use merge::sort_by as merge_sort;
pub use quick::sort_by as quick_sort;
pub use radix::sort as radix_sort;
pub use selection::sort_by as selection_sort;
