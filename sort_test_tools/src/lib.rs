use std::cmp::Ordering;

/// A sort that leaves its input alone and returns an ordered copy.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(v: &[T]) -> Vec<T>
    where
        T: Ord + Clone;

    fn sort_by<T, F>(v: &[T], compare: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;
}

pub mod patterns;
