//! Three-way comparators shared by every comparison based sort.
//!
//! A comparator must define a total preorder: the same pair always yields the same answer and the
//! relation is transitive. Comparators that break this contract produce an unspecified order, but
//! every sort in this crate still terminates and returns a permutation of its input.

use std::cmp::Ordering;

/// Capability to order two values of `T`.
///
/// `Less` means `a` precedes `b`, `Equal` is a tie and `Greater` means `a` follows `b`. Any
/// `FnMut(&T, &T) -> Ordering` is a comparator.
pub trait Compare<T: ?Sized> {
    fn compare(&mut self, a: &T, b: &T) -> Ordering;

    /// Shorthand for `compare(a, b) == Ordering::Less`.
    #[inline]
    fn is_less(&mut self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Shorthand for `compare(a, b) == Ordering::Greater`.
    #[inline]
    fn is_greater(&mut self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Greater
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: FnMut(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The default comparator, the natural order of `T`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Inverts the wrapped comparator, `Reverse(Natural)` sorts descending.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Reverse<C>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reverse<C> {
    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Builds a comparator that orders values by the natural order of an extracted key.
///
/// ```ignore
/// let by_age = compare::by_key(|user: &User| user.age);
/// let sorted = merge::sort_by(&users, by_age);
/// ```
pub fn by_key<T, K, F>(mut key: F) -> impl FnMut(&T, &T) -> Ordering
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    move |a, b| key(a).cmp(&key(b))
}
