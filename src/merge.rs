//! Top-down merge sort.

use std::cmp::Ordering;

use crate::compare::Compare;

sort_impl!("merge_stable");

/// Sorts a copy of `v` with `compare`.
///
/// O(n log n) comparisons in all cases with O(n) auxiliary memory per merge level and a recursion
/// depth of O(log n). Stable.
pub fn sort_with<T, C>(v: &[T], mut compare: C) -> Vec<T>
where
    T: Clone,
    C: Compare<T>,
{
    merge_sort(v, &mut compare)
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn merge_sort<T, C>(v: &[T], compare: &mut C) -> Vec<T>
where
    T: Clone,
    C: Compare<T>,
{
    let len = v.len();
    if len < 2 {
        // These inputs are always sorted.
        return v.to_vec();
    }

    let mid = len / 2;
    let left = merge_sort(&v[..mid], compare);
    let right = merge_sort(&v[mid..], compare);

    merge(left, right, compare)
}

/// Merges the sorted runs `left` and `right`.
///
/// On ties the element of `left` is taken first, which is what makes the whole sort stable.
fn merge<T, C>(left: Vec<T>, right: Vec<T>, compare: &mut C) -> Vec<T>
where
    C: Compare<T>,
{
    let mut out = Vec::with_capacity(left.len() + right.len());

    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare.is_greater(l, r),
            _ => break,
        };

        let next = if take_right { right.next() } else { left.next() };
        out.extend(next);
    }

    // At most one of them still holds elements.
    out.extend(left);
    out.extend(right);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct User {
        name: &'static str,
        age: u32,
    }

    fn user(name: &'static str, age: u32) -> User {
        User { name, age }
    }

    #[test]
    fn five_ints() {
        assert_eq!(sort(&[5, 3, 8, 4, 2]), [2, 3, 4, 5, 8]);
    }

    #[test]
    fn records_by_age() {
        let users = [user("Ahmed", 33), user("Wendy", 29)];
        let sorted = sort_by(&users, |a, b| a.age.cmp(&b.age));

        assert_eq!(sorted, [user("Wendy", 29), user("Ahmed", 33)]);
        // The input is a borrowed slice and stays as it was.
        assert_eq!(users[0].name, "Ahmed");
    }

    #[test]
    fn equal_ages_keep_input_order() {
        let users = [
            user("Ahmed", 33),
            user("Wendy", 29),
            user("Lina", 33),
            user("Omar", 29),
            user("Zoe", 33),
        ];
        let sorted = sort_by(&users, |a, b| a.age.cmp(&b.age));

        let names: Vec<_> = sorted.iter().map(|u| u.name).collect();
        assert_eq!(names, ["Wendy", "Omar", "Ahmed", "Lina", "Zoe"]);
    }

    #[test]
    fn merge_prefers_left_on_ties() {
        let left = vec![(1, 'l'), (2, 'l')];
        let right = vec![(1, 'r'), (2, 'r'), (3, 'r')];

        let out = merge(left, right, &mut |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));
        assert_eq!(out, [(1, 'l'), (1, 'r'), (2, 'l'), (2, 'r'), (3, 'r')]);
    }
}
