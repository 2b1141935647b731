//! LSD radix sort in base 10 for non-negative integers.

use crate::error::{Result, SortError};
use crate::int_key::IntKey;

pub const NAME: &str = "radix_stable";

const RADIX: i128 = 10;

/// Sorts a copy of `v`.
///
/// Fails with [`SortError::InvalidInput`] if any value is negative, the input is validated before
/// anything is sorted. O(d * (n + 10)) where d is the number of decimal digits of the maximum.
pub fn sort<K: IntKey>(v: &[K]) -> Result<Vec<K>> {
    sort_by_key(v, |val| *val)
}

/// Sorts a copy of `v` by a non-negative integer key. Stable.
///
/// `key` is called exactly once per element, the digit passes only ever see those cached keys.
pub fn sort_by_key<T, K, F>(v: &[T], mut key: F) -> Result<Vec<T>>
where
    T: Clone,
    K: IntKey,
    F: FnMut(&T) -> K,
{
    let mut keyed = Vec::with_capacity(v.len());
    let mut max: i128 = 0;
    for (index, elem) in v.iter().enumerate() {
        let k = key(elem).widen();
        if k < 0 {
            log::debug!("radix sort: rejecting negative key {k} at index {index}");
            return Err(SortError::InvalidInput { index, value: k });
        }
        max = max.max(k);
        keyed.push((k, index));
    }

    let mut buf = Vec::with_capacity(keyed.len());

    let mut passes = 0;
    let mut exp: i128 = 1;
    while max / exp > 0 {
        digit_pass(&mut keyed, &mut buf, exp);
        passes += 1;

        match exp.checked_mul(RADIX) {
            Some(next) => exp = next,
            None => break,
        }
    }

    log::trace!("radix sort: len {}, {passes} digit passes", v.len());

    Ok(keyed.iter().map(|&(_, index)| v[index].clone()).collect())
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

/// Stable counting sort of `(key, index)` pairs on the decimal digit of `key` selected by `exp`.
///
/// All keys are non-negative. `buf` is scratch space, its contents are irrelevant and get
/// replaced.
fn digit_pass(keyed: &mut Vec<(i128, usize)>, buf: &mut Vec<(i128, usize)>, exp: i128) {
    let digit = |key: i128| ((key / exp) % RADIX) as usize;

    let mut counts = [0usize; RADIX as usize];
    for &(key, _) in keyed.iter() {
        counts[digit(key)] += 1;
    }

    // Prefix sums, counts[d] is now one past the last slot for digit d.
    for d in 1..counts.len() {
        counts[d] += counts[d - 1];
    }

    // Every slot of `buf` is overwritten exactly once below.
    buf.clear();
    buf.extend_from_slice(keyed);

    // Walking backwards and filling each digit's slots from the back keeps pairs with the same
    // digit in the order the previous pass left them.
    for &pair in keyed.iter().rev() {
        let d = digit(pair.0);
        counts[d] -= 1;
        buf[counts[d]] = pair;
    }

    std::mem::swap(keyed, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn textbook() {
        assert_eq!(
            sort(&[170, 45, 75, 90, 802, 24, 2, 66]),
            Ok(vec![2, 24, 45, 66, 75, 90, 170, 802])
        );
    }

    #[test]
    fn negative_fails() {
        assert_eq!(
            sort(&[-1, 2, 3]),
            Err(SortError::InvalidInput {
                index: 0,
                value: -1
            })
        );
        assert_eq!(
            sort(&[1, 2, 3, i64::MIN]),
            Err(SortError::InvalidInput {
                index: 3,
                value: i64::MIN as i128
            })
        );
    }

    #[test]
    fn zeros_need_no_pass() {
        assert_eq!(sort(&[0u8, 0, 0]), Ok(vec![0, 0, 0]));
        assert_eq!(sort::<u32>(&[]), Ok(vec![]));
    }

    #[test]
    fn digit_pass_is_stable() {
        let mut keyed = vec![(21, 0), (11, 1), (20, 2), (31, 3)];
        let mut buf = Vec::new();
        digit_pass(&mut keyed, &mut buf, 1);

        assert_eq!(keyed, [(20, 2), (21, 0), (11, 1), (31, 3)]);
    }

    #[test]
    fn key_called_once_per_element() {
        // A key that drifts negative after the first call must not reach the digit passes.
        let mut calls = 0;
        let sorted = sort_by_key(&[30u32, 1, 200], |val| {
            calls += 1;
            if calls > 3 {
                -1
            } else {
                *val as i64
            }
        });

        assert_eq!(sorted, Ok(vec![1, 30, 200]));
        assert_eq!(calls, 3);
    }

    #[test]
    fn single_value() {
        assert_eq!(sort(&[7u64]), Ok(vec![7]));
        assert_eq!(sort(&[u64::MAX]), Ok(vec![u64::MAX]));
        assert_eq!(
            sort(&[-7i64]),
            Err(SortError::InvalidInput {
                index: 0,
                value: -7
            })
        );
    }

    #[test]
    fn records_by_key_are_stable() {
        let records = [(305u32, 'a'), (5, 'b'), (305, 'c'), (50, 'd'), (5, 'e')];
        let sorted = sort_by_key(&records, |r| r.0);

        assert_eq!(
            sorted,
            Ok(vec![(5, 'b'), (5, 'e'), (50, 'd'), (305, 'a'), (305, 'c')])
        );
    }

    #[test]
    fn type_max() {
        assert_eq!(
            sort(&[u64::MAX, 0, u64::MAX - 1, 10]),
            Ok(vec![0, 10, u64::MAX - 1, u64::MAX])
        );
        assert_eq!(sort(&[usize::MAX, 1]), Ok(vec![1, usize::MAX]));
    }
}
