//! Counting sort for primitive integers.
//!
//! Runs in O(n + range) time with O(range) memory, where `range = max - min + 1`. Sparse inputs
//! with a huge value range are impractical, allocating the frequency table for a range that does
//! not fit the address space panics like any other oversized allocation.

use crate::error::{Result, SortError};
use crate::int_key::IntKey;

pub const NAME: &str = "counting";

/// Ratio of value range to input length above which the frequency table dominates the cost.
const SPARSE_RANGE_FACTOR: usize = 64;

/// Sorts a copy of `v`, bounds are derived from the input.
pub fn sort<K: IntKey>(v: &[K]) -> Vec<K> {
    if v.len() < 2 {
        return v.to_vec();
    }

    match value_range(v) {
        Some((min, max)) => counting_sort(v, min, max),
        None => Vec::new(),
    }
}

/// Sorts a copy of `v` using the supplied bounds.
///
/// A missing bound is taken from the input, a supplied `min` above the smallest value is lowered
/// and likewise for `max`. With both bounds supplied they are validated instead: `min > max`
/// yields [`SortError::InvertedBounds`] and a value outside `min..=max` yields
/// [`SortError::OutOfBounds`], both before any output is built.
///
/// The bounds only constrain the input. The frequency table always spans the values actually
/// present, so wide bounds around a small input cost nothing.
pub fn sort_with_bounds<K: IntKey>(v: &[K], min: Option<K>, max: Option<K>) -> Result<Vec<K>> {
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(SortError::InvertedBounds {
                min: min.widen(),
                max: max.widen(),
            });
        }

        if let Some(index) = v.iter().position(|val| *val < min || *val > max) {
            return Err(SortError::OutOfBounds {
                index,
                value: v[index].widen(),
            });
        }
    }

    Ok(sort(v))
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

/// Smallest and largest value of `v`, `None` if it is empty.
fn value_range<K: IntKey>(v: &[K]) -> Option<(K, K)> {
    let first = *v.first()?;

    Some(
        v.iter()
            .fold((first, first), |(lo, hi), &val| (lo.min(val), hi.max(val))),
    )
}

/// All values of `v` must lie in `min..=max`.
fn counting_sort<K: IntKey>(v: &[K], min: K, max: K) -> Vec<K> {
    let base = min.widen();
    // Saturate, a range that does not fit usize can't be allocated anyway.
    let range = usize::try_from(max.widen() - base + 1).unwrap_or(usize::MAX);

    if range / SPARSE_RANGE_FACTOR > v.len() {
        log::debug!(
            "counting sort: value range {range} is much larger than input len {}",
            v.len()
        );
    }

    let mut counts = vec![0usize; range];
    for &val in v {
        counts[(val.widen() - base) as usize] += 1;
    }

    let mut out = Vec::with_capacity(v.len());
    for (offset, &count) in counts.iter().enumerate() {
        if count != 0 {
            let val = K::narrow(base + offset as i128);
            out.extend(std::iter::repeat(val).take(count));
        }
    }

    log::trace!("counting sort: len {}, range {range}", v.len());

    out
}
