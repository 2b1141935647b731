//! Primitive integers usable by the counting and radix sorts.

use std::fmt::Debug;

/// A primitive integer that can be widened to `i128` without loss.
///
/// All bucket arithmetic is performed on the widened value, so `max - min + 1` never overflows
/// for any implementing type.
pub trait IntKey: Copy + Ord + Debug {
    fn widen(self) -> i128;

    /// Inverse of `widen`. Only ever called with values that came out of `widen` for the same
    /// type, or lie between two such values.
    fn narrow(wide: i128) -> Self;
}

macro_rules! impl_int_key {
    ($($t:ty),*) => {
        $(
            impl IntKey for $t {
                #[inline]
                fn widen(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn narrow(wide: i128) -> Self {
                    wide as $t
                }
            }
        )*
    };
}

impl_int_key!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
