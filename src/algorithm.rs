//! Runtime selection of a comparison sort by name.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::compare::{Compare, Natural};
use crate::error::SortError;

macro_rules! algorithms {
    ($($variant:ident { stable: $stable:expr, in_place: $in_place:expr }),* $(,)?) => {
        paste::paste! {
            /// The comparison based algorithms of this crate.
            #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
            pub enum Algorithm {
                $($variant,)*
            }

            impl Algorithm {
                pub const ALL: &'static [Algorithm] = &[$(Algorithm::$variant,)*];

                /// Lower case name, as accepted by `from_str`.
                pub fn name(self) -> &'static str {
                    match self {
                        $(Algorithm::$variant => stringify!([<$variant:lower>]),)*
                    }
                }

                /// Whether elements that compare equal keep their relative input order.
                pub fn is_stable(self) -> bool {
                    match self {
                        $(Algorithm::$variant => $stable,)*
                    }
                }

                /// Whether the algorithm orders its working copy with O(1) extra memory.
                pub fn is_in_place(self) -> bool {
                    match self {
                        $(Algorithm::$variant => $in_place,)*
                    }
                }

                pub fn sort_with<T, C>(self, v: &[T], compare: C) -> Vec<T>
                where
                    T: Clone,
                    C: Compare<T>,
                {
                    match self {
                        $(Algorithm::$variant => crate::[<$variant:lower>]::sort_with(v, compare),)*
                    }
                }
            }

            impl FromStr for Algorithm {
                type Err = SortError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    $(
                        if s.eq_ignore_ascii_case(stringify!([<$variant:lower>])) {
                            return Ok(Algorithm::$variant);
                        }
                    )*

                    Err(SortError::UnknownAlgorithm(s.to_owned()))
                }
            }
        }
    };
}

algorithms! {
    Bubble { stable: true, in_place: true },
    Selection { stable: false, in_place: true },
    Insertion { stable: true, in_place: true },
    Merge { stable: true, in_place: false },
    Quick { stable: false, in_place: false },
    Heap { stable: false, in_place: true },
}

impl Algorithm {
    /// Sorts a copy of `v` by its natural order.
    pub fn sort<T: Ord + Clone>(self, v: &[T]) -> Vec<T> {
        self.sort_with(v, Natural)
    }

    pub fn sort_by<T, F>(self, v: &[T], compare: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort_with(v, compare)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
