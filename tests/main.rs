use std::cmp::Ordering;

use sort_test_tools::{instantiate_sort_tests, Sort};

macro_rules! sort_suite {
    ($($algo:ident),*) => {
        paste::paste! {
            $(
                mod [<$algo _sort>] {
                    use super::*;

                    struct SortImpl {}

                    impl Sort for SortImpl {
                        fn name() -> String {
                            classic_sort::$algo::NAME.into()
                        }

                        fn sort<T>(v: &[T]) -> Vec<T>
                        where
                            T: Ord + Clone,
                        {
                            classic_sort::$algo::sort(v)
                        }

                        fn sort_by<T, F>(v: &[T], compare: F) -> Vec<T>
                        where
                            T: Clone,
                            F: FnMut(&T, &T) -> Ordering,
                        {
                            classic_sort::$algo::sort_by(v, compare)
                        }
                    }

                    instantiate_sort_tests!(SortImpl);
                }
            )*
        }
    };
}

sort_suite!(bubble, selection, insertion, merge, quick, heap);
