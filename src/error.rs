use thiserror::Error;

pub type Result<T> = std::result::Result<T, SortError>;

/// Everything that can go wrong in the integer sorts and the algorithm catalogue.
///
/// The comparison sorts have no failure modes, given a comparator they always produce a
/// permutation of their input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// Radix sort only handles non-negative values.
    #[error("radix sort only supports non-negative integers, found {value} at index {index}")]
    InvalidInput { index: usize, value: i128 },

    /// Explicit counting sort bounds where `min > max`.
    #[error("counting sort bounds are inverted, min {min} is larger than max {max}")]
    InvertedBounds { min: i128, max: i128 },

    /// A value outside the explicit counting sort bounds.
    #[error("value {value} at index {index} lies outside the counting sort bounds")]
    OutOfBounds { index: usize, value: i128 },

    #[error("unknown sort algorithm: {0:?}")]
    UnknownAlgorithm(String),
}
