use thiserror::Error;

/// Errors returned by [`BitSet`] operations.
///
/// Every error is local to the call that produced it. A failed call leaves the
/// bitset exactly as it was before.
///
/// [`BitSet`]: crate::BitSet
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BitSetError {
    /// The word buffer could not be allocated.
    #[error("failed to allocate {words} words")]
    AllocationFailure {
        /// Number of words that were requested.
        words: usize,
    },

    /// A bit index lies outside of the bitset's capacity.
    #[error("Bit index {index} out of bounds (capacity {capacity})")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Capacity of the bitset in bits.
        capacity: usize,
    },

    /// Two bitsets with different word counts were compared.
    #[error("word count mismatch: {left} != {right}")]
    SizeMismatch {
        /// Word count of the left-hand bitset.
        left: usize,
        /// Word count of the right-hand bitset.
        right: usize,
    },
}
