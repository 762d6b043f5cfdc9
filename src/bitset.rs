use crate::BitSetError;
use crate::log::{debug, trace};
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};

/// Number of bits stored in one word.
///
/// Fixed at 64 regardless of the target's pointer width, so a bitset has the
/// same capacity on every platform.
pub const WORD_BITS: usize = u64::BITS as usize;

/// Computes the number of words needed to store `bit_count` bits.
///
/// # Examples
/// ```
/// use light_bitset::word_count;
///
/// assert_eq!(word_count(0), 0);
/// assert_eq!(word_count(1), 1);
/// assert_eq!(word_count(64), 1);
/// assert_eq!(word_count(65), 2);
/// ```
pub const fn word_count(bit_count: usize) -> usize {
    bit_count.div_ceil(WORD_BITS)
}

/// A fixed-capacity set of bit positions.
///
/// The capacity is chosen once at construction and rounded up to a whole
/// number of 64-bit words. Bits can only ever be set, never cleared.
///
/// Bit `i` lives in bit `i % 64` of word `i / 64`.
#[derive(PartialEq, Eq, Hash, Clone, Default)]
pub struct BitSet {
    words: Box<[u64]>,
}

impl BitSet {
    /// Creates a new bitset able to hold at least `bit_count` bits, all unset.
    ///
    /// The capacity is `word_count(bit_count) * 64`. A `bit_count` of zero
    /// yields a bitset without any words.
    ///
    /// # Errors
    /// Returns [`BitSetError::AllocationFailure`] if the word buffer cannot be
    /// allocated.
    ///
    /// # Examples
    /// ```
    /// use light_bitset::BitSet;
    ///
    /// let bitset = BitSet::new(100)?;
    /// assert_eq!(bitset.word_count(), 2);
    /// assert_eq!(bitset.capacity(), 128);
    /// # Ok::<(), light_bitset::BitSetError>(())
    /// ```
    pub fn new(bit_count: usize) -> Result<Self, BitSetError> {
        let words = word_count(bit_count);
        let mut buf = Vec::new();
        if buf.try_reserve_exact(words).is_err() {
            debug!(bit_count, words, "bitset allocation failed");
            return Err(BitSetError::AllocationFailure { words });
        }
        buf.resize(words, 0u64);
        trace!(bit_count, words, "created bitset");
        Ok(Self {
            words: buf.into_boxed_slice(),
        })
    }

    /// Returns the number of words backing this bitset.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Returns the number of addressable bits, i.e. `word_count() * 64`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.words.len() * WORD_BITS
    }

    /// Returns the underlying words, least significant word first.
    #[inline]
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Sets the bit at the given index.
    ///
    /// Setting a bit that is already set has no effect.
    ///
    /// # Errors
    /// Returns [`BitSetError::OutOfRange`] if `idx >= capacity()`.
    ///
    /// # Examples
    /// ```
    /// use light_bitset::BitSet;
    ///
    /// let mut bitset = BitSet::new(64)?;
    /// bitset.set(63)?;
    /// assert!(bitset.is_set(63)?);
    /// assert!(bitset.set(64).is_err());
    /// # Ok::<(), light_bitset::BitSetError>(())
    /// ```
    #[inline]
    pub fn set(&mut self, idx: usize) -> Result<(), BitSetError> {
        self.check_index(idx)?;
        let (word_idx, bit_idx) = Self::idxs(idx);
        self.words[word_idx] |= 1 << bit_idx;
        Ok(())
    }

    /// Sets every bit listed in `indices`.
    ///
    /// The indices are validated before anything is written, so on error the
    /// bitset is left untouched. Duplicates and ordering have no effect on the
    /// result.
    ///
    /// # Errors
    /// Returns [`BitSetError::OutOfRange`] for the first index that is
    /// `>= capacity()`.
    ///
    /// # Examples
    /// ```
    /// use light_bitset::BitSet;
    ///
    /// let mut bitset = BitSet::new(100)?;
    /// bitset.fill(&[1, 2, 3])?;
    /// assert!(bitset.is_set(2)?);
    /// assert!(!bitset.is_set(4)?);
    /// # Ok::<(), light_bitset::BitSetError>(())
    /// ```
    pub fn fill(&mut self, indices: &[usize]) -> Result<(), BitSetError> {
        for &idx in indices {
            self.check_index(idx)?;
        }
        for &idx in indices {
            let (word_idx, bit_idx) = Self::idxs(idx);
            self.words[word_idx] |= 1 << bit_idx;
        }
        trace!(count = indices.len(), "filled bitset");
        Ok(())
    }

    /// Returns `true` if the bit at the given index is set.
    ///
    /// # Errors
    /// Returns [`BitSetError::OutOfRange`] if `idx >= capacity()`.
    #[inline]
    pub fn is_set(&self, idx: usize) -> Result<bool, BitSetError> {
        self.check_index(idx)?;
        Ok(self.bit(idx))
    }

    /// Returns `true` if no bit is set in both `self` and `other`.
    ///
    /// Stops at the first pair of words that share a set bit. Two bitsets
    /// without any words are disjoint.
    ///
    /// # Errors
    /// Returns [`BitSetError::SizeMismatch`] if the bitsets don't have the same
    /// word count.
    ///
    /// # Examples
    /// ```
    /// use light_bitset::BitSet;
    ///
    /// let mut a = BitSet::new(100)?;
    /// a.fill(&[1, 2, 3, 4, 5, 6, 7, 8, 9])?;
    /// let mut b = BitSet::new(100)?;
    /// b.fill(&[10, 11, 12])?;
    /// assert!(a.is_disjoint(&b)?);
    ///
    /// b.set(9)?;
    /// assert!(!a.is_disjoint(&b)?);
    /// # Ok::<(), light_bitset::BitSetError>(())
    /// ```
    pub fn is_disjoint(&self, other: &Self) -> Result<bool, BitSetError> {
        self.check_same_size(other)?;
        for (a, b) in self.words.iter().zip(other.words.iter()) {
            if a & b != 0 {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns `true` if at least one bit is set in both `self` and `other`.
    ///
    /// Always the negation of [`is_disjoint`]. Stops at the first pair of
    /// words that share a set bit.
    ///
    /// # Errors
    /// Returns [`BitSetError::SizeMismatch`] if the bitsets don't have the same
    /// word count.
    ///
    /// # Examples
    /// ```
    /// use light_bitset::BitSet;
    ///
    /// let mut a = BitSet::new(100)?;
    /// a.fill(&[1, 2, 3, 4, 5, 6, 7, 8, 9])?;
    /// let mut b = BitSet::new(100)?;
    /// b.fill(&[9, 10, 11])?;
    /// assert!(a.not_disjoint(&b)?);
    /// # Ok::<(), light_bitset::BitSetError>(())
    /// ```
    ///
    /// [`is_disjoint`]: BitSet::is_disjoint
    pub fn not_disjoint(&self, other: &Self) -> Result<bool, BitSetError> {
        self.check_same_size(other)?;
        for (a, b) in self.words.iter().zip(other.words.iter()) {
            if a & b != 0 {
                return Ok(true);
            }
        }
        Ok(false)
    }

    #[inline]
    fn idxs(idx: usize) -> (usize, usize) {
        (idx / WORD_BITS, idx % WORD_BITS)
    }

    // `idx` must already be within capacity.
    #[inline]
    fn bit(&self, idx: usize) -> bool {
        let (word_idx, bit_idx) = Self::idxs(idx);
        self.words[word_idx] & 1 << bit_idx != 0
    }

    #[inline]
    fn check_index(&self, idx: usize) -> Result<(), BitSetError> {
        let capacity = self.capacity();
        if idx >= capacity {
            debug!(index = idx, capacity, "bit index out of bounds");
            return Err(BitSetError::OutOfRange {
                index: idx,
                capacity,
            });
        }
        Ok(())
    }

    #[inline]
    fn check_same_size(&self, other: &Self) -> Result<(), BitSetError> {
        let (left, right) = (self.word_count(), other.word_count());
        if left != right {
            debug!(left, right, "compared bitsets of different sizes");
            return Err(BitSetError::SizeMismatch { left, right });
        }
        Ok(())
    }
}

impl Debug for BitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let capacity = self.capacity();
        write!(f, "LSB -> ")?;
        for i in 0..capacity {
            if i % 8 == 0 {
                write!(f, "{i}: ")?;
            }
            write!(f, "{}", if self.bit(i) { '1' } else { '0' })?;
            if i % 8 == 7 && i < capacity - 1 {
                write!(f, " ")?;
            }
        }
        write!(f, " <- MSB")?;
        Ok(())
    }
}
