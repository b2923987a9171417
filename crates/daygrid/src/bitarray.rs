//! Fixed-length bit array backing a daily schedule.
//!
//! Bits are stored in `u32` words, most-significant bit first, so word `i`
//! rendered as 8 hex digits is exactly wire chunk `i` (see [`crate::codec`]).
//! Index 0 is the most significant bit of the first word; the same ordering
//! is used by the codec and the range scanner.

use crate::error::{DaygridError, Result};

const WORD_BITS: usize = 32;

/// Fixed-size bit array. Never resized after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitArray {
    size: usize,
    words: Vec<u32>,
}

impl BitArray {
    /// Create an all-zero bit array of `size` bits.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            words: vec![0; size.div_ceil(WORD_BITS)],
        }
    }

    /// Parse a string of `'0'`/`'1'` characters; its length becomes `size`.
    ///
    /// # Errors
    /// Returns `DaygridError::Decode` if any character is not a binary digit.
    pub fn from_bit_string(bits: &str) -> Result<Self> {
        let mut array = Self::new(bits.len());
        for (index, ch) in bits.chars().enumerate() {
            match ch {
                '0' => {}
                '1' => array.set(index, true),
                other => {
                    return Err(DaygridError::Decode(format!(
                        "bit string contains non-binary character {other:?} at position {index}"
                    )))
                }
            }
        }
        Ok(array)
    }

    /// Number of bits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Get the bit at `index`.
    ///
    /// # Panics
    /// Panics if `index >= len()`. An out-of-range index is a programming
    /// error, not user input.
    #[must_use]
    pub fn get(&self, index: usize) -> bool {
        assert!(index < self.size, "bit index {index} out of range 0..{}", self.size);
        let word = self.words[index / WORD_BITS];
        let mask = 1u32 << (WORD_BITS - 1 - index % WORD_BITS);
        word & mask != 0
    }

    /// Set the bit at `index` to `value`.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    pub fn set(&mut self, index: usize, value: bool) {
        assert!(index < self.size, "bit index {index} out of range 0..{}", self.size);
        let word = &mut self.words[index / WORD_BITS];
        let mask = 1u32 << (WORD_BITS - 1 - index % WORD_BITS);
        if value {
            *word |= mask;
        } else {
            *word &= !mask;
        }
    }

    /// Render as a string of `'0'`/`'1'`, bit 0 first, length exactly `len()`.
    #[must_use]
    pub fn to_bit_string(&self) -> String {
        (0..self.size)
            .map(|index| if self.get(index) { '1' } else { '0' })
            .collect()
    }
}
