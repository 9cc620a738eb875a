//! Single-bit positions within a [`Word`].

use crate::word::{WORD_BITS, Word};

/// The bit a record field occupies in an encoded [`Word`].
///
/// Field `i` of a record always maps to `Bit::new(i)`.
///
/// # Example
///
/// ```
/// use named_flags::Bit;
///
/// const FRODO: Bit = Bit::new(0);
/// const SAM: Bit = Bit::new(1);
///
/// let word = SAM.write(FRODO.write(0, true), true);
/// assert_eq!(word, 0b11);
///
/// let word = FRODO.write(word, false);
/// assert!(!FRODO.is_set(word));
/// assert!(SAM.is_set(word));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bit {
    index: u32,
    mask: Word,
}

impl Bit {
    /// Creates the bit at position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= WORD_BITS`.
    #[inline]
    pub const fn new(index: usize) -> Self {
        assert!(index < WORD_BITS, "bit position exceeds word width");
        Self {
            index: index as u32,
            mask: 1 << index,
        }
    }

    /// Bit position, equal to the field's declaration index.
    #[inline]
    pub const fn index(self) -> usize {
        self.index as usize
    }

    /// Mask with a single 1 at this position.
    #[inline]
    pub const fn mask(self) -> Word {
        self.mask
    }

    /// Returns true if this bit is set in `word`.
    #[inline]
    pub const fn is_set(self, word: Word) -> bool {
        (word & self.mask) != 0
    }

    /// Returns `word` with this bit forced to `value`.
    ///
    /// Both branches write, so the previous state of the bit never leaks
    /// through.
    #[inline]
    pub const fn write(self, word: Word, value: bool) -> Word {
        if value {
            word | self.mask
        } else {
            word & !self.mask
        }
    }
}
