//! Native word the flags are packed into.

/// Unsigned integer type every bitmask is encoded as.
///
/// Matches the host's native word, so a record may hold at most
/// [`WORD_BITS`] flags: 64 on 64-bit targets, 32 on 32-bit targets.
pub type Word = usize;

/// Bit width of [`Word`]; the upper bound on a record's field count.
pub const WORD_BITS: usize = Word::BITS as usize;

/// Mask with the low `count` bits set.
///
/// Saturates at [`Word::MAX`] once `count` reaches [`WORD_BITS`].
///
/// ```
/// use named_flags::{low_mask, WORD_BITS};
///
/// assert_eq!(low_mask(0), 0);
/// assert_eq!(low_mask(2), 0b11);
/// assert_eq!(low_mask(WORD_BITS), usize::MAX);
/// ```
#[inline]
pub const fn low_mask(count: usize) -> Word {
    if count >= WORD_BITS {
        Word::MAX
    } else {
        (1 << count) - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_bits_matches_pointer_width() {
        assert_eq!(WORD_BITS, core::mem::size_of::<usize>() * 8);
    }

    #[test]
    fn low_mask_counts() {
        assert_eq!(low_mask(1), 1);
        assert_eq!(low_mask(8), 0xFF);
        assert_eq!(low_mask(WORD_BITS - 1), Word::MAX >> 1);
        assert_eq!(low_mask(WORD_BITS + 5), Word::MAX);
    }
}
