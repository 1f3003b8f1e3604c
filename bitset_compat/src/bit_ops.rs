//! Index arithmetic shared by the bit array and both codec backends.

pub const WORD_BITS: usize = u64::BITS as usize;

/// Number of bytes needed to hold `bits` bits.
#[inline(always)]
pub const fn byte_len(bits: usize) -> usize {
    bits.div_ceil(8)
}

/// Number of words needed to hold `bits` bits.
#[inline(always)]
pub const fn word_len(bits: usize) -> usize {
    bits.div_ceil(WORD_BITS)
}

/// Byte index and in-byte mask for bit `pos` under the little-endian mapping.
#[inline(always)]
pub const fn byte_location(pos: usize) -> (usize, u8) {
    (pos / 8, 1 << (pos % 8))
}

/// Word index and in-word mask for bit `pos`.
#[inline(always)]
pub const fn word_location(pos: usize) -> (usize, u64) {
    (pos / WORD_BITS, 1 << (pos % WORD_BITS))
}

/// One past the highest set bit of `words`, or zero if none are set.
#[inline]
pub fn bit_len(words: &[u64]) -> usize {
    match words.iter().rposition(|&w| w != 0) {
        Some(last) => last * WORD_BITS + (WORD_BITS - words[last].leading_zeros() as usize),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locations() {
        assert_eq!(byte_location(0), (0, 0x01));
        assert_eq!(byte_location(7), (0, 0x80));
        assert_eq!(byte_location(8), (1, 0x01));
        assert_eq!(word_location(63), (0, 1 << 63));
        assert_eq!(word_location(64), (1, 1));
    }

    #[test]
    fn lengths() {
        assert_eq!(byte_len(0), 0);
        assert_eq!(byte_len(1), 1);
        assert_eq!(byte_len(8), 1);
        assert_eq!(byte_len(9), 2);
        assert_eq!(word_len(64), 1);
        assert_eq!(word_len(65), 2);
    }

    #[test]
    fn bit_len_ignores_trailing_zero_words() {
        assert_eq!(bit_len(&[]), 0);
        assert_eq!(bit_len(&[0, 0]), 0);
        assert_eq!(bit_len(&[1]), 1);
        assert_eq!(bit_len(&[0x80, 0, 0]), 8);
        assert_eq!(bit_len(&[0, 1]), 65);
        assert_eq!(bit_len(&[0, 1 << 63]), 128);
    }
}
