//! Word-level codec.
//!
//! The `u64` words of a [`BitArray`] are viewed directly as bytes. On a little-endian
//! target that view is exactly the little-endian bit mapping, so decode and encode are a
//! single copy. On big-endian targets the view is byte-swapped per word and this path
//! must not be selected; see [`crate::Backend::is_available`].

use crate::BitArray;
use alloc::vec;

pub(crate) fn decode(bytes: &[u8]) -> BitArray {
    let mut words = vec![0u64; bytes.len().div_ceil(8)];
    bytemuck::cast_slice_mut::<u64, u8>(&mut words)[..bytes.len()].copy_from_slice(bytes);
    BitArray::from_words(words)
}

/// `out` must be exactly `byte_len(bits.len())` long.
pub(crate) fn encode_into(bits: &BitArray, out: &mut [u8]) {
    let view = bytemuck::cast_slice::<u64, u8>(bits.words());
    out.copy_from_slice(&view[..out.len()]);
}

#[cfg(all(test, target_endian = "little"))]
mod tests {
    use super::*;
    use crate::bit_ops;
    use alloc::vec::Vec;

    fn encode(bits: &BitArray) -> Vec<u8> {
        let mut out = vec![0xAA; bit_ops::byte_len(bits.len())];
        encode_into(bits, &mut out);
        out
    }

    #[test]
    fn decode_examples() {
        assert!(decode(&[]).is_empty());
        assert_eq!(decode(&[0x03]).iter().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(decode(&[0x00, 0x80]).iter().collect::<Vec<_>>(), vec![15]);
    }

    #[test]
    fn decode_trailing_zero_bytes_trimmed() {
        let bits = decode(&[0x01, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(bits.words(), &[1]);
        assert_eq!(bits.len(), 1);
    }

    #[test]
    fn encode_examples() {
        let single = |i| [i].into_iter().collect::<BitArray>();
        assert_eq!(encode(&BitArray::new()), Vec::<u8>::new());
        assert_eq!(encode(&single(0)), vec![0x01]);
        assert_eq!(encode(&single(7)), vec![0x80]);
        assert_eq!(encode(&single(8)), vec![0x00, 0x01]);
        assert_eq!(encode(&single(64)), vec![0, 0, 0, 0, 0, 0, 0, 0, 0x01]);
    }
}
