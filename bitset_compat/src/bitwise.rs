//! Manual bit-by-bit codec. Works on every target.

use crate::BitArray;
use crate::bit_ops;

pub(crate) fn decode(bytes: &[u8]) -> BitArray {
    let total_bits = bytes.len() * 8;
    let mut bits = BitArray::with_capacity(total_bits);

    for i in 0..total_bits {
        let (byte, mask) = bit_ops::byte_location(i);
        if bytes[byte] & mask != 0 {
            bits.set(i);
        }
    }

    bits
}

/// `out` must be exactly `byte_len(bits.len())` long.
pub(crate) fn encode_into(bits: &BitArray, out: &mut [u8]) {
    let len = bits.len();
    debug_assert_eq!(out.len(), bit_ops::byte_len(len));
    out.fill(0);

    for i in 0..len {
        if bits.get(i) {
            let (byte, mask) = bit_ops::byte_location(i);
            out[byte] |= mask;
        }
    }
}
