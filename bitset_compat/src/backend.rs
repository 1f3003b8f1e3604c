//! Selection between the word-level and bit-by-bit codecs.

use crate::{BitArray, bitwise, native};
use tracing::trace;

/// Implementation used to convert between [`BitArray`] and bytes.
///
/// Both backends produce identical results for every input; they differ only in speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Copies whole words through a zero-copy byte view. Requires the `native` feature
    /// and a little-endian target.
    Native,
    /// Walks the input one bit at a time. Always available.
    Bitwise,
}

impl Backend {
    /// Every backend, fastest first.
    pub const ALL: [Backend; 2] = [Backend::Native, Backend::Bitwise];

    /// Picks the fastest backend available on this build and target.
    ///
    /// ```
    /// use bitset_compat::Backend;
    ///
    /// assert!(Backend::detect().is_available());
    /// ```
    pub fn detect() -> Self {
        let backend = if Backend::Native.is_available() {
            Backend::Native
        } else {
            Backend::Bitwise
        };
        trace!(?backend, "detected codec backend");
        backend
    }

    pub fn is_available(self) -> bool {
        match self {
            Backend::Native => cfg!(all(feature = "native", target_endian = "little")),
            Backend::Bitwise => true,
        }
    }

    pub(crate) fn decode(self, bytes: &[u8]) -> BitArray {
        debug_assert!(self.is_available());
        match self {
            Backend::Native => native::decode(bytes),
            Backend::Bitwise => bitwise::decode(bytes),
        }
    }

    /// `out` must be exactly `encoded_len(bits)` long.
    pub(crate) fn encode_into(self, bits: &BitArray, out: &mut [u8]) {
        debug_assert!(self.is_available());
        match self {
            Backend::Native => native::encode_into(bits, out),
            Backend::Bitwise => bitwise::encode_into(bits, out),
        }
    }
}
