//! Conversion between [`BitArray`] and its little-endian byte encoding.
//!
//! Bit `i` of the array maps to bit `i % 8` of byte `i / 8`. Encoding always produces the
//! shortest byte sequence that holds the highest set bit, so the result never ends in a
//! zero byte.
//!
//! # Examples
//!
//! ```rust
//! use bitset_compat::{BitArray, decode, encode};
//!
//! let bits = decode(&[0x03, 0x00, 0x80]);
//! assert_eq!(bits.iter().collect::<Vec<_>>(), vec![0, 1, 23]);
//!
//! let bits: BitArray = [0, 8].into_iter().collect();
//! assert_eq!(encode(&bits), vec![0x01, 0x01]);
//! ```
//!
//! ## Pinning a backend
//!
//! ```rust
//! use bitset_compat::{Backend, Codec};
//!
//! let codec = Codec::with_backend(Backend::Bitwise).unwrap();
//! let bits = codec.decode(&[0x80]);
//! assert_eq!(codec.encode(&bits), vec![0x80]);
//! ```

use crate::{Backend, BitArray, CodecError, bit_ops};
use alloc::vec;
use alloc::vec::Vec;
use tracing::{debug, trace};

type Result<T> = core::result::Result<T, CodecError>;

/// A codec bound to one [`Backend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codec {
    backend: Backend,
}

impl Default for Codec {
    fn default() -> Self {
        Self::new()
    }
}

impl Codec {
    /// Creates a codec using the fastest backend available here.
    pub fn new() -> Self {
        Self {
            backend: Backend::detect(),
        }
    }

    /// Creates a codec pinned to `backend`.
    ///
    /// Fails with [`CodecError::BackendUnavailable`] if this build or target cannot run it.
    pub fn with_backend(backend: Backend) -> Result<Self> {
        if !backend.is_available() {
            debug!(?backend, "rejected unavailable codec backend");
            return Err(CodecError::BackendUnavailable(backend));
        }
        trace!(?backend, "pinned codec backend");
        Ok(Self { backend })
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Decodes `bytes` into a bit array. Any input is valid.
    pub fn decode(&self, bytes: &[u8]) -> BitArray {
        trace!(backend = ?self.backend, bytes = bytes.len(), "decoding");
        self.backend.decode(bytes)
    }

    /// Encodes `bits` into a freshly allocated, minimal-length byte vector.
    pub fn encode(&self, bits: &BitArray) -> Vec<u8> {
        let mut out = vec![0u8; encoded_len(bits)];
        trace!(backend = ?self.backend, bits = bits.len(), bytes = out.len(), "encoding");
        self.backend.encode_into(bits, &mut out);
        out
    }

    /// Writes the encoding of `bits` to the front of `out` and returns its length.
    ///
    /// Bytes of `out` past the returned length are left untouched. Nothing is written if
    /// `out` is too short.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitset_compat::{BitArray, Codec, CodecError};
    ///
    /// let bits: BitArray = [3, 9].into_iter().collect();
    /// let mut buf = [0xFF; 4];
    /// let n = Codec::new().encode_into(&bits, &mut buf).unwrap();
    /// assert_eq!(&buf[..n], &[0x08, 0x02]);
    /// assert_eq!(buf[2..], [0xFF, 0xFF]);
    ///
    /// let mut small = [0u8; 1];
    /// assert_eq!(
    ///     Codec::new().encode_into(&bits, &mut small),
    ///     Err(CodecError::BufferTooSmall { needed: 2, available: 1 })
    /// );
    /// ```
    pub fn encode_into(&self, bits: &BitArray, out: &mut [u8]) -> Result<usize> {
        let needed = encoded_len(bits);
        let available = out.len();
        let Some(dst) = out.get_mut(..needed) else {
            return Err(CodecError::BufferTooSmall { needed, available });
        };
        trace!(backend = ?self.backend, bits = bits.len(), bytes = needed, "encoding into buffer");
        self.backend.encode_into(bits, dst);
        Ok(needed)
    }
}

/// Number of bytes [`encode`] produces for `bits`.
pub fn encoded_len(bits: &BitArray) -> usize {
    bit_ops::byte_len(bits.len())
}

/// Decodes `bytes` using the backend detected for this call.
pub fn decode(bytes: &[u8]) -> BitArray {
    Codec::new().decode(bytes)
}

/// Encodes `bits` using the backend detected for this call.
pub fn encode(bits: &BitArray) -> Vec<u8> {
    Codec::new().encode(bits)
}

/// Encodes `bits` into `out` using the backend detected for this call.
pub fn encode_into(bits: &BitArray, out: &mut [u8]) -> Result<usize> {
    Codec::new().encode_into(bits, out)
}
