//! # bitset_compat
//!
//! A `no_std` compatible conversion between a growable bit array and its
//! little-endian byte encoding.
//!
//! ```rust
//! use bitset_compat::{BitArray, decode, encode};
//!
//! let mut bits = BitArray::new();
//! bits.set(0);
//! bits.set(15);
//!
//! let bytes = encode(&bits);
//! assert_eq!(bytes, vec![0x01, 0x80]);
//! assert_eq!(decode(&bytes), bits);
//! ```
//!
//! ## Backends
//!
//! Two implementations back the codec. [`Backend::Native`] copies whole words and is
//! picked automatically where the target supports it; [`Backend::Bitwise`] works one bit
//! at a time everywhere else. Both give the same output.
//!
//! ```rust
//! use bitset_compat::{Backend, Codec};
//!
//! let fallback = Codec::with_backend(Backend::Bitwise).unwrap();
//! let detected = Codec::new();
//!
//! let bytes = [0xDE, 0xAD, 0xBE, 0xEF];
//! assert_eq!(fallback.decode(&bytes), detected.decode(&bytes));
//! ```
//!

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub use error::CodecError;

mod bit_ops;

pub mod bit_array;
pub use bit_array::BitArray;

pub mod backend;
pub use backend::Backend;

mod bitwise;
mod native;

pub mod codec;
pub use codec::{Codec, decode, encode, encode_into, encoded_len};
