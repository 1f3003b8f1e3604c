//! Growable set of bit positions backed by `u64` words.
//!
//! # Examples
//!
//! ```rust
//! use bitset_compat::BitArray;
//!
//! let mut bits = BitArray::new();
//! bits.set(3);
//! bits.set(70);
//!
//! assert!(bits.get(3));
//! assert!(!bits.get(4));
//! assert_eq!(bits.len(), 71);
//! assert_eq!(bits.count_ones(), 2);
//!
//! bits.clear(70);
//! assert_eq!(bits.len(), 4);
//! ```

use crate::bit_ops::{self, WORD_BITS};
use alloc::vec::Vec;

/// A set of non-negative bit indices.
///
/// The word vector never ends in a zero word, so equal sets compare equal and
/// [`BitArray::len`] only has to look at the last word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitArray {
    words: Vec<u64>,
}

impl BitArray {
    /// Creates an empty bit array.
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Creates an empty bit array with room for `bits` bits before reallocating.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            words: Vec::with_capacity(bit_ops::word_len(bits)),
        }
    }

    /// Builds a bit array from raw words, where bit `i` is bit `i % 64` of word `i / 64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitset_compat::BitArray;
    ///
    /// let bits = BitArray::from_words(vec![0b101, 0, 0]);
    /// assert_eq!(bits.iter().collect::<Vec<_>>(), vec![0, 2]);
    /// assert_eq!(bits.words(), &[0b101]);
    /// ```
    pub fn from_words(words: Vec<u64>) -> Self {
        let mut bits = Self { words };
        bits.trim();
        bits
    }

    /// Decodes a little-endian byte sequence. See [`crate::decode`].
    pub fn from_bytes(bytes: &[u8]) -> Self {
        crate::decode(bytes)
    }

    /// Encodes into the minimal little-endian byte sequence. See [`crate::encode`].
    pub fn to_bytes(&self) -> Vec<u8> {
        crate::encode(self)
    }

    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Sets bit `index`, growing the array if needed.
    pub fn set(&mut self, index: usize) {
        let (word, mask) = bit_ops::word_location(index);
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        self.words[word] |= mask;
    }

    /// Clears bit `index`. Clearing a bit past [`BitArray::len`] is a no-op.
    pub fn clear(&mut self, index: usize) {
        let (word, mask) = bit_ops::word_location(index);
        if let Some(w) = self.words.get_mut(word) {
            *w &= !mask;
            self.trim();
        }
    }

    pub fn set_value(&mut self, index: usize, value: bool) {
        if value {
            self.set(index);
        } else {
            self.clear(index);
        }
    }

    pub fn toggle(&mut self, index: usize) {
        self.set_value(index, !self.get(index));
    }

    /// Returns whether bit `index` is set. Bits past the end read as clear.
    pub fn get(&self, index: usize) -> bool {
        let (word, mask) = bit_ops::word_location(index);
        self.words.get(word).is_some_and(|&w| w & mask != 0)
    }

    /// Effective length: one past the highest set bit, or zero if empty.
    pub fn len(&self) -> usize {
        bit_ops::bit_len(&self.words)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Clears every bit. Keeps the allocation.
    pub fn clear_all(&mut self) {
        self.words.clear();
    }

    /// Iterates over the set bit indices in ascending order.
    pub fn iter(&self) -> Ones<'_> {
        Ones {
            words: &self.words,
            index: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }

    fn trim(&mut self) {
        while self.words.last() == Some(&0) {
            self.words.pop();
        }
    }
}

pub struct Ones<'a> {
    words: &'a [u64],
    index: usize,
    current: u64,
}

impl Iterator for Ones<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current == 0 {
            self.index += 1;
            self.current = *self.words.get(self.index)?;
        }
        let bit = self.current.trailing_zeros() as usize;
        self.current &= self.current - 1;
        Some(self.index * WORD_BITS + bit)
    }
}

impl<'a> IntoIterator for &'a BitArray {
    type Item = usize;
    type IntoIter = Ones<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<usize> for BitArray {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut bits = BitArray::new();
        bits.extend(iter);
        bits
    }
}

impl Extend<usize> for BitArray {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for index in iter {
            self.set(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn set_get_clear() {
        let mut bits = BitArray::new();
        assert!(bits.is_empty());
        assert_eq!(bits.len(), 0);

        bits.set(0);
        bits.set(65);
        assert!(bits.get(0));
        assert!(bits.get(65));
        assert!(!bits.get(64));
        assert!(!bits.get(10_000));
        assert_eq!(bits.len(), 66);
        assert_eq!(bits.words().len(), 2);

        bits.clear(65);
        assert_eq!(bits.len(), 1);
        assert_eq!(bits.words().len(), 1);

        bits.clear(0);
        assert!(bits.is_empty());
        assert_eq!(bits, BitArray::new());
    }

    #[test]
    fn clear_past_end_is_noop() {
        let mut bits: BitArray = [1, 2].into_iter().collect();
        bits.clear(500);
        assert_eq!(bits.iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn toggle_and_set_value() {
        let mut bits = BitArray::new();
        bits.toggle(9);
        assert!(bits.get(9));
        bits.toggle(9);
        assert!(!bits.get(9));
        bits.set_value(3, true);
        bits.set_value(4, false);
        assert_eq!(bits.iter().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn iter_ascending_across_words() {
        let bits: BitArray = [200, 0, 63, 64, 128, 5].into_iter().collect();
        assert_eq!(
            bits.iter().collect::<Vec<_>>(),
            vec![0, 5, 63, 64, 128, 200]
        );
        assert_eq!(bits.count_ones(), 6);
    }

    #[test]
    fn iter_skips_zero_words() {
        let bits = BitArray::from_words(vec![0, 0, 1 << 3]);
        assert_eq!(bits.iter().collect::<Vec<_>>(), vec![131]);
    }

    #[test]
    fn equality_ignores_history() {
        let mut a = BitArray::new();
        a.set(1000);
        a.set(2);
        a.clear(1000);
        let b: BitArray = [2].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn clear_all_empties() {
        let mut bits: BitArray = (0..100).collect();
        bits.clear_all();
        assert!(bits.is_empty());
        assert_eq!(bits.iter().next(), None);
    }

    #[test]
    fn bytes_roundtrip() {
        let bits: BitArray = [0, 9, 17].into_iter().collect();
        let bytes = bits.to_bytes();
        assert_eq!(bytes, vec![0x01, 0x02, 0x02]);
        assert_eq!(BitArray::from_bytes(&bytes), bits);
    }
}
