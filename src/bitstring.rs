//! Fixed-width bitstrings with one bit per product-line system.
//!
//! The closed-form isolation strategy represents every feature as an S-bit
//! value: bit `p` tells whether system `p + 1` contains the feature. This
//! module provides the multi-word carrier for those values, so S is not
//! capped at the native word width.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{BitAnd, BitOr};

/// An immutable-width bitstring backed by a vector of u64 words.
///
/// The width is fixed at construction; bits past the width never exist,
/// which makes complement well-defined (the top word is masked).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bitstring {
    /// Storage: each u64 holds 64 bits, least significant word first.
    words: Vec<u64>,
    /// Width in bits.
    bits: usize,
}

impl Bitstring {
    /// Number of bits per word.
    const BITS_PER_WORD: usize = 64;

    /// Creates an all-zero bitstring of the given width.
    pub fn zeros(bits: usize) -> Self {
        let num_words = (bits + Self::BITS_PER_WORD - 1) / Self::BITS_PER_WORD;
        Self {
            words: vec![0; num_words],
            bits,
        }
    }

    /// Creates an all-one bitstring of the given width.
    pub fn ones(bits: usize) -> Self {
        Self::zeros(bits).complement()
    }

    /// Returns the width in bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits
    }

    /// Returns true for a zero-width bitstring.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns true if no bit is set.
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Returns the number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    #[inline]
    fn word_and_bit(index: usize) -> (usize, usize) {
        (index / Self::BITS_PER_WORD, index % Self::BITS_PER_WORD)
    }

    /// Mask of valid bits for the top word.
    fn top_word_mask(&self) -> u64 {
        let rem = self.bits % Self::BITS_PER_WORD;
        if rem == 0 {
            u64::MAX
        } else {
            (1u64 << rem) - 1
        }
    }

    /// Returns the bit at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        assert!(index < self.bits, "bit index {} out of range", index);
        let (word_idx, bit_idx) = Self::word_and_bit(index);
        (self.words[word_idx] >> bit_idx) & 1 != 0
    }

    /// Sets the bit at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn set(&mut self, index: usize) {
        assert!(index < self.bits, "bit index {} out of range", index);
        let (word_idx, bit_idx) = Self::word_and_bit(index);
        self.words[word_idx] |= 1u64 << bit_idx;
    }

    /// Returns the bitwise complement, masked to the width.
    pub fn complement(&self) -> Self {
        let mut words: Vec<u64> = self.words.iter().map(|w| !w).collect();
        if let Some(top) = words.last_mut() {
            *top &= self.top_word_mask();
        }
        Self {
            words,
            bits: self.bits,
        }
    }

    /// Returns an iterator over the indices of set bits, in ascending order.
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.bits).filter(move |&i| self.get(i))
    }
}

impl BitAnd for &Bitstring {
    type Output = Bitstring;

    fn bitand(self, rhs: Self) -> Bitstring {
        assert_eq!(self.bits, rhs.bits, "width mismatch");
        Bitstring {
            words: self
                .words
                .iter()
                .zip(&rhs.words)
                .map(|(a, b)| a & b)
                .collect(),
            bits: self.bits,
        }
    }
}

impl BitOr for &Bitstring {
    type Output = Bitstring;

    fn bitor(self, rhs: Self) -> Bitstring {
        assert_eq!(self.bits, rhs.bits, "width mismatch");
        Bitstring {
            words: self
                .words
                .iter()
                .zip(&rhs.words)
                .map(|(a, b)| a | b)
                .collect(),
            bits: self.bits,
        }
    }
}

impl Ord for Bitstring {
    /// Compares bitstrings by numeric value (most significant word first).
    fn cmp(&self, other: &Self) -> Ordering {
        debug_assert_eq!(self.bits, other.bits);
        for (a, b) in self.words.iter().rev().zip(other.words.iter().rev()) {
            match a.cmp(b) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Bitstring {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Bitstring {
    /// Renders the bitstring MSB-first: the leftmost character is the
    /// highest-numbered system.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..self.bits).rev() {
            write!(f, "{}", if self.get(i) { '1' } else { '0' })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_ones() {
        let z = Bitstring::zeros(10);
        assert_eq!(z.len(), 10);
        assert!(z.is_zero());
        assert_eq!(z.count_ones(), 0);

        let o = Bitstring::ones(10);
        assert_eq!(o.count_ones(), 10);
        assert!(!o.is_zero());
    }

    #[test]
    fn test_get_set() {
        let mut b = Bitstring::zeros(70);
        b.set(0);
        b.set(69);
        assert!(b.get(0));
        assert!(!b.get(1));
        assert!(b.get(69));
        assert_eq!(b.count_ones(), 2);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_out_of_range() {
        Bitstring::zeros(4).get(4);
    }

    #[test]
    fn test_complement_masks_width() {
        let mut b = Bitstring::zeros(4);
        b.set(1);
        let c = b.complement();
        assert!(c.get(0));
        assert!(!c.get(1));
        assert!(c.get(2));
        assert!(c.get(3));
        assert_eq!(c.count_ones(), 3);
    }

    #[test]
    fn test_complement_involutive() {
        let mut b = Bitstring::zeros(100);
        for i in [0, 3, 63, 64, 99] {
            b.set(i);
        }
        assert_eq!(b.complement().complement(), b);
    }

    #[test]
    fn test_and_or() {
        let mut a = Bitstring::zeros(8);
        a.set(0);
        a.set(2);
        let mut b = Bitstring::zeros(8);
        b.set(2);
        b.set(5);

        let and = &a & &b;
        assert_eq!(and.iter_ones().collect::<Vec<_>>(), vec![2]);
        let or = &a | &b;
        assert_eq!(or.iter_ones().collect::<Vec<_>>(), vec![0, 2, 5]);
    }

    #[test]
    fn test_ordering_is_numeric() {
        let mut a = Bitstring::zeros(8);
        a.set(7);
        let mut b = Bitstring::zeros(8);
        for i in 0..7 {
            b.set(i);
        }
        // 0b10000000 > 0b01111111
        assert!(a > b);
    }

    #[test]
    fn test_display_msb_first() {
        let mut b = Bitstring::zeros(4);
        b.set(0);
        b.set(3);
        assert_eq!(b.to_string(), "1001");
    }
}
