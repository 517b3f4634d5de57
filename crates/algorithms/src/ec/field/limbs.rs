//! Fixed-capacity multi-word integers
//!
//! Every field element is stored in a [`Words`] array of little-endian 64-bit
//! words. Only the first `n` words are significant for a field of `n` words;
//! the rest are always zero.

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use num_bigint::BigUint;

/// Maximum number of 64-bit words in a field element (covers 571 bits)
pub const MAX_WORDS: usize = 9;

/// Capacity of a double-width intermediate (products plus reduction slack)
pub const WIDE_WORDS: usize = 2 * MAX_WORDS + 2;

/// Storage of one field element
pub type Words = [u64; MAX_WORDS];

/// Storage of an unreduced product
pub type WideWords = [u64; WIDE_WORDS];

/// The all-zero word array
pub const ZERO: Words = [0u64; MAX_WORDS];

/// Word array holding the integer one
pub const ONE: Words = {
    let mut w = [0u64; MAX_WORDS];
    w[0] = 1;
    w
};

#[inline(always)]
pub(crate) fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let t = (a as u128) + (b as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

#[inline(always)]
pub(crate) fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let t = (a as u128).wrapping_sub((b as u128) + (borrow as u128));
    (t as u64, (t >> 127) as u64)
}

#[inline(always)]
pub(crate) fn mac(acc: u64, a: u64, b: u64, carry: u64) -> (u64, u64) {
    let t = (acc as u128) + (a as u128) * (b as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

/// `out = a + b` over `out.len()` words, returns the carry
pub(crate) fn add_into(out: &mut [u64], a: &[u64], b: &[u64]) -> u64 {
    let mut carry = 0u64;
    for ((o, &x), &y) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
        let (s, c) = adc(x, y, carry);
        *o = s;
        carry = c;
    }
    carry
}

/// `out = a - b` over `out.len()` words, returns the borrow
pub(crate) fn sub_into(out: &mut [u64], a: &[u64], b: &[u64]) -> u64 {
    let mut borrow = 0u64;
    for ((o, &x), &y) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
        let (d, bw) = sbb(x, y, borrow);
        *o = d;
        borrow = bw;
    }
    borrow
}

/// Schoolbook product `out = a * b`; `out` must hold `a.len() + b.len()` words
pub(crate) fn mul_into(out: &mut [u64], a: &[u64], b: &[u64]) {
    debug_assert!(out.len() >= a.len() + b.len());
    out.iter_mut().for_each(|w| *w = 0);
    for (i, &ai) in a.iter().enumerate() {
        let mut carry = 0u64;
        for (j, &bj) in b.iter().enumerate() {
            let (lo, hi) = mac(out[i + j], ai, bj, carry);
            out[i + j] = lo;
            carry = hi;
        }
        out[i + b.len()] = carry;
    }
}

/// `out = src >> bits`, filling with zeros
pub(crate) fn shr_into(out: &mut [u64], src: &[u64], bits: usize) {
    let word_shift = bits / 64;
    let bit_shift = bits % 64;
    for (i, o) in out.iter_mut().enumerate() {
        let lo = src.get(i + word_shift).copied().unwrap_or(0);
        let hi = src.get(i + word_shift + 1).copied().unwrap_or(0);
        *o = if bit_shift == 0 {
            lo
        } else {
            (lo >> bit_shift) | (hi << (64 - bit_shift))
        };
    }
}

/// Clear every bit at position `bits` and above
pub(crate) fn truncate_bits(w: &mut [u64], bits: usize) {
    for (i, word) in w.iter_mut().enumerate() {
        let lo = i * 64;
        if lo >= bits {
            *word = 0;
        } else if bits - lo < 64 {
            *word &= (1u64 << (bits - lo)) - 1;
        }
    }
}

/// Value of bit `i`
#[inline(always)]
pub(crate) fn bit(w: &[u64], i: usize) -> bool {
    w.get(i / 64).map_or(false, |word| (word >> (i % 64)) & 1 == 1)
}

/// Position of the highest set bit plus one, zero for zero
pub(crate) fn bit_length(w: &[u64]) -> usize {
    for i in (0..w.len()).rev() {
        if w[i] != 0 {
            return i * 64 + (64 - w[i].leading_zeros() as usize);
        }
    }
    0
}

/// Copy a big integer into a word array, `None` if it needs more than `n` words
pub(crate) fn from_biguint(v: &BigUint, n: usize) -> Option<Words> {
    let bytes = v.to_bytes_le();
    if bytes.len() > n * 8 {
        return None;
    }
    let mut padded = [0u8; MAX_WORDS * 8];
    padded[..bytes.len()].copy_from_slice(&bytes);
    let mut out = ZERO;
    LittleEndian::read_u64_into(&padded, &mut out);
    Some(out)
}

/// Interpret a word slice as an unsigned integer
pub(crate) fn to_biguint(w: &[u64]) -> BigUint {
    let mut bytes = alloc::vec![0u8; w.len() * 8];
    LittleEndian::write_u64_into(w, &mut bytes);
    BigUint::from_bytes_le(&bytes)
}

/// Big-endian encoding of the low `len` bytes of `w`
pub(crate) fn to_be_bytes(w: &Words, len: usize) -> alloc::vec::Vec<u8> {
    let mut full = [0u8; MAX_WORDS * 8];
    for (i, word) in w.iter().rev().enumerate() {
        BigEndian::write_u64(&mut full[i * 8..i * 8 + 8], *word);
    }
    full[MAX_WORDS * 8 - len..].to_vec()
}

/// Parse a big-endian byte string of at most `MAX_WORDS * 8` bytes
pub(crate) fn from_be_bytes(bytes: &[u8]) -> Option<Words> {
    if bytes.len() > MAX_WORDS * 8 {
        return None;
    }
    let mut full = [0u8; MAX_WORDS * 8];
    full[MAX_WORDS * 8 - bytes.len()..].copy_from_slice(bytes);
    let mut out = ZERO;
    for (i, word) in out.iter_mut().enumerate() {
        let start = (MAX_WORDS - 1 - i) * 8;
        *word = BigEndian::read_u64(&full[start..start + 8]);
    }
    Some(out)
}
