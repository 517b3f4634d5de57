//! Constant-time word operations used by table lookups and field arithmetic

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// All-ones if `slot == index`, all-zeros otherwise.
///
/// Computed as `((slot ^ index) - 1) >> 63` with an arithmetic shift, so the
/// result depends only on arithmetic, never on a branch. Both arguments must be
/// below `2^63`, which every table size in this workspace satisfies.
#[inline(always)]
pub fn ct_index_mask(slot: usize, index: usize) -> u64 {
    let diff = (slot ^ index) as u64 as i64;
    (diff.wrapping_sub(1) >> 63) as u64
}

/// XOR `src & mask` into `acc`, word by word.
///
/// Every word of `src` is read regardless of `mask`.
#[inline(always)]
pub fn ct_xor_masked(acc: &mut [u64], src: &[u64], mask: u64) {
    debug_assert_eq!(acc.len(), src.len());
    for (a, s) in acc.iter_mut().zip(src.iter()) {
        *a ^= s & mask;
    }
}

/// Select `b` into `out` when `choice` is set, otherwise `a`.
#[inline(always)]
pub fn ct_select_words(out: &mut [u64], a: &[u64], b: &[u64], choice: Choice) {
    debug_assert!(out.len() == a.len() && a.len() == b.len());
    for ((o, x), y) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
        *o = u64::conditional_select(x, y, choice);
    }
}

/// Constant-time equality of two equal-length word slices
#[inline(always)]
pub fn ct_words_eq(a: &[u64], b: &[u64]) -> Choice {
    if a.len() != b.len() {
        return Choice::from(0);
    }
    a.ct_eq(b)
}

/// Constant-time test that every word of `a` is zero
#[inline(always)]
pub fn ct_words_are_zero(a: &[u64]) -> Choice {
    let acc = a.iter().fold(0u64, |acc, &w| acc | w);
    acc.ct_eq(&0)
}
