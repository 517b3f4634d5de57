//! Arithmetic in GF(2^m) with a polynomial basis
//!
//! Elements are bit strings of degree below m, packed little-endian into
//! 64-bit words. Products are reduced word by word with the trinomial or
//! pentanomial `x^m + x^k3 + x^k2 + x^k1 + 1`; this needs `m - k_max >= 64` so
//! folding one word never refills a word that has already been cleared.

use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};

use super::limbs::{self, Words, WideWords, MAX_WORDS, WIDE_WORDS, ZERO};
use super::FieldOps;
use crate::error::{validate, Error, Result};

/// Scratch polynomial wide enough to hold the reduction polynomial itself
type Poly = [u64; MAX_WORDS + 1];

/// The binary field GF(2^m)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryField {
    m: usize,
    ks: [usize; 3],
    k_count: usize,
    words: usize,
}

impl BinaryField {
    /// Build GF(2^m) with reduction terms `ks` (one for a trinomial, three
    /// for a pentanomial, ascending).
    pub fn new(m: usize, ks: &[usize]) -> Result<Self> {
        validate::parameter(m > 1 && m < MAX_WORDS * 64, "m", "degree out of supported range")?;
        validate::parameter(
            ks.len() == 1 || ks.len() == 3,
            "ks",
            "expected a trinomial or pentanomial",
        )?;
        validate::parameter(ks[0] > 0, "ks", "reduction terms must be positive")?;
        validate::parameter(
            ks.windows(2).all(|w| w[0] < w[1]),
            "ks",
            "reduction terms must be strictly ascending",
        )?;
        let k_max = ks[ks.len() - 1];
        validate::parameter(k_max < m, "ks", "reduction term not below the degree")?;
        validate::parameter(
            m - k_max >= 64,
            "ks",
            "highest reduction term too close to the degree",
        )?;

        let mut stored = [0usize; 3];
        stored[..ks.len()].copy_from_slice(ks);
        Ok(Self {
            m,
            ks: stored,
            k_count: ks.len(),
            words: (m + 63) / 64,
        })
    }

    /// Field degree m
    pub fn degree(&self) -> usize {
        self.m
    }

    /// Middle terms of the reduction polynomial, ascending
    pub fn reduction_terms(&self) -> &[usize] {
        &self.ks[..self.k_count]
    }

    /// Whether the reduction polynomial is a trinomial
    pub fn is_trinomial(&self) -> bool {
        self.k_count == 1
    }

    fn reduce_word(&self, z: &mut WideWords, bit: usize, word: u64) {
        let offset = bit - self.m;
        for &k in self.reduction_terms().iter().rev() {
            flip_word(z, offset + k, word);
        }
        flip_word(z, offset, word);
    }

    /// Reduce `z` (degree below 2m - 1) in place modulo the field polynomial
    fn reduce(&self, z: &mut WideWords) -> Words {
        let to_pos = self.m / 64;
        let partial = self.m % 64;

        let mut len = 2 * self.words;
        while len > to_pos + 1 {
            len -= 1;
            let word = z[len];
            z[len] = 0;
            self.reduce_word(z, len * 64, word);
        }

        let word = z[to_pos] >> partial;
        z[to_pos] ^= word << partial;
        self.reduce_word(z, self.m, word);

        let mut out = ZERO;
        out[..self.words].copy_from_slice(&z[..self.words]);
        out
    }

    /// Tr(a) = a + a^2 + ... + a^(2^(m-1)), always 0 or 1
    pub fn trace(&self, a: &Words) -> u8 {
        let mut t = *a;
        let mut acc = *a;
        for _ in 1..self.m {
            t = self.square(&t);
            acc = self.add(&acc, &t);
        }
        (acc[0] & 1) as u8
    }

    /// H(a) = sum of a^(4^i) for i in 0..=(m-1)/2; odd m only.
    ///
    /// For Tr(a) = 0, z = H(a) solves z^2 + z = a.
    pub fn half_trace(&self, a: &Words) -> Result<Words> {
        if self.m % 2 == 0 {
            return Err(Error::NotImplemented {
                feature: "half-trace over even degree",
            });
        }
        let mut t = *a;
        let mut acc = *a;
        for _ in 0..(self.m - 1) / 2 {
            t = self.square_pow(&t, 2);
            acc = self.add(&acc, &t);
        }
        Ok(acc)
    }

    fn modulus_poly(&self) -> Poly {
        let mut f = [0u64; MAX_WORDS + 1];
        f[self.m / 64] |= 1u64 << (self.m % 64);
        for &k in self.reduction_terms() {
            f[k / 64] |= 1u64 << (k % 64);
        }
        f[0] |= 1;
        f
    }
}

/// `buf ^= word << bit`, spilling into the next word when unaligned
#[inline(always)]
fn flip_word(buf: &mut WideWords, bit: usize, word: u64) {
    let n = bit / 64;
    let shift = bit % 64;
    if shift == 0 {
        buf[n] ^= word;
    } else {
        buf[n] ^= word << shift;
        buf[n + 1] ^= word >> (64 - shift);
    }
}

/// Carry-less 64x64 -> 128 product without data-dependent branches
#[inline(always)]
fn clmul64(a: u64, b: u64) -> (u64, u64) {
    let mut lo = a & 0u64.wrapping_sub(b & 1);
    let mut hi = 0u64;
    for i in 1..64 {
        let mask = 0u64.wrapping_sub((b >> i) & 1);
        lo ^= (a << i) & mask;
        hi ^= (a >> (64 - i)) & mask;
    }
    (lo, hi)
}

/// Interleave the 32 bits of `x` with zeros
#[inline(always)]
fn spread32(x: u64) -> u64 {
    let mut x = x & 0xFFFF_FFFF;
    x = (x | (x << 16)) & 0x0000_FFFF_0000_FFFF;
    x = (x | (x << 8)) & 0x00FF_00FF_00FF_00FF;
    x = (x | (x << 4)) & 0x0F0F_0F0F_0F0F_0F0F;
    x = (x | (x << 2)) & 0x3333_3333_3333_3333;
    (x | (x << 1)) & 0x5555_5555_5555_5555
}

fn poly_degree(p: &Poly) -> isize {
    limbs::bit_length(p) as isize - 1
}

/// `dst ^= src << shift`
fn poly_xor_shifted(dst: &mut Poly, src: &Poly, shift: usize) {
    let mut shifted = [0u64; MAX_WORDS + 1];
    let word_shift = shift / 64;
    let bit_shift = shift % 64;
    for i in word_shift..shifted.len() {
        let lo = src[i - word_shift];
        let carry = if bit_shift == 0 || i == word_shift {
            0
        } else {
            src[i - word_shift - 1] >> (64 - bit_shift)
        };
        shifted[i] = (lo << bit_shift) | carry;
    }
    for (d, s) in dst.iter_mut().zip(shifted.iter()) {
        *d ^= s;
    }
}

impl FieldOps for BinaryField {
    fn words(&self) -> usize {
        self.words
    }

    fn bits(&self) -> usize {
        self.m
    }

    fn from_biguint(&self, v: &BigUint) -> Option<Words> {
        if v.bits() as usize > self.m {
            return None;
        }
        limbs::from_biguint(v, self.words)
    }

    fn add(&self, a: &Words, b: &Words) -> Words {
        let mut out = ZERO;
        for (o, (x, y)) in out.iter_mut().zip(a.iter().zip(b.iter())) {
            *o = x ^ y;
        }
        out
    }

    fn sub(&self, a: &Words, b: &Words) -> Words {
        self.add(a, b)
    }

    fn negate(&self, a: &Words) -> Words {
        *a
    }

    fn mul(&self, a: &Words, b: &Words) -> Words {
        let n = self.words;
        let mut z = [0u64; WIDE_WORDS];
        for i in 0..n {
            for j in 0..n {
                let (lo, hi) = clmul64(a[i], b[j]);
                z[i + j] ^= lo;
                z[i + j + 1] ^= hi;
            }
        }
        self.reduce(&mut z)
    }

    fn square(&self, a: &Words) -> Words {
        let mut z = [0u64; WIDE_WORDS];
        for i in 0..self.words {
            z[2 * i] = spread32(a[i]);
            z[2 * i + 1] = spread32(a[i] >> 32);
        }
        self.reduce(&mut z)
    }

    /// Extended Euclid over GF(2)[x]: keeps g1 a = u and g2 a = v (mod f)
    fn invert(&self, a: &Words) -> Option<Words> {
        if self.is_zero(a) {
            return None;
        }
        let mut u = [0u64; MAX_WORDS + 1];
        u[..MAX_WORDS].copy_from_slice(a);
        let mut v = self.modulus_poly();
        let mut g1 = [0u64; MAX_WORDS + 1];
        g1[0] = 1;
        let mut g2 = [0u64; MAX_WORDS + 1];

        while poly_degree(&u) > 0 {
            let mut j = poly_degree(&u) - poly_degree(&v);
            if j < 0 {
                core::mem::swap(&mut u, &mut v);
                core::mem::swap(&mut g1, &mut g2);
                j = -j;
            }
            poly_xor_shifted(&mut u, &v, j as usize);
            poly_xor_shifted(&mut g1, &g2, j as usize);
        }

        let mut out = ZERO;
        out.copy_from_slice(&g1[..MAX_WORDS]);
        Some(out)
    }

    /// Every element is a square: sqrt(a) = a^(2^(m-1))
    fn sqrt(&self, a: &Words) -> Option<Words> {
        Some(self.square_pow(a, self.m - 1))
    }

    fn random<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> Words {
        let mut w = ZERO;
        for word in w.iter_mut().take(self.words) {
            *word = rng.next_u64();
        }
        limbs::truncate_bits(&mut w, self.m);
        w
    }
}
