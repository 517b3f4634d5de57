//! Arithmetic modulo a prime p
//!
//! Reduction and square-root extraction are chosen once, when the field is
//! built, from the shape of p:
//!
//! * p = 2^k - c with c < 2^(k/2) (secp256k1, P-192, P-224, P-384, P-521):
//!   the high half of a product is folded back as `high * c`.
//! * any other odd p (P-256, Brainpool): Barrett reduction with a
//!   precomputed reciprocal.
//!
//! Square roots use a^((p+1)/4) when p ≡ 3 (mod 4), Atkin's formula when
//! p ≡ 5 (mod 8) and Tonelli-Shanks otherwise. Every candidate root is squared
//! and compared to the input before it is returned.

use ecarith_internal::constant_time::ct_select_words;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use subtle::Choice;

use super::limbs::{self, Words, WideWords, MAX_WORDS, ONE, WIDE_WORDS, ZERO};
use super::FieldOps;
use crate::error::{validate, Result};

/// How products are reduced modulo p
#[derive(Debug, Clone, PartialEq, Eq)]
enum Reduction {
    /// p = 2^bits - c
    PseudoMersenne { c: Words, c_words: usize },
    /// mu = floor(2^(128 n) / p)
    Barrett { mu: [u64; MAX_WORDS + 1] },
}

/// How square roots are extracted
#[derive(Debug, Clone, PartialEq, Eq)]
enum SqrtStrategy {
    /// r = a^((p+1)/4)
    ThreeModFour { exp: Words },
    /// t = (2a)^((p-5)/8), i = 2a t^2, r = a t (i - 1)
    FiveModEight { exp: Words },
    /// p - 1 = q 2^s with q odd; z is q-th power of a non-residue
    TonelliShanks {
        s: u32,
        q: Words,
        q_plus_1_half: Words,
        z: Words,
    },
}

/// The prime field GF(p)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeField {
    modulus: Words,
    words: usize,
    bits: usize,
    p_minus_2: Words,
    reduction: Reduction,
    sqrt: SqrtStrategy,
}

impl PrimeField {
    /// Build the field for the odd prime `p`.
    ///
    /// Primality is not checked; p must be an odd integer greater than 3 that
    /// fits in the fixed word capacity.
    pub fn new(p: &BigUint) -> Result<Self> {
        let bits = p.bits() as usize;
        validate::parameter(bits > 2, "p", "modulus must be greater than 3")?;
        validate::parameter(p.is_odd(), "p", "modulus must be odd")?;
        validate::parameter(
            bits <= MAX_WORDS * 64,
            "p",
            "modulus exceeds the supported word capacity",
        )?;

        let words = (bits + 63) / 64;
        let modulus = limbs::from_biguint(p, words)
            .ok_or_else(|| crate::error::Error::param("p", "modulus does not fit"))?;
        let to_words = |v: &BigUint| limbs::from_biguint(v, MAX_WORDS).unwrap_or(ZERO);

        let c = (BigUint::one() << bits) - p;
        let reduction = if (c.bits() as usize) <= bits / 2 {
            Reduction::PseudoMersenne {
                c: to_words(&c),
                c_words: ((c.bits() as usize) + 63) / 64,
            }
        } else {
            let mu = (BigUint::one() << (128 * words)) / p;
            let mut mu_words = [0u64; MAX_WORDS + 1];
            let digits = mu.to_u64_digits();
            mu_words[..digits.len()].copy_from_slice(&digits);
            Reduction::Barrett { mu: mu_words }
        };

        let two = BigUint::from(2u32);
        let p_minus_1: BigUint = p - 1u32;
        let p_mod_8 = (p % 8u32).to_u32_digits().first().copied().unwrap_or(0);
        let sqrt = if p_mod_8 & 3 == 3 {
            SqrtStrategy::ThreeModFour {
                exp: to_words(&((p + 1u32) >> 2)),
            }
        } else if p_mod_8 == 5 {
            SqrtStrategy::FiveModEight {
                exp: to_words(&((p - 5u32) >> 3)),
            }
        } else {
            let s = p_minus_1.trailing_zeros().unwrap_or(0) as u32;
            let q = &p_minus_1 >> s;
            let legendre_exp = &p_minus_1 >> 1;
            let mut candidate = two.clone();
            while candidate.modpow(&legendre_exp, p) != p_minus_1 {
                candidate += 1u32;
                validate::parameter(&candidate < p, "p", "no quadratic non-residue found")?;
            }
            SqrtStrategy::TonelliShanks {
                s,
                q: to_words(&q),
                q_plus_1_half: to_words(&((&q + 1u32) >> 1)),
                z: to_words(&candidate.modpow(&q, p)),
            }
        };

        Ok(Self {
            modulus,
            words,
            bits,
            p_minus_2: to_words(&(p - &two)),
            reduction,
            sqrt,
        })
    }

    /// The modulus p
    pub fn modulus(&self) -> BigUint {
        limbs::to_biguint(&self.modulus[..self.words])
    }

    /// Whether products are reduced by pseudo-Mersenne folding
    pub fn is_pseudo_mersenne(&self) -> bool {
        matches!(self.reduction, Reduction::PseudoMersenne { .. })
    }

    /// `v -= p` in place over n+1 words unless that would underflow
    fn cond_sub_modulus(&self, v: &mut [u64]) {
        let n = self.words;
        let mut diff = [0u64; MAX_WORDS + 1];
        let mut p_ext = [0u64; MAX_WORDS + 1];
        p_ext[..n].copy_from_slice(&self.modulus[..n]);
        let borrow = limbs::sub_into(&mut diff[..n + 1], &v[..n + 1], &p_ext[..n + 1]);
        let keep = Choice::from(borrow as u8);
        let mut current = [0u64; MAX_WORDS + 1];
        current[..n + 1].copy_from_slice(&v[..n + 1]);
        ct_select_words(&mut v[..n + 1], &diff[..n + 1], &current[..n + 1], keep);
    }

    /// Reduce an (n+1)-word value known to be below 2p
    fn reduce_once(&self, v: &[u64]) -> Words {
        let n = self.words;
        let mut buf = [0u64; MAX_WORDS + 1];
        buf[..n + 1].copy_from_slice(&v[..n + 1]);
        self.cond_sub_modulus(&mut buf[..n + 1]);
        let mut out = ZERO;
        out[..n].copy_from_slice(&buf[..n]);
        out
    }

    fn reduce_wide(&self, t: &WideWords) -> Words {
        match &self.reduction {
            Reduction::PseudoMersenne { c, c_words } => self.reduce_fold(t, c, *c_words),
            Reduction::Barrett { mu } => self.reduce_barrett(t, mu),
        }
    }

    /// t mod p for p = 2^k - c: t = hi 2^k + lo ≡ hi c + lo.
    ///
    /// Three folds bring any t < p^2 below p + 3c < 2p.
    fn reduce_fold(&self, t: &WideWords, c: &Words, c_words: usize) -> Words {
        let n = self.words;
        let mut acc = *t;
        for _ in 0..3 {
            let mut hi = [0u64; WIDE_WORDS];
            limbs::shr_into(&mut hi, &acc, self.bits);
            let mut lo = acc;
            limbs::truncate_bits(&mut lo, self.bits);

            let mut prod = [0u64; WIDE_WORDS];
            limbs::mul_into(&mut prod[..n + c_words + 1], &hi[..n + 1], &c[..c_words]);
            limbs::add_into(&mut acc, &prod, &lo);
        }
        self.reduce_once(&acc[..n + 1])
    }

    /// Barrett reduction (HAC 14.42) with base 2^64
    fn reduce_barrett(&self, t: &WideWords, mu: &[u64; MAX_WORDS + 1]) -> Words {
        let n = self.words;

        // q1 = floor(t / b^(n-1)), q3 = floor(q1 mu / b^(n+1))
        let q1 = &t[n - 1..2 * n];
        let mut q2 = [0u64; WIDE_WORDS];
        limbs::mul_into(&mut q2[..2 * n + 2], q1, &mu[..n + 1]);
        let q3 = &q2[n + 1..2 * n + 2];

        let mut r2 = [0u64; WIDE_WORDS];
        limbs::mul_into(&mut r2[..2 * n + 1], q3, &self.modulus[..n]);

        // r = (t - q3 p) mod b^(n+1), which lies in [0, 3p)
        let mut r = [0u64; MAX_WORDS + 1];
        limbs::sub_into(&mut r[..n + 1], &t[..n + 1], &r2[..n + 1]);
        self.cond_sub_modulus(&mut r[..n + 1]);
        self.cond_sub_modulus(&mut r[..n + 1]);

        let mut out = ZERO;
        out[..n].copy_from_slice(&r[..n]);
        out
    }

    /// a^exp by left-to-right square-and-multiply over a public exponent
    fn pow(&self, a: &Words, exp: &Words) -> Words {
        let mut result = ONE;
        for i in (0..limbs::bit_length(exp)).rev() {
            result = self.square(&result);
            if limbs::bit(exp, i) {
                result = self.mul(&result, a);
            }
        }
        result
    }

    fn sqrt_tonelli_shanks(&self, a: &Words, s: u32, q: &Words, q_plus_1_half: &Words, z: &Words) -> Option<Words> {
        let mut x = self.pow(a, q_plus_1_half);
        let mut t = self.pow(a, q);
        let mut c = *z;
        let mut m = s;

        while !self.is_one(&t) {
            let mut i = 0u32;
            let mut t2i = t;
            while !self.is_one(&t2i) {
                t2i = self.square(&t2i);
                i += 1;
                if i == m {
                    return None;
                }
            }
            let mut b = c;
            for _ in 0..(m - i - 1) {
                b = self.square(&b);
            }
            x = self.mul(&x, &b);
            c = self.square(&b);
            t = self.mul(&t, &c);
            m = i;
        }
        Some(x)
    }
}

impl FieldOps for PrimeField {
    fn words(&self) -> usize {
        self.words
    }

    fn bits(&self) -> usize {
        self.bits
    }

    fn from_biguint(&self, v: &BigUint) -> Option<Words> {
        let w = limbs::from_biguint(v, self.words)?;
        let mut diff = ZERO;
        let borrow = limbs::sub_into(&mut diff[..self.words], &w[..self.words], &self.modulus[..self.words]);
        if borrow == 1 {
            Some(w)
        } else {
            None
        }
    }

    fn add(&self, a: &Words, b: &Words) -> Words {
        let n = self.words;
        let mut sum = [0u64; MAX_WORDS + 1];
        sum[n] = limbs::add_into(&mut sum[..n], &a[..n], &b[..n]);
        self.reduce_once(&sum[..n + 1])
    }

    fn sub(&self, a: &Words, b: &Words) -> Words {
        let n = self.words;
        let mut diff = ZERO;
        let borrow = limbs::sub_into(&mut diff[..n], &a[..n], &b[..n]);
        let mut wrapped = ZERO;
        limbs::add_into(&mut wrapped[..n], &diff[..n], &self.modulus[..n]);
        let mut out = ZERO;
        let underflow = Choice::from(borrow as u8);
        ct_select_words(&mut out[..n], &diff[..n], &wrapped[..n], underflow);
        out
    }

    fn negate(&self, a: &Words) -> Words {
        self.sub(&ZERO, a)
    }

    fn mul(&self, a: &Words, b: &Words) -> Words {
        let n = self.words;
        let mut wide = [0u64; WIDE_WORDS];
        limbs::mul_into(&mut wide[..2 * n], &a[..n], &b[..n]);
        self.reduce_wide(&wide)
    }

    fn square(&self, a: &Words) -> Words {
        self.mul(a, a)
    }

    fn invert(&self, a: &Words) -> Option<Words> {
        if self.is_zero(a) {
            return None;
        }
        Some(self.pow(a, &self.p_minus_2))
    }

    fn sqrt(&self, a: &Words) -> Option<Words> {
        if self.is_zero(a) || self.is_one(a) {
            return Some(*a);
        }
        let candidate = match &self.sqrt {
            SqrtStrategy::ThreeModFour { exp } => self.pow(a, exp),
            SqrtStrategy::FiveModEight { exp } => {
                let two_a = self.add(a, a);
                let t = self.pow(&two_a, exp);
                let i = self.mul(&two_a, &self.square(&t));
                let i_minus_1 = self.sub(&i, &ONE);
                self.mul(&self.mul(a, &t), &i_minus_1)
            }
            SqrtStrategy::TonelliShanks {
                s,
                q,
                q_plus_1_half,
                z,
            } => self.sqrt_tonelli_shanks(a, *s, q, q_plus_1_half, z)?,
        };
        if self.square(&candidate) == *a {
            Some(candidate)
        } else {
            None
        }
    }

    fn random<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> Words {
        loop {
            let mut w = ZERO;
            for word in w.iter_mut().take(self.words) {
                *word = rng.next_u64();
            }
            limbs::truncate_bits(&mut w, self.bits);
            if let Some(v) = self.from_biguint(&limbs::to_biguint(&w[..self.words])) {
                return v;
            }
        }
    }
}

impl PrimeField {
    /// Whether the stored sqrt ladder is the p ≡ 3 (mod 4) exponentiation
    pub fn sqrt_is_direct_exponent(&self) -> bool {
        matches!(self.sqrt, SqrtStrategy::ThreeModFour { .. })
    }

    /// Reduce an arbitrary non-negative integer modulo p
    pub fn reduce_biguint(&self, v: &BigUint) -> Words {
        let r = v.mod_floor(&self.modulus());
        if r.is_zero() {
            return ZERO;
        }
        limbs::from_biguint(&r, self.words).unwrap_or(ZERO)
    }
}
