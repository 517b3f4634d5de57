//! Field arithmetic for prime and binary curves
//!
//! Point formulas work directly on [`Words`] through the [`FieldOps`] trait,
//! which assumes operands are already reduced and belong to `self`.
//! [`FieldElement`] is the checked, user-facing wrapper: it borrows its field
//! and rejects operands from any other field.

use core::fmt;

use ecarith_internal::constant_time::{ct_words_are_zero, ct_words_eq};
use num_bigint::{BigInt, BigUint, Sign};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::{validate, Error, Result};

pub mod binary;
pub mod limbs;
pub mod prime;

pub use binary::BinaryField;
pub use limbs::{Words, MAX_WORDS};
pub use prime::PrimeField;

use limbs::{ONE, ZERO};

/// Word-level arithmetic of a finite field.
///
/// Inputs must be reduced; outputs always are.
pub trait FieldOps {
    /// Number of significant 64-bit words
    fn words(&self) -> usize;

    /// Bit size of the field (bit length of p, or m)
    fn bits(&self) -> usize;

    /// Import an integer, `None` if it is not a reduced representative
    fn from_biguint(&self, v: &BigUint) -> Option<Words>;

    /// a + b
    fn add(&self, a: &Words, b: &Words) -> Words;

    /// a - b
    fn sub(&self, a: &Words, b: &Words) -> Words;

    /// -a
    fn negate(&self, a: &Words) -> Words;

    /// a * b
    fn mul(&self, a: &Words, b: &Words) -> Words;

    /// a^2
    fn square(&self, a: &Words) -> Words;

    /// a^-1, `None` for zero
    fn invert(&self, a: &Words) -> Option<Words>;

    /// A square root of a, `None` if there is none
    fn sqrt(&self, a: &Words) -> Option<Words>;

    /// Uniformly random element
    fn random<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> Words;

    /// a == 0
    #[inline]
    fn is_zero(&self, a: &Words) -> bool {
        ct_words_are_zero(a).into()
    }

    /// a == 1
    #[inline]
    fn is_one(&self, a: &Words) -> bool {
        ct_words_eq(a, &ONE).into()
    }

    /// a / b, `None` when b is zero
    fn div(&self, a: &Words, b: &Words) -> Option<Words> {
        self.invert(b).map(|inv| self.mul(a, &inv))
    }

    /// 2a
    #[inline]
    fn twice(&self, a: &Words) -> Words {
        self.add(a, a)
    }

    /// 3a
    #[inline]
    fn three(&self, a: &Words) -> Words {
        self.add(&self.twice(a), a)
    }

    /// 4a
    #[inline]
    fn four(&self, a: &Words) -> Words {
        self.twice(&self.twice(a))
    }

    /// 8a
    #[inline]
    fn eight(&self, a: &Words) -> Words {
        self.four(&self.twice(a))
    }

    /// a^(2^n)
    fn square_pow(&self, a: &Words, n: usize) -> Words {
        let mut r = *a;
        for _ in 0..n {
            r = self.square(&r);
        }
        r
    }
}

/// A prime or binary field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// GF(p)
    Prime(PrimeField),
    /// GF(2^m)
    Binary(BinaryField),
}

macro_rules! dispatch {
    ($self:ident, $f:ident => $e:expr) => {
        match $self {
            Field::Prime($f) => $e,
            Field::Binary($f) => $e,
        }
    };
}

impl FieldOps for Field {
    fn words(&self) -> usize {
        dispatch!(self, f => f.words())
    }
    fn bits(&self) -> usize {
        dispatch!(self, f => f.bits())
    }
    fn from_biguint(&self, v: &BigUint) -> Option<Words> {
        dispatch!(self, f => f.from_biguint(v))
    }
    fn add(&self, a: &Words, b: &Words) -> Words {
        dispatch!(self, f => f.add(a, b))
    }
    fn sub(&self, a: &Words, b: &Words) -> Words {
        dispatch!(self, f => f.sub(a, b))
    }
    fn negate(&self, a: &Words) -> Words {
        dispatch!(self, f => f.negate(a))
    }
    fn mul(&self, a: &Words, b: &Words) -> Words {
        dispatch!(self, f => f.mul(a, b))
    }
    fn square(&self, a: &Words) -> Words {
        dispatch!(self, f => f.square(a))
    }
    fn invert(&self, a: &Words) -> Option<Words> {
        dispatch!(self, f => f.invert(a))
    }
    fn sqrt(&self, a: &Words) -> Option<Words> {
        dispatch!(self, f => f.sqrt(a))
    }
    fn random<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> Words {
        dispatch!(self, f => f.random(rng))
    }
}

impl Field {
    /// GF(p) for an odd prime p
    pub fn prime(p: &BigUint) -> Result<Self> {
        PrimeField::new(p).map(Field::Prime)
    }

    /// GF(2^m) reduced by x^m + x^ks[..] + 1
    pub fn binary(m: usize, ks: &[usize]) -> Result<Self> {
        BinaryField::new(m, ks).map(Field::Binary)
    }

    /// Whether this is a binary field
    pub fn is_binary(&self) -> bool {
        matches!(self, Field::Binary(_))
    }

    /// The characteristic: p, or 2
    pub fn characteristic(&self) -> BigUint {
        match self {
            Field::Prime(f) => f.modulus(),
            Field::Binary(_) => BigUint::from(2u32),
        }
    }

    /// Length in bytes of the fixed-width big-endian encoding
    pub fn byte_len(&self) -> usize {
        (self.bits() + 7) / 8
    }

    /// Element for the integer `v`; `InvalidValue` if it is negative or not reduced
    pub fn from_integer(&self, v: &BigInt) -> Result<FieldElement<'_>> {
        validate::value(v.sign() != Sign::Minus, "from_integer", "value is negative")?;
        self.from_biguint_checked(v.magnitude())
    }

    /// Element for the non-negative integer `v`; `InvalidValue` if it is not reduced
    pub fn from_biguint_checked(&self, v: &BigUint) -> Result<FieldElement<'_>> {
        let value = self
            .from_biguint(v)
            .ok_or_else(|| Error::value("from_integer", "value out of range for field"))?;
        Ok(FieldElement::new(self, value))
    }

    /// The additive identity
    pub fn zero(&self) -> FieldElement<'_> {
        FieldElement::new(self, ZERO)
    }

    /// The multiplicative identity
    pub fn one(&self) -> FieldElement<'_> {
        FieldElement::new(self, ONE)
    }

    /// Uniformly random element
    pub fn random_element<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> FieldElement<'_> {
        FieldElement::new(self, self.random(rng))
    }

    pub(crate) fn wrap(&self, value: Words) -> FieldElement<'_> {
        FieldElement::new(self, value)
    }

    fn binary_only(&self, feature: &'static str) -> Result<&BinaryField> {
        match self {
            Field::Binary(f) => Ok(f),
            Field::Prime(_) => Err(Error::NotImplemented { feature }),
        }
    }
}

/// An element of a [`Field`]
#[derive(Clone, Copy)]
pub struct FieldElement<'f> {
    field: &'f Field,
    value: Words,
}

impl<'f> FieldElement<'f> {
    fn new(field: &'f Field, value: Words) -> Self {
        Self { field, value }
    }

    /// The field this element belongs to
    pub fn field(&self) -> &'f Field {
        self.field
    }

    /// Raw little-endian words
    pub fn words(&self) -> &Words {
        &self.value
    }

    /// Parse a big-endian encoding of at most [`Field::byte_len`] bytes
    pub fn from_bytes(field: &'f Field, bytes: &[u8]) -> Result<Self> {
        validate::value(
            bytes.len() <= field.byte_len(),
            "from_bytes",
            "encoding longer than field size",
        )?;
        let w = limbs::from_be_bytes(bytes)
            .ok_or_else(|| Error::value("from_bytes", "encoding longer than field size"))?;
        let value = field
            .from_biguint(&limbs::to_biguint(&w))
            .ok_or_else(|| Error::value("from_bytes", "value out of range for field"))?;
        Ok(Self::new(field, value))
    }

    /// Fixed-length big-endian encoding
    pub fn to_bytes(&self) -> alloc::vec::Vec<u8> {
        limbs::to_be_bytes(&self.value, self.field.byte_len())
    }

    /// The element as an integer in [0, p) or as a polynomial bit string
    pub fn to_biguint(&self) -> BigUint {
        limbs::to_biguint(&self.value[..self.field.words()])
    }

    fn check(&self, other: &Self, context: &'static str) -> Result<()> {
        validate::same_operand(
            core::ptr::eq(self.field, other.field) || self.field == other.field,
            context,
        )
    }

    fn with(&self, value: Words) -> Self {
        Self::new(self.field, value)
    }

    /// self + other
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check(other, "add")?;
        Ok(self.with(self.field.add(&self.value, &other.value)))
    }

    /// self + 1
    pub fn add_one(&self) -> Self {
        self.with(self.field.add(&self.value, &ONE))
    }

    /// self - other
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.check(other, "subtract")?;
        Ok(self.with(self.field.sub(&self.value, &other.value)))
    }

    /// self * other
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        self.check(other, "multiply")?;
        Ok(self.with(self.field.mul(&self.value, &other.value)))
    }

    /// self * b + x * y
    pub fn multiply_plus_product(&self, b: &Self, x: &Self, y: &Self) -> Result<Self> {
        self.check(b, "multiply_plus_product")?;
        self.check(x, "multiply_plus_product")?;
        self.check(y, "multiply_plus_product")?;
        let f = self.field;
        Ok(self.with(f.add(&f.mul(&self.value, &b.value), &f.mul(&x.value, &y.value))))
    }

    /// self * b - x * y
    pub fn multiply_minus_product(&self, b: &Self, x: &Self, y: &Self) -> Result<Self> {
        self.check(b, "multiply_minus_product")?;
        self.check(x, "multiply_minus_product")?;
        self.check(y, "multiply_minus_product")?;
        let f = self.field;
        Ok(self.with(f.sub(&f.mul(&self.value, &b.value), &f.mul(&x.value, &y.value))))
    }

    /// self^2 + x * y
    pub fn square_plus_product(&self, x: &Self, y: &Self) -> Result<Self> {
        self.check(x, "square_plus_product")?;
        self.check(y, "square_plus_product")?;
        let f = self.field;
        Ok(self.with(f.add(&f.square(&self.value), &f.mul(&x.value, &y.value))))
    }

    /// self / other; `DivisionByZero` when other is zero
    pub fn divide(&self, other: &Self) -> Result<Self> {
        self.check(other, "divide")?;
        let inv = other.invert()?;
        Ok(self.with(self.field.mul(&self.value, &inv.value)))
    }

    /// -self
    pub fn negate(&self) -> Self {
        self.with(self.field.negate(&self.value))
    }

    /// self^2
    pub fn square(&self) -> Self {
        self.with(self.field.square(&self.value))
    }

    /// self^(2^n)
    pub fn square_pow(&self, n: usize) -> Self {
        self.with(self.field.square_pow(&self.value, n))
    }

    /// self^-1; `DivisionByZero` for zero
    pub fn invert(&self) -> Result<Self> {
        self.field
            .invert(&self.value)
            .map(|v| self.with(v))
            .ok_or(Error::DivisionByZero { context: "invert" })
    }

    /// A square root, or `None` when self is not a square
    pub fn sqrt(&self) -> Option<Self> {
        self.field.sqrt(&self.value).map(|v| self.with(v))
    }

    /// self == 0
    pub fn is_zero(&self) -> bool {
        self.field.is_zero(&self.value)
    }

    /// self == 1
    pub fn is_one(&self) -> bool {
        self.field.is_one(&self.value)
    }

    /// Lowest bit of the canonical representative
    pub fn test_bit_zero(&self) -> bool {
        self.value[0] & 1 == 1
    }

    /// Bit length of the canonical representative
    pub fn bit_length(&self) -> usize {
        limbs::bit_length(&self.value)
    }

    /// Absolute trace Tr(self) in GF(2); binary fields only
    pub fn trace(&self) -> Result<u8> {
        Ok(self.field.binary_only("trace")?.trace(&self.value))
    }

    /// Half-trace; binary fields of odd degree only
    pub fn half_trace(&self) -> Result<Self> {
        let f = self.field.binary_only("half_trace")?;
        f.half_trace(&self.value).map(|v| self.with(v))
    }

    /// A solution z of z^2 + z = self, or `None` when Tr(self) = 1.
    ///
    /// Binary fields of odd degree only.
    pub fn solve_quadratic(&self) -> Result<Option<Self>> {
        let f = self.field.binary_only("solve_quadratic")?;
        if f.trace(&self.value) == 1 {
            return Ok(None);
        }
        f.half_trace(&self.value).map(|v| Some(self.with(v)))
    }
}

impl PartialEq for FieldElement<'_> {
    fn eq(&self, other: &Self) -> bool {
        (core::ptr::eq(self.field, other.field) || self.field == other.field)
            && bool::from(ct_words_eq(&self.value, &other.value))
    }
}

impl Eq for FieldElement<'_> {}

impl fmt::Debug for FieldElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x{})", hex::encode(self.to_bytes()))
    }
}

impl fmt::Display for FieldElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.to_bytes()))
    }
}

impl Zeroize for FieldElement<'_> {
    fn zeroize(&mut self) {
        self.value.zeroize();
    }
}

#[cfg(test)]
mod tests;
