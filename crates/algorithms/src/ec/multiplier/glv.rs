//! GLV scalar splitting for curves with an efficient endomorphism
//!
//! On secp224k1 and secp256k1 the map phi(x, y) = (beta x, y), with beta a
//! cube root of unity in GF(p), acts on the prime-order subgroup as multiplication by a
//! cube root of unity lambda mod n. A scalar k is split as
//! k = a + b lambda (mod n) with a and b about half the length of n, and
//! a P + b phi(P) is evaluated with one shared doubling chain.

use alloc::vec::Vec;

use ecarith_params::GlvParams;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;
use zeroize::Zeroize;

use super::wnaf::{odd_multiple_points, window_size, wnaf_digits};
use super::{Multiplier, PrecomputedPoint, ReferenceMultiplier};
use crate::ec::curve::{parse_hex, parse_signed_hex};
use crate::ec::field::{Field, FieldOps, Words};
use crate::ec::lookup::LookupTable;
use crate::ec::point::Point;
use crate::error::{validate, Error, Result};

/// Widest window used for the two half-length scalars
const MAX_WIDTH: usize = 8;

/// Parsed endomorphism data attached to a curve
#[derive(Clone, Debug)]
pub(crate) struct GlvEndomorphism {
    beta: Words,
    lambda: BigInt,
    v1: [BigInt; 2],
    v2: [BigInt; 2],
    g1: BigInt,
    g2: BigInt,
    bits: u32,
}

impl GlvEndomorphism {
    /// Parse and check `params` against the field and group order
    pub(crate) fn from_params(field: &Field, order: &BigUint, params: &GlvParams) -> Result<Self> {
        validate::parameter(
            !field.is_binary(),
            "glv",
            "endomorphism requires a prime field",
        )?;
        validate::parameter(params.bits > 0, "glv", "precision must be positive")?;

        let beta = field
            .from_biguint(&parse_hex("beta", params.beta)?)
            .ok_or_else(|| Error::param("beta", "not a field element"))?;
        validate::parameter(
            !field.is_one(&beta) && field.is_one(&field.mul(&field.square(&beta), &beta)),
            "beta",
            "must be a non-trivial cube root of unity",
        )?;

        let n = BigInt::from(order.clone());
        let lambda = parse_signed_hex("lambda", params.lambda)?;
        validate::parameter(
            lambda > BigInt::from(1)
                && lambda < n
                && (&lambda * &lambda * &lambda % &n) == BigInt::from(1),
            "lambda",
            "must be a non-trivial cube root of unity modulo the order",
        )?;

        let v1 = [
            parse_signed_hex("v1", params.v1[0])?,
            parse_signed_hex("v1", params.v1[1])?,
        ];
        let v2 = [
            parse_signed_hex("v2", params.v2[0])?,
            parse_signed_hex("v2", params.v2[1])?,
        ];
        for v in [&v1, &v2] {
            validate::parameter(
                ((&v[0] + &v[1] * &lambda) % &n).is_zero(),
                "glv",
                "basis vector is not in the kernel of the endomorphism",
            )?;
        }

        Ok(Self {
            beta,
            lambda,
            v1,
            v2,
            g1: parse_signed_hex("g1", params.g1)?,
            g2: parse_signed_hex("g2", params.g2)?,
            bits: params.bits,
        })
    }

    /// The eigenvalue lambda
    pub(crate) fn lambda(&self) -> &BigInt {
        &self.lambda
    }

    /// Split k into (a, b) with k = a + b lambda (mod n)
    pub(crate) fn decompose(&self, k: &BigUint) -> [BigInt; 2] {
        let b1 = round_product(k, &self.g1, self.bits);
        let b2 = round_product(k, &self.g2, self.bits);
        let a = BigInt::from(k.clone()) - (&b1 * &self.v1[0] + &b2 * &self.v2[0]);
        let b = -(&b1 * &self.v1[1] + &b2 * &self.v2[1]);
        [a, b]
    }

    /// phi(P) = (beta x, y) in any prime-field coordinate system
    pub(crate) fn map<'c>(&self, p: &Point<'c>) -> Point<'c> {
        if p.is_infinity() {
            return *p;
        }
        let (x, y, z) = p.raw_words();
        let x = p.curve().field().mul(&self.beta, x);
        Point::from_raw(p.curve(), x, *y, *z)
    }
}

/// round(k g / 2^bits), sign taken from g
fn round_product(k: &BigUint, g: &BigInt, bits: u32) -> BigInt {
    let product = k * g.magnitude();
    let rounded = BigInt::from(((product >> (bits - 1)) + 1u32) >> 1);
    if g.sign() == Sign::Minus {
        -rounded
    } else {
        rounded
    }
}

/// Odd multiples of P and of phi(P) for one window width
pub(crate) struct GlvTable<'c> {
    width: usize,
    tables: [LookupTable<'c>; 2],
}

fn build_table<'c>(glv: &GlvEndomorphism, p: &Point<'c>, width: usize) -> Result<Option<GlvTable<'c>>> {
    let Some(points) = odd_multiple_points(p, width)? else {
        return Ok(None);
    };
    let mapped: Vec<_> = points.iter().map(|q| glv.map(q)).collect();
    Ok(Some(GlvTable {
        width,
        tables: [
            LookupTable::new(p.curve(), &points)?,
            LookupTable::new(p.curve(), &mapped)?,
        ],
    }))
}

fn endomorphism_of<'c>(p: &Point<'c>) -> Result<&'c GlvEndomorphism> {
    p.curve()
        .glv()
        .ok_or(Error::state("GlvMultiplier::multiply", "curve has no endomorphism"))
}

/// Window width for half-length scalars of `bits` bits
fn glv_window(bits: u64) -> usize {
    window_size(bits).min(MAX_WIDTH)
}

fn multiply_with_table<'c>(
    p: &Point<'c>,
    glv: &GlvEndomorphism,
    table: &GlvTable<'c>,
    k: &BigUint,
) -> Result<Point<'c>> {
    let [a, b] = glv.decompose(k);
    let negative = [a.sign() == Sign::Minus, b.sign() == Sign::Minus];
    let mut digits = [
        wnaf_digits(table.width, a.magnitude()),
        wnaf_digits(table.width, b.magnitude()),
    ];
    let len = digits[0].len().max(digits[1].len());

    let mut q = p.curve().infinity();
    for i in (0..len).rev() {
        q = q.twice();
        for j in 0..2 {
            let d = digits[j].get(i).copied().unwrap_or(0);
            if d != 0 {
                let e = table.tables[j].lookup((d.unsigned_abs() >> 1) as usize)?;
                let e = if (d < 0) != negative[j] { e.negate() } else { e };
                q = q.add_unchecked(&e);
            }
        }
    }
    for ds in digits.iter_mut() {
        ds.zeroize();
    }
    Ok(q)
}

/// a P + b phi(P) by interleaved wNAF, with constant-time table reads.
///
/// The split is only valid on the prime-order subgroup; curves without
/// endomorphism parameters are rejected with `InvalidState`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlvMultiplier;

impl Multiplier for GlvMultiplier {
    fn multiply_positive<'c>(&self, p: &Point<'c>, k: &BigUint) -> Result<Point<'c>> {
        let glv = endomorphism_of(p)?;
        let half = glv.decompose(k).iter().map(BigInt::bits).max().unwrap_or(0);
        match build_table(glv, p, glv_window(half))? {
            Some(table) => multiply_with_table(p, glv, &table, k),
            None => ReferenceMultiplier.multiply_positive(p, k),
        }
    }

    fn multiply_positive_precomputed<'c>(
        &self,
        pre: &PrecomputedPoint<'c>,
        k: &BigUint,
    ) -> Result<Point<'c>> {
        let p = pre.point();
        let glv = endomorphism_of(p)?;
        let cached = pre.glv_cache().get_or_try_init(|| {
            // Sized for the split of a full-length scalar
            let bits = p.curve().order().map_or(k.bits(), |n| n.bits() / 2 + 1);
            build_table(glv, p, glv_window(bits)).map(alloc::boxed::Box::new)
        })?;
        match cached {
            Some(table) => multiply_with_table(p, glv, table, k),
            None => ReferenceMultiplier.multiply_positive(p, k),
        }
    }
}
