//! Width-4 tau-adic NAF for Koblitz curves
//!
//! On a Koblitz curve y^2 + xy = x^3 + a x^2 + 1 the Frobenius map
//! tau(x, y) = (x^2, y^2) satisfies tau^2 - mu tau + 2 = 0 with
//! mu = (-1)^(1-a). A scalar k is first reduced modulo
//! delta = (tau^m - 1) / (tau - 1) to an element rho = r0 + r1 tau of
//! roughly half the length, then expanded in base tau with digits from
//! {0, +-1, +-3, +-5, +-7}. Doubling is replaced by tau, which costs three
//! squarings.
//!
//! The reduction is only valid for points P with delta P = 0, that is, the
//! prime-order subgroup.

use alloc::boxed::Box;
use alloc::vec::Vec;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};
use zeroize::Zeroize;

use super::{Multiplier, PrecomputedPoint, ReferenceMultiplier};
use crate::ec::curve::Curve;
use crate::ec::field::FieldOps;
use crate::ec::lookup::LookupTable;
use crate::ec::point::Point;
use crate::error::{validate, Error, Result};

/// Window width
pub const WIDTH: usize = 4;

/// 2^WIDTH
const POW_2_WIDTH: i64 = 1 << WIDTH;

/// Fixed-point precision, in bits, of the rounding step
const ROUNDING_BITS: usize = 10;

/// An element u + v tau of Z[tau]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZTau {
    /// Rational part
    pub u: BigInt,
    /// Coefficient of tau
    pub v: BigInt,
}

/// alpha_u for a = 0, indexed by odd u
pub(crate) const ALPHA_0: [(i64, i64); 4] = [(1, 0), (-3, -1), (-1, -1), (1, -1)];

/// alpha_u for a = 1, indexed by odd u
pub(crate) const ALPHA_1: [(i64, i64); 4] = [(1, 0), (-3, 1), (-1, 1), (1, 1)];

/// tau-adic expansions of ALPHA_0, least significant digit first
const ALPHA_0_TNAF: [&[i8]; 4] = [&[1], &[-1, 0, 1], &[1, 0, 1], &[-1, 0, 0, 1]];

/// tau-adic expansions of ALPHA_1, least significant digit first
const ALPHA_1_TNAF: [&[i8]; 4] = [&[1], &[-1, 0, 1], &[1, 0, 1], &[-1, 0, 0, -1]];

/// Lucas sequence U_k (or V_k when `do_v`) for tau, as (U_{k-1}, U_k)
pub fn lucas(mu: i8, k: usize, do_v: bool) -> [BigInt; 2] {
    let (mut u0, mut u1) = if do_v {
        (BigInt::from(2), BigInt::from(mu))
    } else {
        (BigInt::zero(), BigInt::one())
    };
    for _ in 1..k {
        let s = if mu == 1 { u1.clone() } else { -&u1 };
        let u2 = s - (&u0 << 1usize);
        u0 = core::mem::replace(&mut u1, u2);
    }
    [u0, u1]
}

/// The constants s0, s1 with delta = s0 + s1 tau scaled by the cofactor
pub(crate) fn curve_si(curve: &Curve) -> Result<[BigInt; 2]> {
    validate::parameter(curve.is_koblitz(), "curve", "not a Koblitz curve")?;
    let shifts: usize = match curve.cofactor_u32() {
        Some(2) => 1,
        Some(4) => 2,
        _ => return Err(Error::param("cofactor", "Koblitz cofactor must be 2 or 4")),
    };
    let mu = curve.tau_mu();
    let a = usize::from(mu == 1);
    let m = curve.field().bits();

    let [mut u0, mut u1] = lucas(mu, m + 3 - a, false);
    if mu == 1 {
        u0 = -u0;
        u1 = -u1;
    }
    let s0 = (BigInt::one() + u1) >> shifts;
    let s1 = -((BigInt::one() + u0) >> shifts);
    Ok([s0, s1])
}

/// Fixed-point approximation, with `c` fractional bits, of k s / delta
fn approximate_division_by_n(k: &BigInt, s: &BigInt, vm: &BigInt, a: usize, m: usize, c: usize) -> BigInt {
    let big_k = (m + 5) / 2 + c;
    let ns = k >> (m - big_k - 2 + a);
    let gs = s * ns;
    let hs = &gs >> m;
    let js = vm * hs;
    let gs_plus_js = gs + js;
    let mut ls = &gs_plus_js >> (big_k - c);
    if (&gs_plus_js >> (big_k - c - 1)).is_odd() {
        ls += 1;
    }
    ls
}

/// Nearest element of Z[tau] to lambda0 + lambda1 tau, both fixed-point with
/// `scale` fractional bits
fn round(lambda0: &BigInt, lambda1: &BigInt, mu: i8, scale: usize) -> (BigInt, BigInt) {
    let half = BigInt::one() << (scale - 1);
    let f0 = (lambda0 + &half) >> scale;
    let f1 = (lambda1 + &half) >> scale;
    let eta0 = lambda0 - (&f0 << scale);
    let eta1 = lambda1 - (&f1 << scale);

    let three_eta1 = &eta1 * 3;
    let four_eta1 = &eta1 * 4;
    let (eta, check1, check2) = if mu == 1 {
        (&eta0 * 2 + &eta1, &eta0 - &three_eta1, &eta0 + &four_eta1)
    } else {
        (&eta0 * 2 - &eta1, &eta0 + &three_eta1, &eta0 - &four_eta1)
    };

    let one = BigInt::one() << scale;
    let two = BigInt::from(2) << scale;
    let minus_one = -&one;
    let minus_two = -&two;

    let mut h0: i8 = 0;
    let mut h1: i8 = 0;
    if eta >= one {
        if check1 < minus_one {
            h1 = mu;
        } else {
            h0 = 1;
        }
    } else if check2 >= two {
        h1 = mu;
    }

    if eta < minus_one {
        if check1 >= one {
            h1 = -mu;
        } else {
            h0 = -1;
        }
    } else if check2 < minus_two {
        h1 = -mu;
    }

    (f0 + BigInt::from(h0), f1 + BigInt::from(h1))
}

/// rho = k mod delta with small norm
pub fn partial_reduction(k: &BigInt, m: usize, a: usize, s: &[BigInt; 2], mu: i8) -> ZTau {
    let c = ROUNDING_BITS;
    let [s0, s1] = s;
    let d0 = if mu == 1 { s0 + s1 } else { s0 - s1 };
    let [_, vm] = lucas(mu, m, true);

    let lambda0 = approximate_division_by_n(k, s0, &vm, a, m, c);
    let lambda1 = approximate_division_by_n(k, s1, &vm, a, m, c);
    let (q0, q1) = round(&lambda0, &lambda1, mu, c);

    let u = k - &d0 * &q0 - BigInt::from(2) * s1 * &q1;
    let v = s1 * &q0 - s0 * &q1;
    ZTau { u, v }
}

/// tw = 2 U_{w-1} / U_w mod 2^w, the image of tau in Z / 2^w
fn tw(mu: i8) -> i64 {
    if mu == 1 {
        6
    } else {
        10
    }
}

/// Width-4 tau-adic NAF of lambda, least significant digit first
pub fn tau_adic_wnaf(mu: i8, lambda: &ZTau) -> Vec<i8> {
    let alpha = if mu == 1 { &ALPHA_1 } else { &ALPHA_0 };
    let pow2w = BigInt::from(POW_2_WIDTH);
    let tw = tw(mu);

    let mut r0 = lambda.u.clone();
    let mut r1 = lambda.v.clone();
    let mut digits = Vec::new();
    while !(r0.is_zero() && r1.is_zero()) {
        if r0.is_odd() {
            let residue = (&r0 + &r1 * tw).mod_floor(&pow2w).to_i64().unwrap_or(0);
            let digit = if residue >= POW_2_WIDTH / 2 {
                residue - POW_2_WIDTH
            } else {
                residue
            };
            let (au, av) = alpha[(digit.unsigned_abs() >> 1) as usize];
            if digit > 0 {
                r0 -= au;
                r1 -= av;
            } else {
                r0 += au;
                r1 += av;
            }
            digits.push(digit as i8);
        } else {
            digits.push(0);
        }

        let half = &r0 >> 1usize;
        r0 = if mu == 1 { &r1 + &half } else { &r1 - &half };
        r1 = -half;
    }
    digits
}

/// The point given by tau-adic digits `u` applied to P
fn multiply_from_tnaf<'c>(p: &Point<'c>, u: &[i8]) -> Result<Point<'c>> {
    let neg = p.negate();
    let mut q = p.curve().infinity();
    let mut tau_count = 0;
    for &ui in u.iter().rev() {
        tau_count += 1;
        if ui != 0 {
            q = q.tau_pow(tau_count)?;
            tau_count = 0;
            q = q.add_unchecked(if ui > 0 { p } else { &neg });
        }
    }
    if tau_count > 0 {
        q = q.tau_pow(tau_count)?;
    }
    Ok(q)
}

/// alpha_u P for u in {1, 3, 5, 7}, normalized; `None` for points of small
/// order
fn precompute<'c>(p: &Point<'c>, mu: i8) -> Result<Option<LookupTable<'c>>> {
    let expansions = if mu == 1 { &ALPHA_1_TNAF } else { &ALPHA_0_TNAF };
    let mut points = Vec::with_capacity(expansions.len());
    points.push(*p);
    for u in &expansions[1..] {
        points.push(multiply_from_tnaf(p, u)?);
    }
    if points.iter().any(|q| q.is_infinity()) {
        return Ok(None);
    }
    p.curve().normalize_all(&mut points)?;
    LookupTable::new(p.curve(), &points).map(Some)
}

fn multiply_with_table<'c>(p: &Point<'c>, table: &LookupTable<'c>, k: &BigUint) -> Result<Point<'c>> {
    let curve = p.curve();
    let mu = curve.tau_mu();
    let a = usize::from(mu == 1);
    let s = curve.tau_si()?;
    let rho = partial_reduction(&BigInt::from(k.clone()), curve.field().bits(), a, s, mu);
    let mut digits = tau_adic_wnaf(mu, &rho);

    let mut q = curve.infinity();
    let mut tau_count = 0;
    for &ui in digits.iter().rev() {
        tau_count += 1;
        if ui != 0 {
            q = q.tau_pow(tau_count)?;
            tau_count = 0;
            let e = table.lookup((ui.unsigned_abs() >> 1) as usize)?;
            let e = if ui < 0 { e.negate() } else { e };
            q = q.add_unchecked(&e);
        }
    }
    if tau_count > 0 {
        q = q.tau_pow(tau_count)?;
    }
    digits.zeroize();
    Ok(q)
}

fn require_koblitz(curve: &Curve) -> Result<()> {
    validate::parameter(
        curve.is_koblitz(),
        "curve",
        "tau-adic multiplication requires a Koblitz curve",
    )
}

/// Width-4 tau-adic NAF multiplier for points in the prime-order subgroup
/// of a Koblitz curve
#[derive(Debug, Clone, Copy, Default)]
pub struct WTauNafMultiplier;

impl Multiplier for WTauNafMultiplier {
    fn multiply_positive<'c>(&self, p: &Point<'c>, k: &BigUint) -> Result<Point<'c>> {
        require_koblitz(p.curve())?;
        match precompute(p, p.curve().tau_mu())? {
            Some(table) => multiply_with_table(p, &table, k),
            None => ReferenceMultiplier.multiply_positive(p, k),
        }
    }

    fn multiply_positive_precomputed<'c>(
        &self,
        pre: &PrecomputedPoint<'c>,
        k: &BigUint,
    ) -> Result<Point<'c>> {
        let p = pre.point();
        require_koblitz(p.curve())?;
        let cached = pre
            .tnaf_cache()
            .get_or_try_init(|| precompute(p, p.curve().tau_mu()).map(Box::new))?;
        match cached {
            Some(table) => multiply_with_table(p, table, k),
            None => ReferenceMultiplier.multiply_positive(p, k),
        }
    }
}
