//! Windowed non-adjacent form

use alloc::vec::Vec;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;
use zeroize::Zeroize;

use super::{Multiplier, PrecomputedPoint, ReferenceMultiplier, WNafTable};
use crate::ec::lookup::LookupTable;
use crate::ec::point::Point;
use crate::error::Result;

/// Scalar bit lengths at which the window grows by one
const WINDOW_CUTOFFS: [u64; 6] = [13, 41, 121, 337, 897, 2305];

/// Widest window ever used
const MAX_WIDTH: usize = 16;

/// Window width for a scalar of `bits` bits
pub fn window_size(bits: u64) -> usize {
    let w = WINDOW_CUTOFFS.iter().take_while(|&&cutoff| bits >= cutoff).count();
    (w + 2).clamp(2, MAX_WIDTH)
}

/// Width-`width` NAF digits of k, least significant first.
///
/// Every non-zero digit is odd with |d| < 2^(width-1), and any two non-zero
/// digits are separated by at least `width - 1` zeros.
pub fn wnaf_digits(width: usize, k: &BigUint) -> Vec<i32> {
    let pow2 = 1i64 << width;
    let half = pow2 >> 1;
    let mask = (pow2 - 1) as u64;

    let mut k = k.clone();
    let mut digits = Vec::with_capacity(k.bits() as usize + 1);
    while !k.is_zero() {
        let digit = if k.is_odd() {
            let low = (k.iter_u64_digits().next().unwrap_or(0) & mask) as i64;
            let d = if low >= half { low - pow2 } else { low };
            if d < 0 {
                k += d.unsigned_abs();
            } else {
                k -= d as u64;
            }
            d as i32
        } else {
            0
        };
        digits.push(digit);
        k >>= 1;
    }
    digits
}

/// P, 3P, 5P, ..., (2^(width-1) - 1)P, normalized. `None` when one of them
/// is infinity, which only happens for points of small order.
pub(crate) fn odd_multiple_points<'c>(p: &Point<'c>, width: usize) -> Result<Option<Vec<Point<'c>>>> {
    let count = 1usize << (width - 2);
    let mut points = Vec::with_capacity(count);
    points.push(*p);
    let twice = p.twice();
    for i in 1..count {
        let next = points[i - 1].add_unchecked(&twice);
        points.push(next);
    }
    if points.iter().any(|q| q.is_infinity()) {
        return Ok(None);
    }
    p.curve().normalize_all(&mut points)?;
    Ok(Some(points))
}

/// The odd multiples of P as a lookup table
pub(crate) fn odd_multiples<'c>(p: &Point<'c>, width: usize) -> Result<Option<LookupTable<'c>>> {
    match odd_multiple_points(p, width)? {
        Some(points) => LookupTable::new(p.curve(), &points).map(Some),
        None => Ok(None),
    }
}

fn multiply_with_table<'c>(
    p: &Point<'c>,
    table: &LookupTable<'c>,
    width: usize,
    k: &BigUint,
) -> Result<Point<'c>> {
    let mut digits = wnaf_digits(width, k);
    let mut q = p.curve().infinity();
    for &d in digits.iter().rev() {
        q = q.twice();
        if d != 0 {
            let e = table.lookup((d.unsigned_abs() >> 1) as usize)?;
            let e = if d < 0 { e.negate() } else { e };
            q = q.add_unchecked(&e);
        }
    }
    digits.zeroize();
    Ok(q)
}

/// Left-to-right wNAF with a constant-time table of odd multiples
#[derive(Debug, Clone, Copy, Default)]
pub struct WNafMultiplier;

impl Multiplier for WNafMultiplier {
    fn multiply_positive<'c>(&self, p: &Point<'c>, k: &BigUint) -> Result<Point<'c>> {
        let width = window_size(k.bits());
        match odd_multiples(p, width)? {
            Some(table) => multiply_with_table(p, &table, width, k),
            None => ReferenceMultiplier.multiply_positive(p, k),
        }
    }

    fn multiply_positive_precomputed<'c>(
        &self,
        pre: &PrecomputedPoint<'c>,
        k: &BigUint,
    ) -> Result<Point<'c>> {
        let p = pre.point();
        let cached = pre.wnaf_cache().get_or_try_init(|| {
            // Size the table for full-length scalars so it serves every call
            let bits = p.curve().order().map_or(k.bits(), |n| n.bits().max(k.bits()));
            let width = window_size(bits);
            odd_multiples(p, width)
                .map(|table| table.map(|table| WNafTable { width, table }))
                .map(alloc::boxed::Box::new)
        })?;
        match cached {
            Some(t) => multiply_with_table(p, &t.table, t.width, k),
            None => ReferenceMultiplier.multiply_positive(p, k),
        }
    }
}
