//! Scalar multiplication strategies
//!
//! Every strategy implements [`Multiplier`]. The provided `multiply` method
//! handles the shared edge cases (zero scalar, point at infinity, negative
//! scalar) and normalizes the result; implementations only supply
//! `multiply_positive`.
//!
//! Precomputed tables can be cached per base point by wrapping it in a
//! [`PrecomputedPoint`].

use core::fmt;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;
use once_cell::race::OnceBox;

use self::glv::GlvTable;
use crate::ec::lookup::LookupTable;
use crate::ec::point::Point;
use crate::error::Result;

pub(crate) mod glv;
mod reference;
pub(crate) mod tnaf;
mod wnaf;

pub use glv::GlvMultiplier;
pub use reference::ReferenceMultiplier;
pub use tnaf::WTauNafMultiplier;
pub use wnaf::{window_size, wnaf_digits, WNafMultiplier};

/// A scalar multiplication strategy
pub trait Multiplier: Send + Sync + fmt::Debug {
    /// k P for k > 0 and finite P
    fn multiply_positive<'c>(&self, p: &Point<'c>, k: &BigUint) -> Result<Point<'c>>;

    /// k P for k > 0, reusing tables cached on `pre`
    fn multiply_positive_precomputed<'c>(
        &self,
        pre: &PrecomputedPoint<'c>,
        k: &BigUint,
    ) -> Result<Point<'c>> {
        self.multiply_positive(pre.point(), k)
    }

    /// k P for any integer k, normalized
    fn multiply<'c>(&self, p: &Point<'c>, k: &BigInt) -> Result<Point<'c>> {
        if k.is_zero() || p.is_infinity() {
            return Ok(p.curve().infinity());
        }
        let q = self.multiply_positive(p, k.magnitude())?;
        Ok(apply_sign(q, k.sign()).normalize())
    }

    /// k P for any integer k, reusing tables cached on `pre`
    fn multiply_precomputed<'c>(&self, pre: &PrecomputedPoint<'c>, k: &BigInt) -> Result<Point<'c>> {
        if k.is_zero() || pre.point().is_infinity() {
            return Ok(pre.point().curve().infinity());
        }
        let q = self.multiply_positive_precomputed(pre, k.magnitude())?;
        Ok(apply_sign(q, k.sign()).normalize())
    }
}

fn apply_sign(q: Point<'_>, sign: Sign) -> Point<'_> {
    if sign == Sign::Minus {
        q.negate()
    } else {
        q
    }
}

/// Odd multiples table for a given wNAF width
pub(crate) struct WNafTable<'c> {
    pub(crate) width: usize,
    pub(crate) table: LookupTable<'c>,
}

/// A base point together with lazily built multiplication tables.
///
/// Tables are created on first use and shared by later calls; concurrent
/// first callers may both compute, but only one result is kept.
pub struct PrecomputedPoint<'c> {
    point: Point<'c>,
    wnaf: OnceBox<Option<WNafTable<'c>>>,
    tnaf: OnceBox<Option<LookupTable<'c>>>,
    glv: OnceBox<Option<GlvTable<'c>>>,
}

impl<'c> PrecomputedPoint<'c> {
    /// Wrap `point`; no work is done until the first multiplication
    pub fn new(point: Point<'c>) -> Self {
        Self {
            point: point.normalize(),
            wnaf: OnceBox::new(),
            tnaf: OnceBox::new(),
            glv: OnceBox::new(),
        }
    }

    /// The base point
    pub fn point(&self) -> &Point<'c> {
        &self.point
    }

    /// Whether a wNAF table has been built
    pub fn has_wnaf_table(&self) -> bool {
        self.wnaf.get().is_some()
    }

    /// Whether a tau-adic table has been built
    pub fn has_tnaf_table(&self) -> bool {
        self.tnaf.get().is_some()
    }

    /// Whether GLV tables for P and its endomorphism image have been built
    pub fn has_glv_table(&self) -> bool {
        self.glv.get().is_some()
    }

    pub(crate) fn wnaf_cache(&self) -> &OnceBox<Option<WNafTable<'c>>> {
        &self.wnaf
    }

    pub(crate) fn tnaf_cache(&self) -> &OnceBox<Option<LookupTable<'c>>> {
        &self.tnaf
    }

    pub(crate) fn glv_cache(&self) -> &OnceBox<Option<GlvTable<'c>>> {
        &self.glv
    }
}

impl fmt::Debug for PrecomputedPoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrecomputedPoint")
            .field("point", &self.point)
            .field("wnaf", &self.has_wnaf_table())
            .field("tnaf", &self.has_tnaf_table())
            .field("glv", &self.has_glv_table())
            .finish()
    }
}
