//! Curve points in affine and projective coordinate systems
//!
//! A [`Point`] borrows the [`Curve`] it lives on and stores its coordinates
//! as raw words in the curve's active coordinate system. Formulas for prime
//! and binary curves live in the `fp` and `f2m` submodules.
//!
//! Two representation details matter to callers:
//!
//! * In affine systems the z coordinate is fixed at one and never exposed.
//! * On lambda-projective curves the y slot holds L = λZ, except for points
//!   with x = 0, whose y slot holds the affine y (the square root of b).

use core::fmt;

use ecarith_api::CoordinateSystem;
use num_bigint::{BigInt, BigUint};
use num_traits::One;
use rand::{CryptoRng, RngCore};

use crate::ec::curve::Curve;
use crate::ec::field::limbs::{ONE, ZERO};
use crate::ec::field::{FieldElement, FieldOps, Words};
use crate::ec::multiplier::{Multiplier, ReferenceMultiplier};
use crate::error::{validate, Error, Result};

mod f2m;
mod fp;

/// A point on an elliptic curve, or the point at infinity
#[derive(Clone, Copy)]
pub struct Point<'c> {
    curve: &'c Curve,
    x: Words,
    y: Words,
    z: Words,
    infinity: bool,
}

impl<'c> Point<'c> {
    /// Point from raw coordinates in the curve's system; z is ignored for
    /// affine systems
    pub(crate) fn from_raw(curve: &'c Curve, x: Words, y: Words, z: Words) -> Self {
        let z = if curve.coordinate_system().z_count() == 0 {
            ONE
        } else {
            z
        };
        Self {
            curve,
            x,
            y,
            z,
            infinity: false,
        }
    }

    /// Point with z = 1
    pub(crate) fn from_raw_affine(curve: &'c Curve, x: Words, y: Words) -> Self {
        Self::from_raw(curve, x, y, ONE)
    }

    pub(crate) fn infinity_of(curve: &'c Curve) -> Self {
        Self {
            curve,
            x: ZERO,
            y: ZERO,
            z: ZERO,
            infinity: true,
        }
    }

    pub(crate) fn raw_words(&self) -> (&Words, &Words, &Words) {
        (&self.x, &self.y, &self.z)
    }

    /// The curve this point lives on
    pub fn curve(&self) -> &'c Curve {
        self.curve
    }

    /// Whether this is the point at infinity
    pub fn is_infinity(&self) -> bool {
        self.infinity
    }

    /// Coordinate system of the underlying curve
    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.curve.coordinate_system()
    }

    /// Raw x coordinate in the curve's coordinate system
    pub fn raw_x_coord(&self) -> Option<FieldElement<'c>> {
        (!self.infinity).then(|| self.curve.field().wrap(self.x))
    }

    /// Raw y coordinate (λ-scaled on lambda curves)
    pub fn raw_y_coord(&self) -> Option<FieldElement<'c>> {
        (!self.infinity).then(|| self.curve.field().wrap(self.y))
    }

    /// Raw z coordinate; `None` at infinity and in affine systems
    pub fn raw_z_coord(&self) -> Option<FieldElement<'c>> {
        if self.infinity || self.coordinate_system().z_count() == 0 {
            return None;
        }
        Some(self.curve.field().wrap(self.z))
    }

    /// The x coordinate as stored; equals affine x only once normalized
    pub fn x_coord(&self) -> Option<FieldElement<'c>> {
        self.raw_x_coord()
    }

    /// The y coordinate, converted back from λ on lambda curves; equals
    /// affine y only once normalized
    pub fn y_coord(&self) -> Option<FieldElement<'c>> {
        if self.infinity {
            return None;
        }
        let f = self.curve.field();
        let y = match self.coordinate_system() {
            CoordinateSystem::LambdaProjective if !f.is_zero(&self.x) => {
                let y = f.mul(&f.add(&self.y, &self.x), &self.x);
                if f.is_one(&self.z) {
                    y
                } else {
                    f.div(&y, &self.z)?
                }
            }
            _ => self.y,
        };
        Some(f.wrap(y))
    }

    fn check_normalized(&self, context: &'static str) -> Result<()> {
        if self.infinity {
            return Err(Error::state(context, "point at infinity has no affine coordinates"));
        }
        if !self.is_normalized() {
            return Err(Error::state(context, "point not in normal form"));
        }
        Ok(())
    }

    /// Affine x; `InvalidState` if not normalized or at infinity
    pub fn affine_x_coord(&self) -> Result<FieldElement<'c>> {
        self.check_normalized("affine_x_coord")?;
        self.x_coord()
            .ok_or_else(|| Error::state("affine_x_coord", "point at infinity"))
    }

    /// Affine y; `InvalidState` if not normalized or at infinity
    pub fn affine_y_coord(&self) -> Result<FieldElement<'c>> {
        self.check_normalized("affine_y_coord")?;
        self.y_coord()
            .ok_or_else(|| Error::state("affine_y_coord", "point at infinity"))
    }

    /// Whether the projective coordinate is one (always true in affine systems)
    pub fn is_normalized(&self) -> bool {
        self.infinity
            || self.coordinate_system().z_count() == 0
            || self.curve.field().is_one(&self.z)
    }

    /// The same point with z = 1
    pub fn normalize(&self) -> Self {
        if self.is_normalized() {
            return *self;
        }
        match self.curve.field().invert(&self.z) {
            Some(z_inv) => self.scaled_by_inverse(&z_inv),
            None => Self::infinity_of(self.curve),
        }
    }

    /// [`Point::normalize`] with the inversion blinded by a random non-zero
    /// factor: z^-1 = (z b)^-1 b
    pub fn normalize_blinded<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> Self {
        if self.is_normalized() {
            return *self;
        }
        let f = self.curve.field();
        let blind = *self.curve.random_field_element_mult(rng).words();
        match f.invert(&f.mul(&self.z, &blind)) {
            Some(inv) => self.scaled_by_inverse(&f.mul(&inv, &blind)),
            None => Self::infinity_of(self.curve),
        }
    }

    /// Apply a known z^-1 and set z = 1
    pub(crate) fn scaled_by_inverse(&self, z_inv: &Words) -> Self {
        let f = self.curve.field();
        let (sx, sy) = match self.coordinate_system() {
            CoordinateSystem::Jacobian => {
                let z_inv2 = f.square(z_inv);
                let z_inv3 = f.mul(&z_inv2, z_inv);
                (z_inv2, z_inv3)
            }
            _ => (*z_inv, *z_inv),
        };
        Self::from_raw_affine(self.curve, f.mul(&self.x, &sx), f.mul(&self.y, &sy))
    }

    fn check_curve(&self, other: &Self, context: &'static str) -> Result<()> {
        validate::same_operand(self.curve.is_compatible(other.curve), context)
    }

    /// self + other
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_curve(other, "Point::add")?;
        Ok(self.add_unchecked(other))
    }

    pub(crate) fn add_unchecked(&self, other: &Self) -> Self {
        if self.infinity {
            return *other;
        }
        if other.infinity {
            return *self;
        }
        if self.curve.field().is_binary() {
            self.f2m_add(other)
        } else {
            self.fp_add(other)
        }
    }

    /// self - other
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.check_curve(other, "Point::subtract")?;
        if other.infinity {
            return Ok(*self);
        }
        Ok(self.add_unchecked(&other.negate()))
    }

    /// 2 self
    pub fn twice(&self) -> Self {
        if self.infinity {
            return *self;
        }
        if self.curve.field().is_binary() {
            self.f2m_twice()
        } else {
            self.fp_twice()
        }
    }

    /// 2 self + other
    pub fn twice_plus(&self, other: &Self) -> Result<Self> {
        self.check_curve(other, "Point::twice_plus")?;
        if self.infinity {
            return Ok(*other);
        }
        if other.infinity {
            return Ok(self.twice());
        }
        Ok(self.twice().add_unchecked(other))
    }

    /// 3 self
    pub fn three_times(&self) -> Self {
        if self.infinity {
            return *self;
        }
        self.twice().add_unchecked(self)
    }

    /// 2^e self
    pub fn times_pow2(&self, e: usize) -> Self {
        let mut p = *self;
        for _ in 0..e {
            if p.infinity {
                break;
            }
            p = p.twice();
        }
        p
    }

    /// -self
    pub fn negate(&self) -> Self {
        if self.infinity {
            return *self;
        }
        if self.curve.field().is_binary() {
            self.f2m_negate()
        } else {
            self.fp_negate()
        }
    }

    /// Frobenius map (x, y) -> (x^2, y^2); binary curves only
    pub fn tau(&self) -> Result<Self> {
        self.tau_pow(1)
    }

    /// Frobenius map applied `n` times; binary curves only
    pub fn tau_pow(&self, n: usize) -> Result<Self> {
        if !self.curve.field().is_binary() {
            return Err(Error::NotImplemented {
                feature: "Frobenius map over a prime field",
            });
        }
        if self.infinity {
            return Ok(*self);
        }
        let f = self.curve.field();
        Ok(Self::from_raw(
            self.curve,
            f.square_pow(&self.x, n),
            f.square_pow(&self.y, n),
            f.square_pow(&self.z, n),
        ))
    }

    /// GLV endomorphism (x, y) -> (beta x, y); curves with endomorphism
    /// parameters only
    pub fn endomorphism(&self) -> Result<Self> {
        match self.curve.glv() {
            Some(glv) => Ok(glv.map(self)),
            None => Err(Error::NotImplemented {
                feature: "endomorphism on a curve without GLV parameters",
            }),
        }
    }

    /// k self using the curve's configured multiplier
    pub fn multiply(&self, k: &BigInt) -> Result<Self> {
        self.curve.multiply(self, k)
    }

    /// Curve equation holds and, for cofactor > 1, the point lies in the
    /// prime-order subgroup
    pub fn is_valid(&self) -> bool {
        if self.infinity {
            return true;
        }
        let p = self.normalize();
        if p.infinity || !p.satisfies_curve_equation() {
            return false;
        }
        p.satisfies_order()
    }

    fn satisfies_curve_equation(&self) -> bool {
        let f = self.curve.field();
        let (a, b) = (self.curve.a_words(), self.curve.b_words());
        let (x, y) = (&self.x, &self.y);
        if !f.is_binary() {
            // y^2 = x^3 + a x + b
            let lhs = f.square(y);
            let rhs = f.add(&f.mul(&f.add(&f.square(x), a), x), b);
            return lhs == rhs;
        }
        match self.coordinate_system() {
            CoordinateSystem::LambdaProjective => {
                if f.is_zero(x) {
                    return f.square(y) == *b;
                }
                // (L^2 + L + a) x^2 = x^4 + b
                let x2 = f.square(x);
                let lhs = f.mul(&f.add(&f.add(&f.square(y), y), a), &x2);
                let rhs = f.add(&f.square(&x2), b);
                lhs == rhs
            }
            _ => {
                // (y + x) y = (x + a) x^2 + b
                let lhs = f.mul(&f.add(y, x), y);
                let rhs = f.add(&f.mul(&f.add(x, a), &f.square(x)), b);
                lhs == rhs
            }
        }
    }

    fn satisfies_order(&self) -> bool {
        let curve = self.curve;
        let Some(cofactor) = curve.cofactor() else {
            return true;
        };
        if cofactor.is_one() {
            return true;
        }
        if curve.field().is_binary() {
            if let Some(halvable) = self.binary_halving_check(cofactor) {
                return halvable;
            }
        }
        match curve.order() {
            Some(n) => ReferenceMultiplier
                .multiply_positive(self, n)
                .map(|q| q.is_infinity())
                .unwrap_or(false),
            None => true,
        }
    }

    /// For cofactor 2 or 4, membership in the subgroup is decided by
    /// whether the point can be halved once or twice
    fn binary_halving_check(&self, cofactor: &BigUint) -> Option<bool> {
        let f = self.curve.field();
        let x = self.x_coord()?;
        if *cofactor == BigUint::from(2u32) {
            return x.trace().ok().map(|t| t != 0);
        }
        if *cofactor == BigUint::from(4u32) {
            let a = f.wrap(*self.curve.a_words());
            let l = x.add(&a).ok()?.solve_quadratic().ok()?;
            let Some(l) = l else {
                return Some(false);
            };
            let y = self.y_coord()?;
            let t = x.multiply(&l).ok()?.add(&y).ok()?;
            return t.trace().ok().map(|t| t == 0);
        }
        None
    }
}

impl PartialEq for Point<'_> {
    fn eq(&self, other: &Self) -> bool {
        if self.infinity || other.infinity {
            return self.infinity && other.infinity;
        }
        if !self.curve.is_compatible(other.curve) {
            return false;
        }
        let (p, q) = (self.normalize(), other.normalize());
        p.x == q.x && p.y == q.y
    }
}

impl Eq for Point<'_> {}

impl fmt::Debug for Point<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.infinity {
            return f.write_str("Point(INF)");
        }
        let field = self.curve.field();
        let mut t = f.debug_tuple("Point");
        t.field(&field.wrap(self.x)).field(&field.wrap(self.y));
        if self.coordinate_system().z_count() > 0 {
            t.field(&field.wrap(self.z));
        }
        t.finish()
    }
}
