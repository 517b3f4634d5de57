//! Elliptic curves over prime and binary fields
//!
//! A [`Curve`] owns its field, coefficients, optional group order and
//! cofactor, and the coordinate system every point on it uses. It is built
//! once, through [`CurveBuilder`], and borrowed by every point and field
//! element created from it.

use alloc::boxed::Box;
use core::fmt;

use ecarith_api::CoordinateSystem;
use ecarith_params::{CurveParams, FieldParams, GlvParams};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::ToPrimitive;
use once_cell::race::OnceBox;
use rand::{CryptoRng, RngCore};

use crate::ec::field::limbs::{ONE, ZERO};
use crate::ec::field::{Field, FieldElement, FieldOps, Words};
use crate::ec::multiplier::glv::GlvEndomorphism;
use crate::ec::multiplier::{tnaf, GlvMultiplier, Multiplier, WNafMultiplier, WTauNafMultiplier};
use crate::ec::point::Point;
use crate::error::{validate, Error, Result};

static WNAF: WNafMultiplier = WNafMultiplier;
static WTNAF: WTauNafMultiplier = WTauNafMultiplier;
static GLV: GlvMultiplier = GlvMultiplier;

/// Scalar multiplication strategy a curve is configured with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MultiplierKind {
    /// WTauNaf on Koblitz curves, Glv on curves with endomorphism
    /// parameters, WNaf everywhere else
    #[default]
    Default,
    /// Windowed non-adjacent form
    WNaf,
    /// Width-4 tau-adic non-adjacent form (Koblitz curves only)
    WTauNaf,
    /// GLV scalar splitting with interleaved wNAF (curves with endomorphism
    /// parameters only)
    Glv,
}

pub(crate) fn parse_hex(name: &'static str, s: &str) -> Result<BigUint> {
    let bytes = if s.len() % 2 == 1 {
        let mut padded = alloc::string::String::with_capacity(s.len() + 1);
        padded.push('0');
        padded.push_str(s);
        hex::decode(padded)
    } else {
        hex::decode(s)
    }
    .map_err(|_| Error::param(name, "malformed hex"))?;
    Ok(BigUint::from_bytes_be(&bytes))
}

/// Hex with an optional leading `-`
pub(crate) fn parse_signed_hex(name: &'static str, s: &str) -> Result<BigInt> {
    match s.strip_prefix('-') {
        Some(digits) => Ok(BigInt::from_biguint(Sign::Minus, parse_hex(name, digits)?)),
        None => Ok(BigInt::from(parse_hex(name, s)?)),
    }
}

enum Source {
    Named(&'static CurveParams),
    Custom {
        field: Field,
        a: BigUint,
        b: BigUint,
    },
}

/// Configures and validates a [`Curve`]
pub struct CurveBuilder {
    source: Source,
    name: Option<&'static str>,
    order: Option<BigUint>,
    cofactor: Option<BigUint>,
    generator: Option<(BigUint, BigUint)>,
    coord: Option<CoordinateSystem>,
    multiplier: MultiplierKind,
    glv: Option<GlvParams>,
}

impl CurveBuilder {
    /// Curve over `field` with coefficients a and b
    pub fn new(field: Field, a: BigUint, b: BigUint) -> Self {
        Self {
            source: Source::Custom { field, a, b },
            name: None,
            order: None,
            cofactor: None,
            generator: None,
            coord: None,
            multiplier: MultiplierKind::Default,
            glv: None,
        }
    }

    /// Curve described by a named parameter set
    pub fn from_params(params: &'static CurveParams) -> Self {
        Self {
            source: Source::Named(params),
            name: Some(params.name),
            order: None,
            cofactor: None,
            generator: None,
            coord: None,
            multiplier: MultiplierKind::Default,
            glv: params.glv,
        }
    }

    /// Display name
    pub fn name(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    /// Order of the prime-order subgroup
    pub fn order(mut self, order: BigUint) -> Self {
        self.order = Some(order);
        self
    }

    /// Cofactor h = #E / n
    pub fn cofactor(mut self, cofactor: BigUint) -> Self {
        self.cofactor = Some(cofactor);
        self
    }

    /// Affine base point
    pub fn generator(mut self, x: BigUint, y: BigUint) -> Self {
        self.generator = Some((x, y));
        self
    }

    /// Coordinate system for every point on the curve
    pub fn coordinate_system(mut self, coord: CoordinateSystem) -> Self {
        self.coord = Some(coord);
        self
    }

    /// Scalar multiplication strategy
    pub fn multiplier(mut self, kind: MultiplierKind) -> Self {
        self.multiplier = kind;
        self
    }

    /// Endomorphism parameters for GLV scalar splitting; needs a prime
    /// field and a known order
    pub fn glv(mut self, params: GlvParams) -> Self {
        self.glv = Some(params);
        self
    }

    /// Validate the configuration and build the curve
    pub fn build(self) -> Result<Curve> {
        let (field, a, b, mut order, mut cofactor, mut generator) = match self.source {
            Source::Named(params) => {
                let field = match params.field {
                    FieldParams::Prime { p } => Field::prime(&parse_hex("p", p)?)?,
                    FieldParams::Binary { m, ks } => Field::binary(m, ks)?,
                };
                (
                    field,
                    parse_hex("a", params.a)?,
                    parse_hex("b", params.b)?,
                    Some(parse_hex("order", params.order)?),
                    Some(BigUint::from(params.cofactor)),
                    Some((parse_hex("gx", params.gx)?, parse_hex("gy", params.gy)?)),
                )
            }
            Source::Custom { field, a, b } => (field, a, b, None, None, None),
        };
        if self.order.is_some() {
            order = self.order;
        }
        if self.cofactor.is_some() {
            cofactor = self.cofactor;
        }
        if self.generator.is_some() {
            generator = self.generator;
        }

        let a = field
            .from_biguint(&a)
            .ok_or_else(|| Error::param("a", "coefficient not a field element"))?;
        let b = field
            .from_biguint(&b)
            .ok_or_else(|| Error::param("b", "coefficient not a field element"))?;
        validate::parameter(
            !(field.is_binary() && field.is_zero(&b)),
            "b",
            "binary curve with b = 0 is singular",
        )?;

        let glv = match self.glv {
            Some(params) => {
                let n = order
                    .as_ref()
                    .ok_or_else(|| Error::param("glv", "endomorphism requires the group order"))?;
                Some(GlvEndomorphism::from_params(&field, n, &params)?)
            }
            None => None,
        };

        let coord = self.coord.unwrap_or(Curve::default_coordinate_system(&field));
        if !Curve::field_supports(&field, coord) {
            return Err(Error::UnsupportedCoordinateSystem { system: coord });
        }

        let a_is_minus_three = !field.is_binary() && {
            let three = field.three(&ONE);
            field.is_zero(&field.add(&a, &three))
        };
        let sqrt_b = if field.is_binary() {
            field.sqrt(&b).unwrap_or(ZERO)
        } else {
            ZERO
        };
        let b_is_small = crate::ec::field::limbs::bit_length(&b) < field.bits() / 2;

        let generator = match generator {
            Some((gx, gy)) => Some((
                field
                    .from_biguint(&gx)
                    .ok_or_else(|| Error::param("generator", "x not a field element"))?,
                field
                    .from_biguint(&gy)
                    .ok_or_else(|| Error::param("generator", "y not a field element"))?,
            )),
            None => None,
        };

        let mut curve = Curve {
            name: self.name,
            field,
            a,
            b,
            sqrt_b,
            a_is_minus_three,
            b_is_small,
            order,
            cofactor,
            generator,
            coord,
            multiplier: MultiplierKind::WNaf,
            tau_si: OnceBox::new(),
            glv,
        };

        curve.multiplier = match self.multiplier {
            MultiplierKind::Default if curve.is_koblitz() => MultiplierKind::WTauNaf,
            MultiplierKind::Default if curve.glv.is_some() => MultiplierKind::Glv,
            MultiplierKind::Default | MultiplierKind::WNaf => MultiplierKind::WNaf,
            MultiplierKind::Glv => {
                validate::parameter(
                    curve.glv.is_some(),
                    "multiplier",
                    "GLV multiplication requires endomorphism parameters",
                )?;
                MultiplierKind::Glv
            }
            MultiplierKind::WTauNaf => {
                validate::parameter(
                    curve.is_koblitz(),
                    "multiplier",
                    "tau-adic multiplication requires a Koblitz curve",
                )?;
                MultiplierKind::WTauNaf
            }
        };
        Ok(curve)
    }
}

/// An elliptic curve with its parameters and active coordinate system
pub struct Curve {
    name: Option<&'static str>,
    field: Field,
    a: Words,
    b: Words,
    sqrt_b: Words,
    a_is_minus_three: bool,
    b_is_small: bool,
    order: Option<BigUint>,
    cofactor: Option<BigUint>,
    generator: Option<(Words, Words)>,
    coord: CoordinateSystem,
    multiplier: MultiplierKind,
    tau_si: OnceBox<[BigInt; 2]>,
    glv: Option<GlvEndomorphism>,
}

impl Curve {
    /// Start configuring a curve from named parameters
    pub fn builder(params: &'static CurveParams) -> CurveBuilder {
        CurveBuilder::from_params(params)
    }

    /// Curve from named parameters with default coordinate system and
    /// multiplier
    pub fn from_params(params: &'static CurveParams) -> Result<Self> {
        CurveBuilder::from_params(params).build()
    }

    /// Jacobian for prime fields, lambda-projective for binary fields
    pub fn default_coordinate_system(field: &Field) -> CoordinateSystem {
        if field.is_binary() {
            CoordinateSystem::LambdaProjective
        } else {
            CoordinateSystem::Jacobian
        }
    }

    fn field_supports(field: &Field, coord: CoordinateSystem) -> bool {
        match coord {
            CoordinateSystem::Affine | CoordinateSystem::Homogeneous => true,
            CoordinateSystem::Jacobian => !field.is_binary(),
            CoordinateSystem::LambdaProjective => field.is_binary(),
            _ => false,
        }
    }

    /// Whether points on this curve can use `coord`
    pub fn supports_coordinate_system(&self, coord: CoordinateSystem) -> bool {
        Self::field_supports(&self.field, coord)
    }

    /// Display name, if any
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// The underlying field
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Coefficient a
    pub fn a(&self) -> FieldElement<'_> {
        self.field.wrap(self.a)
    }

    /// Coefficient b
    pub fn b(&self) -> FieldElement<'_> {
        self.field.wrap(self.b)
    }

    /// Order of the base point subgroup, if known
    pub fn order(&self) -> Option<&BigUint> {
        self.order.as_ref()
    }

    /// Cofactor, if known
    pub fn cofactor(&self) -> Option<&BigUint> {
        self.cofactor.as_ref()
    }

    /// Active coordinate system
    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.coord
    }

    /// Configured scalar multiplication strategy
    pub fn multiplier_kind(&self) -> MultiplierKind {
        self.multiplier
    }

    /// The multiplier [`Curve::multiply`] uses
    pub fn multiplier(&self) -> &'static dyn Multiplier {
        match self.multiplier {
            MultiplierKind::WTauNaf => &WTNAF,
            MultiplierKind::Glv => &GLV,
            _ => &WNAF,
        }
    }

    pub(crate) fn a_words(&self) -> &Words {
        &self.a
    }

    pub(crate) fn b_words(&self) -> &Words {
        &self.b
    }

    pub(crate) fn sqrt_b_words(&self) -> &Words {
        &self.sqrt_b
    }

    pub(crate) fn a_is_minus_three(&self) -> bool {
        self.a_is_minus_three
    }

    pub(crate) fn b_is_small(&self) -> bool {
        self.b_is_small
    }

    /// Binary curve with known order and cofactor, b = 1 and a in {0, 1}
    pub fn is_koblitz(&self) -> bool {
        self.field.is_binary()
            && self.order.is_some()
            && self.cofactor.is_some()
            && self.field.is_one(&self.b)
            && (self.field.is_zero(&self.a) || self.field.is_one(&self.a))
    }

    /// Whether the curve carries GLV endomorphism parameters
    pub fn has_endomorphism(&self) -> bool {
        self.glv.is_some()
    }

    /// The eigenvalue lambda of the endomorphism, if any
    pub fn endomorphism_lambda(&self) -> Option<&BigInt> {
        self.glv.as_ref().map(GlvEndomorphism::lambda)
    }

    pub(crate) fn glv(&self) -> Option<&GlvEndomorphism> {
        self.glv.as_ref()
    }

    /// Same object, or same field, coefficients and coordinate system
    pub fn is_compatible(&self, other: &Curve) -> bool {
        core::ptr::eq(self, other)
            || (self.field == other.field
                && self.a == other.a
                && self.b == other.b
                && self.coord == other.coord)
    }

    /// Lucas-sequence constants s0, s1 for tau-adic reduction, computed once
    pub(crate) fn tau_si(&self) -> Result<&[BigInt; 2]> {
        self.tau_si
            .get_or_try_init(|| tnaf::curve_si(self).map(Box::new))
    }

    /// Field element for `x`; `InvalidValue` if x is negative or not reduced
    pub fn from_integer(&self, x: &BigInt) -> Result<FieldElement<'_>> {
        self.field.from_integer(x)
    }

    /// Field element for `x`; `InvalidValue` if x is not reduced
    pub fn from_biguint(&self, x: &BigUint) -> Result<FieldElement<'_>> {
        self.field.from_biguint_checked(x)
    }

    /// The point at infinity
    pub fn infinity(&self) -> Point<'_> {
        Point::infinity_of(self)
    }

    /// Affine point (x, y), converted to the active coordinate system.
    ///
    /// The curve equation is not checked; see [`Point::is_valid`].
    pub fn create_point(&self, x: &BigInt, y: &BigInt) -> Result<Point<'_>> {
        let x = *self.from_integer(x)?.words();
        let y = *self.from_integer(y)?.words();
        self.point_from_affine(x, y)
    }

    /// Affine point (x, y) that must satisfy the curve equation and, when
    /// the cofactor exceeds one, lie in the prime-order subgroup
    pub fn validate_point(&self, x: &BigInt, y: &BigInt) -> Result<Point<'_>> {
        let p = self.create_point(x, y)?;
        validate::value(p.is_valid(), "validate_point", "point is not on the curve")?;
        Ok(p)
    }

    pub(crate) fn point_from_affine(&self, x: Words, y: Words) -> Result<Point<'_>> {
        let f = &self.field;
        if self.coord == CoordinateSystem::LambdaProjective {
            if f.is_zero(&x) {
                validate::value(
                    f.square(&y) == self.b,
                    "create_point",
                    "y^2 must equal b when x = 0",
                )?;
                return Ok(Point::from_raw_affine(self, x, y));
            }
            let y_over_x = f.div(&y, &x).ok_or(Error::DivisionByZero {
                context: "create_point",
            })?;
            return Ok(Point::from_raw_affine(self, x, f.add(&y_over_x, &x)));
        }
        Ok(Point::from_raw_affine(self, x, y))
    }

    /// Point from raw coordinates in the active system. `zs` must hold
    /// exactly as many z coordinates as the system uses, and z must be
    /// non-zero.
    pub fn create_raw_point(
        &self,
        x: &FieldElement<'_>,
        y: &FieldElement<'_>,
        zs: &[FieldElement<'_>],
    ) -> Result<Point<'_>> {
        validate::value(
            zs.len() == self.coord.z_count(),
            "create_raw_point",
            "wrong number of z coordinates for coordinate system",
        )?;
        for e in core::iter::once(x).chain(core::iter::once(y)).chain(zs.iter()) {
            validate::same_operand(*e.field() == self.field, "create_raw_point")?;
        }
        let z = match zs.first() {
            Some(z) => {
                validate::value(!z.is_zero(), "create_raw_point", "z coordinate is zero")?;
                *z.words()
            }
            None => ONE,
        };
        Ok(Point::from_raw(self, *x.words(), *y.words(), z))
    }

    /// The base point, if the parameters define one
    pub fn generator(&self) -> Option<Point<'_>> {
        let (x, y) = self.generator?;
        self.point_from_affine(x, y).ok()
    }

    /// k P with the configured multiplier; `InvalidOperand` if P belongs to
    /// an incompatible curve
    pub fn multiply<'c>(&self, p: &Point<'c>, k: &BigInt) -> Result<Point<'c>> {
        validate::same_operand(self.is_compatible(p.curve()), "Curve::multiply")?;
        self.multiplier().multiply(p, k)
    }

    /// Normalize every point with a single field inversion
    pub fn normalize_all<'c>(&self, points: &mut [Point<'c>]) -> Result<()> {
        let f = &self.field;
        let mut indices = alloc::vec::Vec::with_capacity(points.len());
        for (i, p) in points.iter().enumerate() {
            validate::same_operand(self.is_compatible(p.curve()), "Curve::normalize_all")?;
            if !p.is_normalized() {
                indices.push(i);
            }
        }
        if indices.is_empty() {
            return Ok(());
        }

        // prefix[i] = z_0 z_1 ... z_i
        let mut prefix = alloc::vec::Vec::with_capacity(indices.len());
        let mut acc = ONE;
        for &i in &indices {
            acc = f.mul(&acc, points[i].raw_words().2);
            prefix.push(acc);
        }

        let mut inv = f.invert(&acc).ok_or(Error::DivisionByZero {
            context: "normalize_all",
        })?;
        for j in (0..indices.len()).rev() {
            let i = indices[j];
            let z_inv = if j == 0 { inv } else { f.mul(&inv, &prefix[j - 1]) };
            inv = f.mul(&inv, points[i].raw_words().2);
            points[i] = points[i].scaled_by_inverse(&z_inv);
        }
        Ok(())
    }

    /// Re-express a point from a compatible curve in this curve's
    /// coordinate system
    pub fn import_point(&self, p: &Point<'_>) -> Result<Point<'_>> {
        let other = p.curve();
        if core::ptr::eq(self, other) {
            let (x, y, z) = p.raw_words();
            if p.is_infinity() {
                return Ok(self.infinity());
            }
            return Ok(Point::from_raw(self, *x, *y, *z));
        }
        validate::same_operand(
            self.field == other.field && self.a == other.a && self.b == other.b,
            "Curve::import_point",
        )?;
        if p.is_infinity() {
            return Ok(self.infinity());
        }
        let n = p.normalize();
        let x = n
            .x_coord()
            .ok_or_else(|| Error::state("import_point", "point at infinity"))?;
        let y = n
            .y_coord()
            .ok_or_else(|| Error::state("import_point", "point at infinity"))?;
        self.point_from_affine(*x.words(), *y.words())
    }

    /// Uniformly random field element
    pub fn random_field_element<R: RngCore + CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> FieldElement<'_> {
        self.field.random_element(rng)
    }

    /// Product of two random non-zero field elements; never zero
    pub fn random_field_element_mult<R: RngCore + CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> FieldElement<'_> {
        let f = &self.field;
        let sample = |rng: &mut R| loop {
            let v = f.random(rng);
            if !f.is_zero(&v) {
                return v;
            }
        };
        let a = sample(rng);
        let b = sample(rng);
        f.wrap(f.mul(&a, &b))
    }

    /// Koblitz parameter mu: 1 when a = 1, -1 when a = 0
    pub(crate) fn tau_mu(&self) -> i8 {
        if self.field.is_zero(&self.a) {
            -1
        } else {
            1
        }
    }

    /// Order as a signed integer, for scalar arithmetic
    pub(crate) fn order_int(&self) -> Option<BigInt> {
        self.order.as_ref().map(|n| BigInt::from(n.clone()))
    }

    /// Cofactor as a machine word, if it fits
    pub(crate) fn cofactor_u32(&self) -> Option<u32> {
        self.cofactor.as_ref()?.to_u32()
    }
}

impl fmt::Debug for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curve")
            .field("name", &self.name)
            .field("binary", &self.field.is_binary())
            .field("bits", &self.field.bits())
            .field("coordinate_system", &self.coord)
            .field("multiplier", &self.multiplier)
            .field("endomorphism", &self.glv.is_some())
            .finish()
    }
}
