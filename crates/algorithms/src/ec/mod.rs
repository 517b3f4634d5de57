//! Elliptic-curve arithmetic over prime and binary fields
//!
//! The layers build on each other:
//!
//! * [`field`]: GF(p) and GF(2^m) elements
//! * [`point`] and [`curve`]: group law in affine and projective coordinates
//! * [`lookup`]: constant-time tables of precomputed points
//! * [`multiplier`]: windowed NAF, GLV splitting on secp256k1 and, on
//!   Koblitz curves, tau-adic NAF

pub mod curve;
pub mod field;
pub mod lookup;
pub mod multiplier;
pub mod point;

pub use curve::{Curve, CurveBuilder, MultiplierKind};
pub use field::{BinaryField, Field, FieldElement, FieldOps, PrimeField};
pub use lookup::LookupTable;
pub use multiplier::{
    GlvMultiplier, Multiplier, PrecomputedPoint, ReferenceMultiplier, WNafMultiplier,
    WTauNafMultiplier,
};
pub use point::Point;
