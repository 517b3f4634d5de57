//! Named elliptic-curve parameters
//!
//! Pure data: prime moduli or reduction polynomials, curve coefficients,
//! group order, cofactor and base point of a few standard curves. Values are
//! big-endian hexadecimal strings; parsing them is left to the consumer.

#![no_std]

pub mod curves;

pub use curves::{curve_by_name, CurveParams, FieldParams, GlvParams, ALL_CURVES};
pub use curves::{SECP224K1_GLV, SECP256K1_GLV};
pub use curves::{SECP192R1, SECP224K1, SECP224R1, SECP256K1, SECP256R1, SECP384R1, SECP521R1};
pub use curves::{SECT163K1, SECT163R2, SECT233K1, SECT283K1};
