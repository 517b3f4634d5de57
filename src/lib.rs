//! # ecarith
//!
//! Elliptic-curve arithmetic over prime fields GF(p) and binary fields
//! GF(2^m).
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ecarith = "0.1"
//! ```
//!
//! ```
//! use ecarith::prelude::*;
//! use ecarith::params::SECP256R1;
//! use num_bigint::BigInt;
//!
//! let curve = Curve::from_params(&SECP256R1)?;
//! let g = curve.generator().expect("named curves carry a base point");
//! let p = curve.multiply(&g, &BigInt::from(7))?;
//! assert_eq!(p, g.times_pow2(3).subtract(&g)?);
//! # Ok::<(), ecarith::prelude::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`ecarith-api`]: Error type and shared value types
//! - [`ecarith-params`]: Named curve parameters
//! - [`ecarith-algorithms`]: Fields, points, curves, lookup tables and multipliers
//! - [`ecarith-internal`]: Constant-time helpers

#![cfg_attr(not(feature = "std"), no_std)]

pub use ecarith_algorithms as algorithms;
pub use ecarith_api as api;
pub use ecarith_internal as internal;
pub use ecarith_params as params;

/// Common imports for ecarith users
pub mod prelude {
    // Error types
    pub use crate::algorithms::{Error, Result};

    // Core types
    pub use crate::algorithms::ec::{
        Curve, CurveBuilder, Field, FieldElement, FieldOps, LookupTable, MultiplierKind, Point,
        PrecomputedPoint,
    };
    pub use crate::api::CoordinateSystem;

    // Multipliers
    pub use crate::algorithms::ec::{
        GlvMultiplier, Multiplier, ReferenceMultiplier, WNafMultiplier, WTauNafMultiplier,
    };
}
