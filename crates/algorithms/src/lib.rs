//! Generic elliptic-curve arithmetic with constant-time table lookup
//!
//! This crate implements field arithmetic over GF(p) and GF(2^m), curve
//! points in several coordinate systems, and scalar multiplication by
//! windowed NAF, GLV splitting on curves with an efficient endomorphism or,
//! on Koblitz curves, width-4 tau-adic NAF.
//! The library is designed to be usable in both `std` and `no_std`
//! environments; an allocator is always required.
//!
//! # Security Features
//!
//! - Secret-indexed table reads touch every entry under a mask
//! - Modular reduction without data-dependent branches
//! - Digit expansions and tables are zeroized after use
//! - Blinded normalization for callers that need it

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Curve arithmetic
pub mod ec;
pub use ec::{
    Curve, CurveBuilder, Field, FieldElement, LookupTable, Multiplier, MultiplierKind, Point,
    PrecomputedPoint,
};

// Shared value types
pub use ecarith_api::CoordinateSystem;
