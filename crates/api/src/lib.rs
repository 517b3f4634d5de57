//! Public API types for the ecarith elliptic-curve engine
//!
//! This crate holds the error type returned across the public surface of the
//! workspace and the small set of value types (such as [`CoordinateSystem`])
//! that every other crate agrees on.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod types;

pub use error::{Error, Result, ResultExt};
pub use types::CoordinateSystem;
