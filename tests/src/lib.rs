//! Shared fixtures for the ecarith integration and property tests

pub mod curves;
pub mod vectors;

use ecarith_algorithms::ec::Point;
use num_bigint::{BigInt, BigUint, Sign};

/// Parse a big-endian hex string, panicking on malformed input
pub fn hex_uint(s: &str) -> BigUint {
    let s = s.trim_start_matches("0x");
    let padded = if s.len() % 2 == 1 {
        format!("0{}", s)
    } else {
        s.to_string()
    };
    let bytes = hex::decode(padded).expect("test vector is valid hex");
    BigUint::from_bytes_be(&bytes)
}

/// A signed scalar from raw bytes, reduced below 2^(8 * bytes.len())
pub fn scalar_from_bytes(bytes: &[u8], negative: bool) -> BigInt {
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    BigInt::from_bytes_be(sign, bytes)
}

/// Affine (x, y) of a finite point as integers
pub fn affine_coords(p: &Point<'_>) -> (BigUint, BigUint) {
    let n = p.normalize();
    (
        n.affine_x_coord().expect("finite point").to_biguint(),
        n.affine_y_coord().expect("finite point").to_biguint(),
    )
}
