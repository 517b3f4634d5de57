//! Curve parameter records and lookup by name

pub mod binary;
pub mod prime;

pub use binary::{SECT163K1, SECT163R2, SECT233K1, SECT283K1};
pub use prime::{SECP224K1_GLV, SECP256K1_GLV, SECP192R1, SECP224K1, SECP224R1, SECP256K1, SECP256R1, SECP384R1, SECP521R1};

/// Description of the underlying field of a curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldParams {
    /// Prime field GF(p)
    Prime {
        /// Prime modulus, big-endian hex
        p: &'static str,
    },
    /// Binary field GF(2^m) reduced by x^m + x^k3 + x^k2 + x^k1 + 1
    Binary {
        /// Field degree
        m: usize,
        /// Reduction terms in ascending order; one entry for a trinomial,
        /// three for a pentanomial
        ks: &'static [usize],
    },
}

/// Parameters of one named curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveParams {
    /// Canonical SEC 2 name
    pub name: &'static str,
    /// Other common names (NIST, ANSI)
    pub aliases: &'static [&'static str],
    /// Underlying field
    pub field: FieldParams,
    /// Coefficient a, big-endian hex
    pub a: &'static str,
    /// Coefficient b, big-endian hex
    pub b: &'static str,
    /// Order of the base point, big-endian hex
    pub order: &'static str,
    /// Cofactor
    pub cofactor: u32,
    /// Affine x of the base point, big-endian hex
    pub gx: &'static str,
    /// Affine y of the base point, big-endian hex
    pub gy: &'static str,
    /// Endomorphism data, for curves that admit one
    pub glv: Option<GlvParams>,
}

/// Efficient endomorphism (x, y) -> (beta x, y) acting as multiplication by
/// lambda on the prime-order subgroup, with the short lattice basis used to
/// split scalars into two half-length parts.
///
/// Signed values carry a leading `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlvParams {
    /// Non-trivial cube root of unity in the base field
    pub beta: &'static str,
    /// Cube root of unity modulo the order, matching `beta`
    pub lambda: &'static str,
    /// First basis vector (a, b) with a + b lambda = 0 mod n
    pub v1: [&'static str; 2],
    /// Second basis vector
    pub v2: [&'static str; 2],
    /// round(2^bits * v2[1] / n)
    pub g1: &'static str,
    /// round(-2^bits * v1[1] / n)
    pub g2: &'static str,
    /// Fixed-point precision of g1 and g2
    pub bits: u32,
}

/// Every parameter set shipped with this crate
pub const ALL_CURVES: &[&CurveParams] = &[
    &SECP192R1, &SECP224K1, &SECP224R1, &SECP256K1, &SECP256R1, &SECP384R1, &SECP521R1,
    &SECT163K1, &SECT163R2, &SECT233K1, &SECT283K1,
];

/// Find a curve by its SEC name or one of its aliases (ASCII case-insensitive)
pub fn curve_by_name(name: &str) -> Option<&'static CurveParams> {
    ALL_CURVES.iter().copied().find(|c| {
        c.name.eq_ignore_ascii_case(name) || c.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    })
}
