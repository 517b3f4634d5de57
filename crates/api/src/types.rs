//! Value types shared across the workspace

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Coordinate system a curve performs its point arithmetic in.
///
/// The numeric identifiers are stable and match the conventional ordering used
/// by curve libraries, so they can be stored or exchanged as small integers.
/// Which systems are actually implemented is decided by each curve; see
/// `Curve::supports_coordinate_system` in `ecarith-algorithms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CoordinateSystem {
    /// Affine (x, y)
    Affine,
    /// Homogeneous projective (X : Y : Z), x = X/Z, y = Y/Z
    Homogeneous,
    /// Jacobian (X : Y : Z), x = X/Z², y = Y/Z³
    Jacobian,
    /// Jacobian with cached Z² and Z³
    JacobianChudnovsky,
    /// Jacobian with cached a·Z⁴
    JacobianModified,
    /// Lambda coordinates (x, λ) with λ = x + y/x
    LambdaAffine,
    /// Lambda-projective (X : L : Z), x = X/Z, λ = L/Z
    LambdaProjective,
    /// Skewed projective coordinates
    Skewed,
}

impl CoordinateSystem {
    /// All known coordinate systems, in identifier order
    pub const ALL: [CoordinateSystem; 8] = [
        CoordinateSystem::Affine,
        CoordinateSystem::Homogeneous,
        CoordinateSystem::Jacobian,
        CoordinateSystem::JacobianChudnovsky,
        CoordinateSystem::JacobianModified,
        CoordinateSystem::LambdaAffine,
        CoordinateSystem::LambdaProjective,
        CoordinateSystem::Skewed,
    ];

    /// Stable numeric identifier
    pub fn id(self) -> u8 {
        match self {
            CoordinateSystem::Affine => 0,
            CoordinateSystem::Homogeneous => 1,
            CoordinateSystem::Jacobian => 2,
            CoordinateSystem::JacobianChudnovsky => 3,
            CoordinateSystem::JacobianModified => 4,
            CoordinateSystem::LambdaAffine => 5,
            CoordinateSystem::LambdaProjective => 6,
            CoordinateSystem::Skewed => 7,
        }
    }

    /// Look up a coordinate system by its numeric identifier
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    /// Number of projective coordinates carried besides x and y
    pub fn z_count(self) -> usize {
        match self {
            CoordinateSystem::Affine | CoordinateSystem::LambdaAffine => 0,
            CoordinateSystem::Homogeneous
            | CoordinateSystem::Jacobian
            | CoordinateSystem::LambdaProjective
            | CoordinateSystem::Skewed => 1,
            CoordinateSystem::JacobianModified => 2,
            CoordinateSystem::JacobianChudnovsky => 3,
        }
    }
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CoordinateSystem::Affine => "affine",
            CoordinateSystem::Homogeneous => "homogeneous",
            CoordinateSystem::Jacobian => "jacobian",
            CoordinateSystem::JacobianChudnovsky => "jacobian-chudnovsky",
            CoordinateSystem::JacobianModified => "jacobian-modified",
            CoordinateSystem::LambdaAffine => "lambda-affine",
            CoordinateSystem::LambdaProjective => "lambda-projective",
            CoordinateSystem::Skewed => "skewed",
        };
        f.write_str(name)
    }
}
