//! Plain double-and-add

use num_bigint::BigUint;

use super::Multiplier;
use crate::ec::point::Point;
use crate::error::Result;

/// Left-to-right double-and-add. Slow and not constant-time; used for
/// subgroup checks and as a test oracle.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceMultiplier;

impl Multiplier for ReferenceMultiplier {
    fn multiply_positive<'c>(&self, p: &Point<'c>, k: &BigUint) -> Result<Point<'c>> {
        let mut q = p.curve().infinity();
        for i in (0..k.bits()).rev() {
            q = q.twice();
            if k.bit(i) {
                q = q.add_unchecked(p);
            }
        }
        Ok(q)
    }
}
