//! Precomputed point tables with constant-time retrieval
//!
//! Entries are stored as raw affine coordinates in one flat word array, so
//! every slot has the same size and a lookup touches the same memory no
//! matter which entry is selected.

use alloc::vec::Vec;

use ecarith_internal::constant_time::{ct_index_mask, ct_xor_masked};
use zeroize::Zeroize;

use crate::ec::curve::Curve;
use crate::ec::field::limbs::ZERO;
use crate::ec::field::{FieldOps, Words};
use crate::ec::point::Point;
use crate::error::{validate, Result};

/// Immutable table of normalized points
pub struct LookupTable<'c> {
    curve: &'c Curve,
    words: usize,
    size: usize,
    table: Vec<u64>,
}

impl<'c> LookupTable<'c> {
    /// Build a table from normalized, finite points on `curve`
    pub fn new(curve: &'c Curve, points: &[Point<'_>]) -> Result<Self> {
        let words = curve.field().words();
        let mut table = Vec::with_capacity(points.len() * words * 2);
        for p in points {
            validate::same_operand(curve.is_compatible(p.curve()), "LookupTable::new")?;
            validate::value(!p.is_infinity(), "LookupTable::new", "cannot store the point at infinity")?;
            validate::value(p.is_normalized(), "LookupTable::new", "points must be normalized")?;
            let (x, y, _) = p.raw_words();
            table.extend_from_slice(&x[..words]);
            table.extend_from_slice(&y[..words]);
        }
        Ok(Self {
            curve,
            words,
            size: points.len(),
            table,
        })
    }

    /// Number of entries
    pub fn size(&self) -> usize {
        self.size
    }

    /// Entry `index`, reading every slot so that timing and memory access do
    /// not depend on `index`
    pub fn lookup(&self, index: usize) -> Result<Point<'c>> {
        validate::index("LookupTable::lookup", index, self.size)?;
        let n = self.words;
        let mut x = ZERO;
        let mut y = ZERO;
        for (slot, entry) in self.table.chunks_exact(2 * n).enumerate() {
            let mask = ct_index_mask(slot, index);
            ct_xor_masked(&mut x[..n], &entry[..n], mask);
            ct_xor_masked(&mut y[..n], &entry[n..], mask);
        }
        let p = Point::from_raw_affine(self.curve, x, y);
        x.zeroize();
        y.zeroize();
        Ok(p)
    }

    /// Entry `index` by direct indexing; only for public indices
    pub fn lookup_var(&self, index: usize) -> Result<Point<'c>> {
        validate::index("LookupTable::lookup_var", index, self.size)?;
        let n = self.words;
        let base = index * 2 * n;
        let mut x: Words = ZERO;
        let mut y: Words = ZERO;
        x[..n].copy_from_slice(&self.table[base..base + n]);
        y[..n].copy_from_slice(&self.table[base + n..base + 2 * n]);
        Ok(Point::from_raw_affine(self.curve, x, y))
    }
}

impl Drop for LookupTable<'_> {
    fn drop(&mut self) {
        self.table.zeroize();
    }
}

impl core::fmt::Debug for LookupTable<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LookupTable")
            .field("size", &self.size)
            .field("words", &self.words)
            .finish()
    }
}
