//! Validation utilities for curve arithmetic

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate that a value lies in the accepted range
#[inline(always)]
pub fn value(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::value(context, reason));
    }
    Ok(())
}

/// Validate that two operands share a field or curve
#[inline(always)]
pub fn same_operand(condition: bool, context: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::operand(context));
    }
    Ok(())
}

/// Validate a table or window index
#[inline(always)]
pub fn index(context: &'static str, index: usize, size: usize) -> Result<()> {
    if index >= size {
        return Err(Error::value(context, "index out of range"));
    }
    Ok(())
}
