//! Checks shared by the mutators and the arithmetic operations.
//!
//! Each check is a pure function of its inputs so callers can run it before
//! touching any state.
use crate::error::{Result, VectorError};

/// Both operands of a binary operation must have the same length.
#[inline]
pub fn check_dimensions(expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(VectorError::DimensionMismatch { expected, found });
    }
    Ok(())
}

/// `index` must lie in `0..bound`.
///
/// Insertion passes `len + 1` as the bound so that appending at the end is
/// accepted.
#[inline]
pub fn check_index(index: usize, bound: usize) -> Result<()> {
    if index >= bound {
        return Err(VectorError::IndexOutOfRange { index, bound });
    }
    Ok(())
}

/// A vector may not hold more than `max_size` elements.
#[inline]
pub fn check_size(requested: usize, max_size: u64) -> Result<()> {
    let requested = requested as u64;
    if requested > max_size {
        return Err(VectorError::CapacityOverflow {
            requested,
            max_size,
        });
    }
    Ok(())
}

/// Growing from `current` to `target` needs `target - current` fill values.
#[inline]
pub fn check_fill(current: usize, target: usize, provided: usize) -> Result<()> {
    let needed = target.saturating_sub(current);
    if provided < needed {
        return Err(VectorError::InsufficientFillValues { needed, provided });
    }
    Ok(())
}

/// Divisors must be non-zero.
#[inline]
pub fn check_divisor<T: num_traits::Zero>(divisor: &T) -> Result<()> {
    if divisor.is_zero() {
        return Err(VectorError::InvalidOperand("division by zero".to_string()));
    }
    Ok(())
}
