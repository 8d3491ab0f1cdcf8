//! Precondition checks shared by the codec and the buffer operations.
//!
//! Every check runs before any work is done, so a failed operation never
//! produces a partial result.

use malachite::Integer;

use crate::error::{BufferError, DecodeError, EncodeError};
use crate::limits::MAX_BUFFER_LEN;
use crate::model::IntType;

/// Validates that `value` is encodable as `ty`.
pub fn validate_range(value: &Integer, ty: IntType) -> Result<(), EncodeError> {
    let min = ty.min_value();
    let max = ty.max_value();
    if *value < min || *value > max {
        return Err(EncodeError::OutOfRange {
            value: value.clone(),
            ty,
            min,
            max,
        });
    }
    Ok(())
}

/// Validates that a buffer holds exactly `expected` bytes for a decode of `ty`.
pub fn validate_length(bytes: &[u8], expected: usize, ty: &'static str) -> Result<(), DecodeError> {
    if bytes.len() != expected {
        return Err(DecodeError::LengthMismatch {
            ty,
            expected,
            actual: bytes.len(),
        });
    }
    Ok(())
}

/// Validates that two operands of a byte-wise operation have equal lengths.
pub fn validate_equal_length(op: &'static str, left: &[u8], right: &[u8]) -> Result<(), BufferError> {
    if left.len() != right.len() {
        return Err(BufferError::LengthMismatch {
            op,
            left: left.len(),
            right: right.len(),
        });
    }
    Ok(())
}

/// Checks a requested result length against [`MAX_BUFFER_LEN`] and reserves
/// exactly that much.
///
/// The returned vector is empty with capacity for `requested` bytes.
pub fn reserve_result(op: &'static str, requested: u128) -> Result<Vec<u8>, BufferError> {
    let len = usize::try_from(requested)
        .ok()
        .filter(|&len| len <= MAX_BUFFER_LEN)
        .ok_or(BufferError::LengthExceedsLimit {
            op,
            requested,
            max: MAX_BUFFER_LEN,
        })?;
    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(len)
        .map_err(|_| BufferError::AllocationFailed { op, requested: len })?;
    Ok(bytes)
}
