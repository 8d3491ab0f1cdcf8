//! IEEE-754 bit-level float encoding.
//!
//! A float is encoded by reinterpreting its bits as an unsigned integer of
//! the same width and serializing that pattern exactly like the unsigned
//! integer path. Every bit pattern is a valid float, so there is no range
//! check; NaN payloads and signed zeros survive a round trip unchanged.

use malachite::Natural;

use crate::codec::int::{read_pattern, write_pattern};
use crate::error::DecodeError;
use crate::model::{Buffer, Endian, FloatWidth};
use crate::validate::validate_length;

pub fn encode_f32(value: f32, endian: Endian) -> Buffer {
    let pattern = Natural::from(value.to_bits());
    Buffer::from(write_pattern(&pattern, FloatWidth::F32.byte_len(), endian))
}

pub fn encode_f64(value: f64, endian: Endian) -> Buffer {
    let pattern = Natural::from(value.to_bits());
    Buffer::from(write_pattern(&pattern, FloatWidth::F64.byte_len(), endian))
}

pub fn decode_f32(bytes: &[u8], endian: Endian) -> Result<f32, DecodeError> {
    validate_length(bytes, FloatWidth::F32.byte_len(), "f32")?;
    let pattern = read_pattern(bytes, endian);
    // Four bytes always fit in u32
    Ok(f32::from_bits(u32::try_from(&pattern).unwrap_or(0)))
}

pub fn decode_f64(bytes: &[u8], endian: Endian) -> Result<f64, DecodeError> {
    validate_length(bytes, FloatWidth::F64.byte_len(), "f64")?;
    let pattern = read_pattern(bytes, endian);
    // Eight bytes always fit in u64
    Ok(f64::from_bits(u64::try_from(&pattern).unwrap_or(0)))
}

/// Encodes a host float at the given width.
///
/// For [`FloatWidth::F32`] the value is first narrowed to binary32 with
/// round-to-nearest.
pub fn encode_float(value: f64, width: FloatWidth, endian: Endian) -> Buffer {
    match width {
        FloatWidth::F32 => encode_f32(value as f32, endian),
        FloatWidth::F64 => encode_f64(value, endian),
    }
}

/// Decodes a float of the given width into a host float.
///
/// Widening binary32 to binary64 is exact.
pub fn decode_float(bytes: &[u8], width: FloatWidth, endian: Endian) -> Result<f64, DecodeError> {
    match width {
        FloatWidth::F32 => decode_f32(bytes, endian).map(f64::from),
        FloatWidth::F64 => decode_f64(bytes, endian),
    }
}
