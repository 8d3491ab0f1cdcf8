//! Fixed-width two's-complement integer encoding.
//!
//! Values are arbitrary-precision integers with no width of their own. The
//! width only exists at this boundary:
//!
//! ```text
//! encode: value -> range check -> value mod 2^W -> W/8 bytes (endian order)
//! decode: W/8 bytes -> pattern -> pattern - 2^W if signed and MSB set
//! ```
//!
//! The transform is done with `malachite` arithmetic throughout, so 128-bit
//! values go through exactly the same path as 8-bit ones.

use malachite::base::num::arithmetic::traits::UnsignedAbs;
use malachite::base::num::conversion::traits::PowerOf2Digits;
use malachite::{Integer, Natural};

use crate::error::{DecodeError, EncodeError};
use crate::model::width::power_of_two;
use crate::model::{Buffer, Endian, IntType};
use crate::validate::{validate_length, validate_range};

/// Encodes `value` as a `ty.byte_len()`-byte two's-complement buffer.
///
/// Fails with [`EncodeError::OutOfRange`] if `value` is not representable in
/// `ty`; values are never wrapped or clamped.
pub fn encode_int(value: &Integer, ty: IntType, endian: Endian) -> Result<Buffer, EncodeError> {
    validate_range(value, ty)?;
    let pattern = to_pattern(value, ty.bits());
    Ok(Buffer::from(write_pattern(&pattern, ty.byte_len(), endian)))
}

/// Decodes a `ty.byte_len()`-byte two's-complement buffer.
///
/// Fails with [`DecodeError::LengthMismatch`] unless the buffer length is
/// exactly the width of `ty`.
pub fn decode_int(bytes: &[u8], ty: IntType, endian: Endian) -> Result<Integer, DecodeError> {
    validate_length(bytes, ty.byte_len(), ty.name())?;
    let pattern = read_pattern(bytes, endian);
    Ok(from_pattern(pattern, ty))
}

/// Maps an in-range value to its unsigned `bits`-wide pattern.
fn to_pattern(value: &Integer, bits: u32) -> Natural {
    if *value < 0 {
        (power_of_two(bits) + value).unsigned_abs()
    } else {
        value.clone().unsigned_abs()
    }
}

/// Sign-extends a pattern back into a value of `ty`.
fn from_pattern(pattern: Integer, ty: IntType) -> Integer {
    if ty.is_signed() && pattern >= power_of_two(ty.bits() - 1) {
        pattern - power_of_two(ty.bits())
    } else {
        pattern
    }
}

/// Serializes a pattern into exactly `len` bytes.
///
/// Bytes above `len` are dropped, so callers must have checked the range.
pub(crate) fn write_pattern(pattern: &Natural, len: usize, endian: Endian) -> Vec<u8> {
    // Least-significant first; zero has no digits
    let mut bytes: Vec<u8> = PowerOf2Digits::<u8>::to_power_of_2_digits_asc(pattern, 8);
    bytes.resize(len, 0);

    if endian == Endian::Big {
        bytes.reverse();
    }
    bytes
}

/// Reassembles the unsigned pattern held in `bytes`.
pub(crate) fn read_pattern(bytes: &[u8], endian: Endian) -> Integer {
    let base = Integer::from(256u32);
    let accumulate = |acc: Integer, byte: &u8| acc * &base + Integer::from(*byte);
    match endian {
        Endian::Big => bytes.iter().fold(Integer::from(0u8), accumulate),
        Endian::Little => bytes.iter().rev().fold(Integer::from(0u8), accumulate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(v: i128) -> Integer {
        Integer::from(v)
    }

    #[test]
    fn test_write_pattern_pads_to_width() {
        assert_eq!(write_pattern(&Natural::from(0u8), 4, Endian::Little), [0u8; 4]);
        assert_eq!(
            write_pattern(&Natural::from(0x0102u32), 4, Endian::Little),
            [0x02u8, 0x01, 0x00, 0x00]
        );
        assert_eq!(
            write_pattern(&Natural::from(0x0102u32), 4, Endian::Big),
            [0x00u8, 0x00, 0x01, 0x02]
        );
        assert_eq!(
            write_pattern(&Natural::from(u128::MAX), 16, Endian::Big),
            [0xFFu8; 16]
        );
    }

    #[test]
    fn test_endianness() {
        let le = encode_int(&int(1), IntType::I32, Endian::Little).unwrap();
        let be = encode_int(&int(1), IntType::I32, Endian::Big).unwrap();
        assert_eq!(le, [0x01u8, 0x00, 0x00, 0x00]);
        assert_eq!(be, [0x00u8, 0x00, 0x00, 0x01]);

        let le = encode_int(&int(0x0102), IntType::U16, Endian::Little).unwrap();
        assert_eq!(le, [0x02u8, 0x01]);
    }

    #[test]
    fn test_twos_complement() {
        assert_eq!(encode_int(&int(-1), IntType::I8, Endian::Little).unwrap(), [0xFFu8]);
        assert_eq!(
            encode_int(&int(-1), IntType::I32, Endian::Little).unwrap(),
            [0xFFu8, 0xFF, 0xFF, 0xFF]
        );
        assert_eq!(
            encode_int(&int(-2), IntType::I16, Endian::Big).unwrap(),
            [0xFFu8, 0xFE]
        );
        assert_eq!(decode_int(&[0x80], IntType::I8, Endian::Little).unwrap(), int(-128));
        assert_eq!(decode_int(&[0x80], IntType::U8, Endian::Little).unwrap(), int(128));
        assert_eq!(decode_int(&[0x7F], IntType::I8, Endian::Little).unwrap(), int(127));
    }

    #[test]
    fn test_matches_native_byte_order() {
        let v: i64 = -0x0123_4567_89AB_CDEF;
        let le = encode_int(&Integer::from(v), IntType::I64, Endian::Little).unwrap();
        let be = encode_int(&Integer::from(v), IntType::I64, Endian::Big).unwrap();
        assert_eq!(le, v.to_le_bytes());
        assert_eq!(be, v.to_be_bytes());

        let u: u128 = 0x0011_2233_4455_6677_8899_AABB_CCDD_EEFF;
        let le = encode_int(&Integer::from(u), IntType::U128, Endian::Little).unwrap();
        assert_eq!(le, u.to_le_bytes());
    }

    #[test]
    fn test_128_bit_extremes() {
        for (value, ty) in [
            (Integer::from(i128::MIN), IntType::I128),
            (Integer::from(i128::MAX), IntType::I128),
            (Integer::from(u128::MAX), IntType::U128),
        ] {
            for endian in Endian::ALL {
                let buf = encode_int(&value, ty, endian).unwrap();
                assert_eq!(buf.len(), 16);
                assert_eq!(decode_int(buf.as_bytes(), ty, endian).unwrap(), value);
            }
        }
        let min = encode_int(&Integer::from(i128::MIN), IntType::I128, Endian::Big).unwrap();
        assert_eq!(min.get(0), Some(0x80));
        assert!(min.iter().skip(1).all(|b| b == 0));
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(encode_int(&int(256), IntType::U8, Endian::Little).is_err());
        assert!(encode_int(&int(-1), IntType::U8, Endian::Little).is_err());
        assert!(encode_int(&int(127), IntType::I8, Endian::Little).is_ok());
        assert!(matches!(
            encode_int(&int(128), IntType::I8, Endian::Little),
            Err(EncodeError::OutOfRange { .. })
        ));

        let huge = Integer::from(u128::MAX) * Integer::from(u128::MAX);
        assert!(encode_int(&huge, IntType::U128, Endian::Little).is_err());
        assert!(encode_int(&-huge, IntType::I128, Endian::Little).is_err());
    }

    #[test]
    fn test_length_mismatch_rejected() {
        assert!(decode_int(&[0; 4], IntType::I32, Endian::Little).is_ok());
        for len in [0usize, 3, 5] {
            let bytes = vec![0u8; len];
            assert_eq!(
                decode_int(&bytes, IntType::I32, Endian::Little),
                Err(DecodeError::LengthMismatch {
                    ty: "i32",
                    expected: 4,
                    actual: len
                })
            );
        }
    }

    #[test]
    fn test_fixed_output_length() {
        for ty in IntType::ALL {
            for value in [ty.min_value(), Integer::from(0), ty.max_value()] {
                let buf = encode_int(&value, ty, Endian::Big).unwrap();
                assert_eq!(buf.len(), ty.byte_len(), "{ty} {value}");
            }
        }
    }
}
