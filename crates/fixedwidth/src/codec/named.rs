//! Named encode/decode operations.
//!
//! One function per width, signedness and byte order, following the
//! `encode_<sign><width>[_<endian>_endian]` naming scheme. 8-bit values have
//! a single byte and therefore no byte-order suffix.
//!
//! These are thin wrappers over [`encode_int`]/[`decode_int`] and the float
//! functions; they exist so callers (and the operation registry) can name a
//! fixed layout directly.

use malachite::Integer;

use crate::codec::float::{decode_f32, decode_f64, encode_f32, encode_f64};
use crate::codec::int::{decode_int, encode_int};
use crate::error::{DecodeError, EncodeError};
use crate::model::{Buffer, Endian, IntType};

macro_rules! int_ops {
    ($($encode:ident, $decode:ident => $ty:expr, $endian:expr;)*) => {
        $(
            pub fn $encode(value: &Integer) -> Result<Buffer, EncodeError> {
                encode_int(value, $ty, $endian)
            }

            pub fn $decode(bytes: impl AsRef<[u8]>) -> Result<Integer, DecodeError> {
                decode_int(bytes.as_ref(), $ty, $endian)
            }
        )*
    };
}

macro_rules! float_ops {
    ($($encode:ident, $decode:ident => $float:ty, $enc:ident, $dec:ident, $endian:expr;)*) => {
        $(
            pub fn $encode(value: $float) -> Buffer {
                $enc(value, $endian)
            }

            pub fn $decode(bytes: impl AsRef<[u8]>) -> Result<$float, DecodeError> {
                $dec(bytes.as_ref(), $endian)
            }
        )*
    };
}

int_ops! {
    encode_i8, decode_i8 => IntType::I8, Endian::Little;
    encode_u8, decode_u8 => IntType::U8, Endian::Little;

    encode_i16_little_endian, decode_i16_little_endian => IntType::I16, Endian::Little;
    encode_i16_big_endian, decode_i16_big_endian => IntType::I16, Endian::Big;
    encode_u16_little_endian, decode_u16_little_endian => IntType::U16, Endian::Little;
    encode_u16_big_endian, decode_u16_big_endian => IntType::U16, Endian::Big;

    encode_i32_little_endian, decode_i32_little_endian => IntType::I32, Endian::Little;
    encode_i32_big_endian, decode_i32_big_endian => IntType::I32, Endian::Big;
    encode_u32_little_endian, decode_u32_little_endian => IntType::U32, Endian::Little;
    encode_u32_big_endian, decode_u32_big_endian => IntType::U32, Endian::Big;

    encode_i64_little_endian, decode_i64_little_endian => IntType::I64, Endian::Little;
    encode_i64_big_endian, decode_i64_big_endian => IntType::I64, Endian::Big;
    encode_u64_little_endian, decode_u64_little_endian => IntType::U64, Endian::Little;
    encode_u64_big_endian, decode_u64_big_endian => IntType::U64, Endian::Big;

    encode_i128_little_endian, decode_i128_little_endian => IntType::I128, Endian::Little;
    encode_i128_big_endian, decode_i128_big_endian => IntType::I128, Endian::Big;
    encode_u128_little_endian, decode_u128_little_endian => IntType::U128, Endian::Little;
    encode_u128_big_endian, decode_u128_big_endian => IntType::U128, Endian::Big;
}

float_ops! {
    encode_f32_little_endian, decode_f32_little_endian => f32, encode_f32, decode_f32, Endian::Little;
    encode_f32_big_endian, decode_f32_big_endian => f32, encode_f32, decode_f32, Endian::Big;
    encode_f64_little_endian, decode_f64_little_endian => f64, encode_f64, decode_f64, Endian::Little;
    encode_f64_big_endian, decode_f64_big_endian => f64, encode_f64, decode_f64, Endian::Big;
}
