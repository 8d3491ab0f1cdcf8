//! Fixed-width binary encoding/decoding.
//!
//! - [`int`]: two's-complement integers of 8 to 128 bits
//! - [`float`]: IEEE-754 binary32/binary64 bit patterns
//! - [`named`]: one function per layout (`encode_i32_big_endian`, ...)
//! - [`primitives`]: sequential [`Reader`]/[`Writer`] over several values

pub mod float;
pub mod int;
pub mod named;
pub mod primitives;

pub use float::{decode_f32, decode_f64, decode_float, encode_f32, encode_f64, encode_float};
pub use int::{decode_int, encode_int};
pub use named::*;
pub use primitives::{Reader, Writer};
