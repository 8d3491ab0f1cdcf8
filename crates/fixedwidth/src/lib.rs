//! Fixed-width binary codec and immutable byte buffers.
//!
//! This crate converts between arbitrary-precision integers and fixed-width
//! two's-complement byte encodings of 8, 16, 32, 64 and 128 bits in either
//! byte order, and reinterprets IEEE-754 binary32/binary64 floats at the bit
//! level. It also provides the byte buffer those encodings are carried in.
//!
//! # Overview
//!
//! - **Integers have no width until they are encoded**: the width, sign and
//!   byte order are chosen per call, and the value must fit.
//! - **Nothing wraps silently**: out-of-range values and wrong-length buffers
//!   are reported as errors, never truncated or padded.
//! - **Buffers are values**: every buffer operation returns a new buffer.
//!
//! # Quick Start
//!
//! ```rust
//! use fixedwidth::codec::{decode_i32_big_endian, encode_i32_big_endian, encode_u8};
//! use fixedwidth::{Buffer, Integer};
//!
//! let bytes = encode_i32_big_endian(&Integer::from(-2)).unwrap();
//! assert_eq!(bytes, [0xFFu8, 0xFF, 0xFF, 0xFE]);
//! assert_eq!(decode_i32_big_endian(&bytes).unwrap(), Integer::from(-2));
//!
//! // 256 does not fit in a u8
//! assert!(encode_u8(&Integer::from(256)).is_err());
//!
//! let framed = Buffer::from("hdr").concat(&bytes).pad_right(8, 0).unwrap();
//! assert_eq!(framed.len(), 8);
//! assert_eq!(framed.index(b"\xFE"), Some(6));
//! ```
//!
//! # Modules
//!
//! - [`model`]: Core data types (Buffer, IntType, Endian, FloatWidth)
//! - [`codec`]: Integer and float encoding/decoding
//! - [`validate`]: Range and length checks
//! - [`dispatch`]: Name-keyed operation registry over dynamic values
//! - [`error`]: Error types
//! - [`limits`]: Size limits
//! - [`util`]: Hex helpers
//!
//! # Errors
//!
//! Every fallible operation returns a `Result`. Errors carry a stable code:
//! - `E001` wrong argument count (registry calls)
//! - `E002` wrong argument kind (registry calls)
//! - `E003` value out of range for the target width
//! - `E004` buffer length mismatch
//! - `E005` unknown operation name
//! - `E006` result larger than [`limits::MAX_BUFFER_LEN`] or not allocatable

pub mod codec;
pub mod dispatch;
pub mod error;
pub mod limits;
pub mod model;
pub mod util;
pub mod validate;

// Re-export commonly used types at crate root
pub use codec::{decode_float, decode_int, encode_float, encode_int, Reader, Writer};
pub use dispatch::{default_registry, Registry, Value};
pub use error::{BufferError, CallError, DecodeError, EncodeError, ErrorCode};
pub use malachite::Integer;
pub use model::{Buffer, Endian, FloatWidth, IntType, IntWidth, Signedness};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
