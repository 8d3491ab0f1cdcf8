//! Data model types.
//!
//! This module contains the value types the codec reads and writes:
//! - Byte buffers (immutable byte sequences)
//! - Width descriptors (bit width, signedness, endianness, float width)

pub mod buffer;
pub mod width;

pub use buffer::Buffer;
pub use width::{Endian, FloatWidth, IntType, IntWidth, Signedness};
