//! Sequential reading and writing of fixed-width values.
//!
//! [`Writer`] packs several values back to back into one buffer and
//! [`Reader`] reads them out again in the same order. Each value uses the
//! same encoding as the single-value functions in [`crate::codec::int`] and
//! [`crate::codec::float`].

use malachite::Integer;

use crate::codec::float::{decode_f32, decode_f64, encode_f32, encode_f64};
use crate::codec::int::{decode_int, encode_int};
use crate::error::{DecodeError, EncodeError};
use crate::model::{Buffer, Endian, IntType};

// =============================================================================
// DECODING
// =============================================================================

/// Reader for decoding a sequence of fixed-width values.
///
/// Wraps a byte slice and provides methods for reading values with bounds
/// checking. Running out of input reports which field was being read.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the current position in the data.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the remaining bytes.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Returns the number of remaining bytes.
    pub fn remaining_len(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns true if all data has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Reads a single byte.
    #[inline]
    pub fn read_byte(&mut self, context: &'static str) -> Result<u8, DecodeError> {
        let byte = *self
            .data
            .get(self.pos)
            .ok_or(DecodeError::UnexpectedEof { context })?;
        self.pos += 1;
        Ok(byte)
    }

    /// Reads exactly n bytes.
    #[inline]
    pub fn read_bytes(&mut self, n: usize, context: &'static str) -> Result<&'a [u8], DecodeError> {
        if n > self.remaining_len() {
            return Err(DecodeError::UnexpectedEof { context });
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    /// Reads an integer of type `ty`.
    pub fn read_int(
        &mut self,
        ty: IntType,
        endian: Endian,
        context: &'static str,
    ) -> Result<Integer, DecodeError> {
        let bytes = self.read_bytes(ty.byte_len(), context)?;
        decode_int(bytes, ty, endian)
    }

    /// Reads an IEEE-754 binary32 value.
    pub fn read_f32(&mut self, endian: Endian, context: &'static str) -> Result<f32, DecodeError> {
        let bytes = self.read_bytes(4, context)?;
        decode_f32(bytes, endian)
    }

    /// Reads an IEEE-754 binary64 value.
    pub fn read_f64(&mut self, endian: Endian, context: &'static str) -> Result<f64, DecodeError> {
        let bytes = self.read_bytes(8, context)?;
        decode_f64(bytes, endian)
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Writer for encoding a sequence of fixed-width values.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Creates a new writer.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates a new writer with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Returns the written bytes as a buffer.
    pub fn into_buffer(self) -> Buffer {
        Buffer::from(self.buf)
    }

    /// Returns a reference to the written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the number of bytes written.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if no bytes have been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Writes a single byte.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    /// Writes raw bytes.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes an integer of type `ty`.
    ///
    /// Nothing is written if the value is out of range.
    pub fn write_int(&mut self, value: &Integer, ty: IntType, endian: Endian) -> Result<(), EncodeError> {
        let encoded = encode_int(value, ty, endian)?;
        self.buf.extend_from_slice(encoded.as_bytes());
        Ok(())
    }

    /// Writes an IEEE-754 binary32 value.
    pub fn write_f32(&mut self, value: f32, endian: Endian) {
        self.buf.extend_from_slice(encode_f32(value, endian).as_bytes());
    }

    /// Writes an IEEE-754 binary64 value.
    pub fn write_f64(&mut self, value: f64, endian: Endian) {
        self.buf.extend_from_slice(encode_f64(value, endian).as_bytes());
    }
}
