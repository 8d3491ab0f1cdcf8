//! Immutable byte buffer.
//!
//! [`Buffer`] is an ordered, length-known sequence of bytes treated as a value:
//! every transforming operation returns a fresh buffer and leaves its inputs
//! untouched. Operations that combine two buffers byte-for-byte require equal
//! lengths and report a [`BufferError`] otherwise.

use std::cmp::Ordering;
use std::fmt;

use crate::error::BufferError;
use crate::util::hex::to_hex;
use crate::validate::{reserve_result, validate_equal_length};

/// An immutable sequence of bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Buffer {
    bytes: Vec<u8>,
}

impl Buffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Creates a buffer of `len` copies of `byte`.
    pub fn filled(len: usize, byte: u8) -> Self {
        Self {
            bytes: vec![byte; len],
        }
    }

    /// Returns the bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the buffer and returns its storage.
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the byte at `index`, if any.
    pub fn get(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.bytes.iter().copied()
    }

    // =========================================================================
    // SLICING AND CONCATENATION
    // =========================================================================

    /// Returns the bytes in `[start, end)`.
    ///
    /// Negative indices count from the end (`-1` is the last byte). Both
    /// indices are clamped into `[0, len]` after resolving negativity, and an
    /// inverted range yields an empty buffer.
    pub fn slice(&self, start: i64, end: i64) -> Buffer {
        let start = self.resolve_index(start);
        let end = self.resolve_index(end);
        if start >= end {
            return Buffer::new();
        }
        Buffer::from(&self.bytes[start..end])
    }

    fn resolve_index(&self, index: i64) -> usize {
        let len = i64::try_from(self.bytes.len()).unwrap_or(i64::MAX);
        let resolved = if index < 0 { index.saturating_add(len) } else { index };
        // clamped into [0, len], which came from a usize
        resolved.clamp(0, len) as usize
    }

    /// Returns `self` followed by `other`.
    pub fn concat(&self, other: impl AsRef<[u8]>) -> Buffer {
        let other = other.as_ref();
        let mut bytes = Vec::with_capacity(self.bytes.len() + other.len());
        bytes.extend_from_slice(&self.bytes);
        bytes.extend_from_slice(other);
        Buffer { bytes }
    }

    /// Returns `n` concatenated copies of the buffer.
    ///
    /// Fails if the result would exceed [`MAX_BUFFER_LEN`](crate::limits::MAX_BUFFER_LEN).
    pub fn repeat(&self, n: usize) -> Result<Buffer, BufferError> {
        if self.bytes.is_empty() {
            return Ok(Buffer::new());
        }
        let mut bytes = reserve_result("repeat", self.bytes.len() as u128 * n as u128)?;
        for _ in 0..n {
            bytes.extend_from_slice(&self.bytes);
        }
        Ok(Buffer { bytes })
    }

    /// Returns the bytes in reverse order.
    pub fn reverse(&self) -> Buffer {
        Buffer {
            bytes: self.bytes.iter().rev().copied().collect(),
        }
    }

    // =========================================================================
    // SEARCH
    // =========================================================================

    /// Position of the first occurrence of `pattern`.
    ///
    /// An empty pattern matches at 0.
    pub fn index(&self, pattern: impl AsRef<[u8]>) -> Option<usize> {
        find(&self.bytes, pattern.as_ref())
    }

    /// Position of the last occurrence of `pattern`.
    ///
    /// An empty pattern matches at `len`.
    pub fn last_index(&self, pattern: impl AsRef<[u8]>) -> Option<usize> {
        let pattern = pattern.as_ref();
        if pattern.is_empty() {
            return Some(self.bytes.len());
        }
        self.bytes
            .windows(pattern.len())
            .rposition(|window| window == pattern)
    }

    /// Number of non-overlapping occurrences of `pattern`, scanning left to right.
    ///
    /// An empty pattern counts `len + 1` matches, one at every boundary.
    pub fn count(&self, pattern: impl AsRef<[u8]>) -> usize {
        let pattern = pattern.as_ref();
        if pattern.is_empty() {
            return self.bytes.len() + 1;
        }
        let mut count = 0;
        let mut pos = 0;
        while let Some(found) = find(&self.bytes[pos..], pattern) {
            count += 1;
            pos += found + pattern.len();
        }
        count
    }

    pub fn contains(&self, pattern: impl AsRef<[u8]>) -> bool {
        self.index(pattern).is_some()
    }

    pub fn starts_with(&self, prefix: impl AsRef<[u8]>) -> bool {
        self.bytes.starts_with(prefix.as_ref())
    }

    pub fn ends_with(&self, suffix: impl AsRef<[u8]>) -> bool {
        self.bytes.ends_with(suffix.as_ref())
    }

    /// Lexicographic comparison.
    pub fn compare(&self, other: impl AsRef<[u8]>) -> Ordering {
        self.bytes.as_slice().cmp(other.as_ref())
    }

    // =========================================================================
    // BITWISE
    // =========================================================================

    /// Byte-wise AND of two equal-length buffers.
    pub fn and(&self, other: impl AsRef<[u8]>) -> Result<Buffer, BufferError> {
        self.zip_with("and", other.as_ref(), |a, b| a & b)
    }

    /// Byte-wise OR of two equal-length buffers.
    pub fn or(&self, other: impl AsRef<[u8]>) -> Result<Buffer, BufferError> {
        self.zip_with("or", other.as_ref(), |a, b| a | b)
    }

    /// Byte-wise XOR of two equal-length buffers.
    pub fn xor(&self, other: impl AsRef<[u8]>) -> Result<Buffer, BufferError> {
        self.zip_with("xor", other.as_ref(), |a, b| a ^ b)
    }

    /// Byte-wise complement.
    pub fn not(&self) -> Buffer {
        Buffer {
            bytes: self.bytes.iter().map(|b| !b).collect(),
        }
    }

    fn zip_with(
        &self,
        op: &'static str,
        other: &[u8],
        f: impl Fn(u8, u8) -> u8,
    ) -> Result<Buffer, BufferError> {
        validate_equal_length(op, &self.bytes, other)?;
        Ok(Buffer {
            bytes: self
                .bytes
                .iter()
                .zip(other)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }

    // =========================================================================
    // PADDING, TRIMMING, FILLING
    // =========================================================================

    /// Prepends `pad` until the buffer is `target_len` bytes long.
    ///
    /// A buffer already at least `target_len` long is returned unchanged.
    pub fn pad_left(&self, target_len: usize, pad: u8) -> Result<Buffer, BufferError> {
        if self.bytes.len() >= target_len {
            return Ok(self.clone());
        }
        let mut bytes = reserve_result("pad_left", target_len as u128)?;
        bytes.resize(target_len - self.bytes.len(), pad);
        bytes.extend_from_slice(&self.bytes);
        Ok(Buffer { bytes })
    }

    /// Appends `pad` until the buffer is `target_len` bytes long.
    pub fn pad_right(&self, target_len: usize, pad: u8) -> Result<Buffer, BufferError> {
        if self.bytes.len() >= target_len {
            return Ok(self.clone());
        }
        let mut bytes = reserve_result("pad_right", target_len as u128)?;
        bytes.extend_from_slice(&self.bytes);
        bytes.resize(target_len, pad);
        Ok(Buffer { bytes })
    }

    /// Removes leading and trailing bytes found in `cutset`.
    pub fn trim(&self, cutset: impl AsRef<[u8]>) -> Buffer {
        let cutset = cutset.as_ref();
        let start = self.first_kept(cutset);
        let end = self.last_kept(cutset).max(start);
        Buffer::from(&self.bytes[start..end])
    }

    /// Removes leading bytes found in `cutset`.
    pub fn trim_left(&self, cutset: impl AsRef<[u8]>) -> Buffer {
        let start = self.first_kept(cutset.as_ref());
        Buffer::from(&self.bytes[start..])
    }

    /// Removes trailing bytes found in `cutset`.
    pub fn trim_right(&self, cutset: impl AsRef<[u8]>) -> Buffer {
        let end = self.last_kept(cutset.as_ref());
        Buffer::from(&self.bytes[..end])
    }

    fn first_kept(&self, cutset: &[u8]) -> usize {
        self.bytes
            .iter()
            .position(|b| !cutset.contains(b))
            .unwrap_or(self.bytes.len())
    }

    fn last_kept(&self, cutset: &[u8]) -> usize {
        self.bytes
            .iter()
            .rposition(|b| !cutset.contains(b))
            .map_or(0, |i| i + 1)
    }

    /// Returns a buffer of the same length with every byte set to `value`.
    pub fn fill(&self, value: u8) -> Buffer {
        Buffer::filled(self.bytes.len(), value)
    }

    /// Overwrites every byte with zero and returns the scrubbed buffer.
    ///
    /// Takes the buffer by value so the old contents are erased in their own
    /// storage rather than left behind in a copy.
    pub fn zero(mut self) -> Buffer {
        self.bytes.fill(0);
        self
    }
}

/// Position of the first occurrence of `needle` in `haystack`.
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl From<&[u8]> for Buffer {
    fn from(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }
}

impl<const N: usize> From<[u8; N]> for Buffer {
    fn from(bytes: [u8; N]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }
}

impl<const N: usize> From<&[u8; N]> for Buffer {
    fn from(bytes: &[u8; N]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }
}

impl From<&str> for Buffer {
    fn from(s: &str) -> Self {
        Self {
            bytes: s.as_bytes().to_vec(),
        }
    }
}

impl From<Buffer> for Vec<u8> {
    fn from(buf: Buffer) -> Self {
        buf.bytes
    }
}

impl FromIterator<u8> for Buffer {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self {
            bytes: iter.into_iter().collect(),
        }
    }
}

impl PartialEq<[u8]> for Buffer {
    fn eq(&self, other: &[u8]) -> bool {
        self.bytes == other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for Buffer {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.bytes == other
    }
}

/// Formats as lower-case hex.
impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_hex(&self.bytes))
    }
}
