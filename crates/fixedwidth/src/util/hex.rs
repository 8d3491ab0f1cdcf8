//! Hex formatting and parsing for byte buffers.

use std::fmt::Write;

use thiserror::Error;

/// Error type for hex parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("hex string has odd length {len}")]
    OddLength { len: usize },

    #[error("invalid hex digit {char:?} at position {position}")]
    InvalidDigit { char: char, position: usize },
}

/// Formats bytes as lower-case hex without separators.
pub fn to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        // writing to a String cannot fail
        let _ = write!(s, "{:02x}", byte);
    }
    s
}

/// Parses hex into bytes.
///
/// An optional `0x` prefix is accepted, and whitespace, `_` and `:` between
/// digit pairs are ignored.
pub fn from_hex(s: &str) -> Result<Vec<u8>, HexError> {
    let s = s.trim();
    let s = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);

    let digits: Vec<(usize, char)> = s
        .char_indices()
        .filter(|(_, c)| !c.is_whitespace() && *c != '_' && *c != ':')
        .collect();
    if digits.len() % 2 != 0 {
        return Err(HexError::OddLength { len: digits.len() });
    }

    let mut bytes = Vec::with_capacity(digits.len() / 2);
    for pair in digits.chunks(2) {
        let hi = hex_digit(pair[0])?;
        let lo = hex_digit(pair[1])?;
        bytes.push((hi << 4) | lo);
    }
    Ok(bytes)
}

fn hex_digit((position, c): (usize, char)) -> Result<u8, HexError> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or(HexError::InvalidDigit { char: c, position })
}
