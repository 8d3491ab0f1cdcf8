//! Utility modules.

pub mod hex;

pub use hex::{from_hex, to_hex, HexError};
