//! Error types for fixed-width encoding/decoding and buffer operations.

use malachite::Integer;
use thiserror::Error;

use crate::dispatch::ValueKind;
use crate::model::IntType;

/// Stable error codes shared by every layer of the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Wrong number of arguments
    Arity,
    /// E002: Argument of the wrong kind
    Type,
    /// E003: Value outside the legal range of the target width
    Range,
    /// E004: Buffer length does not match what the operation requires
    Length,
    /// E005: No operation registered under the requested name
    UnknownOperation,
    /// E006: Result would exceed the buffer size limit or could not be allocated
    LimitExceeded,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E003").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::Arity => "E001",
            ErrorCode::Type => "E002",
            ErrorCode::Range => "E003",
            ErrorCode::Length => "E004",
            ErrorCode::UnknownOperation => "E005",
            ErrorCode::LimitExceeded => "E006",
        }
    }
}

/// Error during fixed-width encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("[E003] value {value} out of range for {ty}: expected [{min}, {max}]")]
    OutOfRange {
        value: Integer,
        ty: IntType,
        min: Integer,
        max: Integer,
    },
}

impl EncodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EncodeError::OutOfRange { .. } => ErrorCode::Range,
        }
    }
}

/// Error during fixed-width decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("[E004] {ty} requires exactly {expected} bytes, got {actual}")]
    LengthMismatch {
        ty: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("[E004] unexpected end of input while reading {context}")]
    UnexpectedEof { context: &'static str },
}

impl DecodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::Length
    }
}

/// Error from a buffer operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    #[error("[E004] {op} requires equal-length buffers, got {left} and {right} bytes")]
    LengthMismatch {
        op: &'static str,
        left: usize,
        right: usize,
    },

    #[error("[E006] {op} result length {requested} exceeds maximum {max}")]
    LengthExceedsLimit {
        op: &'static str,
        requested: u128,
        max: usize,
    },

    #[error("[E006] {op} could not allocate {requested} bytes")]
    AllocationFailed { op: &'static str, requested: usize },
}

impl BufferError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            BufferError::LengthMismatch { .. } => ErrorCode::Length,
            BufferError::LengthExceedsLimit { .. } | BufferError::AllocationFailed { .. } => {
                ErrorCode::LimitExceeded
            }
        }
    }
}

/// Error from a call made through the operation registry.
///
/// Arity and type errors are raised before the typed operation runs;
/// everything else is the typed operation's own error passed through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    #[error("[E001] {op} takes {expected} argument(s), got {actual}")]
    Arity {
        op: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("[E002] {op} argument {position} must be {expected}, got {found}")]
    Type {
        op: &'static str,
        position: usize,
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("[E005] unknown operation: {name}")]
    UnknownOperation { name: String },

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Buffer(#[from] BufferError),
}

impl CallError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            CallError::Arity { .. } => ErrorCode::Arity,
            CallError::Type { .. } => ErrorCode::Type,
            CallError::UnknownOperation { .. } => ErrorCode::UnknownOperation,
            CallError::Encode(e) => e.code(),
            CallError::Decode(e) => e.code(),
            CallError::Buffer(e) => e.code(),
        }
    }
}
