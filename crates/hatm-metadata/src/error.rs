//! Metadata error types.

use thiserror::Error;

/// Result type for decoding.
pub type FormatResult<T> = std::result::Result<T, FormatError>;

/// Result type for encoding.
pub type EncodeResult<T> = std::result::Result<T, EncodeError>;

/// Result type for any metadata operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading a payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The payload ended in the middle of a field.
    #[error("unexpected end of stream: needed {needed} bits, {remaining} remaining")]
    EndOfStream {
        /// Width of the field being read
        needed: u32,
        /// Bits left in the payload
        remaining: usize,
    },
}

/// Errors raised while writing a payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A field of 8 bits or more was written off a byte boundary.
    #[error("{bits}-bit write at bit offset {bit_offset} is not byte aligned")]
    MisalignedWrite {
        /// Width of the field
        bits: u32,
        /// Bits already filled in the current byte
        bit_offset: u32,
    },

    /// The payload was finished with a partially filled byte.
    #[error("output not byte aligned: {pending_bits} bits pending")]
    UnalignedOutput {
        /// Bits filled in the last byte
        pending_bits: u32,
    },

    /// The syntax tree cannot be represented on the wire.
    #[error("invalid syntax: {0}")]
    InvalidSyntax(String),
}

/// Any metadata error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Decoding failed.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Encoding failed.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}
