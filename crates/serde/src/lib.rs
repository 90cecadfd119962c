//! Strict wire-format primitives for the quartz transaction codec.
//!
//! Everything on the wire is big-endian; variable-length runs carry a u16
//! length prefix. The [`wire::Reader`] validates every length before it
//! commits to reading, so malformed input can never over-allocate or read
//! past the buffer. Text wrappers (hex, base64) are thin re-encodings of the
//! binary format and hold no semantics of their own.

pub mod text;
pub mod wire;

pub use wire::Reader;

/// Errors raised by the byte-level codec and text wrappers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// Ran off the end of the buffer while reading a fixed-size field, or a
    /// variable run was too large to represent with a u16 prefix.
    #[error("invalid length prefix: read past end of input")]
    InvalidLengthPrefix,
    /// A length prefix advertised more bytes than the buffer still holds.
    #[error("length prefix {declared} exceeds remaining buffer {remaining}")]
    MismatchedLength { declared: usize, remaining: usize },
    #[error("invalid hex encoding: {0}")]
    InvalidHexEncoding(String),
    #[error("invalid base64 encoding: {0}")]
    InvalidBase64Encoding(String),
}

pub type Result<T> = core::result::Result<T, CodecError>;
