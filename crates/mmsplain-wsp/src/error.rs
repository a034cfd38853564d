//! Error types for PDU decoding.

use thiserror::Error;

/// Fatal decoding errors.
///
/// Anything that can be recovered from locally is reported as a
/// [`DecodeWarning`](crate::DecodeWarning) instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A read went past the end of the input buffer.
    #[error("Read past end of input at position {position}: needed {needed} byte(s), length is {length}")]
    OutOfBounds {
        /// Absolute offset of the failed read.
        position: usize,
        /// Number of bytes the read required.
        needed: usize,
        /// Length of the input buffer.
        length: usize,
    },

    /// The header ran out of input before a Content-Type field was seen.
    #[error("Header ended at position {position} after {fields} field(s) without a Content-Type field")]
    UnterminatedHeader {
        /// Offset where input ran out.
        position: usize,
        /// Number of header fields decoded before that point.
        fields: usize,
    },
}

/// Result type alias for decoding operations.
pub type Result<T> = std::result::Result<T, Error>;
