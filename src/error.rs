//! Error types for figwire.

use thiserror::Error;

/// Main error type for all figwire operations.
#[derive(Debug, Error)]
pub enum FigwireError {
    /// I/O error during socket operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Caller-supplied argument was rejected (e.g. empty hook name).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Payload could not be serialized to JSON.
    #[error("encoding error: {0}")]
    Encoding(#[source] serde_json::Error),

    /// Body length does not fit the 32-bit length field.
    #[error("frame body of {0} bytes exceeds the 32-bit length field")]
    FrameTooLarge(u64),

    /// Frame does not start with the `fig-json` preamble.
    #[error("malformed frame: {0}")]
    MalformedFrame(String),

    /// Frame is shorter than its header declares.
    #[error("truncated frame: need at least {needed} bytes, have {actual}")]
    TruncatedFrame {
        /// Minimum byte count the frame must have.
        needed: usize,
        /// Byte count actually present.
        actual: usize,
    },

    /// Frame carries bytes past the declared body length.
    #[error("trailing data: {0} bytes past the declared body length")]
    TrailingData(usize),

    /// Body is not valid JSON or does not match the hook envelope shape.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}

/// Result type alias using FigwireError.
pub type Result<T> = std::result::Result<T, FigwireError>;
