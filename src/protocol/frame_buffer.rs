//! Frame buffer for accumulating partial reads.
//!
//! A peer reading the Fig socket sees an arbitrary byte stream, not neat
//! whole frames. `FrameBuffer` accumulates reads in a `bytes::BytesMut` and
//! extracts every complete frame, using a two-state machine:
//! - `WaitingForHeader`: need at least 18 bytes
//! - `WaitingForBody`: header parsed, need N more body bytes
//!
//! # Example
//!
//! ```
//! use figwire::protocol::{FrameBuffer, HookMessage};
//! use serde_json::json;
//!
//! let frame = HookMessage::new("keypress", json!({ "key": "a" })).encode().unwrap();
//!
//! let mut buffer = FrameBuffer::new();
//! let messages = buffer.push(&frame).unwrap();
//! assert_eq!(messages.len(), 1);
//! assert_eq!(messages[0].hook(), "keypress");
//! ```

use bytes::BytesMut;

use super::frame::HookMessage;
use super::wire_format::{decode_header, DEFAULT_MAX_BODY_LEN, HEADER_LEN};
use crate::error::{FigwireError, Result};

/// State machine for frame parsing.
#[derive(Debug, Clone)]
enum State {
    /// Waiting for complete header (need 18 bytes).
    WaitingForHeader,
    /// Header consumed, waiting for the declared body bytes.
    WaitingForBody { remaining: u32 },
}

/// Buffer for accumulating incoming bytes and extracting complete frames.
///
/// All data is stored in a single `BytesMut` buffer; partial frames are
/// retained across pushes.
pub struct FrameBuffer {
    /// Accumulated bytes from socket reads.
    buffer: BytesMut,
    /// Current parsing state.
    state: State,
    /// Maximum allowed body size.
    max_body_len: u32,
}

impl FrameBuffer {
    /// Create a new frame buffer with default settings.
    ///
    /// Default capacity: 64KB, max body: 1GB.
    pub fn new() -> Self {
        Self::with_max_body_len(DEFAULT_MAX_BODY_LEN)
    }

    /// Create a new frame buffer with a custom max body size.
    pub fn with_max_body_len(max_body_len: u32) -> Self {
        Self {
            buffer: BytesMut::with_capacity(64 * 1024),
            state: State::WaitingForHeader,
            max_body_len,
        }
    }

    /// Push data into the buffer and extract all complete frames.
    ///
    /// Returns the decoded messages, in arrival order. If data is
    /// fragmented, partial data is buffered internally for the next push.
    ///
    /// # Errors
    ///
    /// - [`FigwireError::MalformedFrame`] if accumulated data does not start
    ///   with the fig-json preamble
    /// - [`FigwireError::FrameTooLarge`] if a header declares a body larger
    ///   than the configured maximum
    /// - [`FigwireError::InvalidPayload`] if a complete body is not a valid
    ///   hook envelope
    pub fn push(&mut self, data: &[u8]) -> Result<Vec<HookMessage>> {
        self.buffer.extend_from_slice(data);

        let mut messages = Vec::new();
        while let Some(message) = self.try_extract_one()? {
            messages.push(message);
        }
        Ok(messages)
    }

    /// Try to extract a single frame from the buffer.
    ///
    /// Returns `Ok(None)` if more data is needed.
    fn try_extract_one(&mut self) -> Result<Option<HookMessage>> {
        match self.state {
            State::WaitingForHeader => {
                if self.buffer.len() < HEADER_LEN {
                    return Ok(None);
                }

                let declared = decode_header(&self.buffer[..HEADER_LEN])?;
                if declared > self.max_body_len {
                    return Err(FigwireError::FrameTooLarge(u64::from(declared)));
                }

                // Consume header bytes
                let _ = self.buffer.split_to(HEADER_LEN);

                self.state = State::WaitingForBody { remaining: declared };

                // The body may already be buffered
                self.try_extract_one()
            }

            State::WaitingForBody { remaining } => {
                let remaining = remaining as usize;

                if self.buffer.len() < remaining {
                    return Ok(None);
                }

                let body = self.buffer.split_to(remaining);
                self.state = State::WaitingForHeader;

                Ok(Some(HookMessage::from_body(&body)?))
            }
        }
    }

    /// Get the number of buffered bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Clear the buffer and reset state.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.state = State::WaitingForHeader;
    }

    #[cfg(test)]
    fn state_name(&self) -> &'static str {
        match self.state {
            State::WaitingForHeader => "WaitingForHeader",
            State::WaitingForBody { .. } => "WaitingForBody",
        }
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
