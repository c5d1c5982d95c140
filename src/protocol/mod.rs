//! Protocol module - wire format, framing, and the hook envelope.
//!
//! This module implements the `fig-json` binary framing:
//! - 18-byte header encoding/decoding with the misaligned length field
//! - [`HookMessage`] envelope with single-frame encode/decode
//! - [`FrameBuffer`] for accumulating partial reads on the receiving side

mod frame;
mod frame_buffer;
mod wire_format;

pub use frame::{decode, encode, HookMessage};
pub use frame_buffer::FrameBuffer;
pub use wire_format::{
    decode_header, encode_header, DEFAULT_MAX_BODY_LEN, HEADER_LEN, LENGTH_OFFSET, MAX_BODY_LEN,
    PREAMBLE,
};
