//! Wire format encoding and decoding.
//!
//! Implements the 18-byte `fig-json` header format:
//! ```text
//! ┌────────────────────┬──────────┬──────────┐
//! │ Preamble           │ Slack    │ Length   │
//! │ 10 bytes           │ 4 bytes  │ 4 bytes  │
//! │ "\x1b@fig-json"    │ zeroed   │ uint32 LE│
//! └────────────────────┴──────────┴──────────┘
//! ```
//!
//! The length region is 8 bytes wide but only its trailing half carries the
//! body length; the leading 4 bytes are framing slack in the original
//! protocol and stay zero. Both halves must be reproduced bit-exactly for
//! peers reading the same socket.

use crate::error::{FigwireError, Result};

/// Fixed frame preamble: the bytes of `"\x1b@fig-json"`.
pub const PREAMBLE: [u8; 10] = *b"\x1b@fig-json";

/// Header size in bytes (fixed, exactly 18): preamble + 8-byte length region.
pub const HEADER_LEN: usize = 18;

/// Offset of the 4 meaningful length bytes within the header.
///
/// Misaligned on purpose: the length lives in the *last* 4 bytes of the
/// 8-byte length region, leaving bytes 10..14 as zero slack.
pub const LENGTH_OFFSET: usize = 14;

/// Maximum body length representable in the 32-bit length field.
pub const MAX_BODY_LEN: u64 = u32::MAX as u64;

/// Default maximum body size accepted by [`FrameBuffer`](super::FrameBuffer) (1 GB).
pub const DEFAULT_MAX_BODY_LEN: u32 = 1_073_741_824;

/// Encode a frame header for a body of `body_len` bytes.
///
/// # Errors
///
/// Returns [`FigwireError::FrameTooLarge`] if `body_len` exceeds the 32-bit
/// length field.
///
/// # Example
///
/// ```
/// use figwire::protocol::{encode_header, HEADER_LEN, LENGTH_OFFSET};
///
/// let header = encode_header(5).unwrap();
/// assert_eq!(header.len(), HEADER_LEN);
/// assert_eq!(&header[LENGTH_OFFSET..], &[5, 0, 0, 0]);
/// ```
pub fn encode_header(body_len: u64) -> Result<[u8; HEADER_LEN]> {
    if body_len > MAX_BODY_LEN {
        return Err(FigwireError::FrameTooLarge(body_len));
    }

    let mut buf = [0u8; HEADER_LEN];
    buf[..PREAMBLE.len()].copy_from_slice(&PREAMBLE);
    // Bytes 10..14 stay zero; only the trailing half of the length region
    // carries the value.
    buf[LENGTH_OFFSET..].copy_from_slice(&(body_len as u32).to_le_bytes());
    Ok(buf)
}

/// Decode a frame header, returning the declared body length.
///
/// Validates the preamble and reads the little-endian length from offset 14.
/// The slack bytes at 10..14 are not inspected.
///
/// # Errors
///
/// - [`FigwireError::TruncatedFrame`] if fewer than 18 bytes are available
/// - [`FigwireError::MalformedFrame`] if the preamble does not match
///
/// # Example
///
/// ```
/// use figwire::protocol::{decode_header, encode_header};
///
/// let header = encode_header(42).unwrap();
/// assert_eq!(decode_header(&header).unwrap(), 42);
/// ```
pub fn decode_header(buf: &[u8]) -> Result<u32> {
    if buf.len() < HEADER_LEN {
        return Err(FigwireError::TruncatedFrame {
            needed: HEADER_LEN,
            actual: buf.len(),
        });
    }

    if buf[..PREAMBLE.len()] != PREAMBLE {
        return Err(FigwireError::MalformedFrame(format!(
            "expected fig-json preamble, got {:02x?}",
            &buf[..PREAMBLE.len()]
        )));
    }

    let length = u32::from_le_bytes([
        buf[LENGTH_OFFSET],
        buf[LENGTH_OFFSET + 1],
        buf[LENGTH_OFFSET + 2],
        buf[LENGTH_OFFSET + 3],
    ]);
    Ok(length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_constants() {
        assert_eq!(HEADER_LEN, 18);
        assert_eq!(LENGTH_OFFSET, 14);
        assert_eq!(PREAMBLE.len(), 10);
    }

    #[test]
    fn test_preamble_exact_bytes() {
        assert_eq!(
            PREAMBLE,
            [0x1B, 0x40, 0x66, 0x69, 0x67, 0x2D, 0x6A, 0x73, 0x6F, 0x6E]
        );
    }

    #[test]
    fn test_encode_header_layout() {
        let header = encode_header(0x0102_0304).unwrap();

        assert_eq!(&header[..10], &PREAMBLE);

        // Slack bytes stay zero
        assert_eq!(&header[10..14], &[0, 0, 0, 0]);

        // Length: 0x01020304 in LE
        assert_eq!(header[14], 0x04);
        assert_eq!(header[15], 0x03);
        assert_eq!(header[16], 0x02);
        assert_eq!(header[17], 0x01);
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        for len in [0u64, 1, 17, 255, 65_536, u32::MAX as u64] {
            let header = encode_header(len).unwrap();
            assert_eq!(decode_header(&header).unwrap(), len as u32);
        }
    }

    #[test]
    fn test_encode_header_too_large() {
        let result = encode_header(MAX_BODY_LEN + 1);
        assert!(matches!(result, Err(FigwireError::FrameTooLarge(_))));
    }

    #[test]
    fn test_decode_too_short_buffer() {
        let buf = [0u8; HEADER_LEN - 1];
        let result = decode_header(&buf);
        assert!(matches!(
            result,
            Err(FigwireError::TruncatedFrame { needed: 18, actual: 17 })
        ));
    }

    #[test]
    fn test_decode_bad_preamble() {
        let mut header = encode_header(4).unwrap();
        header[0] = b'X';
        let result = decode_header(&header);
        assert!(matches!(result, Err(FigwireError::MalformedFrame(_))));
    }

    #[test]
    fn test_decode_ignores_slack_bytes() {
        let mut header = encode_header(9).unwrap();
        header[10..14].copy_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(decode_header(&header).unwrap(), 9);
    }

    #[test]
    fn test_decode_extra_bytes_after_header() {
        let mut buf = encode_header(3).unwrap().to_vec();
        buf.extend_from_slice(b"abc");
        assert_eq!(decode_header(&buf).unwrap(), 3);
    }
}
