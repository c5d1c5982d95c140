//! JSON codec using `serde_json`.
//!
//! The body of every frame is standard JSON text with no custom escaping;
//! lengths elsewhere in the crate are measured on the UTF-8 bytes this codec
//! produces, never on character counts.
//!
//! # Example
//!
//! ```
//! use figwire::codec::JsonCodec;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Message {
//!     id: u32,
//!     content: String,
//! }
//!
//! let msg = Message { id: 42, content: "hello".to_string() };
//! let encoded = JsonCodec::encode(&msg).unwrap();
//! let decoded: Message = JsonCodec::decode(&encoded).unwrap();
//! assert_eq!(decoded, msg);
//! ```

use crate::error::{FigwireError, Result};

/// JSON codec for structured payloads.
pub struct JsonCodec;

impl JsonCodec {
    /// Encode a value to UTF-8 JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`FigwireError::Encoding`] if the value cannot be serialized.
    #[inline]
    pub fn encode<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
        serde_json::to_vec(value).map_err(FigwireError::Encoding)
    }

    /// Decode UTF-8 JSON bytes to a value.
    ///
    /// # Errors
    ///
    /// Returns [`FigwireError::InvalidPayload`] if the bytes cannot be
    /// deserialized to type T.
    #[inline]
    pub fn decode<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
        serde_json::from_slice(bytes).map_err(|e| FigwireError::InvalidPayload(e.to_string()))
    }
}
