//! Hook message envelope and single-frame encode/decode.
//!
//! A [`HookMessage`] is the logical envelope `{ "hook": { <name>: <payload> } }`
//! that Fig expects on its socket. [`HookMessage::encode`] produces one
//! complete frame (18-byte header + UTF-8 JSON body); [`HookMessage::decode`]
//! is the exact inverse and accepts only a single whole frame.
//!
//! # Example
//!
//! ```
//! use figwire::protocol::HookMessage;
//! use serde_json::json;
//!
//! let msg = HookMessage::new("keypress", json!({ "key": "a" }));
//! let frame = msg.encode().unwrap();
//! let back = HookMessage::decode(&frame).unwrap();
//! assert_eq!(back, msg);
//! ```

use serde_json::{Map, Value};

use super::wire_format::{decode_header, encode_header, HEADER_LEN};
use crate::codec::JsonCodec;
use crate::error::{FigwireError, Result};

/// A hook message: a hook name and an arbitrary JSON payload.
///
/// The payload is a [`serde_json::Value`], so any JSON shape (object, array,
/// scalar, or null) nests without loss.
#[derive(Debug, Clone, PartialEq)]
pub struct HookMessage {
    /// Hook identifier, the single key of the inner envelope object.
    hook: String,
    /// Payload delivered under the hook key.
    payload: Value,
}

impl HookMessage {
    /// Create a new hook message.
    pub fn new(hook: impl Into<String>, payload: Value) -> Self {
        Self {
            hook: hook.into(),
            payload,
        }
    }

    /// Create a hook message from any serializable payload.
    ///
    /// # Errors
    ///
    /// Returns [`FigwireError::Encoding`] if the payload cannot be
    /// represented as a JSON value.
    pub fn from_serialize<T: serde::Serialize>(hook: impl Into<String>, payload: &T) -> Result<Self> {
        let payload = serde_json::to_value(payload).map_err(FigwireError::Encoding)?;
        Ok(Self::new(hook, payload))
    }

    /// Get the hook name.
    #[inline]
    pub fn hook(&self) -> &str {
        &self.hook
    }

    /// Get a reference to the payload.
    #[inline]
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Consume the message, returning hook name and payload.
    pub fn into_parts(self) -> (String, Value) {
        (self.hook, self.payload)
    }

    /// Serialize the envelope body: `{"hook":{<name>:<payload>}}`.
    fn body(&self) -> Result<Vec<u8>> {
        let mut inner = Map::with_capacity(1);
        inner.insert(self.hook.clone(), self.payload.clone());
        let mut outer = Map::with_capacity(1);
        outer.insert("hook".to_string(), Value::Object(inner));
        JsonCodec::encode(&Value::Object(outer))
    }

    /// Encode this message as one complete wire frame.
    ///
    /// The result is a single contiguous byte sequence; no partial frame is
    /// ever returned. Pure function of the message, no side effects.
    ///
    /// # Errors
    ///
    /// - [`FigwireError::InvalidArgument`] if the hook name is empty
    /// - [`FigwireError::Encoding`] if the envelope cannot be serialized
    /// - [`FigwireError::FrameTooLarge`] if the body exceeds the 32-bit
    ///   length field
    pub fn encode(&self) -> Result<Vec<u8>> {
        if self.hook.is_empty() {
            return Err(FigwireError::InvalidArgument(
                "hook name must not be empty".to_string(),
            ));
        }

        let body = self.body()?;
        let header = encode_header(body.len() as u64)?;

        let mut frame = Vec::with_capacity(HEADER_LEN + body.len());
        frame.extend_from_slice(&header);
        frame.extend_from_slice(&body);
        Ok(frame)
    }

    /// Decode one complete wire frame back into a message.
    ///
    /// # Errors
    ///
    /// - [`FigwireError::TruncatedFrame`] if the buffer is shorter than the
    ///   header declares
    /// - [`FigwireError::MalformedFrame`] if the preamble does not match
    /// - [`FigwireError::TrailingData`] if bytes follow the declared body
    /// - [`FigwireError::InvalidPayload`] if the body is not a valid hook
    ///   envelope
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let declared = decode_header(bytes)? as usize;
        let body = &bytes[HEADER_LEN..];

        if body.len() < declared {
            return Err(FigwireError::TruncatedFrame {
                needed: HEADER_LEN + declared,
                actual: bytes.len(),
            });
        }
        if body.len() > declared {
            return Err(FigwireError::TrailingData(body.len() - declared));
        }

        Self::from_body(body)
    }

    /// Parse an envelope body (the bytes after the header) into a message.
    pub(crate) fn from_body(body: &[u8]) -> Result<Self> {
        let value: Value = JsonCodec::decode(body)?;

        let mut outer = match value {
            Value::Object(map) => map,
            other => {
                return Err(FigwireError::InvalidPayload(format!(
                    "envelope must be a JSON object, got {}",
                    json_type_name(&other)
                )))
            }
        };

        if outer.len() != 1 {
            return Err(FigwireError::InvalidPayload(format!(
                "envelope must have exactly one key, got {}",
                outer.len()
            )));
        }

        let inner = match outer.remove("hook") {
            Some(Value::Object(map)) => map,
            Some(other) => {
                return Err(FigwireError::InvalidPayload(format!(
                    "\"hook\" must map to an object, got {}",
                    json_type_name(&other)
                )))
            }
            None => {
                return Err(FigwireError::InvalidPayload(
                    "envelope is missing the \"hook\" key".to_string(),
                ))
            }
        };

        if inner.len() != 1 {
            return Err(FigwireError::InvalidPayload(format!(
                "hook object must have exactly one entry, got {}",
                inner.len()
            )));
        }

        let (hook, payload) = match inner.into_iter().next() {
            Some(entry) => entry,
            None => {
                return Err(FigwireError::InvalidPayload(
                    "hook object must have exactly one entry, got 0".to_string(),
                ))
            }
        };

        if hook.is_empty() {
            return Err(FigwireError::InvalidPayload(
                "hook name must not be empty".to_string(),
            ));
        }

        Ok(Self { hook, payload })
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Encode a hook name and payload as one wire frame (standalone function).
///
/// # Example
///
/// ```
/// use serde_json::json;
///
/// let frame = figwire::encode("hook_name", &json!({ "a": 1 })).unwrap();
/// assert_eq!(&frame[18..], br#"{"hook":{"hook_name":{"a":1}}}"#);
/// ```
pub fn encode(hook: &str, payload: &Value) -> Result<Vec<u8>> {
    HookMessage::new(hook, payload.clone()).encode()
}

/// Decode one wire frame into a hook name and payload (standalone function).
pub fn decode(bytes: &[u8]) -> Result<(String, Value)> {
    Ok(HookMessage::decode(bytes)?.into_parts())
}
