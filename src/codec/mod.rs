//! Codec module - serialization/deserialization for payloads.
//!
//! The `fig-json` protocol carries exactly one body format, UTF-8 JSON text,
//! so a single codec covers it:
//!
//! - [`JsonCodec`] - JSON using `serde_json`
//!
//! # Design
//!
//! The codec is a marker struct with static methods rather than a trait
//! object. This keeps codec selection at compile time and the call sites
//! monomorphized.
//!
//! # Example
//!
//! ```
//! use figwire::codec::JsonCodec;
//!
//! let encoded = JsonCodec::encode(&"hello").unwrap();
//! let decoded: String = JsonCodec::decode(&encoded).unwrap();
//! assert_eq!(decoded, "hello");
//! ```

mod json;

pub use json::JsonCodec;
