//! # figwire
//!
//! Rust client for the Fig `fig-json` IPC protocol.
//!
//! This crate encodes hook messages into the wire frames that the Fig
//! daemon reads from its per-user unix socket, and decodes them back.
//!
//! ## Wire format
//!
//! ```text
//! ┌────────────────────┬──────────┬──────────┬──────────────┐
//! │ Preamble           │ Slack    │ Length   │ Body         │
//! │ 10 bytes           │ 4 bytes  │ 4 bytes  │ N bytes      │
//! │ "\x1b@fig-json"    │ zeroed   │ uint32 LE│ UTF-8 JSON   │
//! └────────────────────┴──────────┴──────────┴──────────────┘
//! ```
//!
//! The body is the JSON envelope `{ "hook": { <name>: <payload> } }` and the
//! length field counts its UTF-8 bytes. The length sits in the *last* four
//! bytes of an 8-byte reserved region; the leading four stay zero. Every
//! byte offset is part of the interoperability contract.
//!
//! ## Example
//!
//! ```
//! use figwire::HookMessage;
//! use serde_json::json;
//!
//! let msg = HookMessage::new("keypress", json!({ "key": "a" }));
//! let frame = msg.encode().unwrap();
//!
//! assert_eq!(&frame[..10], b"\x1b@fig-json");
//! assert_eq!(HookMessage::decode(&frame).unwrap(), msg);
//! ```
//!
//! Sending to a live Fig daemon:
//!
//! ```ignore
//! use figwire::transport::{current_user_socket_address, FigSocket};
//! use serde_json::json;
//!
//! let mut socket = FigSocket::connect(current_user_socket_address()?).await?;
//! socket.emit("keypress", &json!({ "key": "a" })).await?;
//! ```

pub mod codec;
pub mod error;
pub mod protocol;
pub mod transport;

pub use error::{FigwireError, Result};
pub use protocol::{decode, encode, FrameBuffer, HookMessage};
pub use transport::socket_address;

#[cfg(unix)]
pub use transport::FigSocket;
