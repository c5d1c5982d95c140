//! Transport module - Fig socket address derivation and frame delivery.
//!
//! The Fig daemon listens on a per-user unix domain socket; this module
//! derives its path and writes encoded frames to it. Connection management
//! beyond a single connect-and-write (retry, reconnect) is deliberately out
//! of scope.

mod socket;

pub use socket::{current_user_socket_address, socket_address};

#[cfg(unix)]
pub use socket::FigSocket;
