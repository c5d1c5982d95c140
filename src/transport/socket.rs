//! Fig socket path derivation and one-shot frame sender.
//!
//! The socket lives at `/var/tmp/fig/<username>/fig.socket`. The username is
//! always passed in by the caller; resolving it from the environment happens
//! only in [`current_user_socket_address`], so the path logic itself stays a
//! pure function.
//!
//! # Example
//!
//! ```ignore
//! use figwire::transport::{socket_address, FigSocket};
//! use serde_json::json;
//!
//! let mut socket = FigSocket::connect(socket_address("alice")).await?;
//! socket.emit("keypress", &json!({ "key": "a" })).await?;
//! ```

use std::path::{Path, PathBuf};

use crate::error::{FigwireError, Result};

/// Return the location of the Fig socket for the given user.
///
/// # Example
///
/// ```
/// use figwire::transport::socket_address;
///
/// let path = socket_address("alice");
/// assert_eq!(path.to_str(), Some("/var/tmp/fig/alice/fig.socket"));
/// ```
pub fn socket_address(username: &str) -> PathBuf {
    PathBuf::from(format!("/var/tmp/fig/{username}/fig.socket"))
}

/// Return the location of the Fig socket for the current user.
///
/// The username is taken from the `USER` environment variable, falling back
/// to `LOGNAME`.
///
/// # Errors
///
/// Returns [`FigwireError::InvalidArgument`] if neither variable is set or
/// the resolved name is empty.
pub fn current_user_socket_address() -> Result<PathBuf> {
    let username = std::env::var("USER")
        .or_else(|_| std::env::var("LOGNAME"))
        .unwrap_or_default();

    if username.is_empty() {
        return Err(FigwireError::InvalidArgument(
            "cannot resolve current username: neither USER nor LOGNAME is set".to_string(),
        ));
    }

    Ok(socket_address(&username))
}

#[cfg(unix)]
mod unix_impl {
    use tokio::io::AsyncWriteExt;
    use tokio::net::UnixStream;

    use super::{Path, PathBuf, Result};
    use crate::protocol::HookMessage;

    /// A connected Fig socket.
    ///
    /// Writes one complete frame per logical message and flushes after each,
    /// so frames are never interleaved on the connection. There is no
    /// response or acknowledgement framing; sends are fire-and-forget.
    pub struct FigSocket {
        stream: UnixStream,
        path: PathBuf,
    }

    impl FigSocket {
        /// Connect to the Fig socket at the given path.
        pub async fn connect(path: impl AsRef<Path>) -> Result<Self> {
            let path = path.as_ref().to_path_buf();
            let stream = UnixStream::connect(&path).await?;
            tracing::debug!("Connected to Fig socket at {}", path.display());

            Ok(Self { stream, path })
        }

        /// Encode and send a hook message.
        pub async fn send(&mut self, message: &HookMessage) -> Result<()> {
            let frame = message.encode()?;
            tracing::debug!(
                "Sending {} hook ({} byte frame)",
                message.hook(),
                frame.len()
            );
            self.send_frame(&frame).await
        }

        /// Serialize an arbitrary payload and send it under the given hook.
        pub async fn emit<T: serde::Serialize>(&mut self, hook: &str, payload: &T) -> Result<()> {
            let message = HookMessage::from_serialize(hook, payload)?;
            self.send(&message).await
        }

        /// Write an already-encoded frame.
        ///
        /// The bytes are written in full and flushed before returning.
        pub async fn send_frame(&mut self, frame: &[u8]) -> Result<()> {
            self.stream.write_all(frame).await?;
            self.stream.flush().await?;
            Ok(())
        }

        /// Get the socket path this connection points at.
        pub fn path(&self) -> &Path {
            &self.path
        }

        /// Consume the handle, returning the underlying stream.
        pub fn into_inner(self) -> UnixStream {
            self.stream
        }
    }
}

#[cfg(unix)]
pub use unix_impl::FigSocket;
