//! Send a hook to the local Fig daemon.
//!
//! This example demonstrates:
//! - Deriving the per-user socket path
//! - Connecting to the Fig socket
//! - Emitting a hook with a typed payload
//!
//! Run it with a Fig daemon listening, or point `FIG_SOCKET_USER` at a user
//! whose socket exists:
//!
//! ```sh
//! cargo run --example send_hook
//! ```

use figwire::transport::{current_user_socket_address, socket_address, FigSocket};
use serde::Serialize;

/// Payload for the `keypress` hook.
#[derive(Serialize, Debug)]
struct Keypress {
    key: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = match std::env::var("FIG_SOCKET_USER") {
        Ok(user) => socket_address(&user),
        Err(_) => current_user_socket_address()?,
    };

    let mut socket = FigSocket::connect(&path).await?;

    socket
        .emit("keypress", &Keypress { key: "a".to_string() })
        .await?;

    println!("sent keypress hook to {}", path.display());
    Ok(())
}
