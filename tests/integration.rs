//! Integration tests for figwire.
//!
//! These tests verify the integration between different modules.

use figwire::codec::JsonCodec;
use figwire::protocol::{FrameBuffer, HookMessage, HEADER_LEN, LENGTH_OFFSET, PREAMBLE};
use serde_json::json;

/// Test full frame encode/reassemble cycle with a typed payload.
#[test]
fn test_frame_with_typed_payload() {
    #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
    struct EditBuffer {
        buffer: String,
        cursor: u32,
    }

    let payload = EditBuffer {
        buffer: "git status".to_string(),
        cursor: 10,
    };

    let message = HookMessage::from_serialize("edit_buffer", &payload).unwrap();
    let frame = message.encode().unwrap();

    // Reassemble through the stream-side buffer
    let mut buffer = FrameBuffer::new();
    let messages = buffer.push(&frame).unwrap();

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].hook(), "edit_buffer");

    // Decode payload back to the typed struct
    let body = JsonCodec::encode(messages[0].payload()).unwrap();
    let decoded: EditBuffer = JsonCodec::decode(&body).unwrap();
    assert_eq!(decoded, payload);
}

/// Test multiple frames in sequence through one buffer.
#[test]
fn test_multiple_frames_sequence() {
    let mut buffer = FrameBuffer::new();
    let mut all_bytes = Vec::new();

    for i in 1u32..=5 {
        let message = HookMessage::new(format!("hook_{i}"), json!({ "seq": i }));
        all_bytes.extend(message.encode().unwrap());
    }

    let messages = buffer.push(&all_bytes).unwrap();
    assert_eq!(messages.len(), 5);

    for (i, message) in messages.iter().enumerate() {
        let seq = (i + 1) as u32;
        assert_eq!(message.hook(), format!("hook_{seq}"));
        assert_eq!(message.payload(), &json!({ "seq": seq }));
    }
}

/// Every encoded frame satisfies the header invariants, whatever the payload.
#[test]
fn test_header_invariants_across_payloads() {
    let payloads = [
        json!(null),
        json!({}),
        json!({ "msg": "café" }),
        json!([1, [2, [3]]]),
        json!({ "nested": { "deeply": { "text": "日本語" } } }),
    ];

    for payload in payloads {
        let frame = figwire::encode("hook", &payload).unwrap();

        assert_eq!(&frame[..10], &PREAMBLE);
        assert_eq!(&frame[10..14], &[0, 0, 0, 0]);

        let declared = u32::from_le_bytes([
            frame[LENGTH_OFFSET],
            frame[LENGTH_OFFSET + 1],
            frame[LENGTH_OFFSET + 2],
            frame[LENGTH_OFFSET + 3],
        ]);
        assert_eq!(declared as usize, frame.len() - HEADER_LEN);
    }
}

/// One frame split into arbitrary chunks still reassembles.
#[test]
fn test_reassembly_at_every_split_point() {
    let message = HookMessage::new("prompt", json!({ "text": "déjà vu" }));
    let frame = message.encode().unwrap();

    for split in 0..frame.len() {
        let mut buffer = FrameBuffer::new();
        let mut messages = buffer.push(&frame[..split]).unwrap();
        messages.extend(buffer.push(&frame[split..]).unwrap());

        assert_eq!(messages, vec![message.clone()], "split at {split}");
    }
}

/// End-to-end over a real unix socket: sender -> listener -> reassembly.
#[cfg(unix)]
#[tokio::test]
async fn test_socket_end_to_end() {
    use figwire::transport::FigSocket;
    use tokio::io::AsyncReadExt;
    use tokio::net::UnixListener;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fig.socket");
    let listener = UnixListener::bind(&path).unwrap();

    let mut socket = FigSocket::connect(&path).await.unwrap();
    let (mut server, _addr) = listener.accept().await.unwrap();

    let sent: Vec<HookMessage> = (0..3)
        .map(|i| HookMessage::new("keypress", json!({ "key": i })))
        .collect();
    for message in &sent {
        socket.send(message).await.unwrap();
    }
    drop(socket);

    let mut data = Vec::new();
    server.read_to_end(&mut data).await.unwrap();

    let mut buffer = FrameBuffer::new();
    let received = buffer.push(&data).unwrap();
    assert_eq!(received, sent);
    assert!(buffer.is_empty());
}
