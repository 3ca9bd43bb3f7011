//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::{
    net::TcpStream,
    process::{Child, Command, Stdio},
    thread,
    time::{Duration, Instant},
};

use futures_util::{SinkExt, StreamExt};
use serde_json::Value;
use tokio::net::TcpStream as TokioTcpStream;
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async, tungstenite::protocol::Message,
};

/// A chatter-server process listening on `127.0.0.1:<port>`.
///
/// The process is killed when the fixture is dropped.
pub struct TestServer {
    process: Child,
    port: u16,
}

impl TestServer {
    /// Spawn the server binary and wait until it accepts TCP connections.
    pub fn start(port: u16) -> Self {
        let process = Command::new(env!("CARGO_BIN_EXE_chatter-server"))
            .args(["--host", "127.0.0.1", "--port", &port.to_string()])
            .args(["--log-level", "warn"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .expect("Failed to start server");

        let deadline = Instant::now() + Duration::from_secs(10);
        while TcpStream::connect(("127.0.0.1", port)).is_err() {
            if Instant::now() > deadline {
                panic!("Server did not start on port {port}");
            }
            thread::sleep(Duration::from_millis(50));
        }

        Self { process, port }
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    pub fn hub_url(&self) -> String {
        format!("ws://127.0.0.1:{}/hub/chat", self.port)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.process.kill();
        let _ = self.process.wait();
    }
}

/// A hub client speaking the JSON frame protocol.
pub struct HubClient {
    stream: WebSocketStream<MaybeTlsStream<TokioTcpStream>>,
    next_invocation_id: u64,
}

impl HubClient {
    pub async fn connect(server: &TestServer) -> Self {
        let (stream, _) = connect_async(server.hub_url())
            .await
            .expect("Failed to connect to hub");
        Self {
            stream,
            next_invocation_id: 1,
        }
    }

    /// Send a call and wait for its completion, collecting pushed events
    /// that arrive in between.
    pub async fn invoke(&mut self, mut call: Value) -> (Value, Vec<Value>) {
        let invocation_id = self.next_invocation_id;
        self.next_invocation_id += 1;
        call["invocation_id"] = Value::from(invocation_id);
        self.send(call).await;

        let mut pushed = Vec::new();
        loop {
            let frame = self.recv().await.expect("Connection closed");
            if frame["type"] == "completion" && frame["invocation_id"] == invocation_id {
                return (frame, pushed);
            }
            pushed.push(frame);
        }
    }

    pub async fn send(&mut self, frame: Value) {
        self.stream
            .send(Message::Text(frame.to_string().into()))
            .await
            .expect("Failed to send frame");
    }

    pub async fn send_text(&mut self, text: &str) {
        self.stream
            .send(Message::Text(text.to_string().into()))
            .await
            .expect("Failed to send frame");
    }

    /// Next JSON frame, or `None` if nothing arrives within 2 seconds.
    pub async fn recv(&mut self) -> Option<Value> {
        loop {
            let msg = tokio::time::timeout(Duration::from_secs(2), self.stream.next())
                .await
                .ok()??
                .ok()?;
            match msg {
                Message::Text(text) => {
                    return Some(serde_json::from_str(&text).expect("Invalid JSON frame"));
                }
                Message::Close(_) => return None,
                _ => continue,
            }
        }
    }

    /// Next frame with the given `type`, skipping others.
    pub async fn recv_type(&mut self, frame_type: &str) -> Option<Value> {
        while let Some(frame) = self.recv().await {
            if frame["type"] == frame_type {
                return Some(frame);
            }
        }
        None
    }

    /// True if no frame arrives within a short window.
    pub async fn is_quiet(&mut self) -> bool {
        tokio::time::timeout(Duration::from_millis(300), self.stream.next())
            .await
            .is_err()
    }

    pub async fn close(mut self) {
        let _ = self.stream.close(None).await;
    }
}
