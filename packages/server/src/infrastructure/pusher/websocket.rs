//! EventPusher backed by per-connection WebSocket outbound channels.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc::UnboundedSender};

use crate::{
    domain::{ConnectionId, EventPusher, ServerEvent},
    infrastructure::dto::websocket::ServerMessage,
};

/// Outbound channels of all live connections, signed in or not.
///
/// Each socket's send task drains its own channel, so pushing never waits on
/// network I/O.
#[derive(Default)]
pub struct WebSocketEventPusher {
    senders: Mutex<HashMap<ConnectionId, UnboundedSender<String>>>,
}

impl WebSocketEventPusher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the outbound channel of a newly accepted connection.
    pub async fn attach(&self, connection_id: ConnectionId, sender: UnboundedSender<String>) {
        let mut senders = self.senders.lock().await;
        senders.insert(connection_id, sender);
    }

    /// Forget a closed connection. Unknown ids are ignored.
    pub async fn detach(&self, connection_id: &ConnectionId) {
        let mut senders = self.senders.lock().await;
        senders.remove(connection_id);
    }

    /// Send an already-serialized frame to a single connection.
    ///
    /// Returns `false` if the connection is unknown or its channel is closed.
    pub async fn send_raw(&self, connection_id: &ConnectionId, frame: String) -> bool {
        let senders = self.senders.lock().await;
        senders
            .get(connection_id)
            .is_some_and(|sender| sender.send(frame).is_ok())
    }
}

#[async_trait]
impl EventPusher for WebSocketEventPusher {
    async fn push(&self, targets: &[ConnectionId], event: &ServerEvent) {
        let Some(frame) = encode(event) else {
            return;
        };

        let senders = self.senders.lock().await;
        let mut delivered = 0usize;
        for target in targets {
            match senders.get(target) {
                Some(sender) if sender.send(frame.clone()).is_ok() => delivered += 1,
                Some(_) => {
                    tracing::warn!("Failed to send {} to connection '{}'", event.name(), target)
                }
                None => tracing::warn!(
                    "Connection '{}' is gone, skipping {}",
                    target,
                    event.name()
                ),
            }
        }
        tracing::debug!(
            "Pushed {} to {}/{} connections",
            event.name(),
            delivered,
            targets.len()
        );
    }

    async fn push_all(&self, event: &ServerEvent) -> usize {
        let Some(frame) = encode(event) else {
            return 0;
        };

        let senders = self.senders.lock().await;
        let mut delivered = 0usize;
        for (connection_id, sender) in senders.iter() {
            if sender.send(frame.clone()).is_ok() {
                delivered += 1;
            } else {
                tracing::warn!(
                    "Failed to send {} to connection '{}'",
                    event.name(),
                    connection_id
                );
            }
        }
        tracing::debug!("Pushed {} to all {} connections", event.name(), delivered);
        delivered
    }
}

/// Serialize once per push; every recipient gets the same frame.
fn encode(event: &ServerEvent) -> Option<String> {
    match serde_json::to_string(&ServerMessage::from(event)) {
        Ok(json) => Some(json),
        Err(e) => {
            tracing::error!("Failed to serialize {}: {}", event.name(), e);
            None
        }
    }
}
