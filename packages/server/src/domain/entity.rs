//! Core domain models for the chat hub.

use serde::{Deserialize, Serialize};

use super::value_object::{ConnectionId, Timestamp, Topics, UserName};

/// A signed-in user bound to one live connection.
///
/// Sessions are owned by the [`ConnectionRegistry`](super::ConnectionRegistry);
/// everything outside it works on cloned snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Connection this session is bound to
    pub connection_id: ConnectionId,
    /// Display name chosen at sign-in
    pub name: UserName,
    /// When the user signed in
    pub registered_at: Timestamp,
    /// When the user last sent a message (initially `registered_at`)
    pub last_message_at: Timestamp,
    /// Topics the user subscribed to
    pub topics: Topics,
}

impl Session {
    /// Create a fresh session signed in at `now`
    pub fn new(connection_id: ConnectionId, name: UserName, now: Timestamp) -> Self {
        Self {
            connection_id,
            name,
            registered_at: now,
            last_message_at: now,
            topics: Topics::empty(),
        }
    }

    /// Derived from the name on every call, never cached.
    pub fn is_admin(&self) -> bool {
        self.name.is_admin()
    }

    /// Record that a message was sent at `now`.
    ///
    /// `last_message_at` never moves backwards, even if the wall clock does.
    pub fn touch(&mut self, now: Timestamp) {
        self.last_message_at = self.last_message_at.max(now);
    }

    /// Replace the subscribed topics (no merge)
    pub fn replace_topics(&mut self, topics: Topics) {
        self.topics = topics;
    }

    pub fn is_interested_in(&self, topic: &str) -> bool {
        self.topics.contains(topic)
    }
}
