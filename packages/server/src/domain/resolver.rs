//! Recipient resolution for fan-out.
//!
//! Pure functions over a registry snapshot. Nothing here mutates state or
//! performs I/O; callers decide what to do with an empty result.

use std::collections::BTreeSet;

use super::{ConnectionId, Session};

/// Computes recipient sets for outbound events.
pub struct RecipientResolver;

impl RecipientResolver {
    /// Every live session.
    pub fn broadcast(sessions: &[Session]) -> Vec<ConnectionId> {
        sessions.iter().map(|s| s.connection_id.clone()).collect()
    }

    /// Every session subscribed to `topic`, plus the sender.
    ///
    /// The sender is always included so it sees its own message echoed back,
    /// even with no topics of its own. Ids appear at most once.
    pub fn topic(sessions: &[Session], topic: &str, sender: &ConnectionId) -> Vec<ConnectionId> {
        let mut ids: BTreeSet<ConnectionId> = sessions
            .iter()
            .filter(|s| s.is_interested_in(topic))
            .map(|s| s.connection_id.clone())
            .collect();
        ids.insert(sender.clone());
        ids.into_iter().collect()
    }

    /// Every admin session.
    pub fn admins(sessions: &[Session]) -> Vec<ConnectionId> {
        sessions
            .iter()
            .filter(|s| s.is_admin())
            .map(|s| s.connection_id.clone())
            .collect()
    }

    /// Every session except `excluded`.
    pub fn others(sessions: &[Session], excluded: &ConnectionId) -> Vec<ConnectionId> {
        sessions
            .iter()
            .filter(|s| &s.connection_id != excluded)
            .map(|s| s.connection_id.clone())
            .collect()
    }
}
