//! Outbound delivery abstraction.

use async_trait::async_trait;

use super::{ConnectionId, ServerEvent};

/// Delivers server events to connections.
///
/// Delivery is best effort. A recipient whose connection is already gone is
/// skipped without affecting the others, and nothing is reported back.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventPusher: Send + Sync {
    /// Push `event` to every connection in `targets`.
    async fn push(&self, targets: &[ConnectionId], event: &ServerEvent);

    /// Push `event` to every live connection, signed in or not.
    ///
    /// Returns the number of connections it was handed to.
    async fn push_all(&self, event: &ServerEvent) -> usize;
}
