//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスの抽象。
//! 具体的な実装は infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{ConnectionId, Session, Topics, UserName};

/// Live connection → session store.
///
/// Implementations must be internally synchronized: every operation is safe
/// to call concurrently, including for the same connection id, and none of
/// them can observe a half-applied update. Operations on an unknown id are
/// no-ops, never errors.
#[async_trait]
pub trait ConnectionRegistry: Send + Sync {
    /// Insert a fresh session signed in now, replacing any existing entry.
    async fn add(&self, connection_id: ConnectionId, name: UserName) -> Session;

    /// Remove the session, returning it if it was present.
    async fn remove(&self, connection_id: &ConnectionId) -> Option<Session>;

    /// Snapshot of one session.
    async fn get(&self, connection_id: &ConnectionId) -> Option<Session>;

    /// Set the session's last message time to now.
    async fn update_last_message_time(&self, connection_id: &ConnectionId);

    /// Replace the session's topics.
    async fn update_topics(&self, connection_id: &ConnectionId, topics: Topics);

    /// Point-in-time snapshot of every session.
    async fn all(&self) -> Vec<Session>;

    /// Number of live sessions.
    async fn count(&self) -> usize;
}
