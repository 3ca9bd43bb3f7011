//! InMemory ConnectionRegistry 実装
//!
//! ドメイン層が定義する ConnectionRegistry trait の具体的な実装。
//! RwLock で保護した HashMap をインメモリ DB として使用します。
//! プロセス再起動で内容は失われます（永続化は対象外）。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{ConnectionId, ConnectionRegistry, Session, Timestamp, Topics, UserName};

/// インメモリ ConnectionRegistry 実装
///
/// ロックは各操作の内側だけで取得・解放され、呼び出し側に保持されたまま
/// 返ることはありません。読み出しは常にクローン（スナップショット）を返します。
#[derive(Default)]
pub struct InMemoryConnectionRegistry {
    /// connection_id → Session
    sessions: RwLock<HashMap<ConnectionId, Session>>,
}

impl InMemoryConnectionRegistry {
    /// 新しい InMemoryConnectionRegistry を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConnectionRegistry for InMemoryConnectionRegistry {
    async fn add(&self, connection_id: ConnectionId, name: UserName) -> Session {
        let session = Session::new(connection_id.clone(), name, Timestamp::now());
        let mut sessions = self.sessions.write().await;
        sessions.insert(connection_id, session.clone());
        session
    }

    async fn remove(&self, connection_id: &ConnectionId) -> Option<Session> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(connection_id)
    }

    async fn get(&self, connection_id: &ConnectionId) -> Option<Session> {
        let sessions = self.sessions.read().await;
        sessions.get(connection_id).cloned()
    }

    async fn update_last_message_time(&self, connection_id: &ConnectionId) {
        let now = Timestamp::now();
        let mut sessions = self.sessions.write().await;
        if let Some(session) = sessions.get_mut(connection_id) {
            session.touch(now);
        }
    }

    async fn update_topics(&self, connection_id: &ConnectionId, topics: Topics) {
        let mut sessions = self.sessions.write().await;
        if let Some(session) = sessions.get_mut(connection_id) {
            session.replace_topics(topics);
        }
    }

    async fn all(&self) -> Vec<Session> {
        let sessions = self.sessions.read().await;
        sessions.values().cloned().collect()
    }

    async fn count(&self) -> usize {
        let sessions = self.sessions.read().await;
        sessions.len()
    }
}
