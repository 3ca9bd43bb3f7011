//! UseCase: ChatHub（接続ごとのプロトコル窓口）
//!
//! すべての呼び出しはトランスポートが与える接続 ID をキーにします。
//! 接続はサインインするまで匿名で、サインアウトすると匿名に戻ります。
//! 切断時の後始末はサインアウトと同じ処理です。

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry, EventPusher, Session, Topics};

use super::{
    AdminBroadcastUseCase, ListUsersUseCase, RegisterTopicsUseCase, SendMessageUseCase,
    SignInUseCase, SignOutUseCase,
    error::{BroadcastError, SendMessageError, SignInError},
};

/// Registry の更新と配信をまとめるハブ
#[derive(Clone)]
pub struct ChatHub {
    registry: Arc<dyn ConnectionRegistry>,
    pusher: Arc<dyn EventPusher>,
}

impl ChatHub {
    pub fn new(registry: Arc<dyn ConnectionRegistry>, pusher: Arc<dyn EventPusher>) -> Self {
        Self { registry, pusher }
    }

    /// Transport-level connect. The connection starts Anonymous.
    pub fn connect(&self, connection_id: &ConnectionId) {
        tracing::info!("Connection '{}' opened", connection_id);
    }

    /// Transport-level disconnect. Same cleanup as [`ChatHub::sign_out`].
    pub async fn disconnect(&self, connection_id: &ConnectionId) {
        match self.end_session(connection_id).await {
            Some(session) => tracing::info!(
                "Connection '{}' ('{}') closed",
                connection_id,
                session.name
            ),
            None => tracing::info!("Connection '{}' closed (anonymous)", connection_id),
        }
    }

    /// Sign in, replacing any existing session on this connection.
    ///
    /// Returns whether the new name is an admin name.
    pub async fn sign_in(
        &self,
        connection_id: &ConnectionId,
        username: String,
        password: String,
    ) -> Result<bool, SignInError> {
        let result = SignInUseCase::new(self.registry.clone(), self.pusher.clone())
            .execute(connection_id, username, password)
            .await;
        match &result {
            Ok(is_admin) => tracing::info!(
                "Connection '{}' signed in (admin: {})",
                connection_id,
                is_admin
            ),
            Err(e) => tracing::warn!("Sign-in rejected for '{}': {}", connection_id, e),
        }
        result
    }

    /// Sign out. No-op for an anonymous connection.
    pub async fn sign_out(&self, connection_id: &ConnectionId) {
        if let Some(session) = self.end_session(connection_id).await {
            tracing::info!("'{}' signed out from '{}'", session.name, connection_id);
        }
    }

    /// Send a message to everyone, or to `topic` subscribers plus the sender.
    pub async fn send_message(
        &self,
        connection_id: &ConnectionId,
        name: String,
        message: String,
        topic: &str,
    ) -> Result<(), SendMessageError> {
        let recipients = SendMessageUseCase::new(self.registry.clone(), self.pusher.clone())
            .execute(connection_id, name, message, topic)
            .await?;
        tracing::debug!(
            "Message from '{}' (topic: '{}') delivered to {} sessions",
            connection_id,
            topic,
            recipients
        );
        Ok(())
    }

    /// Replace the caller's topics of interest.
    pub async fn register_topics_of_interest(&self, connection_id: &ConnectionId, topics: Topics) {
        RegisterTopicsUseCase::new(self.registry.clone())
            .execute(connection_id, topics)
            .await;
    }

    /// Number of signed-in sessions.
    pub async fn get_nr_clients(&self) -> usize {
        self.registry.count().await
    }

    /// Administrative broadcast to every live connection, signed in or not
    /// (outside the hub protocol).
    pub async fn admin_broadcast(&self, message: String) -> Result<usize, BroadcastError> {
        AdminBroadcastUseCase::new(self.registry.clone(), self.pusher.clone())
            .execute(message)
            .await
    }

    /// Administrative listing of every session (outside the hub protocol).
    pub async fn list_users(&self) -> Vec<Session> {
        ListUsersUseCase::new(self.registry.clone(), self.pusher.clone())
            .execute()
            .await
    }

    async fn end_session(&self, connection_id: &ConnectionId) -> Option<Session> {
        SignOutUseCase::new(self.registry.clone(), self.pusher.clone())
            .execute(connection_id)
            .await
    }
}
