//! UseCase: 管理者による全体送信
//!
//! ハブのプロトコル外（HTTP 管理 API）から呼ばれます。
//! サインイン前の接続も含む全接続へ "Admin" 名義の NewMessage を送り、
//! 管理者へ操作内容を通知します。

use std::sync::Arc;

use crate::domain::{ConnectionRegistry, EventPusher, MessageContent, ServerEvent, Timestamp};

use super::{admin_notifier::AdminNotifier, error::BroadcastError};

/// Sender name shown for administrative broadcasts
pub const BROADCAST_SENDER_NAME: &str = "Admin";

/// 全体送信のユースケース
pub struct AdminBroadcastUseCase {
    registry: Arc<dyn ConnectionRegistry>,
    pusher: Arc<dyn EventPusher>,
}

impl AdminBroadcastUseCase {
    pub fn new(registry: Arc<dyn ConnectionRegistry>, pusher: Arc<dyn EventPusher>) -> Self {
        Self { registry, pusher }
    }

    /// 全体送信を実行
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - 配信先の接続数
    /// * `Err(BroadcastError)` - 本文が不正
    pub async fn execute(&self, message: String) -> Result<usize, BroadcastError> {
        let content = MessageContent::new(message).map_err(BroadcastError::InvalidContent)?;

        AdminNotifier::new(self.registry.clone(), self.pusher.clone())
            .notify(format!("Broadcast sent: {content}"))
            .await;

        let event = ServerEvent::NewMessage {
            name: BROADCAST_SENDER_NAME.to_string(),
            message: content.into_string(),
            timestamp: Timestamp::now().to_clock(),
        };
        let recipients = self.pusher.push_all(&event).await;

        tracing::info!("Admin broadcast delivered to {} connections", recipients);
        Ok(recipients)
    }
}
