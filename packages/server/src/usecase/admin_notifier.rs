//! UseCase: 管理者通知
//!
//! サインイン・サインアウト・切断・管理操作の事後処理として、
//! 管理者セッションへ通知を送ります。通知は同じ操作の中で同期的に行われます。

use std::sync::Arc;

use crate::domain::{ConnectionRegistry, EventPusher, RecipientResolver, ServerEvent};

/// 管理者への通知
pub struct AdminNotifier {
    registry: Arc<dyn ConnectionRegistry>,
    pusher: Arc<dyn EventPusher>,
}

impl AdminNotifier {
    pub fn new(registry: Arc<dyn ConnectionRegistry>, pusher: Arc<dyn EventPusher>) -> Self {
        Self { registry, pusher }
    }

    /// 現在のセッション数を管理者へ通知
    ///
    /// 管理者がいなければ何も送りません。
    /// 件数は宛先の算出に使ったのと同じスナップショットから取ります。
    pub async fn notify_client_count(&self) {
        let sessions = self.registry.all().await;
        let admins = RecipientResolver::admins(&sessions);
        if admins.is_empty() {
            return;
        }
        let event = ServerEvent::NrClientsChanged {
            count: sessions.len(),
        };
        self.pusher.push(&admins, &event).await;
    }

    /// 任意のテキストを管理者へ通知
    pub async fn notify(&self, message: impl Into<String>) {
        let sessions = self.registry.all().await;
        let admins = RecipientResolver::admins(&sessions);
        if admins.is_empty() {
            return;
        }
        let event = ServerEvent::AdminNotification {
            message: message.into(),
        };
        self.pusher.push(&admins, &event).await;
    }
}
