//! UseCase: ユーザー一覧の取得
//!
//! 管理画面向けの読み取り専用ビュー。取得したことを管理者へ通知します。

use std::sync::Arc;

use crate::domain::{ConnectionRegistry, EventPusher, Session};

use super::admin_notifier::AdminNotifier;

/// ユーザー一覧取得のユースケース
pub struct ListUsersUseCase {
    registry: Arc<dyn ConnectionRegistry>,
    pusher: Arc<dyn EventPusher>,
}

impl ListUsersUseCase {
    pub fn new(registry: Arc<dyn ConnectionRegistry>, pusher: Arc<dyn EventPusher>) -> Self {
        Self { registry, pusher }
    }

    /// 全セッションのスナップショットを登録順（同時刻なら名前順）で返す
    pub async fn execute(&self) -> Vec<Session> {
        AdminNotifier::new(self.registry.clone(), self.pusher.clone())
            .notify("All users requested")
            .await;

        let mut sessions = self.registry.all().await;
        sessions.sort_by(|a, b| {
            a.registered_at
                .cmp(&b.registered_at)
                .then_with(|| a.name.as_str().cmp(b.name.as_str()))
        });
        sessions
    }
}
