//! UseCase: サインアウト・切断処理
//!
//! 明示的なサインアウトと、トランスポート切断時の後始末は同じ処理です。
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SignOutUseCase::execute() メソッド
//! - セッション削除、他セッションへの ClientDisconnected、管理者への件数通知
//!
//! ### どのような状況を想定しているか
//! - 正常系：サインイン済み接続の切断
//! - エッジケース：未サインイン接続の切断（何も起きない）、二重の切断

use std::sync::Arc;

use crate::domain::{
    ConnectionId, ConnectionRegistry, EventPusher, RecipientResolver, ServerEvent, Session,
};

use super::admin_notifier::AdminNotifier;

/// サインアウトのユースケース
pub struct SignOutUseCase {
    registry: Arc<dyn ConnectionRegistry>,
    pusher: Arc<dyn EventPusher>,
}

impl SignOutUseCase {
    /// 新しい SignOutUseCase を作成
    pub fn new(registry: Arc<dyn ConnectionRegistry>, pusher: Arc<dyn EventPusher>) -> Self {
        Self { registry, pusher }
    }

    /// サインアウトを実行
    ///
    /// # Returns
    ///
    /// 削除したセッション。未サインインなら None（通知も行わない）
    pub async fn execute(&self, connection_id: &ConnectionId) -> Option<Session> {
        // 削除できた呼び出しだけが通知する（同時切断でも通知は 1 回）
        let session = self.registry.remove(connection_id).await?;

        let sessions = self.registry.all().await;
        let others = RecipientResolver::others(&sessions, connection_id);
        if !others.is_empty() {
            let event = ServerEvent::ClientDisconnected {
                name: session.name.as_str().to_string(),
            };
            self.pusher.push(&others, &event).await;
        }

        AdminNotifier::new(self.registry.clone(), self.pusher.clone())
            .notify_client_count()
            .await;

        Some(session)
    }
}
