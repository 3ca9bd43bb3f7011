//! UseCase: サインイン処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SignInUseCase::execute() メソッド
//! - パスワード長の検証、セッション登録、他セッションと管理者への通知
//!
//! ### なぜこのテストが必要か
//! - 検証に失敗した場合に Registry が変更されないことを保証
//! - 同じ接続での再サインインでエントリが重複しないことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規サインイン、管理者名でのサインイン
//! - 異常系：4 文字のパスワード、空のユーザー名
//! - エッジケース：同じ接続 ID での再サインイン

use std::sync::Arc;

use crate::domain::{
    ConnectionId, ConnectionRegistry, EventPusher, Password, RecipientResolver, ServerEvent,
    UserName,
};

use super::{admin_notifier::AdminNotifier, error::SignInError};

/// サインインのユースケース
pub struct SignInUseCase {
    registry: Arc<dyn ConnectionRegistry>,
    pusher: Arc<dyn EventPusher>,
}

impl SignInUseCase {
    /// 新しい SignInUseCase を作成
    pub fn new(registry: Arc<dyn ConnectionRegistry>, pusher: Arc<dyn EventPusher>) -> Self {
        Self { registry, pusher }
    }

    /// サインインを実行
    ///
    /// # Arguments
    ///
    /// * `connection_id` - 呼び出し元の接続 ID
    /// * `username` - 表示名
    /// * `password` - パスワード（長さのみ検証）
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - サインイン成功。管理者名なら true
    /// * `Err(SignInError)` - 検証失敗。Registry は変更されない
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
        username: String,
        password: String,
    ) -> Result<bool, SignInError> {
        // 1. 検証（失敗時は状態を変更しない）
        Password::new(password).map_err(SignInError::InvalidPassword)?;
        let name = UserName::new(username).map_err(SignInError::InvalidName)?;

        // 2. 既存セッションを削除してから登録（再サインインは作り直し）
        self.registry.remove(connection_id).await;
        let session = self.registry.add(connection_id.clone(), name).await;

        // 3. 自分以外の全セッションへ通知
        let sessions = self.registry.all().await;
        let others = RecipientResolver::others(&sessions, connection_id);
        if !others.is_empty() {
            let event = ServerEvent::ClientConnected {
                name: session.name.as_str().to_string(),
            };
            self.pusher.push(&others, &event).await;
        }

        // 4. 管理者へ件数を通知
        AdminNotifier::new(self.registry.clone(), self.pusher.clone())
            .notify_client_count()
            .await;

        Ok(session.is_admin())
    }
}
