//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - 宛先の選定（全体 / トピック）、最終メッセージ時刻の更新
//!
//! ### なぜこのテストが必要か
//! - トピック指定時に購読者と送信者だけへ届くことを保証
//! - 未サインインの接続からの送信（なりすまし）を拒否することを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：トピックなしの全体送信、トピック付き送信
//! - 異常系：未サインイン、空のメッセージ
//! - エッジケース：送信者がトピック未購読でも自分には届く

use std::sync::Arc;

use crate::domain::{
    ConnectionId, ConnectionRegistry, EventPusher, MessageContent, RecipientResolver, ServerEvent,
    Timestamp,
};

use super::error::SendMessageError;

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    registry: Arc<dyn ConnectionRegistry>,
    pusher: Arc<dyn EventPusher>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(registry: Arc<dyn ConnectionRegistry>, pusher: Arc<dyn EventPusher>) -> Self {
        Self { registry, pusher }
    }

    /// メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `sender` - 送信者の接続 ID
    /// * `name` - 表示する送信者名
    /// * `message` - メッセージ本文
    /// * `topic` - 空文字なら全体送信
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - 配信先の数
    /// * `Err(SendMessageError)` - 未サインイン、または本文が不正
    pub async fn execute(
        &self,
        sender: &ConnectionId,
        name: String,
        message: String,
        topic: &str,
    ) -> Result<usize, SendMessageError> {
        if self.registry.get(sender).await.is_none() {
            return Err(SendMessageError::NotSignedIn);
        }
        let content = MessageContent::new(message).map_err(SendMessageError::InvalidContent)?;

        // 1. 最終メッセージ時刻を更新（途中で切断されていれば no-op）
        self.registry.update_last_message_time(sender).await;
        let timestamp = Timestamp::now();

        // 2. 宛先を選定
        let sessions = self.registry.all().await;
        let targets = if topic.is_empty() {
            RecipientResolver::broadcast(&sessions)
        } else {
            RecipientResolver::topic(&sessions, topic, sender)
        };

        // 3. 配信
        if !targets.is_empty() {
            let event = ServerEvent::NewMessage {
                name,
                message: content.into_string(),
                timestamp: timestamp.to_clock(),
            };
            self.pusher.push(&targets, &event).await;
        }

        Ok(targets.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{MockEventPusher, Topics, UserName, ValueObjectError},
        usecase::testing::{create_test_dependencies, create_test_registry, id},
    };

    fn name(s: &str) -> UserName {
        UserName::new(s.to_string()).unwrap()
    }

    fn message_of(event: &ServerEvent) -> Option<&str> {
        match event {
            ServerEvent::NewMessage { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }

    #[tokio::test]
    async fn test_send_message_broadcast_reaches_everyone() {
        // テスト項目: トピックなしのメッセージは送信者を含む全員に届く
        // given (前提条件):
        let (registry, pusher) = create_test_dependencies();
        registry.add(id("alice"), name("Alice")).await;
        registry.add(id("anna"), name("AdminAnna")).await;
        let usecase = SendMessageUseCase::new(registry, pusher.clone());

        // when (操作):
        let result = usecase
            .execute(&id("alice"), "Alice".to_string(), "hi".to_string(), "")
            .await;

        // then (期待する結果):
        assert_eq!(result, Ok(2));
        for conn in ["alice", "anna"] {
            let events = pusher.events_for(&id(conn));
            assert_eq!(events.len(), 1);
            match &events[0] {
                ServerEvent::NewMessage {
                    name,
                    message,
                    timestamp,
                } => {
                    assert_eq!(name, "Alice");
                    assert_eq!(message, "hi");
                    assert_eq!(timestamp.len(), 8);
                }
                other => panic!("unexpected event: {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_send_message_topic_reaches_subscribers_and_sender() {
        // テスト項目: トピック付きメッセージは購読者と送信者にだけ届く
        // given (前提条件):
        let (registry, pusher) = create_test_dependencies();
        registry.add(id("alice"), name("Alice")).await;
        registry.add(id("anna"), name("AdminAnna")).await;
        registry.add(id("bob"), name("Bob")).await;
        registry
            .update_topics(&id("bob"), Topics::from(vec!["sports".to_string()]))
            .await;
        let usecase = SendMessageUseCase::new(registry, pusher.clone());

        // when (操作):
        let result = usecase
            .execute(
                &id("alice"),
                "Alice".to_string(),
                "score!".to_string(),
                "sports",
            )
            .await;

        // then (期待する結果):
        assert_eq!(result, Ok(2));
        assert_eq!(pusher.events_for(&id("alice")).len(), 1);
        assert_eq!(pusher.events_for(&id("bob")).len(), 1);
        assert!(pusher.events_for(&id("anna")).is_empty());
        assert_eq!(
            message_of(&pusher.events_for(&id("bob"))[0]),
            Some("score!")
        );
    }

    #[tokio::test]
    async fn test_send_message_not_signed_in() {
        // テスト項目: 未サインインの接続からの送信は拒否され、何も配信されない
        // given (前提条件):
        let registry = create_test_registry();
        registry.add(id("bob"), name("Bob")).await;
        let mut pusher = MockEventPusher::new();
        pusher.expect_push().never();
        let usecase = SendMessageUseCase::new(registry, Arc::new(pusher));

        // when (操作):
        let result = usecase
            .execute(&id("ghost"), "Bob".to_string(), "spoof".to_string(), "")
            .await;

        // then (期待する結果):
        assert_eq!(result, Err(SendMessageError::NotSignedIn));
    }

    #[tokio::test]
    async fn test_send_message_empty_content_rejected() {
        // テスト項目: 空のメッセージは拒否される
        // given (前提条件):
        let (registry, pusher) = create_test_dependencies();
        registry.add(id("alice"), name("Alice")).await;
        let usecase = SendMessageUseCase::new(registry, pusher.clone());

        // when (操作):
        let result = usecase
            .execute(&id("alice"), "Alice".to_string(), "".to_string(), "")
            .await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(SendMessageError::InvalidContent(
                ValueObjectError::MessageContentEmpty
            ))
        );
        assert!(pusher.deliveries().is_empty());
    }

    #[tokio::test]
    async fn test_send_message_updates_last_message_time() {
        // テスト項目: 送信後、最終メッセージ時刻が登録時刻以上になる
        // given (前提条件):
        let (registry, pusher) = create_test_dependencies();
        let added = registry.add(id("alice"), name("Alice")).await;
        let usecase = SendMessageUseCase::new(registry.clone(), pusher);

        // when (操作):
        usecase
            .execute(&id("alice"), "Alice".to_string(), "hi".to_string(), "")
            .await
            .unwrap();

        // then (期待する結果):
        let session = registry.get(&id("alice")).await.unwrap();
        assert!(session.last_message_at >= added.registered_at);
    }
}
