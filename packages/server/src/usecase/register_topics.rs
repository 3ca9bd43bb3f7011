//! UseCase: 購読トピックの登録
//!
//! 通知は行いません。未サインインの接続からの呼び出しは no-op です。

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry, Topics};

/// トピック登録のユースケース
pub struct RegisterTopicsUseCase {
    registry: Arc<dyn ConnectionRegistry>,
}

impl RegisterTopicsUseCase {
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// 呼び出し元のトピックを `topics` で置き換える
    pub async fn execute(&self, connection_id: &ConnectionId, topics: Topics) {
        self.registry.update_topics(connection_id, topics).await;
    }
}
