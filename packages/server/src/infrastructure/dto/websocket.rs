//! WebSocket message DTOs for the chat hub.
//!
//! Every frame is a JSON object with a kebab-case `type` tag.

use serde::{Deserialize, Serialize};

use crate::domain::ServerEvent;

/// Inbound frame: a hub call with an optional invocation id.
///
/// ```json
/// {"type": "sign-in", "invocation_id": 1, "username": "Alice", "password": "12345"}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientFrame {
    /// Echoed back in the completion; calls without one get no completion
    /// unless they fail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invocation_id: Option<u64>,
    #[serde(flatten)]
    pub call: ClientCall,
}

/// Hub calls a client can make
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClientCall {
    SignIn {
        username: String,
        password: String,
    },
    SignOut,
    SendMessage {
        name: String,
        message: String,
        #[serde(default)]
        topic: String,
    },
    RegisterTopicsOfInterest {
        #[serde(default)]
        topics: Option<Vec<String>>,
    },
    GetNrClients,
}

/// Outbound frame: a pushed event or a call completion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ServerMessage {
    NewMessage {
        name: String,
        message: String,
        timestamp: String,
    },
    ClientConnected {
        name: String,
    },
    ClientDisconnected {
        name: String,
    },
    AdminNotification {
        message: String,
    },
    NrClientsChanged {
        count: usize,
    },
    Completion {
        invocation_id: Option<u64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        result: Option<serde_json::Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
}

impl ServerMessage {
    /// Successful completion carrying `result`
    pub fn completion(invocation_id: Option<u64>, result: serde_json::Value) -> Self {
        Self::Completion {
            invocation_id,
            result: Some(result),
            error: None,
        }
    }

    /// Failed completion carrying a human-readable reason
    pub fn failure(invocation_id: Option<u64>, error: impl Into<String>) -> Self {
        Self::Completion {
            invocation_id,
            result: None,
            error: Some(error.into()),
        }
    }
}

impl From<&ServerEvent> for ServerMessage {
    fn from(event: &ServerEvent) -> Self {
        match event.clone() {
            ServerEvent::NewMessage {
                name,
                message,
                timestamp,
            } => Self::NewMessage {
                name,
                message,
                timestamp,
            },
            ServerEvent::ClientConnected { name } => Self::ClientConnected { name },
            ServerEvent::ClientDisconnected { name } => Self::ClientDisconnected { name },
            ServerEvent::AdminNotification { message } => Self::AdminNotification { message },
            ServerEvent::NrClientsChanged { count } => Self::NrClientsChanged { count },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_sign_in_frame() {
        // テスト項目: sign-in フレームを解析できる
        // given (前提条件):
        let text = r#"{"type":"sign-in","invocation_id":7,"username":"Alice","password":"12345"}"#;

        // when (操作):
        let frame: ClientFrame = serde_json::from_str(text).unwrap();

        // then (期待する結果):
        assert_eq!(frame.invocation_id, Some(7));
        assert_eq!(
            frame.call,
            ClientCall::SignIn {
                username: "Alice".to_string(),
                password: "12345".to_string()
            }
        );
    }

    #[test]
    fn test_parse_send_message_without_topic() {
        // テスト項目: topic 省略時は空文字になり、invocation_id 省略時は None
        // given (前提条件):
        let text = r#"{"type":"send-message","name":"Alice","message":"hi"}"#;

        // when (操作):
        let frame: ClientFrame = serde_json::from_str(text).unwrap();

        // then (期待する結果):
        assert_eq!(frame.invocation_id, None);
        assert_eq!(
            frame.call,
            ClientCall::SendMessage {
                name: "Alice".to_string(),
                message: "hi".to_string(),
                topic: String::new()
            }
        );
    }

    #[test]
    fn test_parse_unit_calls() {
        // テスト項目: 引数のない呼び出しを解析できる
        // when (操作):
        let sign_out: ClientFrame = serde_json::from_str(r#"{"type":"sign-out"}"#).unwrap();
        let count: ClientFrame =
            serde_json::from_str(r#"{"type":"get-nr-clients","invocation_id":1}"#).unwrap();

        // then (期待する結果):
        assert_eq!(sign_out.call, ClientCall::SignOut);
        assert_eq!(count.call, ClientCall::GetNrClients);
        assert_eq!(count.invocation_id, Some(1));
    }

    #[test]
    fn test_parse_register_topics_null() {
        // テスト項目: topics が null または省略でも解析できる
        // when (操作):
        let null: ClientFrame =
            serde_json::from_str(r#"{"type":"register-topics-of-interest","topics":null}"#)
                .unwrap();
        let missing: ClientFrame =
            serde_json::from_str(r#"{"type":"register-topics-of-interest"}"#).unwrap();

        // then (期待する結果):
        assert_eq!(
            null.call,
            ClientCall::RegisterTopicsOfInterest { topics: None }
        );
        assert_eq!(
            missing.call,
            ClientCall::RegisterTopicsOfInterest { topics: None }
        );
    }

    #[test]
    fn test_parse_unknown_type_fails() {
        // テスト項目: 未知の type はエラーになる
        let result = serde_json::from_str::<ClientFrame>(r#"{"type":"dance"}"#);

        // then (期待する結果):
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_events() {
        // テスト項目: サーバーイベントが type タグ付き JSON になる
        // given (前提条件):
        let event = ServerEvent::NewMessage {
            name: "Alice".to_string(),
            message: "hi".to_string(),
            timestamp: "12:34:56".to_string(),
        };

        // when (操作):
        let value = serde_json::to_value(ServerMessage::from(&event)).unwrap();
        let count =
            serde_json::to_value(ServerMessage::from(&ServerEvent::NrClientsChanged { count: 3 }))
                .unwrap();

        // then (期待する結果):
        assert_eq!(
            value,
            json!({"type": "new-message", "name": "Alice", "message": "hi", "timestamp": "12:34:56"})
        );
        assert_eq!(count, json!({"type": "nr-clients-changed", "count": 3}));
    }

    #[test]
    fn test_serialize_completions() {
        // テスト項目: 成功と失敗の completion の形式
        // when (操作):
        let ok = serde_json::to_value(ServerMessage::completion(Some(1), json!(true))).unwrap();
        let err = serde_json::to_value(ServerMessage::failure(None, "nope")).unwrap();

        // then (期待する結果):
        assert_eq!(
            ok,
            json!({"type": "completion", "invocation_id": 1, "result": true})
        );
        assert_eq!(
            err,
            json!({"type": "completion", "invocation_id": null, "error": "nope"})
        );
    }
}
