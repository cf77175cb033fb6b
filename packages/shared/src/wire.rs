//! HTTP wire types shared between the server and the CLI client.
//!
//! サーバとクライアントの間で交わされる JSON の形を定義する DTO 層。
//! ドメインモデルからの変換はサーバ側（infrastructure/dto）が行い、
//! クライアントはこの型をそのままデシリアライズして表示する。

use serde::{Deserialize, Serialize};

/// Message kind as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKindDto {
    /// Ordinary chat text
    Msg,
    /// A user entered the channel
    Join,
    /// A user left the channel
    Part,
}

/// A chat message as serialized in `/recv` responses.
///
/// `text` is only present for `msg` entries; join/part notifications omit
/// the field entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageDto {
    pub nickname: String,
    pub kind: MessageKindDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
}

/// Response body of `GET /join`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinResponse {
    /// Server-issued session id, passed back on every subsequent request
    pub id: String,
    pub nickname: String,
}

/// Response body of `GET /recv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiveResponse {
    pub messages: Vec<MessageDto>,
}

/// Response body of `GET /who`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhoResponse {
    pub nicknames: Vec<String>,
}

/// Error body returned alongside a 400 status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_dto_serializes_text_for_msg() {
        // テスト項目: msg メッセージは text フィールドを含めてシリアライズされる
        // given (前提条件):
        let dto = MessageDto {
            nickname: "alice".to_string(),
            kind: MessageKindDto::Msg,
            text: Some("hello".to_string()),
            timestamp: 1700000000000,
        };

        // when (操作):
        let json = serde_json::to_value(&dto).unwrap();

        // then (期待する結果):
        assert_eq!(
            json,
            serde_json::json!({
                "nickname": "alice",
                "kind": "msg",
                "text": "hello",
                "timestamp": 1700000000000_i64,
            })
        );
    }

    #[test]
    fn test_message_dto_omits_absent_text() {
        // テスト項目: join/part メッセージでは text フィールドが省略される
        // given (前提条件):
        let dto = MessageDto {
            nickname: "bob".to_string(),
            kind: MessageKindDto::Join,
            text: None,
            timestamp: 1700000000000,
        };

        // when (操作):
        let json = serde_json::to_value(&dto).unwrap();

        // then (期待する結果):
        assert_eq!(
            json,
            serde_json::json!({
                "nickname": "bob",
                "kind": "join",
                "timestamp": 1700000000000_i64,
            })
        );
    }

    #[test]
    fn test_message_kind_round_trips_lowercase() {
        // テスト項目: MessageKindDto が小文字の文字列と相互変換できる
        // given (前提条件):
        let kinds = [
            (MessageKindDto::Msg, "\"msg\""),
            (MessageKindDto::Join, "\"join\""),
            (MessageKindDto::Part, "\"part\""),
        ];

        for (kind, expected) in kinds {
            // when (操作):
            let json = serde_json::to_string(&kind).unwrap();
            let back: MessageKindDto = serde_json::from_str(&json).unwrap();

            // then (期待する結果):
            assert_eq!(json, expected);
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn test_receive_response_deserializes() {
        // テスト項目: /recv のレスポンスボディがデシリアライズできる
        // given (前提条件):
        let body = r#"{"messages":[{"nickname":"alice","kind":"part","timestamp":42}]}"#;

        // when (操作):
        let response: ReceiveResponse = serde_json::from_str(body).unwrap();

        // then (期待する結果):
        assert_eq!(response.messages.len(), 1);
        assert_eq!(response.messages[0].nickname, "alice");
        assert_eq!(response.messages[0].kind, MessageKindDto::Part);
        assert_eq!(response.messages[0].text, None);
        assert_eq!(response.messages[0].timestamp, 42);
    }
}
