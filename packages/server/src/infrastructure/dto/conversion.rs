//! Domain Model から DTO への変換
//!
//! ドメインモデルはワイヤ表現を知らないので、JSON に出る形への変換は
//! この層が一手に引き受ける。

use hiroba_shared::wire::{MessageDto, MessageKindDto};

use crate::domain::{ChatMessage, MessageKind};

impl From<MessageKind> for MessageKindDto {
    fn from(kind: MessageKind) -> Self {
        match kind {
            MessageKind::Msg => MessageKindDto::Msg,
            MessageKind::Join => MessageKindDto::Join,
            MessageKind::Part => MessageKindDto::Part,
        }
    }
}

impl From<ChatMessage> for MessageDto {
    fn from(message: ChatMessage) -> Self {
        Self {
            nickname: message.nickname.as_str().to_string(),
            kind: message.kind.into(),
            text: message.text,
            timestamp: message.timestamp.value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Nickname, Timestamp};

    #[test]
    fn test_chat_message_converts_to_wire_shape() {
        // テスト項目: ドメインのメッセージがワイヤ DTO に変換される
        // given (前提条件):
        let message = ChatMessage::new(
            Nickname::new("alice".to_string()).unwrap(),
            MessageKind::Msg,
            Some("hello".to_string()),
            Timestamp::new(1700000000000),
        );

        // when (操作):
        let dto = MessageDto::from(message);

        // then (期待する結果):
        assert_eq!(dto.nickname, "alice");
        assert_eq!(dto.kind, MessageKindDto::Msg);
        assert_eq!(dto.text.as_deref(), Some("hello"));
        assert_eq!(dto.timestamp, 1700000000000);
    }

    #[test]
    fn test_every_kind_maps_to_its_wire_name() {
        // テスト項目: MessageKind の全バリアントが対応する DTO に写る
        assert_eq!(MessageKindDto::from(MessageKind::Msg), MessageKindDto::Msg);
        assert_eq!(MessageKindDto::from(MessageKind::Join), MessageKindDto::Join);
        assert_eq!(MessageKindDto::from(MessageKind::Part), MessageKindDto::Part);
    }
}
