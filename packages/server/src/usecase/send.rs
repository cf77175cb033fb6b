//! UseCase: メッセージ送信とコマンドディスパッチ
//!
//! 送られてきたテキストを分類し、平文ならセッションの現在のチャンネルに
//! 投稿、スラッシュコマンドならチャンネル切り替えとして実行する。

use std::sync::Arc;

use hiroba_shared::time::Clock;

use crate::domain::{Command, MessageKind, SessionId, TextPayload, Timestamp, classify};
use crate::infrastructure::registry::{DEFAULT_CHANNEL, SessionRegistry};

use super::error::SendError;

/// メッセージ送信のユースケース
pub struct SendUseCase {
    sessions: Arc<SessionRegistry>,
    clock: Arc<dyn Clock>,
}

impl SendUseCase {
    pub fn new(sessions: Arc<SessionRegistry>, clock: Arc<dyn Clock>) -> Self {
        Self { sessions, clock }
    }

    /// Post `text` to the session's channel, or dispatch it as a command.
    ///
    /// Recognized commands switch channels; unrecognized ones are dropped
    /// without an error. Every successful call refreshes the session's
    /// activity timestamp.
    pub async fn execute(&self, id: &SessionId, text: &str) -> Result<(), SendError> {
        let Some(view) = self.sessions.poke(id).await else {
            return Err(SendError::UnknownSession);
        };

        match classify(text) {
            TextPayload::Plain => {
                let now = Timestamp::new(self.clock.now_millis());
                view.channel.lock().await.append(
                    &view.nickname,
                    MessageKind::Msg,
                    Some(text.to_string()),
                    now,
                );
            }
            TextPayload::Command(Command::Join(channel_name)) => {
                self.sessions.switch_channel(id, &channel_name).await;
            }
            TextPayload::Command(Command::Leave) => {
                self.sessions.switch_channel(id, DEFAULT_CHANNEL).await;
            }
            TextPayload::UnknownCommand => {
                tracing::debug!(session = %id, "ignoring unknown command");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Nickname;
    use crate::infrastructure::registry::ChannelRegistry;
    use hiroba_shared::time::FixedClock;

    struct Fixture {
        channels: Arc<ChannelRegistry>,
        sessions: Arc<SessionRegistry>,
        usecase: SendUseCase,
    }

    fn fixture() -> Fixture {
        let clock = Arc::new(FixedClock::new(1_000));
        let channels = Arc::new(ChannelRegistry::new(clock.clone()));
        let sessions = Arc::new(SessionRegistry::new(channels.clone(), clock.clone()));
        let usecase = SendUseCase::new(sessions.clone(), clock);
        Fixture {
            channels,
            sessions,
            usecase,
        }
    }

    async fn join(f: &Fixture, nick: &str) -> SessionId {
        f.sessions
            .create(Nickname::new(nick.to_string()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_plain_text_is_posted_to_current_channel() {
        // テスト項目: 平文がセッションの現在のチャンネルに msg として投稿される
        // given (前提条件):
        let f = fixture();
        let id = join(&f, "alice").await;

        // when (操作):
        f.usecase.execute(&id, "hello world").await.unwrap();

        // then (期待する結果):
        let lobby = f.channels.default_channel().await;
        let lobby = lobby.lock().await;
        let posted: Vec<_> = lobby
            .messages()
            .filter(|m| m.kind == MessageKind::Msg)
            .collect();
        assert_eq!(posted.len(), 1);
        assert_eq!(posted[0].nickname.as_str(), "alice");
        assert_eq!(posted[0].text.as_deref(), Some("hello world"));
    }

    #[tokio::test]
    async fn test_unknown_session_is_rejected() {
        // テスト項目: 存在しないセッション id での送信が UnknownSession になる
        // given (前提条件):
        let f = fixture();

        // when (操作):
        let result = f
            .usecase
            .execute(&SessionId::from_string("0".to_string()), "hello")
            .await;

        // then (期待する結果):
        assert_eq!(result, Err(SendError::UnknownSession));
    }

    #[tokio::test]
    async fn test_join_command_switches_channel_instead_of_posting() {
        // テスト項目: /join がメッセージ投稿ではなくチャンネル切り替えになる
        // given (前提条件):
        let f = fixture();
        let id = join(&f, "alice").await;

        // when (操作):
        f.usecase.execute(&id, "/join room1").await.unwrap();

        // then (期待する結果): room1 に join、lobby に part が残り、msg はどこにも無い
        let room = f.channels.get_or_create("room1").await;
        let kinds: Vec<MessageKind> = room.lock().await.messages().map(|m| m.kind).collect();
        assert_eq!(kinds, [MessageKind::Join]);

        let lobby = f.channels.default_channel().await;
        let kinds: Vec<MessageKind> = lobby.lock().await.messages().map(|m| m.kind).collect();
        assert_eq!(kinds, [MessageKind::Part]);

        let view = f.sessions.poke(&id).await.unwrap();
        assert!(Arc::ptr_eq(&view.channel, &room));
    }

    #[tokio::test]
    async fn test_leave_command_returns_to_default_channel() {
        // テスト項目: /leave でデフォルトチャンネルに戻る
        // given (前提条件):
        let f = fixture();
        let id = join(&f, "alice").await;
        f.usecase.execute(&id, "/join room1").await.unwrap();

        // when (操作):
        f.usecase.execute(&id, "/leave").await.unwrap();

        // then (期待する結果):
        let view = f.sessions.poke(&id).await.unwrap();
        assert!(Arc::ptr_eq(&view.channel, &f.channels.default_channel().await));
    }

    #[tokio::test]
    async fn test_unknown_command_is_silently_ignored() {
        // テスト項目: 未知のコマンドはエラーにも投稿にもならない
        // given (前提条件):
        let f = fixture();
        let id = join(&f, "alice").await;

        // when (操作):
        let result = f.usecase.execute(&id, "/dance").await;

        // then (期待する結果):
        assert!(result.is_ok());
        let lobby = f.channels.default_channel().await;
        assert_eq!(lobby.lock().await.messages().count(), 0);
    }

    #[tokio::test]
    async fn test_messages_after_switch_land_in_new_channel() {
        // テスト項目: 切り替え後の平文は新しいチャンネルに投稿される
        // given (前提条件):
        let f = fixture();
        let id = join(&f, "alice").await;
        f.usecase.execute(&id, "/join room1").await.unwrap();

        // when (操作):
        f.usecase.execute(&id, "over here").await.unwrap();

        // then (期待する結果):
        let room = f.channels.get_or_create("room1").await;
        let room = room.lock().await;
        let posted: Vec<_> = room
            .messages()
            .filter(|m| m.kind == MessageKind::Msg)
            .collect();
        assert_eq!(posted.len(), 1);
        assert_eq!(posted[0].text.as_deref(), Some("over here"));
    }
}
