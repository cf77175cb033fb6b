//! UseCase: 参加処理
//!
//! ニックネームを検証してセッションを発行し、デフォルトチャンネルに
//! join メッセージを流す。ニックネームの一意性はレジストリが保証する。

use std::sync::Arc;

use hiroba_shared::time::Clock;

use crate::domain::{MessageKind, Nickname, SessionId, Timestamp};
use crate::infrastructure::registry::{ChannelRegistry, SessionRegistry};

use super::error::JoinError;

/// 参加のユースケース
pub struct JoinUseCase {
    sessions: Arc<SessionRegistry>,
    channels: Arc<ChannelRegistry>,
    clock: Arc<dyn Clock>,
}

impl JoinUseCase {
    pub fn new(
        sessions: Arc<SessionRegistry>,
        channels: Arc<ChannelRegistry>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            sessions,
            channels,
            clock,
        }
    }

    /// Create a session for `nick` and announce the arrival in the default
    /// channel.
    ///
    /// # Returns
    ///
    /// The issued session id together with the accepted nickname.
    pub async fn execute(&self, nick: &str) -> Result<(SessionId, Nickname), JoinError> {
        let nickname = Nickname::new(nick.to_string())?;
        let id = self.sessions.create(nickname.clone()).await?;

        let channel = self.channels.default_channel().await;
        let now = Timestamp::new(self.clock.now_millis());
        channel
            .lock()
            .await
            .append(&nickname, MessageKind::Join, None, now);

        Ok((id, nickname))
    }
}
