//! UseCase: ロングポーリング受信
//!
//! `since` より新しいメッセージが既にあれば同期的に返し、無ければ
//! チャンネルの waiter として保留する。リクエストの継続は oneshot の
//! 受信側として保持され、次の append か定期 sweep が解決する。

use std::sync::Arc;

use hiroba_shared::time::Clock;

use crate::domain::{ChatMessage, QueryOutcome, SessionId, Timestamp};
use crate::infrastructure::registry::{ChannelRegistry, SessionRegistry, SessionView};

/// 受信のユースケース
pub struct ReceiveUseCase {
    sessions: Arc<SessionRegistry>,
    channels: Arc<ChannelRegistry>,
    clock: Arc<dyn Clock>,
}

impl ReceiveUseCase {
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

    /// Return every message in the session's channel strictly newer than
    /// `since`, waiting until one arrives or the waiter times out.
    ///
    /// This is the only suspension point in the engine: the request parks
    /// only when no backlog matches, and is resumed by whichever request
    /// appends next or by the periodic sweep (then with an empty result).
    /// An unknown or missing session id serves the default channel.
    pub async fn execute(&self, id: Option<&SessionId>, since: Timestamp) -> Vec<ChatMessage> {
        let session: Option<SessionView> = match id {
            Some(id) => self.sessions.poke(id).await,
            None => None,
        };

        let channel = match &session {
            Some(view) => view.channel.clone(),
            None => self.channels.default_channel().await,
        };

        let now = Timestamp::new(self.clock.now_millis());
        let outcome = channel.lock().await.query(since, now);

        let messages = match outcome {
            QueryOutcome::Ready(messages) => messages,
            // A dropped sender counts as an empty wake-up.
            QueryOutcome::Parked(rx) => rx.await.unwrap_or_default(),
        };

        // The wait may have taken most of the idle timeout; refresh the
        // session again so a well-behaved poller never expires mid-loop.
        if session.is_some()
            && let Some(id) = id
        {
            self.sessions.poke(id).await;
        }

        messages
    }
}
