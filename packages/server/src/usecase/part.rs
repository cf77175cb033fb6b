//! UseCase: 明示的な退出処理

use std::sync::Arc;

use crate::domain::SessionId;
use crate::infrastructure::registry::SessionRegistry;

/// 退出のユースケース
pub struct PartUseCase {
    sessions: Arc<SessionRegistry>,
}

impl PartUseCase {
    pub fn new(sessions: Arc<SessionRegistry>) -> Self {
        Self { sessions }
    }

    /// End the session; its channel receives the part message. Unknown ids
    /// are silently ignored.
    pub async fn execute(&self, id: &SessionId) {
        self.sessions.destroy(id).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MessageKind, Nickname};
    use crate::infrastructure::registry::ChannelRegistry;
    use hiroba_shared::time::FixedClock;

    #[tokio::test]
    async fn test_part_destroys_session_and_announces_departure() {
        // テスト項目: part がセッションを破棄し、チャンネルに part を流す
        // given (前提条件):
        let clock = Arc::new(FixedClock::new(1_000));
        let channels = Arc::new(ChannelRegistry::new(clock.clone()));
        let sessions = Arc::new(SessionRegistry::new(channels.clone(), clock));
        let id = sessions
            .create(Nickname::new("alice".to_string()).unwrap())
            .await
            .unwrap();
        let usecase = PartUseCase::new(sessions.clone());

        // when (操作):
        usecase.execute(&id).await;

        // then (期待する結果):
        assert!(sessions.poke(&id).await.is_none());
        let lobby = channels.default_channel().await;
        let kinds: Vec<MessageKind> = lobby.lock().await.messages().map(|m| m.kind).collect();
        assert_eq!(kinds, [MessageKind::Part]);
    }
}
