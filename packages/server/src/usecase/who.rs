//! UseCase: 接続中ニックネーム一覧

use std::sync::Arc;

use crate::infrastructure::registry::SessionRegistry;

/// 在席一覧のユースケース
pub struct WhoUseCase {
    sessions: Arc<SessionRegistry>,
}

impl WhoUseCase {
    pub fn new(sessions: Arc<SessionRegistry>) -> Self {
        Self { sessions }
    }

    /// Nicknames of every live session, sorted for consistent ordering.
    pub async fn execute(&self) -> Vec<String> {
        let mut nicknames = self.sessions.nicknames().await;
        nicknames.sort();
        nicknames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Nickname;
    use crate::infrastructure::registry::ChannelRegistry;
    use hiroba_shared::time::FixedClock;

    #[tokio::test]
    async fn test_who_lists_nicknames_sorted() {
        // テスト項目: who が生存セッションのニックネームをソートして返す
        // given (前提条件):
        let clock = Arc::new(FixedClock::new(1_000));
        let channels = Arc::new(ChannelRegistry::new(clock.clone()));
        let sessions = Arc::new(SessionRegistry::new(channels, clock));
        for nick in ["carol", "alice", "bob"] {
            sessions
                .create(Nickname::new(nick.to_string()).unwrap())
                .await
                .unwrap();
        }
        let usecase = WhoUseCase::new(sessions);

        // when (操作):
        let nicknames = usecase.execute().await;

        // then (期待する結果):
        assert_eq!(nicknames, ["alice", "bob", "carol"]);
    }

    #[tokio::test]
    async fn test_who_is_empty_without_sessions() {
        // テスト項目: セッションが無ければ空のリストが返る
        // given (前提条件):
        let clock = Arc::new(FixedClock::new(1_000));
        let channels = Arc::new(ChannelRegistry::new(clock.clone()));
        let sessions = Arc::new(SessionRegistry::new(channels, clock));
        let usecase = WhoUseCase::new(sessions);

        // when (操作):
        let nicknames = usecase.execute().await;

        // then (期待する結果):
        assert!(nicknames.is_empty());
    }
}
