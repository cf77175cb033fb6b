//! Session registry: nickname uniqueness, lifecycle and idle expiry.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use hiroba_shared::time::Clock;

use crate::domain::{Channel, MessageKind, Nickname, NicknameError, Session, SessionId, Timestamp};

use super::ChannelRegistry;

/// Sessions idle longer than this are reaped by the sweep
pub const SESSION_TIMEOUT_MILLIS: i64 = 60 * 1000;

/// Snapshot handed to request paths after a successful lookup.
pub struct SessionView {
    pub nickname: Nickname,
    pub channel: Arc<Mutex<Channel>>,
}

/// Mapping from session id to session.
///
/// All session mutation goes through this registry under a single lock, so
/// the uniqueness check can never race a reap: a nickname freed by the
/// sweep is observably free by the time the next `create` scans.
pub struct SessionRegistry {
    sessions: Mutex<HashMap<SessionId, Session>>,
    channels: Arc<ChannelRegistry>,
    clock: Arc<dyn Clock>,
    session_timeout_millis: i64,
}

impl SessionRegistry {
    pub fn new(channels: Arc<ChannelRegistry>, clock: Arc<dyn Clock>) -> Self {
        Self::with_session_timeout(channels, clock, SESSION_TIMEOUT_MILLIS)
    }

    /// Create a registry with a custom idle timeout
    pub fn with_session_timeout(
        channels: Arc<ChannelRegistry>,
        clock: Arc<dyn Clock>,
        session_timeout_millis: i64,
    ) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            channels,
            clock,
            session_timeout_millis,
        }
    }

    /// Register a new session under `nickname`, placed in the default
    /// channel.
    ///
    /// The join message is NOT appended here; announcing the arrival is the
    /// caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns [`NicknameError::Taken`] when any live session already holds
    /// the nickname (case-sensitive exact match).
    pub async fn create(&self, nickname: Nickname) -> Result<SessionId, NicknameError> {
        let default_channel = self.channels.default_channel().await;

        let mut sessions = self.sessions.lock().await;
        if sessions
            .values()
            .any(|session| session.nickname() == &nickname)
        {
            return Err(NicknameError::Taken(nickname.as_str().to_string()));
        }

        let id = SessionId::random();
        let now = Timestamp::new(self.clock.now_millis());
        let session = Session::new(id.clone(), nickname.clone(), default_channel, now);
        sessions.insert(id.clone(), session);

        tracing::info!(nickname = %nickname, session = %id, "session created");
        Ok(id)
    }

    /// Look up a session, refresh its activity timestamp and hand back what
    /// the request paths need. Returns `None` for unknown ids.
    pub async fn poke(&self, id: &SessionId) -> Option<SessionView> {
        let mut sessions = self.sessions.lock().await;
        let session = sessions.get_mut(id)?;
        session.poke(Timestamp::new(self.clock.now_millis()));
        Some(SessionView {
            nickname: session.nickname().clone(),
            channel: session.channel(),
        })
    }

    /// Remove the session and announce its departure in its channel.
    /// Unknown ids are a no-op.
    pub async fn destroy(&self, id: &SessionId) {
        let mut sessions = self.sessions.lock().await;
        if let Some(session) = sessions.remove(id) {
            tracing::info!(nickname = %session.nickname(), session = %id, "session destroyed");
            self.announce_part(&session).await;
        }
    }

    /// Move a session to another channel, announcing the part and the join.
    ///
    /// Switching to the channel the session is already in still performs
    /// the full part+join round trip. Unknown ids are a no-op.
    pub async fn switch_channel(&self, id: &SessionId, channel_name: &str) {
        let mut sessions = self.sessions.lock().await;
        let Some(session) = sessions.get_mut(id) else {
            return;
        };

        let now = Timestamp::new(self.clock.now_millis());
        session
            .channel()
            .lock()
            .await
            .append(session.nickname(), MessageKind::Part, None, now);

        let next = self.channels.get_or_create(channel_name).await;
        next.lock()
            .await
            .append(session.nickname(), MessageKind::Join, None, now);
        session.set_channel(next);
    }

    /// Reap every session idle beyond the timeout.
    ///
    /// Runs once per second from the background sweep task. Each reaped
    /// session parts its channel exactly once; the reaping order among
    /// simultaneously expired sessions is unspecified.
    pub async fn sweep(&self) {
        let now = Timestamp::new(self.clock.now_millis());
        let mut sessions = self.sessions.lock().await;

        let expired: Vec<SessionId> = sessions
            .values()
            .filter(|session| session.is_expired(now, self.session_timeout_millis))
            .map(|session| session.id().clone())
            .collect();

        for id in expired {
            if let Some(session) = sessions.remove(&id) {
                tracing::info!(nickname = %session.nickname(), session = %id, "session expired");
                self.announce_part(&session).await;
            }
        }
    }

    /// Nicknames of every live session, for the who listing
    pub async fn nicknames(&self) -> Vec<String> {
        self.sessions
            .lock()
            .await
            .values()
            .map(|session| session.nickname().as_str().to_string())
            .collect()
    }

    async fn announce_part(&self, session: &Session) {
        let now = Timestamp::new(self.clock.now_millis());
        session
            .channel()
            .lock()
            .await
            .append(session.nickname(), MessageKind::Part, None, now);
    }
}
