//! Sessions: server-side records of connected users.

use std::fmt;
use std::sync::Arc;

use rand::Rng;
use tokio::sync::Mutex;

use super::{Channel, Nickname, Timestamp};

/// Upper bound (exclusive) for generated session ids
const ID_SPACE: u64 = 100_000_000_000;

/// A server-issued session identifier: a randomized decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a new random id
    pub fn random() -> Self {
        let n = rand::thread_rng().gen_range(0..ID_SPACE);
        Self(n.to_string())
    }

    /// Wrap an id received from a request parameter
    pub fn from_string(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One connected user: nickname, current channel membership and activity
/// tracking.
///
/// The session holds a handle to its current channel but does not own it;
/// channels belong to the channel registry and outlive every session.
pub struct Session {
    id: SessionId,
    nickname: Nickname,
    channel: Arc<Mutex<Channel>>,
    last_activity: Timestamp,
}

impl Session {
    pub fn new(
        id: SessionId,
        nickname: Nickname,
        channel: Arc<Mutex<Channel>>,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            nickname,
            channel,
            last_activity: now,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn nickname(&self) -> &Nickname {
        &self.nickname
    }

    /// Handle to the channel the session currently sits in
    pub fn channel(&self) -> Arc<Mutex<Channel>> {
        self.channel.clone()
    }

    pub fn last_activity(&self) -> Timestamp {
        self.last_activity
    }

    /// Refresh the activity timestamp.
    ///
    /// Called on every successful request that references this session, so
    /// an active client never expires.
    pub fn poke(&mut self, now: Timestamp) {
        self.last_activity = now;
    }

    /// Reassign the current channel; the registry appends the part/join
    /// messages around this.
    pub(crate) fn set_channel(&mut self, channel: Arc<Mutex<Channel>>) {
        self.channel = channel;
    }

    /// Whether the session has been idle longer than `timeout_millis` at
    /// `now`.
    pub fn is_expired(&self, now: Timestamp, timeout_millis: i64) -> bool {
        now.elapsed_since(self.last_activity) > timeout_millis
    }
}
