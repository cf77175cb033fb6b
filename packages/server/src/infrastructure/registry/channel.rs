//! Channel registry: lazy creation and waiter timeout sweeping.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use hiroba_shared::time::Clock;

use crate::domain::{Channel, Timestamp};

/// Name of the channel every session starts in
pub const DEFAULT_CHANNEL: &str = "";

/// How long a parked waiter may hang around before it resolves empty
pub const WAIT_TIMEOUT_MILLIS: i64 = 30 * 1000;

/// Mapping from channel name to channel.
///
/// Channels are created lazily on first reference and never removed; the
/// default channel exists from startup. The registry exclusively owns every
/// channel for the lifetime of the process.
pub struct ChannelRegistry {
    channels: Mutex<HashMap<String, Arc<Mutex<Channel>>>>,
    clock: Arc<dyn Clock>,
    wait_timeout_millis: i64,
}

impl ChannelRegistry {
    /// Create a registry holding only the default channel
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_wait_timeout(clock, WAIT_TIMEOUT_MILLIS)
    }

    /// Create a registry with a custom waiter timeout
    pub fn with_wait_timeout(clock: Arc<dyn Clock>, wait_timeout_millis: i64) -> Self {
        let mut channels = HashMap::new();
        channels.insert(
            DEFAULT_CHANNEL.to_string(),
            Arc::new(Mutex::new(Channel::new(DEFAULT_CHANNEL))),
        );
        Self {
            channels: Mutex::new(channels),
            clock,
            wait_timeout_millis,
        }
    }

    /// Return the channel for `name`, creating an empty one on first
    /// reference. Idempotent under repeated calls for the same name.
    pub async fn get_or_create(&self, name: &str) -> Arc<Mutex<Channel>> {
        let mut channels = self.channels.lock().await;
        channels
            .entry(name.to_string())
            .or_insert_with(|| {
                tracing::debug!(channel = name, "creating channel");
                Arc::new(Mutex::new(Channel::new(name)))
            })
            .clone()
    }

    /// The always-present default channel
    pub async fn default_channel(&self) -> Arc<Mutex<Channel>> {
        self.get_or_create(DEFAULT_CHANNEL).await
    }

    /// Resolve timed-out waiters across every channel.
    ///
    /// Runs once per second from the background sweep task; each channel is
    /// swept independently, so one channel's waiters cannot block the rest.
    pub async fn sweep_waiters(&self) {
        let now = Timestamp::new(self.clock.now_millis());
        let channels: Vec<Arc<Mutex<Channel>>> =
            self.channels.lock().await.values().cloned().collect();
        for channel in channels {
            channel
                .lock()
                .await
                .sweep_waiters(now, self.wait_timeout_millis);
        }
    }
}
