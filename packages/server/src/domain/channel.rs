//! Channels: bounded message history plus parked long-poll waiters.

use std::collections::VecDeque;

use tokio::sync::oneshot;

use super::{ChatMessage, MessageKind, Nickname, Timestamp};

/// Maximum number of messages a channel keeps
pub const MESSAGE_BACKLOG: usize = 200;

/// A receive request parked until new content arrives.
///
/// The oneshot sender is consumed on resolution, so a waiter fires at most
/// once; a second resolution is unrepresentable.
struct Waiter {
    registered_at: Timestamp,
    tx: oneshot::Sender<Vec<ChatMessage>>,
}

/// Result of a history query.
pub enum QueryOutcome {
    /// Matching backlog existed; the request completes synchronously.
    Ready(Vec<ChatMessage>),
    /// Nothing matched yet. The receiver resolves on the next append, or
    /// with an empty result once the waiter times out.
    Parked(oneshot::Receiver<Vec<ChatMessage>>),
}

/// A named topic holding an ordered, size-bounded message history and the
/// set of receive requests currently waiting on it.
///
/// Channels are created lazily by the registry and live for the rest of the
/// process; all mutation goes through [`append`](Channel::append),
/// [`query`](Channel::query) and [`sweep_waiters`](Channel::sweep_waiters).
pub struct Channel {
    name: String,
    messages: VecDeque<ChatMessage>,
    waiters: Vec<Waiter>,
    backlog: usize,
}

impl Channel {
    /// Create an empty channel with the default backlog bound
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_backlog(name, MESSAGE_BACKLOG)
    }

    /// Create an empty channel with a custom backlog bound
    pub fn with_backlog(name: impl Into<String>, backlog: usize) -> Self {
        Self {
            name: name.into(),
            messages: VecDeque::new(),
            waiters: Vec::new(),
            backlog,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// History snapshot, oldest first
    pub fn messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    /// Number of receive requests currently parked on this channel
    pub fn waiter_count(&self) -> usize {
        self.waiters.len()
    }

    /// Append a message stamped `now`, trim history to the backlog bound
    /// and wake every parked waiter.
    ///
    /// Each waiter receives only the triggering message, not a catch-up
    /// scan; clients issue a fresh query right after every wake-up, so the
    /// next request picks up anything this one skipped.
    pub fn append(
        &mut self,
        nickname: &Nickname,
        kind: MessageKind,
        text: Option<String>,
        now: Timestamp,
    ) -> ChatMessage {
        let message = ChatMessage::new(nickname.clone(), kind, text, now);

        match message.kind {
            MessageKind::Msg => tracing::info!(
                channel = %self.name,
                "<{}> {}",
                message.nickname,
                message.text.as_deref().unwrap_or_default()
            ),
            MessageKind::Join => tracing::info!(channel = %self.name, "{} join", message.nickname),
            MessageKind::Part => tracing::info!(channel = %self.name, "{} part", message.nickname),
        }

        self.messages.push_back(message.clone());
        while self.messages.len() > self.backlog {
            self.messages.pop_front();
        }

        for waiter in self.waiters.drain(..) {
            // The receiver may have been dropped by an abandoned request.
            let _ = waiter.tx.send(vec![message.clone()]);
        }

        message
    }

    /// Return every message strictly newer than `since`, or park a waiter
    /// registered at `now` when nothing qualifies.
    pub fn query(&mut self, since: Timestamp, now: Timestamp) -> QueryOutcome {
        let matching: Vec<ChatMessage> = self
            .messages
            .iter()
            .filter(|message| message.timestamp > since)
            .cloned()
            .collect();

        if !matching.is_empty() {
            return QueryOutcome::Ready(matching);
        }

        let (tx, rx) = oneshot::channel();
        self.waiters.push(Waiter {
            registered_at: now,
            tx,
        });
        QueryOutcome::Parked(rx)
    }

    /// Resolve with an empty result every waiter that has been parked for
    /// more than `wait_timeout_millis`, oldest first.
    ///
    /// Waiters are stored in registration order, so the scan stops at the
    /// first one still within the timeout.
    pub fn sweep_waiters(&mut self, now: Timestamp, wait_timeout_millis: i64) {
        while let Some(front) = self.waiters.first() {
            if now.elapsed_since(front.registered_at) <= wait_timeout_millis {
                break;
            }
            let waiter = self.waiters.remove(0);
            let _ = waiter.tx.send(Vec::new());
        }
    }
}
