//! Chat messages and their kinds.

use super::{Nickname, Timestamp};

/// What a history entry represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Ordinary chat text
    Msg,
    /// A user entered the channel
    Join,
    /// A user left the channel
    Part,
}

/// One entry in a channel's history.
///
/// Immutable once created; the channel that appended it owns the original
/// and clones cross the API boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub nickname: Nickname,
    pub kind: MessageKind,
    /// Present for `Msg`, absent for join/part notifications
    pub text: Option<String>,
    pub timestamp: Timestamp,
}

impl ChatMessage {
    pub fn new(
        nickname: Nickname,
        kind: MessageKind,
        text: Option<String>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            nickname,
            kind,
            text,
            timestamp,
        }
    }
}
