//! Error types surfaced by the use cases.

use thiserror::Error;

use crate::domain::NicknameError;

/// Join failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinError {
    /// The nickname is empty, too long or contains disallowed characters.
    #[error("invalid nickname")]
    InvalidNickname,

    /// Another live session already owns the nickname.
    #[error("nickname already in use")]
    NicknameTaken,
}

impl From<NicknameError> for JoinError {
    fn from(err: NicknameError) -> Self {
        match err {
            NicknameError::InvalidFormat => Self::InvalidNickname,
            NicknameError::Taken(_) => Self::NicknameTaken,
        }
    }
}

/// Send failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    /// The session id does not resolve to a live session.
    #[error("no such session id")]
    UnknownSession,
}
