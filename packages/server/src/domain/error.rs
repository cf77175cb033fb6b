//! Domain-level error types.

use thiserror::Error;

/// Errors raised when registering a nickname.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NicknameError {
    /// The nickname is empty, too long, or contains a disallowed character.
    #[error("nickname must be 1-50 word characters")]
    InvalidFormat,

    /// Another live session already holds this nickname.
    #[error("nickname '{0}' is already in use")]
    Taken(String),
}
