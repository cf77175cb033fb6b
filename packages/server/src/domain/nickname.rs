//! Nickname value object.

use std::fmt;

use super::error::NicknameError;

/// Maximum nickname length accepted at join time
pub const MAX_NICKNAME_LEN: usize = 50;

/// A validated nickname.
///
/// 1-50 characters, each ASCII alphanumeric or one of `_`, `-`, `^`, `!`.
/// Uniqueness among live sessions is enforced separately by the session
/// registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Nickname(String);

impl Nickname {
    /// Validate and wrap a raw nickname
    ///
    /// # Errors
    ///
    /// Returns [`NicknameError::InvalidFormat`] when the nickname is empty,
    /// longer than [`MAX_NICKNAME_LEN`], or contains a character outside the
    /// allowed set.
    pub fn new(raw: String) -> Result<Self, NicknameError> {
        if raw.is_empty() || raw.len() > MAX_NICKNAME_LEN {
            return Err(NicknameError::InvalidFormat);
        }
        if !raw.chars().all(is_allowed_char) {
            return Err(NicknameError::InvalidFormat);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '^' | '!')
}
