//! Error types for the chat client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server refused the nickname (bad format or already in use)
    #[error("nickname rejected: {0}")]
    NickRejected(String),

    /// Transport-level failure talking to the server
    #[error("connection error: {0}")]
    Connection(#[from] reqwest::Error),
}
