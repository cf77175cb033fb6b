//! Domain model of the messaging engine.
//!
//! Channels, sessions, nicknames and commands, with the invariants the
//! registries rely on: bounded history, single-use waiters, validated
//! nicknames, unique session ids.

mod channel;
mod command;
mod error;
mod message;
mod nickname;
mod session;
mod timestamp;

pub use channel::{Channel, MESSAGE_BACKLOG, QueryOutcome};
pub use command::{Command, TextPayload, classify};
pub use error::NicknameError;
pub use message::{ChatMessage, MessageKind};
pub use nickname::{MAX_NICKNAME_LEN, Nickname};
pub use session::{Session, SessionId};
pub use timestamp::Timestamp;
