//! Hiroba CLI chat client library.
//!
//! Talks to the chat server over plain HTTP: a long-poll task streams new
//! messages to the terminal while stdin lines are forwarded to `/send`.

mod api;
mod error;
mod formatter;
mod runner;
mod ui;

pub use api::ChatApi;
pub use error::ClientError;
pub use runner::run_client;
