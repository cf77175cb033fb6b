//! HTTP request layer for the chat server.

mod handler;
mod server;
mod signal;
mod state;

pub use server::Server;
