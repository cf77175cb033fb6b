//! Shared library for the Hiroba chat application.
//!
//! Cross-cutting pieces used by both the server and the CLI client:
//! clock abstraction, logging setup, and the HTTP wire types.

pub mod logger;
pub mod time;
pub mod wire;
