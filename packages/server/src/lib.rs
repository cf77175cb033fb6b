//! Hiroba chat server library.
//!
//! This library implements a group-messaging backend over plain HTTP
//! long-polling: clients join a named channel under a nickname, post text
//! messages, and receive new ones through blocking `/recv` requests that
//! complete as soon as new content arrives.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
