//! UI utilities for the client.

use std::io::Write;

/// Redisplay the prompt after printing received messages
pub fn redisplay_prompt(nick: &str) {
    print!("{}> ", nick);
    std::io::stdout().flush().ok();
}
