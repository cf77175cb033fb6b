//! Message formatting utilities for client display.

use hiroba_shared::time::timestamp_to_rfc3339;
use hiroba_shared::wire::{MessageDto, MessageKindDto};

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format one received message for the terminal.
    ///
    /// # Arguments
    ///
    /// * `message` - The wire message to render
    ///
    /// # Returns
    ///
    /// A formatted line: `<nick> text` for chat, join/part notices
    /// otherwise.
    pub fn format_message(message: &MessageDto) -> String {
        match message.kind {
            MessageKindDto::Msg => format!(
                "\n<{}> {}\n",
                message.nickname,
                message.text.as_deref().unwrap_or_default()
            ),
            MessageKindDto::Join => format!("\n+ {} joined\n", message.nickname),
            MessageKindDto::Part => format!("\n- {} parted\n", message.nickname),
        }
    }

    /// Format the who listing shown right after joining.
    ///
    /// # Arguments
    ///
    /// * `nicknames` - Connected nicknames as reported by the server
    /// * `current_nick` - The current user's nickname (to mark as "me")
    ///
    /// # Returns
    ///
    /// A formatted block with one line per connected user
    pub fn format_who(nicknames: &[String], current_nick: &str) -> String {
        let mut output = String::new();
        output.push_str("\n============================================================\n");
        output.push_str("Connected:\n");

        if nicknames.is_empty() {
            output.push_str("(No one here)\n");
        } else {
            for nickname in nicknames {
                let me_suffix = if nickname == current_nick { " (me)" } else { "" };
                output.push_str(&format!("{}{}\n", nickname, me_suffix));
            }
        }

        output.push_str("============================================================\n");
        output
    }

    /// Format a join confirmation with the session's start time.
    pub fn format_joined(nickname: &str, joined_at_millis: i64) -> String {
        format!(
            "Joined as '{}' at {}\n",
            nickname,
            timestamp_to_rfc3339(joined_at_millis)
        )
    }
}
