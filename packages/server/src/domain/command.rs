//! Slash-command parsing for text sent to a channel.

/// A recognized slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/join <channel>`: move the session to the named channel.
    ///
    /// Without an argument the name is empty, which sends the session back
    /// to the default channel.
    Join(String),
    /// `/leave`: return to the default channel.
    Leave,
}

/// Classification of raw text sent by a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextPayload {
    /// Plain chat text, posted verbatim.
    Plain,
    /// A recognized command, dispatched instead of being posted.
    Command(Command),
    /// Slash-prefixed but unrecognized; dropped silently.
    UnknownCommand,
}

/// Classify `text` as chat or command input.
///
/// A command is a leading `/` immediately followed by a verb; the first
/// whitespace-separated token after the verb is the argument. A lone `/` or
/// a slash followed by whitespace is ordinary chat text.
pub fn classify(text: &str) -> TextPayload {
    let Some(rest) = text.strip_prefix('/') else {
        return TextPayload::Plain;
    };
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        return TextPayload::Plain;
    }

    let mut tokens = rest.split_whitespace();
    let Some(verb) = tokens.next() else {
        return TextPayload::Plain;
    };

    match verb {
        "join" => {
            let channel = tokens.next().unwrap_or_default().to_string();
            TextPayload::Command(Command::Join(channel))
        }
        "leave" => TextPayload::Command(Command::Leave),
        _ => TextPayload::UnknownCommand,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_not_a_command() {
        // テスト項目: スラッシュで始まらないテキストは平文として扱われる
        assert_eq!(classify("hello there"), TextPayload::Plain);
    }

    #[test]
    fn test_join_with_channel_name() {
        // テスト項目: /join <channel> が Join コマンドとして解釈される
        assert_eq!(
            classify("/join room1"),
            TextPayload::Command(Command::Join("room1".to_string()))
        );
    }

    #[test]
    fn test_join_takes_first_token_of_argument() {
        // テスト項目: /join の引数は最初のトークンだけが採用される
        assert_eq!(
            classify("/join room one"),
            TextPayload::Command(Command::Join("room".to_string()))
        );
    }

    #[test]
    fn test_join_without_argument_targets_default_channel() {
        // テスト項目: 引数なしの /join は空のチャンネル名（デフォルト）になる
        assert_eq!(
            classify("/join"),
            TextPayload::Command(Command::Join(String::new()))
        );
    }

    #[test]
    fn test_leave_returns_to_default_channel() {
        // テスト項目: /leave が Leave コマンドとして解釈される
        assert_eq!(classify("/leave"), TextPayload::Command(Command::Leave));
        assert_eq!(
            classify("/leave trailing words"),
            TextPayload::Command(Command::Leave)
        );
    }

    #[test]
    fn test_unknown_verbs_are_silently_droppable() {
        // テスト項目: 未知のコマンドは UnknownCommand に分類される
        assert_eq!(classify("/dance"), TextPayload::UnknownCommand);
        assert_eq!(classify("/JOIN room1"), TextPayload::UnknownCommand);
    }

    #[test]
    fn test_lone_slash_and_slash_space_are_plain_text() {
        // テスト項目: "/" 単体やスラッシュ直後の空白は平文として扱われる
        assert_eq!(classify("/"), TextPayload::Plain);
        assert_eq!(classify("/ join room1"), TextPayload::Plain);
    }
}
