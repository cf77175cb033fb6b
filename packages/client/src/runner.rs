//! Client execution logic.

use std::time::Duration;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::mpsc;

use crate::{api::ChatApi, error::ClientError, formatter::MessageFormatter, ui::redisplay_prompt};

/// Delay before retrying after a failed poll
const POLL_RETRY_INTERVAL_SECS: u64 = 2;

/// Run the long-poll chat client until the user exits.
///
/// Joins under `nick`, then runs two loops side by side: a receive loop
/// issuing blocking `/recv` requests, and a send loop forwarding stdin
/// lines to `/send`. The session is parted on the way out.
///
/// # Errors
///
/// Returns [`ClientError::NickRejected`] when the server refuses the
/// nickname, or [`ClientError::Connection`] when the initial join cannot
/// reach the server.
pub async fn run_client(url: String, nick: String) -> Result<(), ClientError> {
    let api = ChatApi::new(url);

    let joined = api.join(&nick).await?;
    let session_id = joined.id.clone();
    tracing::debug!("session id: {}", session_id);
    print!(
        "{}",
        MessageFormatter::format_joined(&joined.nickname, hiroba_shared::time::now_millis())
    );

    // Show who is connected before entering the loop.
    match api.who().await {
        Ok(nicknames) => print!(
            "{}",
            MessageFormatter::format_who(&nicknames, &joined.nickname)
        ),
        Err(e) => tracing::warn!("Failed to fetch who listing: {}", e),
    }

    println!(
        "\nYou are '{}'. Type messages and press Enter to send. /join <channel> switches channel, Ctrl+C exits.\n",
        joined.nickname
    );

    // Receive loop: re-poll immediately after every response. The server
    // wakes a parked poll with only the newest message, so the prompt
    // re-poll with an advanced `since` is what keeps the history complete.
    let poll_api = api.clone();
    let poll_session_id = session_id.clone();
    let poll_nick = joined.nickname.clone();
    let mut poll_task = tokio::spawn(async move {
        let mut since = 0_i64;
        loop {
            match poll_api.recv(&poll_session_id, since).await {
                Ok(messages) => {
                    for message in &messages {
                        since = since.max(message.timestamp);
                        print!("{}", MessageFormatter::format_message(message));
                    }
                    if !messages.is_empty() {
                        redisplay_prompt(&poll_nick);
                    }
                }
                Err(e) => {
                    tracing::warn!("Poll failed: {}", e);
                    tokio::time::sleep(Duration::from_secs(POLL_RETRY_INTERVAL_SECS)).await;
                }
            }
        }
    });

    // Create channel for rustyline input
    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<String>();

    // Spawn a blocking thread for rustyline (synchronous readline)
    let prompt_nick = joined.nickname.clone();
    let _readline_handle = std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("Failed to initialize readline: {}", e);
                return;
            }
        };

        let prompt = format!("{}> ", prompt_nick);

        loop {
            match rl.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if !line.is_empty() {
                        rl.add_history_entry(line).ok();
                        if input_tx.send(line.to_string()).is_err() {
                            // Channel closed, exit thread
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl+D
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    // Send loop: forward stdin lines to the server.
    let send_api = api.clone();
    let send_session_id = session_id.clone();
    let mut send_task = tokio::spawn(async move {
        while let Some(line) = input_rx.recv().await {
            if let Err(e) = send_api.send(&send_session_id, &line).await {
                tracing::warn!("Failed to send message: {}", e);
            }
        }
    });

    // If one of the loops ends (Ctrl+C / connection lost), stop the other.
    tokio::select! {
        _ = &mut poll_task => send_task.abort(),
        _ = &mut send_task => poll_task.abort(),
    };

    // Announce the departure; best effort.
    if let Err(e) = api.part(&session_id).await {
        tracing::warn!("Failed to part cleanly: {}", e);
    }
    tracing::info!("Client session ended");

    Ok(())
}
