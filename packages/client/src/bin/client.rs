//! CLI chat client for the Hiroba server.
//!
//! Joins under a nickname and bridges stdin lines to `/send` while a
//! long-poll loop streams new messages to the terminal.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hiroba-client -- --nick alice
//! cargo run --bin hiroba-client -- -n bob --url http://127.0.0.1:8001
//! ```

use clap::Parser;

use hiroba_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "client")]
#[command(about = "Long-polling chat client", long_about = None)]
struct Args {
    /// Nickname to join under (must be unique on the server)
    #[arg(short = 'n', long)]
    nick: String,

    /// Chat server base URL
    #[arg(short = 'u', long, default_value = "http://127.0.0.1:8001")]
    url: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    if let Err(e) = hiroba_client::run_client(args.url, args.nick).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
