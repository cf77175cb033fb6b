//! Hiroba chat server: group messaging over HTTP long-polling.
//!
//! Clients join with a nickname, post messages, and receive new ones
//! through blocking `/recv` requests that complete as soon as new content
//! arrives or a timeout elapses.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hiroba-server
//! cargo run --bin hiroba-server -- --host 0.0.0.0 --port 8001
//! ```

use std::sync::Arc;

use clap::Parser;

use hiroba_server::{
    infrastructure::registry::{ChannelRegistry, SessionRegistry},
    ui::Server,
    usecase::{JoinUseCase, PartUseCase, ReceiveUseCase, SendUseCase, WhoUseCase},
};
use hiroba_shared::{
    logger::setup_logger,
    time::{Clock, SystemClock},
};

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "Group chat server over HTTP long-polling", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8001")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Clock
    // 2. Registries
    // 3. UseCases
    // 4. Server

    // 1. Clock (system time, injectable elsewhere for tests)
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    // 2. Registries (in-memory state, lost on restart)
    let channels = Arc::new(ChannelRegistry::new(clock.clone()));
    let sessions = Arc::new(SessionRegistry::new(channels.clone(), clock.clone()));

    // 3. UseCases
    let join_usecase = Arc::new(JoinUseCase::new(
        sessions.clone(),
        channels.clone(),
        clock.clone(),
    ));
    let part_usecase = Arc::new(PartUseCase::new(sessions.clone()));
    let send_usecase = Arc::new(SendUseCase::new(sessions.clone(), clock.clone()));
    let receive_usecase = Arc::new(ReceiveUseCase::new(
        sessions.clone(),
        channels.clone(),
        clock.clone(),
    ));
    let who_usecase = Arc::new(WhoUseCase::new(sessions.clone()));

    // 4. Create and run the server
    let server = Server::new(
        join_usecase,
        part_usecase,
        send_usecase,
        receive_usecase,
        who_usecase,
        channels,
        sessions,
    );
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
