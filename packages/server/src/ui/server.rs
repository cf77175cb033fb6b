//! Server execution logic.

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, routing::get};
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;

use crate::infrastructure::registry::{ChannelRegistry, SessionRegistry};
use crate::usecase::{JoinUseCase, PartUseCase, ReceiveUseCase, SendUseCase, WhoUseCase};

use super::{
    handler::{health_check, join, part, recv, send, who},
    signal::shutdown_signal,
    state::AppState,
};

/// Cadence of the background sweep over waiters and idle sessions
const SWEEP_INTERVAL: Duration = Duration::from_secs(1);

/// Long-polling chat server
///
/// This struct wires the use cases into an axum router and owns the
/// background sweep that resolves timed-out waiters and reaps idle
/// sessions.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(
///     join_usecase,
///     part_usecase,
///     send_usecase,
///     receive_usecase,
///     who_usecase,
///     channels,
///     sessions,
/// );
/// server.run("127.0.0.1".to_string(), 8001).await?;
/// ```
pub struct Server {
    join_usecase: Arc<JoinUseCase>,
    part_usecase: Arc<PartUseCase>,
    send_usecase: Arc<SendUseCase>,
    receive_usecase: Arc<ReceiveUseCase>,
    who_usecase: Arc<WhoUseCase>,
    channels: Arc<ChannelRegistry>,
    sessions: Arc<SessionRegistry>,
}

impl Server {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        join_usecase: Arc<JoinUseCase>,
        part_usecase: Arc<PartUseCase>,
        send_usecase: Arc<SendUseCase>,
        receive_usecase: Arc<ReceiveUseCase>,
        who_usecase: Arc<WhoUseCase>,
        channels: Arc<ChannelRegistry>,
        sessions: Arc<SessionRegistry>,
    ) -> Self {
        Self {
            join_usecase,
            part_usecase,
            send_usecase,
            receive_usecase,
            who_usecase,
            channels,
            sessions,
        }
    }

    /// Run the chat server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 8001)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified
    /// address or if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app_state = Arc::new(AppState {
            join_usecase: self.join_usecase,
            part_usecase: self.part_usecase,
            send_usecase: self.send_usecase,
            receive_usecase: self.receive_usecase,
            who_usecase: self.who_usecase,
        });

        // Define handlers
        let app = Router::new()
            .route("/join", get(join))
            .route("/part", get(part))
            .route("/send", get(send))
            .route("/recv", get(recv))
            .route("/who", get(who))
            .route("/api/health", get(health_check))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state);

        // Background sweep: waiter timeouts and idle sessions.
        let sweeper = spawn_sweeper(self.channels, self.sessions);

        // Bind the server to the host and port
        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        tracing::info!("chat server listening on {}", listener.local_addr()?);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        sweeper.abort();
        tracing::info!("Server shutdown complete");

        Ok(())
    }
}

/// Spawn the periodic sweep task.
///
/// Runs for the lifetime of the server; each tick resolves waiters parked
/// past their timeout and reaps sessions idle past theirs.
fn spawn_sweeper(channels: Arc<ChannelRegistry>, sessions: Arc<SessionRegistry>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(SWEEP_INTERVAL);
        loop {
            ticker.tick().await;
            channels.sweep_waiters().await;
            sessions.sweep().await;
        }
    })
}
