//! In-memory registries owning all channels and sessions.
//!
//! インメモリの状態は全てこの 2 つのレジストリが所有する（依存性の注入の
//! ため、グローバル変数ではなく Arc で各 UseCase に渡される）。プロセス
//! 再起動で状態は失われる。

mod channel;
mod session;

pub use channel::{ChannelRegistry, DEFAULT_CHANNEL, WAIT_TIMEOUT_MILLIS};
pub use session::{SESSION_TIMEOUT_MILLIS, SessionRegistry, SessionView};
