//! Application use cases, one per request operation.

mod error;
mod join;
mod part;
mod receive;
mod send;
mod who;

pub use error::{JoinError, SendError};
pub use join::JoinUseCase;
pub use part::PartUseCase;
pub use receive::ReceiveUseCase;
pub use send::SendUseCase;
pub use who::WhoUseCase;
