//! Server state shared across request handlers.

use std::sync::Arc;

use crate::usecase::{JoinUseCase, PartUseCase, ReceiveUseCase, SendUseCase, WhoUseCase};

/// Shared application state
pub struct AppState {
    /// JoinUseCase（参加のユースケース）
    pub join_usecase: Arc<JoinUseCase>,
    /// PartUseCase（退出のユースケース）
    pub part_usecase: Arc<PartUseCase>,
    /// SendUseCase（メッセージ送信のユースケース）
    pub send_usecase: Arc<SendUseCase>,
    /// ReceiveUseCase（ロングポーリング受信のユースケース）
    pub receive_usecase: Arc<ReceiveUseCase>,
    /// WhoUseCase（在席一覧のユースケース）
    pub who_usecase: Arc<WhoUseCase>,
}
