//! HTTP endpoint handlers.
//!
//! Thin request plumbing: parse query parameters, invoke a use case, map
//! the result (or the error) to a JSON body. The error message strings are
//! part of the wire protocol.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use hiroba_shared::wire::{ErrorResponse, JoinResponse, MessageDto, ReceiveResponse, WhoResponse};

use crate::domain::{SessionId, Timestamp};
use crate::usecase::{JoinError, SendError};

use super::state::AppState;

/// Query parameters for `GET /join`
#[derive(Debug, Deserialize)]
pub struct JoinParams {
    pub nick: Option<String>,
}

/// Query parameters for `GET /part`
#[derive(Debug, Deserialize)]
pub struct PartParams {
    pub id: Option<String>,
}

/// Query parameters for `GET /send`
#[derive(Debug, Deserialize)]
pub struct SendParams {
    pub id: Option<String>,
    pub text: Option<String>,
}

/// Query parameters for `GET /recv`
#[derive(Debug, Deserialize)]
pub struct ReceiveParams {
    pub id: Option<String>,
    pub since: Option<String>,
}

pub async fn join(
    State(state): State<Arc<AppState>>,
    Query(params): Query<JoinParams>,
) -> Response {
    let Some(nick) = params.nick.filter(|nick| !nick.is_empty()) else {
        return bad_request("Bad nick.");
    };

    match state.join_usecase.execute(&nick).await {
        Ok((id, nickname)) => Json(JoinResponse {
            id: id.as_str().to_string(),
            nickname: nickname.as_str().to_string(),
        })
        .into_response(),
        Err(JoinError::InvalidNickname) => bad_request("Bad nick."),
        Err(JoinError::NicknameTaken) => bad_request("Nick in use"),
    }
}

pub async fn part(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PartParams>,
) -> Response {
    if let Some(id) = params.id {
        state
            .part_usecase
            .execute(&SessionId::from_string(id))
            .await;
    }
    empty_ok()
}

pub async fn send(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SendParams>,
) -> Response {
    let id = params.id.map(SessionId::from_string);
    let text = params.text.filter(|text| !text.is_empty());
    let (Some(id), Some(text)) = (id, text) else {
        return bad_request("No such session id");
    };

    match state.send_usecase.execute(&id, &text).await {
        Ok(()) => empty_ok(),
        Err(SendError::UnknownSession) => bad_request("No such session id"),
    }
}

pub async fn recv(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReceiveParams>,
) -> Response {
    let Some(since) = params
        .since
        .as_deref()
        .and_then(|raw| raw.parse::<i64>().ok())
    else {
        return bad_request("Must supply since parameter");
    };

    let id = params.id.map(SessionId::from_string);
    let messages = state
        .receive_usecase
        .execute(id.as_ref(), Timestamp::new(since))
        .await;

    let messages: Vec<MessageDto> = messages.into_iter().map(MessageDto::from).collect();
    Json(ReceiveResponse { messages }).into_response()
}

pub async fn who(State(state): State<Arc<AppState>>) -> Response {
    let nicknames = state.who_usecase.execute().await;
    Json(WhoResponse { nicknames }).into_response()
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

fn empty_ok() -> Response {
    Json(serde_json::json!({})).into_response()
}
