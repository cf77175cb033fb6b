//! Typed wrapper around the server's HTTP endpoints.

use hiroba_shared::wire::{ErrorResponse, JoinResponse, MessageDto, ReceiveResponse, WhoResponse};

use crate::error::ClientError;

/// Thin typed client for the chat server's GET endpoints.
#[derive(Debug, Clone)]
pub struct ChatApi {
    base_url: String,
    http: reqwest::Client,
}

impl ChatApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// `GET /join`: register `nick` and obtain a session id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NickRejected`] with the server's message when
    /// the nickname is invalid or already in use.
    pub async fn join(&self, nick: &str) -> Result<JoinResponse, ClientError> {
        let response = self
            .http
            .get(format!("{}/join", self.base_url))
            .query(&[("nick", nick)])
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            let body: ErrorResponse = response.json().await?;
            Err(ClientError::NickRejected(body.error))
        }
    }

    /// `GET /recv`: block until messages newer than `since` arrive or the
    /// server-side waiter times out (then the list is empty).
    pub async fn recv(&self, id: &str, since: i64) -> Result<Vec<MessageDto>, ClientError> {
        let since = since.to_string();
        let response = self
            .http
            .get(format!("{}/recv", self.base_url))
            .query(&[("id", id), ("since", since.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let body: ReceiveResponse = response.json().await?;
        Ok(body.messages)
    }

    /// `GET /send`: post a line of text (or a slash command).
    pub async fn send(&self, id: &str, text: &str) -> Result<(), ClientError> {
        self.http
            .get(format!("{}/send", self.base_url))
            .query(&[("id", id), ("text", text)])
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// `GET /part`: end the session.
    pub async fn part(&self, id: &str) -> Result<(), ClientError> {
        self.http
            .get(format!("{}/part", self.base_url))
            .query(&[("id", id)])
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// `GET /who`: list connected nicknames.
    pub async fn who(&self) -> Result<Vec<String>, ClientError> {
        let response = self
            .http
            .get(format!("{}/who", self.base_url))
            .send()
            .await?
            .error_for_status()?;

        let body: WhoResponse = response.json().await?;
        Ok(body.nicknames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        // テスト項目: 末尾スラッシュ付きの URL が正規化される
        // given (前提条件):
        let api = ChatApi::new("http://127.0.0.1:8001/");

        // then (期待する結果):
        assert_eq!(api.base_url, "http://127.0.0.1:8001");
    }
}
