//! Type-safe HTTP client for the chess game service.

use crate::chess::{GameStateSnapshot, MoveRequest, MoveResult, ScoreSnapshot};
use crate::error::ClientError;
use crate::session::SessionContext;
use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Operations the game service offers for one game.
///
/// The client owns no board state; every call returns the service's own view.
#[async_trait]
pub trait GameService: Send + Sync {
    /// Current state of the game.
    async fn load(&self) -> Result<GameStateSnapshot, ClientError>;

    /// Discards progress and returns the initial position.
    async fn reset(&self) -> Result<GameStateSnapshot, ClientError>;

    /// Submits a move. Legality is decided by the service.
    async fn submit_move(&self, request: MoveRequest) -> Result<MoveResult, ClientError>;

    /// Current material score of both sides.
    async fn score(&self) -> Result<ScoreSnapshot, ClientError>;
}

/// reqwest-backed [`GameService`].
#[derive(Debug, Clone)]
pub struct HttpGameClient {
    context: SessionContext,
    client: reqwest::Client,
}

impl HttpGameClient {
    /// Creates a client for the game in `context`.
    #[instrument(skip_all, fields(base_url = %context.base_url(), game_id = %context.game_id()))]
    pub fn new(context: SessionContext, timeout: Duration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        info!(?timeout, "Created game service client");
        Ok(Self { context, client })
    }

    /// The session this client is bound to.
    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        debug!(url = %url, "GET");
        let response = self.client.get(url).send().await.map_err(|e| {
            error!(error = %e, "GET request failed");
            ClientError::from(e)
        })?;
        Self::read_json(response).await
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        let status = response.status();
        let url = response.url().clone();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = %status, url = %url, body = %body, "Service returned error status");
            return Err(ClientError::transport(format!("HTTP {}: {}", status, body)));
        }

        debug!(url = %url, body = %body, "Response body");
        serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, url = %url, body = %body, "Failed to parse response");
            ClientError::from(e)
        })
    }
}

#[async_trait]
impl GameService for HttpGameClient {
    #[instrument(skip(self), fields(game_id = %self.context.game_id()))]
    async fn load(&self) -> Result<GameStateSnapshot, ClientError> {
        let state: GameStateSnapshot = self.get_json(self.context.endpoint(&["load", ""])).await?;
        debug!(pieces = state.pieces_and_positions.len(), turn = %state.color, "Loaded game");
        Ok(state)
    }

    #[instrument(skip(self), fields(game_id = %self.context.game_id()))]
    async fn reset(&self) -> Result<GameStateSnapshot, ClientError> {
        info!("Resetting game");
        self.get_json(self.context.endpoint(&["reset"])).await
    }

    #[instrument(
        skip(self),
        fields(game_id = %self.context.game_id(), from = %request.from, to = %request.to)
    )]
    async fn submit_move(&self, request: MoveRequest) -> Result<MoveResult, ClientError> {
        info!("Sending move to server");
        let response = self
            .client
            .post(self.context.endpoint(&["move"]))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Move request failed");
                ClientError::from(e)
            })?;
        let result: MoveResult = Self::read_json(response).await?;
        debug!(end = ?result.end, "Move response");
        Ok(result)
    }

    #[instrument(skip(self), fields(game_id = %self.context.game_id()))]
    async fn score(&self) -> Result<ScoreSnapshot, ClientError> {
        self.get_json(self.context.endpoint(&["score"])).await
    }
}
