//! Explicit per-game session context.

use crate::config::ConfigError;
use crate::params::ParameterResolver;
use derive_getters::Getters;
use reqwest::Url;
use tracing::{info, instrument};

/// Identifies which game on which service this client is bound to.
#[derive(Debug, Clone, Getters)]
pub struct SessionContext {
    /// Service base URL, e.g. `http://localhost:8080`.
    base_url: Url,
    /// Active game identifier.
    game_id: String,
}

impl SessionContext {
    /// Creates a context from an explicit base URL and game id.
    #[instrument(skip(game_id))]
    pub fn new(base_url: &str, game_id: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ConfigError::new(format!("Invalid server URL {:?}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::new(format!(
                "Server URL must be http(s): {}",
                base_url
            )));
        }
        let game_id = game_id.into();
        if game_id.is_empty() {
            return Err(ConfigError::new("No game id given"));
        }
        info!(game_id = %game_id, "Session context created");
        Ok(Self { base_url, game_id })
    }

    /// Creates a context from a page URL carrying `?id=...`.
    #[instrument]
    pub fn from_page_url(page_url: &str) -> Result<Self, ConfigError> {
        let resolver = ParameterResolver::new(page_url)?;
        let base = resolver.service_base()?;
        Self::new(&base, resolver.game_id())
    }

    /// URL of `/games/{id}/{segments...}` under the base URL.
    ///
    /// An empty trailing segment produces a trailing slash.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .push("games")
                .push(&self.game_id)
                .extend(segments);
        }
        url
    }
}
