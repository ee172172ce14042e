//! Page URL parameter resolution.

use crate::config::ConfigError;
use reqwest::Url;
use tracing::{debug, instrument};

/// Query parameter carrying the game identifier.
pub const GAME_ID_PARAM: &str = "id";

/// Reads the active game's identifier (and service origin) from a page URL.
#[derive(Debug, Clone)]
pub struct ParameterResolver {
    url: Url,
}

impl ParameterResolver {
    /// Parses a page URL such as `http://host/index.html?id=3`.
    #[instrument]
    pub fn new(page_url: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(page_url)
            .map_err(|e| ConfigError::new(format!("Invalid page URL {:?}: {}", page_url, e)))?;
        Ok(Self { url })
    }

    /// Value of query parameter `name`, percent-decoded with `+` as space.
    ///
    /// A missing parameter yields the empty string.
    pub fn parameter(&self, name: &str) -> String {
        self.url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
            .unwrap_or_default()
    }

    /// The game identifier (`id` query parameter).
    #[instrument(skip(self), fields(url = %self.url))]
    pub fn game_id(&self) -> String {
        let id = self.parameter(GAME_ID_PARAM);
        debug!(game_id = %id, "Resolved game id");
        id
    }

    /// Origin of the page, which is where the game service lives.
    pub fn service_base(&self) -> Result<String, ConfigError> {
        let origin = self.url.origin();
        if !origin.is_tuple() {
            return Err(ConfigError::new(format!(
                "Page URL {} has no usable origin",
                self.url
            )));
        }
        Ok(origin.ascii_serialization())
    }
}
