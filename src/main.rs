//! Chess Client - terminal entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use chess_client::{ClientConfig, ConfigError, SessionContext};
use clap::Parser;
use cli::{Cli, Command};
use tracing::instrument;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ClientConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Play {
            page_url,
            server_url,
            game_id,
        } => {
            let context = resolve_context(&config, page_url, server_url, game_id)?;
            chess_client::tui::run_tui(context, &config).await
        }
    }
}

/// Page URL wins; otherwise CLI server URL, then the config file's.
#[instrument(skip(config))]
fn resolve_context(
    config: &ClientConfig,
    page_url: Option<String>,
    server_url: Option<String>,
    game_id: Option<String>,
) -> Result<SessionContext, ConfigError> {
    if let Some(page_url) = page_url {
        return SessionContext::from_page_url(&page_url);
    }
    let server_url = server_url
        .or_else(|| config.server_url().clone())
        .ok_or_else(|| ConfigError::new("No server URL: pass --page-url or --server-url"))?;
    let game_id = game_id.ok_or_else(|| ConfigError::new("No game id: pass --game-id"))?;
    SessionContext::new(&server_url, game_id)
}
