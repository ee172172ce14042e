//! Command-line interface for chess_client.

use clap::{Parser, Subcommand};

/// Chess Client - thin terminal client for a networked chess service
#[derive(Parser, Debug)]
#[command(name = "chess_client")]
#[command(about = "Play a networked chess game from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the client config file
    #[arg(long, global = true, default_value = "chess_client.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Join a game and play in the terminal
    Play {
        /// Game page URL carrying the game id, e.g. http://host/index.html?id=3
        #[arg(long, conflicts_with_all = ["server_url", "game_id"])]
        page_url: Option<String>,

        /// Game service base URL (overrides the config file)
        #[arg(long)]
        server_url: Option<String>,

        /// Game identifier
        #[arg(long)]
        game_id: Option<String>,
    },
}
