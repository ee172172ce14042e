//! Chess client library - thin client for a networked chess service
//!
//! The client shows what the game service reports and never computes board
//! state itself. After every state-changing action it reloads the full
//! snapshot and repaints from it.
//!
//! # Architecture
//!
//! - **Session**: explicit context (service URL, game id) resolved from a page URL
//! - **Client**: the [`GameService`] seam and its reqwest implementation
//! - **Selection**: two-click move gesture state machine
//! - **Render**: idempotent painting of snapshots onto a [`BoardSurface`]
//! - **Controller**: serial reconciliation of user events and network completions
//! - **TUI**: terminal front end (ratatui + crossterm)
//!
//! # Example
//!
//! ```no_run
//! use chess_client::{GameController, HttpGameClient, SessionContext, UiEvent};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let context = SessionContext::from_page_url("http://localhost:8080/index.html?id=3")?;
//! let client = HttpGameClient::new(context.clone(), Duration::from_secs(10))?;
//! let (mut controller, mut completions) = GameController::new(context, Arc::new(client));
//!
//! controller.dispatch(UiEvent::Start);
//! if let Some(completion) = completions.recv().await {
//!     controller.reconcile(completion);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod chess;
mod client;
mod config;
mod controller;
mod error;
mod params;
mod render;
mod selection;
mod session;
mod surface;

/// Terminal front end.
pub mod tui;

// Crate-level exports - Wire types
pub use chess::{
    BoardSnapshot, Color, ColorsScore, GameStateSnapshot, MoveOutcome, MoveRequest, MoveResult,
    PieceSnapshot, Score, ScoreSnapshot, Square, SquareParseError,
};

// Crate-level exports - Service client
pub use client::{GameService, HttpGameClient};

// Crate-level exports - Configuration and errors
pub use config::{ClientConfig, ConfigError};
pub use error::{ClientError, ClientErrorKind};

// Crate-level exports - Session
pub use params::{GAME_ID_PARAM, ParameterResolver};
pub use session::SessionContext;

// Crate-level exports - View
pub use render::{BoardRenderer, ScorePanel, piece_asset, room_title, score_panels, turn_label};
pub use selection::{ClickTarget, SelectionState, SelectionStateMachine};
pub use surface::{BoardSurface, GameView, PieceVisual, SquareElement};

// Crate-level exports - Controller
pub use controller::{Completion, GAME_OVER_NOTICE, GameController, Phase, ResyncKind, UiEvent};
