//! Terminal front end for the chess client.

mod input;
mod ui;

pub use input::{KeyAction, cursor_click, key_action, move_cursor};
pub use ui::{BoardGeometry, CELL_HEIGHT, CELL_WIDTH, draw};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::{Duration, sleep};
use tracing::{debug, error, info, instrument};

use crate::chess::Square;
use crate::client::HttpGameClient;
use crate::config::ClientConfig;
use crate::controller::{Completion, GameController, UiEvent};
use crate::session::SessionContext;

type Term = Terminal<CrosstermBackend<io::Stdout>>;

/// Runs the terminal client against the game in `context`.
pub async fn run_tui(context: SessionContext, config: &ClientConfig) -> Result<()> {
    // Log to file so tracing output doesn't draw over the TUI
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(
        base_url = %context.base_url(),
        game_id = %context.game_id(),
        "Starting chess client"
    );

    let client = HttpGameClient::new(context.clone(), config.request_timeout())?;
    let (controller, completions) = GameController::new(context, Arc::new(client));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, controller, completions).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, reconcile completions, read input; never blocks on the network.
#[instrument(skip_all, fields(game_id = %controller.context().game_id()))]
async fn run_game(
    terminal: &mut Term,
    mut controller: GameController,
    mut completions: mpsc::UnboundedReceiver<Completion>,
) -> Result<()> {
    let mut cursor: Square = "e2".parse()?;

    loop {
        let mut geometry = None;
        terminal.draw(|f| geometry = Some(draw(f, controller.view(), cursor)))?;

        tokio::select! {
            Some(completion) = completions.recv() => {
                controller.reconcile(completion);
                continue;
            }
            _ = sleep(Duration::from_millis(30)) => {}
        }

        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => {
                    // crossterm reports both press and release on some platforms
                    if key.kind == KeyEventKind::Release {
                        continue;
                    }
                    let notice_open = controller.view().notice().is_some();
                    match key_action(key.code, cursor, controller.view().board(), notice_open) {
                        KeyAction::Quit => {
                            info!("User quit");
                            return Ok(());
                        }
                        KeyAction::Dispatch(ui_event) => controller.dispatch(ui_event),
                        KeyAction::Cursor(square) => cursor = square,
                        KeyAction::Ignore => {}
                    }
                }
                Event::Mouse(mouse) => {
                    if let (MouseEventKind::Down(MouseButton::Left), Some(geometry)) =
                        (mouse.kind, geometry)
                    {
                        let board = controller.view().board();
                        let target = geometry.hit(mouse.column, mouse.row, board);
                        debug!(?target, column = mouse.column, row = mouse.row, "Mouse click");
                        if let Some(square) = target.resolve() {
                            cursor = square;
                        }
                        controller.dispatch(UiEvent::Click(target));
                    }
                }
                _ => {}
            }
        }
    }
}
