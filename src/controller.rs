//! Serial reconciliation of user events and network completions.
//!
//! User input arrives as [`UiEvent`]s. Every network call runs on its own
//! task and reports back as a [`Completion`] over a channel; the owner of the
//! controller feeds those into [`GameController::reconcile`] one at a time, so
//! the view has a single writer.
//!
//! Each request carries a sequence number from a counter that only grows.
//! A resync older than the one already painted is dropped, as is a move
//! completion that doesn't belong to the outstanding move cycle or that
//! predates the painted state.

use crate::chess::{GameStateSnapshot, MoveOutcome, MoveRequest, MoveResult, ScoreSnapshot};
use crate::client::GameService;
use crate::error::ClientError;
use crate::render::{BoardRenderer, room_title, score_panels, turn_label};
use crate::selection::{ClickTarget, SelectionStateMachine};
use crate::session::SessionContext;
use crate::surface::GameView;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Shown when the service reports the game has ended.
pub const GAME_OVER_NOTICE: &str = "The game is over!";

/// Input from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// Load the game for the first time.
    Start,
    /// Reset the game to its initial position.
    Reset,
    /// A click on the board.
    Click(ClickTarget),
    /// Close the blocking notice.
    DismissNotice,
}

/// Which request opens a resync cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResyncKind {
    /// `load`.
    Load,
    /// `reset`.
    Reset,
}

/// A finished network task.
#[derive(Debug)]
pub enum Completion {
    /// A load/reset followed by its score fetch.
    Resynced {
        /// Request sequence number.
        seq: u64,
        /// Opening request.
        kind: ResyncKind,
        /// Both snapshots, or the first failure.
        result: Result<(GameStateSnapshot, ScoreSnapshot), ClientError>,
    },
    /// A move submission.
    Moved {
        /// Request sequence number.
        seq: u64,
        /// What was sent.
        request: MoveRequest,
        /// Service response.
        result: Result<MoveResult, ClientError>,
    },
}

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for Start.
    NotStarted,
    /// First load in flight.
    Loading,
    /// Accepting moves.
    Playing,
    /// The service reported a terminal result.
    Over,
}

/// Owns the view and the selection; talks to the service through tasks.
pub struct GameController {
    context: SessionContext,
    service: Arc<dyn GameService>,
    completions: mpsc::UnboundedSender<Completion>,
    view: GameView,
    selection: SelectionStateMachine,
    renderer: BoardRenderer,
    phase: Phase,
    next_seq: u64,
    last_applied: u64,
    move_cycle: Option<u64>,
}

impl GameController {
    /// Creates a controller and the receiver its completions arrive on.
    #[instrument(skip_all, fields(game_id = %context.game_id()))]
    pub fn new(
        context: SessionContext,
        service: Arc<dyn GameService>,
    ) -> (Self, mpsc::UnboundedReceiver<Completion>) {
        let (completions, rx) = mpsc::unbounded_channel();
        info!("Creating game controller");
        let controller = Self {
            context,
            service,
            completions,
            view: GameView::new(),
            selection: SelectionStateMachine::new(),
            renderer: BoardRenderer,
            phase: Phase::NotStarted,
            next_seq: 1,
            last_applied: 0,
            move_cycle: None,
        };
        (controller, rx)
    }

    /// Current view.
    pub fn view(&self) -> &GameView {
        &self.view
    }

    /// Current selection.
    pub fn selection(&self) -> &SelectionStateMachine {
        &self.selection
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Session this controller serves.
    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// True while a move or its follow-up reload is outstanding.
    pub fn move_in_flight(&self) -> bool {
        self.move_cycle.is_some()
    }

    /// Handles one user event. Never waits on the network.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn dispatch(&mut self, event: UiEvent) {
        match event {
            UiEvent::Start => {
                if self.phase != Phase::NotStarted {
                    debug!("Already started, ignoring");
                    return;
                }
                self.phase = Phase::Loading;
                self.view.set_status("Loading...");
                self.spawn_resync(ResyncKind::Load);
            }
            UiEvent::Reset => {
                self.selection.reset(self.view.board_mut());
                if self.phase == Phase::NotStarted {
                    self.phase = Phase::Loading;
                }
                self.view.set_status("Resetting...");
                self.spawn_resync(ResyncKind::Reset);
            }
            UiEvent::Click(target) => self.click(target),
            UiEvent::DismissNotice => self.view.dismiss_notice(),
        }
    }

    fn click(&mut self, target: ClickTarget) {
        if self.phase != Phase::Playing {
            debug!("Board not accepting moves, ignoring click");
            return;
        }
        if self.move_cycle.is_some() {
            debug!("Move in flight, ignoring click");
            return;
        }
        let Some(request) = self.selection.click(target, self.view.board_mut()) else {
            return;
        };

        let seq = self.take_seq();
        self.move_cycle = Some(seq);
        self.view
            .set_status(format!("Moving {} -> {}...", request.from, request.to));
        info!(seq, from = %request.from, to = %request.to, "Dispatching move");

        let service = Arc::clone(&self.service);
        let tx = self.completions.clone();
        tokio::spawn(async move {
            let result = service.submit_move(request).await;
            if tx.send(Completion::Moved { seq, request, result }).is_err() {
                debug!(seq, "Controller gone, dropping move completion");
            }
        });
    }

    /// Applies one network completion to the view.
    #[instrument(skip_all, fields(phase = ?self.phase))]
    pub fn reconcile(&mut self, completion: Completion) {
        match completion {
            Completion::Resynced { seq, kind, result } => self.on_resynced(seq, kind, result),
            Completion::Moved {
                seq,
                request,
                result,
            } => self.on_moved(seq, request, result),
        }
    }

    fn on_resynced(
        &mut self,
        seq: u64,
        kind: ResyncKind,
        result: Result<(GameStateSnapshot, ScoreSnapshot), ClientError>,
    ) {
        if self.move_cycle == Some(seq) {
            self.move_cycle = None;
        }
        if seq < self.last_applied {
            warn!(seq, last_applied = self.last_applied, "Discarding stale resync");
            return;
        }

        match result {
            Ok((state, score)) => {
                self.last_applied = seq;
                self.renderer
                    .render(self.view.board_mut(), &state.pieces_and_positions);
                self.view.set_panels(
                    room_title(&state.title),
                    turn_label(state.color),
                    score_panels(&score),
                );
                if !(self.phase == Phase::Over && kind == ResyncKind::Load) {
                    self.phase = Phase::Playing;
                }
                self.view.set_status("");
                info!(seq, ?kind, turn = %state.color, "View resynced");
            }
            Err(e) => {
                warn!(seq, ?kind, error = %e, "Resync failed");
                self.selection.reset(self.view.board_mut());
                if self.phase == Phase::Loading {
                    self.phase = Phase::NotStarted;
                }
                self.view.set_status(format!("Update failed: {}", e.kind));
            }
        }
    }

    fn on_moved(
        &mut self,
        seq: u64,
        request: MoveRequest,
        result: Result<MoveResult, ClientError>,
    ) {
        if self.move_cycle != Some(seq) {
            warn!(seq, "Discarding move completion outside the current cycle");
            return;
        }
        self.move_cycle = None;
        self.selection.reset(self.view.board_mut());
        if seq < self.last_applied {
            warn!(
                seq,
                last_applied = self.last_applied,
                "Discarding move outcome older than the painted state"
            );
            return;
        }

        let outcome = result.and_then(|r| r.outcome());
        match outcome {
            Ok(MoveOutcome::Terminal) => {
                info!(from = %request.from, to = %request.to, "Game over");
                self.phase = Phase::Over;
                self.view.set_status("");
                self.view.set_notice(GAME_OVER_NOTICE);
            }
            Ok(MoveOutcome::Continue) => {
                debug!(from = %request.from, to = %request.to, "Move accepted, reloading");
                let resync = self.spawn_resync(ResyncKind::Load);
                self.move_cycle = Some(resync);
            }
            Err(e) => {
                warn!(from = %request.from, to = %request.to, error = %e, "Move failed");
                self.view.set_status(format!("Move failed: {}", e.kind));
            }
        }
    }

    fn take_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// Runs `load`/`reset` and then `score` on a task; returns its sequence number.
    fn spawn_resync(&mut self, kind: ResyncKind) -> u64 {
        let seq = self.take_seq();
        debug!(seq, ?kind, "Spawning resync");
        let service = Arc::clone(&self.service);
        let tx = self.completions.clone();
        tokio::spawn(async move {
            let result = resync(service.as_ref(), kind).await;
            if tx.send(Completion::Resynced { seq, kind, result }).is_err() {
                debug!(seq, "Controller gone, dropping resync completion");
            }
        });
        seq
    }
}

/// The primary request, then the score once its response is in.
async fn resync(
    service: &dyn GameService,
    kind: ResyncKind,
) -> Result<(GameStateSnapshot, ScoreSnapshot), ClientError> {
    let state = match kind {
        ResyncKind::Load => service.load().await?,
        ResyncKind::Reset => service.reset().await?,
    };
    let score = service.score().await?;
    Ok((state, score))
}
