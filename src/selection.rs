//! Two-click move gesture.

use crate::chess::{MoveRequest, Square};
use crate::surface::BoardSurface;
use tracing::{debug, instrument};

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The empty area of a square's container.
    Square(Square),
    /// The piece visual inside a square.
    Piece(Square),
    /// Anywhere off the board.
    Outside,
}

impl ClickTarget {
    /// The owning square. Piece and container clicks are equivalent.
    pub fn resolve(self) -> Option<Square> {
        match self {
            ClickTarget::Square(square) | ClickTarget::Piece(square) => Some(square),
            ClickTarget::Outside => None,
        }
    }
}

/// Selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// Nothing selected.
    #[default]
    Idle,
    /// Origin chosen, waiting for a destination.
    Selected(Square),
}

/// Tracks at most one selected square and turns two clicks into a move.
#[derive(Debug, Clone, Default)]
pub struct SelectionStateMachine {
    state: SelectionState,
}

impl SelectionStateMachine {
    /// Starts idle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Selected square, if any.
    pub fn selected(&self) -> Option<Square> {
        match self.state {
            SelectionState::Idle => None,
            SelectionState::Selected(square) => Some(square),
        }
    }

    /// Feeds one click.
    ///
    /// The first click selects and highlights its square. The second emits
    /// a move from the selected square to the clicked one (the same square
    /// included) and returns to idle with the highlight cleared.
    #[instrument(skip(self, surface), fields(state = ?self.state))]
    pub fn click(
        &mut self,
        target: ClickTarget,
        surface: &mut BoardSurface,
    ) -> Option<MoveRequest> {
        let square = target.resolve()?;
        match self.state {
            SelectionState::Idle => {
                debug!(square = %square, "Selected");
                self.state = SelectionState::Selected(square);
                surface.set_selected(square, true);
                None
            }
            SelectionState::Selected(from) => {
                let request = MoveRequest::new(from, square);
                debug!(from = %from, to = %square, "Move gesture complete");
                self.reset(surface);
                Some(request)
            }
        }
    }

    /// Drops the selection and every highlight.
    pub fn reset(&mut self, surface: &mut BoardSurface) {
        self.state = SelectionState::Idle;
        surface.clear_selected();
    }
}
