//! Retained view model: one addressable element per square plus the side panels.

use crate::chess::{Color, Square};
use crate::render::ScorePanel;
use derive_getters::Getters;
use tracing::instrument;

/// The visual placed inside an occupied square.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PieceVisual {
    color: Color,
    notation: String,
    /// Image asset name, `../img/{COLOR}-{notation}.png`.
    asset: String,
}

impl PieceVisual {
    /// Creates a visual tagged with the piece's colour and kind.
    pub fn new(color: Color, notation: impl Into<String>) -> Self {
        let notation = notation.into();
        let asset = crate::render::piece_asset(color, &notation);
        Self {
            color,
            notation,
            asset,
        }
    }
}

/// Element addressed by a square label.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct SquareElement {
    square: Square,
    piece: Option<PieceVisual>,
    selected: bool,
}

/// The board container: exactly 64 square elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSurface {
    elements: Vec<SquareElement>,
}

impl BoardSurface {
    /// Creates an empty, unhighlighted board.
    pub fn new() -> Self {
        Self {
            elements: Square::all()
                .map(|square| SquareElement {
                    square,
                    piece: None,
                    selected: false,
                })
                .collect(),
        }
    }

    /// Element for `square`.
    pub fn element(&self, square: Square) -> &SquareElement {
        &self.elements[square.index()]
    }

    /// Element for a label such as `"e2"`, if the label is valid.
    pub fn element_by_label(&self, label: &str) -> Option<&SquareElement> {
        label.parse::<Square>().ok().map(|sq| self.element(sq))
    }

    /// All elements in square index order.
    pub fn elements(&self) -> &[SquareElement] {
        &self.elements
    }

    /// Removes every piece visual. Highlights are left alone.
    pub fn clear_pieces(&mut self) {
        for element in &mut self.elements {
            element.piece = None;
        }
    }

    /// Puts `visual` in `square`, replacing any previous child.
    pub fn place_piece(&mut self, square: Square, visual: PieceVisual) {
        self.elements[square.index()].piece = Some(visual);
    }

    /// Sets or clears the highlight on `square`.
    pub fn set_selected(&mut self, square: Square, selected: bool) {
        self.elements[square.index()].selected = selected;
    }

    /// Clears every highlight.
    pub fn clear_selected(&mut self) {
        for element in &mut self.elements {
            element.selected = false;
        }
    }

    /// Highlighted squares.
    pub fn selected_squares(&self) -> Vec<Square> {
        self.elements
            .iter()
            .filter(|e| e.selected)
            .map(|e| e.square)
            .collect()
    }

    /// Occupied squares with their visuals.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, &PieceVisual)> {
        self.elements
            .iter()
            .filter_map(|e| e.piece.as_ref().map(|p| (e.square, p)))
    }
}

impl Default for BoardSurface {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the front end paints.
#[derive(Debug, Clone, Default, Getters)]
pub struct GameView {
    board: BoardSurface,
    title: Option<String>,
    turn: Option<String>,
    scores: Option<[ScorePanel; 2]>,
    status: String,
    notice: Option<String>,
}

impl GameView {
    /// Creates an empty view waiting for the first load.
    pub fn new() -> Self {
        Self {
            status: "Press 's' to start".to_string(),
            ..Self::default()
        }
    }

    /// Mutable access to the board container.
    pub fn board_mut(&mut self) -> &mut BoardSurface {
        &mut self.board
    }

    /// Replaces the title, turn and score panels together.
    #[instrument(skip_all)]
    pub fn set_panels(&mut self, title: String, turn: String, scores: [ScorePanel; 2]) {
        self.title = Some(title);
        self.turn = Some(turn);
        self.scores = Some(scores);
    }

    /// Replaces the status line.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Shows a blocking notice.
    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    /// Dismisses the notice.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
