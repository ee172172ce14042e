//! Stateless renderers from snapshots to the view model.

use crate::chess::{BoardSnapshot, Color, Score, ScoreSnapshot};
use crate::surface::{BoardSurface, PieceVisual};
use derive_getters::Getters;
use tracing::{debug, instrument};

/// Paints board snapshots onto a [`BoardSurface`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardRenderer;

impl BoardRenderer {
    /// Clears every square, then places one visual per snapshot entry.
    ///
    /// Idempotent. Highlights are not touched.
    #[instrument(skip_all, fields(pieces = board.len()))]
    pub fn render(&self, surface: &mut BoardSurface, board: &BoardSnapshot) {
        surface.clear_pieces();
        for (square, piece) in board.iter() {
            surface.place_piece(*square, PieceVisual::new(piece.color, piece.notation.clone()));
        }
        debug!("Board rendered");
    }
}

/// Image asset name for a piece.
pub fn piece_asset(color: Color, notation: &str) -> String {
    format!("../img/{}-{}.png", color, notation)
}

/// Decorated "whose turn" label.
pub fn turn_label(color: Color) -> String {
    match color {
        Color::White => format!("🏳️ {} TURN 🏳️", color),
        Color::Black => format!("🏴 {} TURN 🏴", color),
    }
}

/// Room heading.
pub fn room_title(title: &str) -> String {
    format!("{}  Room", title)
}

/// One side's score panel.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct ScorePanel {
    color: Color,
    header: String,
    score: Score,
}

/// Black then white panels, each with a fixed header and the score.
pub fn score_panels(snapshot: &ScoreSnapshot) -> [ScorePanel; 2] {
    [Color::Black, Color::White].map(|color| ScorePanel {
        color,
        header: format!("{} SCORE", color),
        score: snapshot.for_color(color),
    })
}
