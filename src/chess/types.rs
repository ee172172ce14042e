//! Snapshot types for board, turn, score and move results.

use super::Square;
use crate::error::ClientError;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Side colour, also used for whose turn it is.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Color {
    /// White side.
    White,
    /// Black side.
    Black,
}

/// One piece as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct PieceSnapshot {
    /// Owning side.
    pub color: Color,
    /// Piece-kind code, e.g. `"P"`.
    #[new(into)]
    pub notation: String,
}

/// Occupied squares only. A map, so one piece per square at most.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardSnapshot(BTreeMap<Square, PieceSnapshot>);

impl BoardSnapshot {
    /// Empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Piece on `square`, if any.
    pub fn get(&self, square: Square) -> Option<&PieceSnapshot> {
        self.0.get(&square)
    }

    /// Occupied squares in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&Square, &PieceSnapshot)> {
        self.0.iter()
    }

    /// Number of pieces.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no square is occupied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Places `piece` on `square`, replacing whatever was there.
    pub fn insert(&mut self, square: Square, piece: PieceSnapshot) -> Option<PieceSnapshot> {
        self.0.insert(square, piece)
    }
}

impl FromIterator<(Square, PieceSnapshot)> for BoardSnapshot {
    fn from_iter<I: IntoIterator<Item = (Square, PieceSnapshot)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Body of `load` and `reset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
#[serde(rename_all = "camelCase")]
pub struct GameStateSnapshot {
    /// Board contents.
    pub pieces_and_positions: BoardSnapshot,
    /// Side to move.
    pub color: Color,
    /// Room title.
    #[new(into)]
    pub title: String,
}

/// A side's material score.
///
/// Usually whole, but the service may report half points.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(pub f64);

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Per-colour scores.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, new)]
pub struct ColorsScore {
    /// Black's score.
    #[serde(rename = "BLACK")]
    pub black: Score,
    /// White's score.
    #[serde(rename = "WHITE")]
    pub white: Score,
}

/// Body of `score`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, new)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSnapshot {
    /// Both sides' scores.
    pub colors_score: ColorsScore,
}

impl ScoreSnapshot {
    /// Score of one side.
    pub fn for_color(&self, color: Color) -> Score {
        match color {
            Color::White => self.colors_score.white,
            Color::Black => self.colors_score.black,
        }
    }
}

/// Body of `move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct MoveRequest {
    /// Origin square.
    pub from: Square,
    /// Destination square.
    pub to: Square,
}

/// Response of `move`. Fields other than `end` are kept but not interpreted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MoveResult {
    /// Terminal flag. Absent is not the same as `false`.
    #[serde(default)]
    pub end: Option<bool>,
    /// Anything else the service sent.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Classified move response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The game is over.
    Terminal,
    /// Move accepted; the board must be reloaded.
    Continue,
}

impl MoveResult {
    /// Classifies the response. A missing `end` is a malformed response.
    #[track_caller]
    pub fn outcome(&self) -> Result<MoveOutcome, ClientError> {
        match self.end {
            Some(true) => Ok(MoveOutcome::Terminal),
            Some(false) => Ok(MoveOutcome::Continue),
            None => Err(ClientError::malformed("move response has no `end` field")),
        }
    }
}
