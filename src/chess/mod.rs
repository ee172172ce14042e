//! Chess wire types as the game service reports them.

mod square;
mod types;

pub use square::{Square, SquareParseError};
pub use types::{
    BoardSnapshot, Color, ColorsScore, GameStateSnapshot, MoveOutcome, MoveRequest, MoveResult,
    PieceSnapshot, Score, ScoreSnapshot,
};
