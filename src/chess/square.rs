//! Board squares addressed by file+rank labels.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const FILES: &[u8; 8] = b"abcdefgh";

/// A square on the 8x8 board, labelled like `"e2"`.
///
/// Squares only exist for valid labels; parsing anything else fails. On the
/// wire a square is its label, both as a value and as a map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square {
    /// File index, 0 = `a`.
    file: u8,
    /// Rank index, 0 = rank `1`.
    rank: u8,
}

impl Square {
    /// Creates a square from zero-based file and rank indices.
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        (file < 8 && rank < 8).then_some(Self { file, rank })
    }

    /// Zero-based file index (`a` = 0).
    pub fn file(self) -> u8 {
        self.file
    }

    /// Zero-based rank index (rank `1` = 0).
    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Row-major index 0-63, `a1` = 0, `h8` = 63.
    pub fn index(self) -> usize {
        usize::from(self.rank) * 8 + usize::from(self.file)
    }

    /// Inverse of [`Square::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= 64 {
            return None;
        }
        Self::new((index % 8) as u8, (index / 8) as u8)
    }

    /// All 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).filter_map(Self::from_index)
    }

    /// The square's label, e.g. `"e2"`.
    pub fn label(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", FILES[usize::from(self.file)] as char, self.rank + 1)
    }
}

/// Rejected square label.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid square label: {:?}", label)]
pub struct SquareParseError {
    /// The offending input.
    #[error(not(source))]
    pub label: String,
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || SquareParseError {
            label: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(err());
        }
        let file = FILES
            .iter()
            .position(|f| *f == bytes[0])
            .ok_or_else(err)?;
        let rank = match bytes[1] {
            b'1'..=b'8' => bytes[1] - b'1',
            _ => return Err(err()),
        };
        Self::new(file as u8, rank).ok_or_else(err)
    }
}

impl TryFrom<String> for Square {
    type Error = SquareParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Square> for String {
    fn from(square: Square) -> Self {
        square.to_string()
    }
}
