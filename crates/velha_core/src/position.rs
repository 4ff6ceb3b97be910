//! Validated board positions.

use crate::action::MoveError;
use crate::lines::{CELLS, SIZE};
use serde::{Deserialize, Serialize};

/// A position on the 4x4 board (0-15), numbered left-to-right,
/// top-to-bottom.
///
/// Serialized as the bare index. Deserializing an index outside the board
/// fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Position(usize);

impl Position {
    /// All 16 positions in index order.
    pub const ALL: [Position; CELLS] = {
        let mut all = [Position(0); CELLS];
        let mut i = 0;
        while i < CELLS {
            all[i] = Position(i);
            i += 1;
        }
        all
    };

    /// Creates a position from a board index.
    pub fn new(index: usize) -> Option<Self> {
        (index < CELLS).then_some(Self(index))
    }

    /// Creates a position from a row and column (both 0-3).
    pub fn from_row_col(row: usize, column: usize) -> Option<Self> {
        if row < SIZE && column < SIZE {
            Some(Self(row * SIZE + column))
        } else {
            None
        }
    }

    /// Board index (0-15).
    pub fn index(self) -> usize {
        self.0
    }

    /// Row (0-3).
    pub fn row(self) -> usize {
        self.0 / SIZE
    }

    /// Column (0-3).
    pub fn column(self) -> usize {
        self.0 % SIZE
    }
}

impl TryFrom<usize> for Position {
    type Error = MoveError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Position::new(index).ok_or(MoveError::OutOfBounds(index))
    }
}

impl From<Position> for usize {
    fn from(pos: Position) -> Self {
        pos.0
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (row {}, column {})", self.0, self.row(), self.column())
    }
}
