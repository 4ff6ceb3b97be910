//! The ten candidate winning lines of a 4x4 board.

use crate::types::{Board, Player, Square};

/// Side length of the board.
pub const SIZE: usize = 4;

/// Number of squares on the board.
pub const CELLS: usize = SIZE * SIZE;

/// Which row, column or diagonal a [`Line`] covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Row 0-3.
    Row(usize),
    /// Column 0-3.
    Column(usize),
    /// Top-left to bottom-right: `{0, 5, 10, 15}`.
    Diagonal,
    /// Top-right to bottom-left: `{3, 6, 9, 12}`.
    AntiDiagonal,
}

/// Four board indices that win when held by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    kind: LineKind,
    indices: [usize; SIZE],
}

/// All lines in scan order: rows, then columns, then the two diagonals.
///
/// When several lines are complete at once the first one here wins.
pub const LINES: [Line; 2 * SIZE + 2] = build_lines();

const fn build_lines() -> [Line; 2 * SIZE + 2] {
    let mut lines = [Line {
        kind: LineKind::Diagonal,
        indices: [0; SIZE],
    }; 2 * SIZE + 2];

    let mut i = 0;
    while i < SIZE {
        let mut row = [0; SIZE];
        let mut column = [0; SIZE];
        let mut j = 0;
        while j < SIZE {
            row[j] = i * SIZE + j;
            column[j] = j * SIZE + i;
            j += 1;
        }
        lines[i] = Line {
            kind: LineKind::Row(i),
            indices: row,
        };
        lines[SIZE + i] = Line {
            kind: LineKind::Column(i),
            indices: column,
        };
        i += 1;
    }

    let mut diagonal = [0; SIZE];
    let mut anti = [0; SIZE];
    let mut k = 0;
    while k < SIZE {
        diagonal[k] = k * (SIZE + 1);
        anti[k] = (k + 1) * (SIZE - 1);
        k += 1;
    }
    lines[2 * SIZE] = Line {
        kind: LineKind::Diagonal,
        indices: diagonal,
    };
    lines[2 * SIZE + 1] = Line {
        kind: LineKind::AntiDiagonal,
        indices: anti,
    };

    lines
}

impl Line {
    /// Which row, column or diagonal this is.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Board indices covered by this line.
    pub fn indices(&self) -> &[usize; SIZE] {
        &self.indices
    }

    /// Returns the player holding all four squares, if any.
    ///
    /// Empty squares never form a winning line.
    pub fn owner(&self, board: &Board) -> Option<Player> {
        let squares = board.squares();
        let first = squares[self.indices[0]];
        match first {
            Square::Empty => None,
            Square::Occupied(player) => self
                .indices
                .iter()
                .all(|&i| squares[i] == first)
                .then_some(player),
        }
    }
}
