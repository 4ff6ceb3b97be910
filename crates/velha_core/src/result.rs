//! Result of evaluating a board.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// What a board says about the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// No line is won and at least one square is empty.
    Undecided,
    /// A player holds a full line.
    Winner(Player),
    /// The board is full and no line is won.
    Draw,
}

impl GameResult {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Winner(player) => Some(*player),
            GameResult::Undecided | GameResult::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, GameResult::Draw)
    }

    /// Returns true once the game has a winner or is drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameResult::Undecided)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Undecided => write!(f, "In progress"),
            GameResult::Winner(player) => write!(f, "Player {} wins", player),
            GameResult::Draw => write!(f, "Draw"),
        }
    }
}
