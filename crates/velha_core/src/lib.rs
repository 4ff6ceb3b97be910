//! Pure game logic for 4x4 tic-tac-toe ("Jogo da Velha").
//!
//! The crate has no I/O. Boards are validated on construction, so win
//! detection over a [`Board`] is a total function.
//!
//! # Example
//!
//! ```
//! use velha_core::{Board, GameResult, Player, evaluate};
//!
//! let board: Board = "XXXX ..O. .O.. ....".parse().unwrap();
//! assert_eq!(evaluate(&board), GameResult::Winner(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod lines;
mod position;
mod result;
mod rules;
mod state;
mod types;

pub use action::{Move, MoveError};
pub use error::BoardError;
pub use lines::{CELLS, LINES, Line, LineKind, SIZE};
pub use position::Position;
pub use result::GameResult;
pub use rules::{check_winner, evaluate, is_draw, is_full, winning_line};
pub use state::{GameState, Scores};
pub use types::{Board, Player, Square};
