//! Game rules for 4x4 tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from board storage
//! and from the state transition so they can be called from anywhere.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_line};

use crate::result::GameResult;
use crate::types::Board;
use tracing::instrument;

/// Evaluates a board: a winner, a draw, or neither.
///
/// Lines are scanned rows first, then columns, then the diagonals; the
/// first complete line decides the winner.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameResult {
    if let Some(winner) = check_winner(board) {
        GameResult::Winner(winner)
    } else if is_full(board) {
        GameResult::Draw
    } else {
        GameResult::Undecided
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    fn board(s: &str) -> Board {
        s.parse().expect("valid board")
    }

    #[test]
    fn test_empty_board_is_undecided() {
        assert_eq!(evaluate(&Board::new()), GameResult::Undecided);
    }

    #[test]
    fn test_top_row_x_wins() {
        let b = board("XXXX .... .... ....");
        assert_eq!(evaluate(&b), GameResult::Winner(Player::X));
    }

    #[test]
    fn test_column_two_o_wins() {
        let b = board("..O. ..O. ..O. ..O.");
        assert_eq!(evaluate(&b), GameResult::Winner(Player::O));
    }

    #[test]
    fn test_main_diagonal_x_wins() {
        let b = board("X... .X.. ..X. ...X");
        assert_eq!(evaluate(&b), GameResult::Winner(Player::X));
    }

    #[test]
    fn test_anti_diagonal_o_wins() {
        let b = board("...O ..O. .O.. O...");
        assert_eq!(evaluate(&b), GameResult::Winner(Player::O));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let b = board("XXOO OOXX XXOO OOXX");
        assert_eq!(evaluate(&b), GameResult::Draw);
    }

    #[test]
    fn test_partial_board_without_line_is_undecided() {
        let b = board("XXO. OOXX XXOO OOXX");
        assert_eq!(evaluate(&b), GameResult::Undecided);
    }

    #[test]
    fn test_full_board_with_line_is_a_win() {
        let b = board("XXXX OOXO XOOX OXOO");
        assert_eq!(evaluate(&b), GameResult::Winner(Player::X));
    }

    #[test]
    fn test_two_rows_first_row_wins() {
        assert_eq!(
            evaluate(&board("XXXX OOOO .... ....")),
            GameResult::Winner(Player::X)
        );
        assert_eq!(
            evaluate(&board("OOOO XXXX .... ....")),
            GameResult::Winner(Player::O)
        );
    }

    #[test]
    fn test_two_columns_first_column_wins() {
        let b = board("O..X O..X O..X O..X");
        assert_eq!(evaluate(&b), GameResult::Winner(Player::O));
    }

    #[test]
    fn test_main_diagonal_scanned_before_anti_diagonal() {
        let b = board("X..O .XO. .OX. O..X");
        assert_eq!(evaluate(&b), GameResult::Winner(Player::X));
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let b = board("XOXO .X.. ..O. ...X");
        assert_eq!(evaluate(&b), evaluate(&b));
    }
}
