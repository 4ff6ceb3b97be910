//! Win detection logic.

use crate::lines::{LINES, Line};
use crate::types::{Board, Player};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has four in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

/// Returns the winner together with the first complete line in scan order.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
    LINES
        .iter()
        .find_map(|line| line.owner(board).map(|player| (player, *line)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::LineKind;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_bottom_row() {
        let board: Board = ".... .... .... OOOO".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::O));
        let (_, line) = winning_line(&board).unwrap();
        assert_eq!(line.kind(), LineKind::Row(3));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XXX. .... .... ....".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board: Board = "XXXO .... .... ....".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_three_by_three_diagonal_does_not_win() {
        // Squares 2, 5, 8 are a 3x3 anti-diagonal, not a 4x4 line.
        let board: Board = "..X. .X.. X... ....".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }
}
