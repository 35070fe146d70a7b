//! Tie detection logic for tic-tac-toe.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner is a tie.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position};
    use super::super::win::winner;
    use super::*;

    fn is_tie(board: &Board) -> bool {
        is_full(board) && winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_tie_detection() {
        // X O X / X O O / O X X
        let marks = [
            Player::X, Player::O, Player::X,
            Player::X, Player::O, Player::O,
            Player::O, Player::X, Player::X,
        ];
        let board = Position::ALL
            .into_iter()
            .zip(marks)
            .fold(Board::new(), |b, (pos, p)| b.with_mark(pos, p));

        assert!(is_full(&board));
        assert!(is_tie(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_tie() {
        let board = Position::ALL
            .into_iter()
            .fold(Board::new(), |b, pos| b.with_mark(pos, Player::X));

        assert!(is_full(&board));
        assert!(!is_tie(&board));
    }
}
