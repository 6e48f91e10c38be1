//! Move legality.

use super::super::{Board, MoveError, Position};
use super::outcome;
use tracing::instrument;

/// Validates a move at raw board `index`.
///
/// Checks, in order: the index is on the board, the game is undecided,
/// the square is empty. Returns the target position on success.
#[instrument]
pub fn check_move(board: &Board, index: usize) -> Result<Position, MoveError> {
    let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;

    if outcome(board).is_over() {
        return Err(MoveError::GameOver);
    }

    if !board.is_empty(pos) {
        return Err(MoveError::SquareOccupied(pos));
    }

    Ok(pos)
}

/// True iff `index` is on the board, its square is empty, and nobody has won.
#[instrument]
pub fn is_legal_move(board: &Board, index: usize) -> bool {
    check_move(board, index).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_empty_board_all_legal() {
        let board = Board::new();
        assert!((0..9).all(|i| is_legal_move(&board, i)));
    }

    #[test]
    fn test_out_of_bounds() {
        let board = Board::new();
        assert_eq!(check_move(&board, 9), Err(MoveError::OutOfBounds(9)));
        assert!(!is_legal_move(&board, usize::MAX));
    }

    #[test]
    fn test_occupied() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        assert_eq!(
            check_move(&board, 4),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(check_move(&board, 0), Ok(Position::TopLeft));
    }

    #[test]
    fn test_decided_game_rejects_empty_square() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::TopCenter, Player::X)
            .with_mark(Position::TopRight, Player::X);
        assert_eq!(check_move(&board, 8), Err(MoveError::GameOver));
        assert!(!is_legal_move(&board, 8));
    }
}
