//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here holds state; the history
//! store calls in to validate moves and to derive status.

pub mod draw;
pub mod legal;
pub mod win;

pub use draw::{is_draw, is_full};
pub use legal::{check_move, is_legal_move};
pub use win::{LINES, Line, check_winner, winning_line};

use super::{Board, GameStatus};
use tracing::instrument;

/// Derives the game status of a board.
#[instrument]
pub fn outcome(board: &Board) -> GameStatus {
    if let Some(line) = winning_line(board) {
        GameStatus::Won(line.player())
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_outcome_in_progress() {
        assert_eq!(outcome(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_outcome_won() {
        let board = Board::new()
            .with_mark(Position::TopRight, Player::O)
            .with_mark(Position::Center, Player::O)
            .with_mark(Position::BottomLeft, Player::O);
        assert_eq!(outcome(&board), GameStatus::Won(Player::O));
    }
}
