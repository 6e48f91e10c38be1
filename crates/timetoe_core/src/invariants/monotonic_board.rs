//! Monotonic board invariant: each ply fills exactly one empty square.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: consecutive snapshots differ by exactly the recorded move.
///
/// The square named by snapshot `n+1`'s move is empty in snapshot `n`, and
/// placing that move on snapshot `n` reproduces snapshot `n+1`.
pub struct MonotonicBoardInvariant;

impl Invariant<GameHistory> for MonotonicBoardInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.snapshots.windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            match after.last_move {
                Some(mov) => {
                    before.board.is_empty(mov.position)
                        && before.board.with_mark(mov.position, mov.player) == after.board
                }
                None => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each ply fills exactly one previously empty square"
    }
}
