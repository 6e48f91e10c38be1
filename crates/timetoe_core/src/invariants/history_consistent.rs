//! History consistency invariant: ply numbers match occupied squares.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: the history is anchored and every snapshot's ply is its mark count.
///
/// Snapshot 0 is the empty board with no move, snapshot `n` has exactly `n`
/// occupied squares, and the cursor points inside the history.
pub struct HistoryConsistentInvariant;

impl Invariant<GameHistory> for HistoryConsistentInvariant {
    fn holds(history: &GameHistory) -> bool {
        let Some(first) = history.snapshots.first() else {
            return false;
        };
        if first.last_move.is_some() {
            return false;
        }

        let plies_match = history.snapshots.iter().enumerate().all(|(i, snapshot)| {
            snapshot.ply == i && snapshot.board.occupied_count() == i
        });

        plies_match && history.current < history.snapshots.len()
    }

    fn description() -> &'static str {
        "History starts empty and snapshot n holds n marks"
    }
}
