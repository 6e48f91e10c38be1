//! Decided games end the history.

use super::super::{GameHistory, GameStatus};
use super::Invariant;

/// Invariant: only the last snapshot may be won or drawn.
pub struct DecidedIsTerminalInvariant;

impl Invariant<GameHistory> for DecidedIsTerminalInvariant {
    fn holds(history: &GameHistory) -> bool {
        let Some((_, earlier)) = history.snapshots.split_last() else {
            return true;
        };
        earlier
            .iter()
            .all(|snapshot| snapshot.outcome() == GameStatus::InProgress)
    }

    fn description() -> &'static str {
        "No snapshot follows a won or drawn board"
    }
}
