//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameHistory, Player};
use super::Invariant;

/// Invariant: players alternate turns, X first.
///
/// The move recorded at ply `n` belongs to X when `n` is odd and to O when
/// it is even.
pub struct AlternatingTurnInvariant;

impl Invariant<GameHistory> for AlternatingTurnInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .snapshots
            .iter()
            .enumerate()
            .skip(1)
            .all(|(ply, snapshot)| {
                snapshot
                    .last_move
                    .is_some_and(|mov| mov.player == Player::for_ply(ply))
            })
    }

    fn description() -> &'static str {
        "Players alternate, X first"
    }
}
