//! Non-interactive replay of a move list.

use anyhow::{Context, Result};
use serde::Serialize;
use timetoe_core::{GameHistory, Position, Snapshot};
use tracing::{info, instrument};

/// Parses comma-separated moves into board indices.
///
/// Each entry is an index (`4`) or a position label (`center`). Blank
/// entries are skipped, so trailing commas are harmless.
#[instrument]
pub fn parse_moves(moves: &str) -> Result<Vec<usize>> {
    moves
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .parse::<Position>()
                .map(Position::to_index)
                .with_context(|| format!("Invalid move {entry:?}"))
        })
        .collect()
}

/// What a replay leaves on display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Displayed ply.
    pub current_move: usize,
    /// Number of snapshots in the history.
    pub history_len: usize,
    /// Status line, e.g. "Next player: O".
    pub status: String,
    /// Displayed snapshot.
    pub snapshot: Snapshot,
    /// Indices of the winning line, empty when undecided.
    pub winning_line: Vec<usize>,
    /// Jump-to labels, one per snapshot.
    pub move_list: Vec<String>,
}

impl ReplayReport {
    /// Captures the displayed state of `history`.
    pub fn from_history(history: &GameHistory) -> Self {
        Self {
            current_move: history.current_move(),
            history_len: history.len(),
            status: history.status().to_string(),
            snapshot: *history.displayed(),
            winning_line: history
                .displayed_winning_line()
                .map(|line| line.indices().to_vec())
                .unwrap_or_default(),
            move_list: history.move_list().iter().map(ToString::to_string).collect(),
        }
    }

    /// Renders the report as plain text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.snapshot.board().display());
        out.push_str("\n\n");
        out.push_str(&self.status);
        out.push('\n');
        if !self.winning_line.is_empty() {
            let cells: Vec<String> = self.winning_line.iter().map(ToString::to_string).collect();
            out.push_str(&format!("Winning line: {}\n", cells.join(", ")));
        }
        out.push('\n');
        for (ply, label) in self.move_list.iter().enumerate() {
            let marker = if ply == self.current_move { ">" } else { " " };
            out.push_str(&format!("{marker} {label}\n"));
        }
        out
    }
}

/// Replays `moves`, optionally jumps, and reports the displayed state.
#[instrument]
pub fn run_replay(moves: &str, jump: Option<usize>) -> Result<ReplayReport> {
    let indices = parse_moves(moves)?;
    let mut history = GameHistory::replay(&indices).context("Replay rejected a move")?;
    if let Some(ply) = jump {
        history.jump_to(ply)?;
    }
    info!(
        history_len = history.len(),
        current_move = history.current_move(),
        "Replay finished"
    );
    Ok(ReplayReport::from_history(&history))
}
