//! Browsable game history.
//!
//! [`GameHistory`] owns one [`Snapshot`] per ply, starting with the empty
//! board at ply 0, plus a cursor naming the displayed ply. Jumping moves the
//! cursor without touching the snapshots; playing a move from behind the
//! tail drops everything after the cursor before appending.

use super::action::{JumpError, Move, MoveError};
use super::rules::{self, Line};
use super::{Board, GameStatus, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Board state after a given ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Snapshot {
    /// Position in the history; equals the number of marks on the board.
    pub(crate) ply: usize,
    /// The board after this ply.
    pub(crate) board: Board,
    /// The move that produced this snapshot, `None` at game start.
    pub(crate) last_move: Option<Move>,
}

impl Snapshot {
    /// The empty board at ply 0.
    pub fn initial() -> Self {
        Self {
            ply: 0,
            board: Board::new(),
            last_move: None,
        }
    }

    /// Derived game state of this snapshot.
    pub fn outcome(&self) -> GameStatus {
        rules::outcome(&self.board)
    }
}

/// One line of status text for the displayed snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// Someone has three in a row.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Full board, no winner.
    #[display("Draw")]
    Draw,
    /// Game continues with this player.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// Label of a jump-to entry in the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveLabel {
    /// Ply 0.
    #[display("Go to game start")]
    GameStart,
    /// Any later ply.
    #[display("Go to move #{}", _0)]
    Move(usize),
}

impl MoveLabel {
    /// Creates the label for `ply`.
    pub fn for_ply(ply: usize) -> Self {
        if ply == 0 {
            MoveLabel::GameStart
        } else {
            MoveLabel::Move(ply)
        }
    }

    /// The ply this entry jumps to.
    pub fn ply(self) -> usize {
        match self {
            MoveLabel::GameStart => 0,
            MoveLabel::Move(ply) => ply,
        }
    }
}

/// The ordered snapshots of a game and the displayed ply.
///
/// Every operation is all-or-nothing: a rejected move or jump leaves the
/// history exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameHistory {
    pub(crate) snapshots: Vec<Snapshot>,
    pub(crate) current: usize,
}

impl GameHistory {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
            current: 0,
        }
    }

    /// Rebuilds a history by playing `indices` in order from the empty board.
    ///
    /// # Errors
    ///
    /// Returns the first rejected move's error.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<Self, MoveError> {
        let mut history = Self::new();
        for &index in indices {
            history.play_move(index)?;
        }
        Ok(history)
    }

    /// Plays the current player's mark at `index` on the displayed board.
    ///
    /// When the displayed ply is behind the tail, the later snapshots are
    /// discarded first. Returns the new snapshot.
    ///
    /// # Errors
    ///
    /// Rejects out-of-range indices, occupied squares and decided games
    /// with the history unchanged.
    #[instrument(skip(self), fields(current_move = self.current, player = %self.current_player()))]
    pub fn play_move(&mut self, index: usize) -> Result<Snapshot, MoveError> {
        let board = self.displayed_board();
        let position = rules::check_move(&board, index)
            .inspect_err(|e| debug!(error = %e, "Move rejected"))?;

        let player = self.current_player();
        let action = Move::new(player, position);
        let snapshot = Snapshot {
            ply: self.current + 1,
            board: board.with_mark(position, player),
            last_move: Some(action),
        };

        let discarded = self.snapshots.len() - (self.current + 1);
        if discarded > 0 {
            debug!(discarded, "Branching from an earlier ply");
        }
        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(snapshot);
        self.current = snapshot.ply;

        debug!(%action, ply = self.current, "Move played");

        #[cfg(debug_assertions)]
        super::invariants::assert_invariants(self);

        Ok(snapshot)
    }

    /// Displays the snapshot at `ply` without changing the history.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] when `ply >= len()`.
    #[instrument(skip(self), fields(current_move = self.current))]
    pub fn jump_to(&mut self, ply: usize) -> Result<(), JumpError> {
        if ply >= self.snapshots.len() {
            debug!(len = self.snapshots.len(), "Jump rejected");
            return Err(JumpError::OutOfRange {
                ply,
                len: self.snapshots.len(),
            });
        }
        self.current = ply;
        debug!("Jumped");
        Ok(())
    }

    /// The displayed snapshot.
    pub fn displayed(&self) -> &Snapshot {
        &self.snapshots[self.current]
    }

    /// The displayed board.
    pub fn displayed_board(&self) -> Board {
        self.displayed().board
    }

    /// The winning line of the displayed board, if any.
    pub fn displayed_winning_line(&self) -> Option<Line> {
        rules::winning_line(&self.displayed().board)
    }

    /// Derived game state of the displayed board.
    pub fn displayed_outcome(&self) -> GameStatus {
        self.displayed().outcome()
    }

    /// Status of the displayed board.
    #[instrument(skip(self))]
    pub fn status(&self) -> Status {
        match self.displayed_outcome() {
            GameStatus::Won(player) => Status::Winner(player),
            GameStatus::Draw => Status::Draw,
            GameStatus::InProgress => Status::NextPlayer(self.current_player()),
        }
    }

    /// The player to move at the displayed ply.
    pub fn current_player(&self) -> Player {
        Player::to_move_after(self.current)
    }

    /// Jump-to labels, one per snapshot.
    pub fn move_list(&self) -> Vec<MoveLabel> {
        (0..self.snapshots.len()).map(MoveLabel::for_ply).collect()
    }

    /// Index of the displayed ply.
    pub fn current_move(&self) -> usize {
        self.current
    }

    /// Number of snapshots, including the empty board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the empty board is never dropped.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// True when the displayed ply is the last one.
    pub fn is_at_tail(&self) -> bool {
        self.current + 1 == self.snapshots.len()
    }

    /// All snapshots in ply order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
