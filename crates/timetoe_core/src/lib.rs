//! Tic-tac-toe rules engine and browsable move history.
//!
//! # Architecture
//!
//! - **Rules** ([`rules`]): pure functions over a [`Board`] for winner,
//!   winning line, move legality and draw.
//! - **History** ([`GameHistory`]): one [`Snapshot`] per ply, a cursor for
//!   the displayed ply, and the operations a presentation layer drives:
//!   [`GameHistory::play_move`], [`GameHistory::jump_to`],
//!   [`GameHistory::status`] and [`GameHistory::move_list`].
//! - **Invariants** ([`invariants`]): structural properties of a history,
//!   checked after every accepted move in debug builds.
//!
//! # Example
//!
//! ```
//! use timetoe_core::{GameHistory, Player, Status};
//!
//! let mut game = GameHistory::new();
//! for index in [0, 4, 1, 3, 2] {
//!     game.play_move(index)?;
//! }
//! assert_eq!(game.status(), Status::Winner(Player::X));
//! assert_eq!(game.status().to_string(), "Winner: X");
//!
//! game.jump_to(2)?;
//! assert_eq!(game.status().to_string(), "Next player: X");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{JumpError, Move, MoveError};
pub use history::{GameHistory, MoveLabel, Snapshot, Status};
pub use position::{ParsePositionError, Position};
pub use rules::Line;
pub use types::{Board, GameStatus, Player, Square};
