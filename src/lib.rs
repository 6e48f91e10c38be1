//! timetoe - tic-tac-toe with a browsable move history.
//!
//! The rules engine and history store live in [`timetoe_core`]; this crate
//! is the presentation layer around them.
//!
//! - **TUI** ([`tui`]): interactive board, status line and jump-to-move list
//! - **Replay** ([`replay`]): non-interactive replay of a move list
//! - **CLI** ([`cli`]): command-line arguments

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod replay;
pub mod tui;

pub use cli::{Cli, Command};
pub use replay::{ReplayReport, parse_moves, run_replay};
pub use tui::{App, AppAction, Focus};
