//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use timetoe_core::{GameHistory, Position};
use tracing::{debug, info, instrument};

use super::input::move_cursor;

/// Which pane receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The jump-to-move list.
    Moves,
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Redraw and keep reading keys.
    Continue,
    /// Leave the TUI.
    Quit,
}

/// Main application state.
///
/// Owns the game history; rendering reads it through the getters and never
/// mutates it.
#[derive(Debug, Getters)]
pub struct App {
    history: GameHistory,
    cursor: Position,
    focus: Focus,
    selected_ply: usize,
    notice: Option<String>,
}

impl App {
    /// Creates a new application with an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: GameHistory::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected_ply: 0,
            notice: None,
        }
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(digit) = c.to_digit(10) {
                    self.play(digit as usize - 1);
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::Moves => self.handle_moves_key(code),
            },
        }
        AppAction::Continue
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
            _ => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_moves_key(&mut self, code: KeyCode) {
        let last = self.history.len() - 1;
        match code {
            KeyCode::Up => self.selected_ply = self.selected_ply.saturating_sub(1),
            KeyCode::Down => self.selected_ply = (self.selected_ply + 1).min(last),
            KeyCode::Home => self.selected_ply = 0,
            KeyCode::End => self.selected_ply = last,
            KeyCode::Enter | KeyCode::Char(' ') => self.jump(self.selected_ply),
            _ => {}
        }
    }

    /// Plays at board `index`; a rejected move only sets the notice.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) {
        match self.history.play_move(index) {
            Ok(snapshot) => {
                debug!(ply = *snapshot.ply(), "Move applied to UI state");
                self.notice = None;
                self.selected_ply = self.history.current_move();
            }
            Err(e) => {
                debug!(error = %e, "Ignoring rejected move");
                self.notice = Some(e.to_string());
            }
        }
    }

    /// Displays `ply`; an out-of-range ply only sets the notice.
    #[instrument(skip(self))]
    pub fn jump(&mut self, ply: usize) {
        match self.history.jump_to(ply) {
            Ok(()) => {
                self.notice = None;
                self.selected_ply = ply;
            }
            Err(e) => {
                debug!(error = %e, "Ignoring rejected jump");
                self.notice = Some(e.to_string());
            }
        }
    }

    /// Discards the game and starts from an empty board.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        *self = Self::new();
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => {
                self.selected_ply = self.history.current_move();
                Focus::Moves
            }
            Focus::Moves => Focus::Board,
        };
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
