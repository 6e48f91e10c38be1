//! Terminal UI for timetoe.

mod app;
mod input;
mod ui;

pub use app::{App, AppAction, Focus};
pub use input::move_cursor;
pub use ui::draw;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

/// Runs the interactive game until the user quits.
///
/// The terminal is restored even when the loop fails.
#[instrument]
pub fn run_tui() -> Result<()> {
    info!("Starting timetoe TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let res = run_game(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn run_game(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;

        if let Event::Key(key) = event::read()? {
            // Ignore release/repeat events reported by some terminals.
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key) == AppAction::Quit {
                info!("User quit");
                return Ok(());
            }
        }
    }
}
