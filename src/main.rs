//! timetoe - terminal tic-tac-toe.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use timetoe::{Cli, Command, run_replay, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(&cli.log_file),
        Command::Replay { moves, jump, json } => run_replay_command(&moves, jump, json),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Run the interactive TUI, logging to a file so the screen stays clean
fn run_play(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();

    info!(log_file = %log_file.display(), "Logging initialized");
    tui::run_tui()
}

/// Replay a move list and print the displayed position
fn run_replay_command(moves: &str, jump: Option<usize>, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();

    let report = run_replay(moves, jump)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}
