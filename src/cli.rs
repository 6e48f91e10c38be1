//! Command-line interface for timetoe.

use clap::{Parser, Subcommand};

/// timetoe - tic-tac-toe with a browsable move history
#[derive(Parser, Debug)]
#[command(name = "timetoe")]
#[command(about = "Tic-tac-toe with a browsable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// File receiving log output while the terminal UI is running
    #[arg(long, global = true, default_value = "timetoe.log")]
    pub log_file: std::path::PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Replay a list of moves and print the resulting position
    Replay {
        /// Comma-separated moves as indices (0-8) or labels, e.g. "0,4,top-center"
        moves: String,

        /// Display this ply instead of the last one
        #[arg(short, long)]
        jump: Option<usize>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_command() {
        let cli = Cli::try_parse_from(["timetoe"]).expect("parses");
        assert_eq!(cli.command, None);
        assert_eq!(cli.log_file, std::path::PathBuf::from("timetoe.log"));
    }

    #[test]
    fn test_replay_arguments() {
        let cli = Cli::try_parse_from(["timetoe", "replay", "0,4,1", "--jump", "2", "--json"])
            .expect("parses");
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: "0,4,1".to_string(),
                jump: Some(2),
                json: true,
            })
        );
    }

    #[test]
    fn test_global_log_file() {
        let cli = Cli::try_parse_from(["timetoe", "play", "--log-file", "/tmp/t.log"])
            .expect("parses");
        assert_eq!(cli.command, Some(Command::Play));
        assert_eq!(cli.log_file, std::path::PathBuf::from("/tmp/t.log"));
    }
}
