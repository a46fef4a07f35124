//! Command-line interface.

use clap::{Parser, Subcommand};

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: std::path::PathBuf,

    /// Tracing filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    pub log_filter: String,

    /// Log file for the interactive game (replay logs to stderr)
    #[arg(long, global = true, default_value = "tictactoe_tui.log")]
    pub log_file: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Name pre-filled for player 1 (X)
        #[arg(long)]
        player1: Option<String>,

        /// Name pre-filled for player 2 (O)
        #[arg(long)]
        player2: Option<String>,
    },

    /// Replay a list of cell clicks and print every status change
    Replay {
        /// Cell indices (0-8), comma separated
        #[arg(short, long, value_delimiter = ',', required = true)]
        moves: Vec<usize>,

        /// Name for player 1 (X)
        #[arg(long)]
        player1: Option<String>,

        /// Name for player 2 (O)
        #[arg(long)]
        player2: Option<String>,

        /// Print the final state as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
