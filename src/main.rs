//! Tic-tac-toe - terminal front end.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::sync::Arc;
use tictactoe::{AppConfig, ConsoleDisplay, Engine, replay};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli)?;

    let config = AppConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Play { player1, player2 } => {
            let config = config.with_player_names(player1, player2);
            tictactoe::tui::run_tui(&config)
        }
        Command::Replay {
            moves,
            player1,
            player2,
            json,
        } => run_replay(&config, &moves, player1, player2, json),
    }
}

/// Installs the global subscriber before anything logs.
///
/// The interactive game owns the terminal, so it logs to a file; replay logs
/// to stderr to keep stdout for the board and JSON.
fn init_tracing(cli: &Cli) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_filter));

    match cli.command {
        Command::Play { .. } => {
            let log_file = std::fs::File::create(&cli.log_file)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(log_file))
                .with_ansi(false)
                .init();
        }
        Command::Replay { .. } => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

/// Replays clicks through a console display.
#[instrument(skip(config))]
fn run_replay(
    config: &AppConfig,
    moves: &[usize],
    player1: Option<String>,
    player2: Option<String>,
    json: bool,
) -> Result<()> {
    let config = config.clone().with_player_names(player1, player2);
    let name1 = config.player1().clone().unwrap_or_default();
    let name2 = config.player2().clone().unwrap_or_default();
    info!(moves = moves.len(), "Replaying moves");

    let snapshot = if json {
        let mut engine = Engine::new(ConsoleDisplay::new(std::io::sink()));
        let snapshot = replay(&mut engine, &name1, &name2, moves)?;
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        snapshot
    } else {
        let mut engine = Engine::new(ConsoleDisplay::stdout());
        replay(&mut engine, &name1, &name2, moves)?
    };

    info!(phase = %snapshot.phase, game_over = snapshot.game_over, "Done");
    Ok(())
}
