//! tictactoe - replay and evaluate tic-tac-toe games from the shell.

#![warn(missing_docs)]

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tracing::{debug, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = run(cli)?;
    println!("{}", output);
    Ok(())
}

/// Dispatches a parsed command line.
#[instrument(skip(cli), fields(format = ?cli.format))]
fn run(cli: Cli) -> Result<String> {
    debug!(command = ?cli.command, "Running command");
    match cli.command {
        Command::Play { indices } => commands::play(&indices, cli.format),
        Command::Evaluate { board } => commands::evaluate(&board, cli.format),
    }
}
