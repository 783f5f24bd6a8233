//! Command-line interface for the tictactoe driver.

use clap::{Parser, Subcommand, ValueEnum};

/// Replay and evaluate tic-tac-toe games
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Replay and evaluate tic-tac-toe games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    pub format: Format,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play cell indices (0-8) from an empty board, X first
    Play {
        /// Cell indices in move order
        indices: Vec<usize>,
    },

    /// Evaluate a board given as 9 cells (X, O, or . for empty)
    Evaluate {
        /// Board in row-major order, e.g. "XOX/XOO/OXX"
        board: String,
    },
}

/// How results are printed
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Board grid and status line
    Text,
    /// JSON snapshot
    Json,
}
