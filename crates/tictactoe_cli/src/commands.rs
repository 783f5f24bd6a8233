//! Command implementations.
//!
//! Each command returns the text to print so it can be tested without
//! capturing stdout.

use crate::cli::Format;
use anyhow::{Context, Result};
use serde::Serialize;
use tictactoe_core::{Board, GameState, Mark, Outcome, WinningLine, rules};
use tracing::{info, instrument};

/// Serializable view of a board and its evaluation.
#[derive(Debug, Serialize)]
struct Snapshot {
    board: Board,
    grid: String,
    turn: Option<Mark>,
    outcome: Outcome,
    status: String,
    winning_line: Option<WinningLine>,
}

impl Snapshot {
    fn from_state(state: &GameState) -> Self {
        let mut snapshot = Self::from_board(state.board());
        snapshot.turn = (!state.status().is_terminal()).then(|| state.turn());
        snapshot.status = state.status_line().to_string();
        snapshot
    }

    fn from_board(board: &Board) -> Self {
        let outcome = board.outcome();
        Self {
            board: *board,
            grid: board.to_string(),
            turn: None,
            outcome,
            status: outcome.to_string(),
            winning_line: rules::winning_line(board),
        }
    }

    fn render(&self, format: Format) -> Result<String> {
        match format {
            Format::Json => serde_json::to_string_pretty(self).context("Failed to serialize snapshot"),
            Format::Text => {
                let mut out = format!("{}\n{}", self.grid, self.status);
                if let Some(line) = &self.winning_line {
                    let cells: Vec<String> = line
                        .positions
                        .iter()
                        .map(|p| p.to_index().to_string())
                        .collect();
                    out.push_str(&format!("\nLine: {}", cells.join(",")));
                }
                Ok(out)
            }
        }
    }
}

/// Replays `indices` from the initial state and renders the final state.
#[instrument(skip(format))]
pub fn play(indices: &[usize], format: Format) -> Result<String> {
    let state = GameState::replay(indices.iter().copied()).context("Replay stopped")?;
    info!(moves = indices.len(), outcome = ?state.status(), "Replay finished");
    Snapshot::from_state(&state).render(format)
}

/// Parses and evaluates a board.
#[instrument(skip(format))]
pub fn evaluate(board: &str, format: Format) -> Result<String> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board {:?}", board))?;
    info!(outcome = ?board.outcome(), "Board evaluated");
    Snapshot::from_board(&board).render(format)
}
