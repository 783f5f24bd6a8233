//! Status text shown next to the board.

use crate::{GameState, Mark, Outcome};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// One-line game status, as a presentation layer would show it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum StatusLine {
    /// Game in progress; this mark moves next.
    #[display("Next player: {}", _0)]
    NextPlayer(Mark),
    /// Game won by this mark.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// Game drawn.
    #[display("Draw")]
    Draw,
}

impl From<&GameState> for StatusLine {
    fn from(state: &GameState) -> Self {
        match state.status() {
            Outcome::InProgress => StatusLine::NextPlayer(state.turn()),
            Outcome::Won(mark) => StatusLine::Winner(mark),
            Outcome::Draw => StatusLine::Draw,
        }
    }
}
