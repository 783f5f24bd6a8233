//! Tic-tac-toe game state and win detection.
//!
//! A UI-independent core: a presentation layer holds a [`GameState`],
//! renders the nine cells of its [`Board`], and calls
//! [`GameState::apply_move`] with the index of the cell the player
//! picked. Every operation is pure and works on `Copy` snapshots.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameState, Mark, MoveResult, Outcome};
//!
//! let mut state = GameState::initial();
//! for index in [0, 3, 1, 4, 2] {
//!     match state.apply_move(index).expect("index on the board") {
//!         MoveResult::Accepted(next) => state = next,
//!         MoveResult::Rejected { reason, .. } => panic!("{reason}"),
//!     }
//! }
//! assert_eq!(state.status(), Outcome::Won(Mark::X));
//! assert_eq!(state.status_line().to_string(), "Winner: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod position;
pub mod rules;
mod status;
mod types;

pub use error::{MoveError, ParseBoardError, Rejection, ReplayError, ReplayErrorKind};
pub use game::{GameState, MoveResult};
pub use position::Position;
pub use rules::{WinningLine, evaluate};
pub use status::StatusLine;
pub use types::{Board, Cell, Mark, Outcome};
