//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board) snapshot. Rules know
//! nothing about turns or move legality, so they evaluate any
//! well-formed board, reachable or not.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinningLine, check_winner, evaluate, winning_line};
