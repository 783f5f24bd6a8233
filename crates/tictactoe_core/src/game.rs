//! Game state and move application.

use crate::error::{MoveError, Rejection, ReplayError, ReplayErrorKind};
use crate::rules;
use crate::status::StatusLine;
use crate::{Board, Mark, Outcome, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Authoritative board plus the mark to move next.
///
/// `GameState` is a value. Every accepted move yields a brand-new
/// state and the previous one stays valid, so keeping a history is up
/// to the caller. The outcome is never stored; [`GameState::status`]
/// recomputes it from the board each time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Mark to move next.
    turn: Mark,
}

/// Outcome of attempting a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    /// The move was played.
    Accepted(GameState),
    /// The move was refused; `state` is the input, unchanged.
    Rejected {
        /// The unchanged state.
        state: GameState,
        /// Why the move was refused.
        reason: Rejection,
    },
}

impl MoveResult {
    /// The state to continue from, whether or not the move was accepted.
    pub fn state(&self) -> &GameState {
        match self {
            MoveResult::Accepted(state) => state,
            MoveResult::Rejected { state, .. } => state,
        }
    }

    /// Returns true if the move was played.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveResult::Accepted(_))
    }

    /// Returns the rejection reason, if any.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            MoveResult::Accepted(_) => None,
            MoveResult::Rejected { reason, .. } => Some(*reason),
        }
    }

    /// Converts into the accepted state, or the rejection reason.
    pub fn into_result(self) -> Result<GameState, Rejection> {
        match self {
            MoveResult::Accepted(state) => Ok(state),
            MoveResult::Rejected { reason, .. } => Err(reason),
        }
    }
}

impl GameState {
    /// Empty board, X to move.
    #[instrument]
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Evaluates the board.
    pub fn status(&self) -> Outcome {
        rules::evaluate(&self.board)
    }

    /// Display text for the current status.
    pub fn status_line(&self) -> StatusLine {
        StatusLine::from(self)
    }

    /// Empty positions that can still be played.
    ///
    /// Empty once the game is over, even if cells remain.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status().is_terminal() {
            Vec::new()
        } else {
            self.board.empty_positions()
        }
    }

    /// Plays the current mark at a board index (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidIndex`] if `index` is not on the
    /// board. Occupied cells and finished games are not errors; they
    /// come back as [`MoveResult::Rejected`].
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&self, index: usize) -> Result<MoveResult, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::InvalidIndex { index })?;
        Ok(self.place(position))
    }

    /// Plays the current mark at `position`.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn place(&self, position: Position) -> MoveResult {
        let outcome = self.status();
        if outcome.is_terminal() {
            debug!(?outcome, "Move rejected, game is over");
            return self.reject(Rejection::GameAlreadyOver { outcome });
        }

        if !self.board.is_empty(position) {
            debug!("Move rejected, cell occupied");
            return self.reject(Rejection::AlreadyOccupied { position });
        }

        let next = Self {
            board: self.board.with_mark(position, self.turn),
            turn: self.turn.opponent(),
        };
        debug!(next_turn = %next.turn, "Move accepted");
        MoveResult::Accepted(next)
    }

    /// Replays board indices from the initial state.
    ///
    /// # Errors
    ///
    /// Stops at the first index that is out of bounds or refused and
    /// reports it with its 0-based move number.
    #[instrument(skip(indices))]
    pub fn replay<I>(indices: I) -> Result<Self, ReplayError>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut state = Self::initial();

        for (move_number, index) in indices.into_iter().enumerate() {
            let result = state.apply_move(index).map_err(|e| ReplayError {
                move_number,
                kind: ReplayErrorKind::Invalid(e),
            })?;
            state = result.into_result().map_err(|reason| ReplayError {
                move_number,
                kind: ReplayErrorKind::Rejected(reason),
            })?;
        }

        debug!(outcome = ?state.status(), "Replay complete");
        Ok(state)
    }

    fn reject(&self, reason: Rejection) -> MoveResult {
        MoveResult::Rejected {
            state: *self,
            reason,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
