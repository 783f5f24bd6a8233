//! Tests for move application and turn handling.

use strum::IntoEnumIterator;
use tictactoe_core::{Board, Cell, GameState, Mark, MoveError, MoveResult, Outcome, Position, Rejection};

fn accept(state: &GameState, index: usize) -> GameState {
    match state.apply_move(index).expect("index on the board") {
        MoveResult::Accepted(next) => next,
        MoveResult::Rejected { reason, .. } => panic!("move {index} rejected: {reason}"),
    }
}

#[test]
fn test_first_move_anywhere() {
    for pos in Position::iter() {
        let state = accept(&GameState::initial(), pos.to_index());

        for other in Position::iter() {
            let expected = if other == pos {
                Cell::Occupied(Mark::X)
            } else {
                Cell::Empty
            };
            assert_eq!(state.board().get(other), expected, "after playing {pos}");
        }
        assert_eq!(state.turn(), Mark::O);
    }
}

#[test]
fn test_out_of_range_index_is_an_error() {
    let state = GameState::initial();
    assert_eq!(state.apply_move(9), Err(MoveError::InvalidIndex { index: 9 }));
    assert_eq!(
        state.apply_move(usize::MAX),
        Err(MoveError::InvalidIndex { index: usize::MAX })
    );
    assert!(state.apply_move(9).unwrap_err().to_string().contains("out of bounds"));
}

#[test]
fn test_occupied_rejection_is_repeatable() {
    let state = accept(&GameState::initial(), 4);

    let first = state.apply_move(4).unwrap();
    let second = first.state().apply_move(4).unwrap();

    for result in [first, second] {
        assert_eq!(
            result,
            MoveResult::Rejected {
                state,
                reason: Rejection::AlreadyOccupied {
                    position: Position::Center
                },
            }
        );
    }
    assert_eq!(first.state().board(), second.state().board());
}

#[test]
fn test_top_row_win_scenario() {
    let mut state = GameState::initial();
    for index in [0, 3, 1, 4, 2] {
        state = accept(&state, index);
    }

    let expected: Board = "XXX OO. ...".parse().unwrap();
    assert_eq!(state.board(), &expected);
    assert_eq!(state.status(), Outcome::Won(Mark::X));
}

#[test]
fn test_terminal_state_absorbs_moves() {
    let won = GameState::replay([0, 3, 1, 4, 2]).unwrap();

    for pos in won.board().empty_positions() {
        let result = won.apply_move(pos.to_index()).unwrap();
        assert_eq!(
            result.rejection(),
            Some(Rejection::GameAlreadyOver {
                outcome: Outcome::Won(Mark::X)
            })
        );
        assert_eq!(result.state(), &won);
    }
}

#[test]
fn test_draw_absorbs_nothing_to_play() {
    let drawn = GameState::replay([0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
    assert_eq!(drawn.status(), Outcome::Draw);
    assert!(drawn.valid_moves().is_empty());

    // Every cell is taken, but the game being over is reported first
    let result = drawn.apply_move(0).unwrap();
    assert_eq!(
        result.rejection(),
        Some(Rejection::GameAlreadyOver {
            outcome: Outcome::Draw
        })
    );
}

#[test]
fn test_turn_alternates_on_accepted_moves_only() {
    // Interleave rejected attempts with accepted moves
    let attempts = [4, 4, 0, 0, 4, 8, 8, 2, 6];
    let mut state = GameState::initial();
    let mut accepted = 0;

    for index in attempts {
        let result = state.apply_move(index).unwrap();
        if result.is_accepted() {
            accepted += 1;
        }
        state = *result.state();

        let expected = if accepted % 2 == 0 { Mark::X } else { Mark::O };
        assert_eq!(state.turn(), expected, "after {accepted} accepted moves");
    }

    assert_eq!(accepted, 5);
}

#[test]
fn test_marks_follow_turn() {
    let state = GameState::replay([0, 1, 2, 3]).unwrap();
    let board = state.board();
    assert_eq!(board.get(Position::TopLeft), Cell::Occupied(Mark::X));
    assert_eq!(board.get(Position::TopCenter), Cell::Occupied(Mark::O));
    assert_eq!(board.get(Position::TopRight), Cell::Occupied(Mark::X));
    assert_eq!(board.get(Position::MiddleLeft), Cell::Occupied(Mark::O));
    assert_eq!(board.count(Mark::X), 2);
    assert_eq!(board.count(Mark::O), 2);
}

#[test]
fn test_valid_moves_filters_occupied() {
    let state = GameState::replay([0, 4]).unwrap();
    let valid = state.valid_moves();

    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}

#[test]
fn test_state_serializes() {
    let state = GameState::replay([4, 0]).unwrap();
    let json = serde_json::to_string(&state).unwrap();
    let back: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
    assert_eq!(back.turn(), Mark::X);
}
