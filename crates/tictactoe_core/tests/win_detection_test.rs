//! Tests for board evaluation over hand-built and reachable boards.

use tictactoe_core::rules::{LINES, check_winner, winning_line};
use tictactoe_core::{Board, Cell, GameState, Mark, MoveResult, Outcome, Position, evaluate};

#[test]
fn test_draw_board() {
    let board: Board = "XOX XOO OXX".parse().unwrap();
    assert_eq!(evaluate(&board), Outcome::Draw);
    assert_eq!(winning_line(&board), None);
}

#[test]
fn test_unreachable_full_board_is_still_evaluated() {
    // Nine O's and no X can never happen in play
    let board = Board::from_cells([Cell::Occupied(Mark::O); 9]);
    assert_eq!(evaluate(&board), Outcome::Won(Mark::O));

    // Checkerboard-ish fill with five O's and no line
    let board: Board = "OXO OXX XOO".parse().unwrap();
    assert_eq!(board.count(Mark::O), 5);
    assert_eq!(evaluate(&board), Outcome::Draw);
}

#[test]
fn test_winning_line_reports_anti_diagonal() {
    let board: Board = "XXO .O. OX.".parse().unwrap();
    let line = winning_line(&board).unwrap();
    assert_eq!(line.mark, Mark::O);
    assert!(line.contains(Position::TopRight));
    assert!(line.contains(Position::Center));
    assert!(line.contains(Position::BottomLeft));
    assert!(!line.contains(Position::TopLeft));
}

/// Walks every reachable position, checking that no board has
/// completed lines for both marks.
fn walk(state: GameState, visited: &mut usize) {
    *visited += 1;

    let winners: Vec<Mark> = LINES
        .iter()
        .filter_map(|line| {
            let first = state.board().get(line[0]);
            match first {
                Cell::Occupied(mark) if line.iter().all(|p| state.board().get(*p) == first) => Some(mark),
                _ => None,
            }
        })
        .collect();
    assert!(
        winners.windows(2).all(|w| w[0] == w[1]),
        "two winners on\n{}",
        state.board()
    );
    assert_eq!(check_winner(state.board()), winners.first().copied());

    for pos in state.valid_moves() {
        match state.place(pos) {
            MoveResult::Accepted(next) => walk(next, visited),
            MoveResult::Rejected { reason, .. } => panic!("valid move rejected: {reason}"),
        }
    }
}

#[test]
fn test_reachable_boards_have_at_most_one_winner() {
    let mut visited = 0;
    walk(GameState::initial(), &mut visited);
    // Nodes in the full tic-tac-toe game tree, root included
    assert_eq!(visited, 549_946);
}
