//! Scenario tests for the rules engine.
//!
//! These walk through concrete positions on small boards: board shape,
//! single and double box closes, and final results.

use dots_boxes::{
    close_boxes, count_cells_matching, create_board, find_newly_closed_boxes, is_ended,
    is_won_for_player, legal_moves, max_boxes, place_line, play, player_score, spaces_left, who_won,
    Board, Cell, CellKind, Coord, EngineError, GameResult, PlayerId,
};

/// Fill every line of a board without claiming anything.
fn fill_all_lines(board: &Board) -> Board {
    let mut board = board.clone();
    for mv in legal_moves(&board) {
        board = place_line(&board, mv.row(), mv.col()).unwrap();
    }
    board
}

/// Test the shape of a 3×3-dot board.
#[test]
fn test_three_by_three_board() {
    let board = create_board(3, 3).unwrap();

    assert_eq!(board.rows(), 5);
    assert_eq!(board.cols(), 5);
    assert_eq!(spaces_left(&board), 12);
    assert_eq!(
        count_cells_matching(&board, |c| c.kind() == CellKind::Box),
        4
    );
    assert_eq!(count_cells_matching(&board, |c| c == Cell::Dot), 9);
    assert_eq!(max_boxes(&board), 4);
}

/// Test non-square boards use (2h-1) rows and (2w-1) columns.
#[test]
fn test_rectangular_board() {
    let board = create_board(5, 2).unwrap();

    assert_eq!(board.rows(), 3);
    assert_eq!(board.cols(), 9);
    assert_eq!(max_boxes(&board), 4);
    assert_eq!(spaces_left(&board), 13);
    assert_eq!(spaces_left(&board), board.line_count());
}

/// Test construction rejects boards under two dots a side.
#[test]
fn test_invalid_dimensions() {
    assert_eq!(
        create_board(1, 2),
        Err(EngineError::InvalidDimension {
            width: 1,
            height: 2,
        })
    );
    assert_eq!(
        create_board(2, 0),
        Err(EngineError::InvalidDimension {
            width: 2,
            height: 0,
        })
    );
}

/// Test four plies by player 1 around the top-left box.
#[test]
fn test_four_sides_close_a_box() {
    let mut board = create_board(3, 3).unwrap();
    let sides = [(0, 1), (1, 0), (2, 1), (1, 2)];

    for (i, &(row, col)) in sides.iter().enumerate() {
        let outcome = play(&board, PlayerId::One, row, col).unwrap();
        let last = i == sides.len() - 1;
        assert_eq!(outcome.extra_turn, last, "ply {i}");
        board = outcome.board;
    }

    assert_eq!(
        board.get(Coord::new(1, 1)),
        Some(Cell::Box(Some(PlayerId::One)))
    );
    assert_eq!(player_score(&board, PlayerId::One), 1);
    assert_eq!(player_score(&board, PlayerId::Two), 0);
    assert_eq!(spaces_left(&board), 8);
}

/// Test a shared wall closing two boxes at once.
#[test]
fn test_one_line_closes_two_boxes() {
    let mut board = create_board(3, 3).unwrap();
    // Top-left and top-right boxes, minus their shared wall at (1, 2).
    for (row, col) in [(0, 1), (0, 3), (1, 0), (1, 4), (2, 1), (2, 3)] {
        board = play(&board, PlayerId::Two, row, col).unwrap().board;
    }

    let placed = place_line(&board, 1, 2).unwrap();
    assert_eq!(
        find_newly_closed_boxes(&placed).as_slice(),
        &[Coord::new(1, 1), Coord::new(1, 3)]
    );

    let outcome = play(&board, PlayerId::One, 1, 2).unwrap();
    assert!(outcome.extra_turn);
    assert_eq!(
        outcome.closed_boxes.as_slice(),
        &[Coord::new(1, 1), Coord::new(1, 3)]
    );
    assert_eq!(player_score(&outcome.board, PlayerId::One), 2);
}

/// Test a claimed box is not reported again.
#[test]
fn test_claimed_boxes_not_rescanned() {
    let board = create_board(2, 2).unwrap();
    let board = fill_all_lines(&board);

    let found = find_newly_closed_boxes(&board);
    assert_eq!(found.len(), 1);
    assert_eq!(find_newly_closed_boxes(&board), found);

    let claimed = close_boxes(&board, PlayerId::Two, &found);
    assert!(find_newly_closed_boxes(&claimed).is_empty());
    assert_eq!(player_score(&claimed, PlayerId::Two), 1);
}

/// Test illegal plies are rejected with the right reason.
#[test]
fn test_illegal_plies() {
    let board = create_board(3, 3).unwrap();
    let board = play(&board, PlayerId::One, 2, 1).unwrap().board;

    for (row, col) in [(0, 0), (2, 2), (1, 1), (3, 3), (2, 1), (9, 9)] {
        match play(&board, PlayerId::Two, row, col) {
            Err(EngineError::IllegalMove { row: r, col: c, .. }) => assert_eq!((r, c), (row, col)),
            other => panic!("({row}, {col}) should be illegal, got {other:?}"),
        }
    }
}

/// Test a 3-1 finish on a full 3×3 board.
#[test]
fn test_three_one_finish() {
    use PlayerId::{One, Two};

    let full = fill_all_lines(&create_board(3, 3).unwrap());
    let centres: Vec<Coord> = full.box_centres().collect();
    let board = close_boxes(&full, One, &centres[..3]);
    let board = close_boxes(&board, Two, &centres[3..]);

    assert!(is_ended(&board));
    assert_eq!(who_won(&board), GameResult::Winner(One));
    assert!(is_won_for_player(&board, One));
}

/// Test a 2-2 finish is a draw.
#[test]
fn test_two_two_draw() {
    use PlayerId::{One, Two};

    let full = fill_all_lines(&create_board(3, 3).unwrap());
    let centres: Vec<Coord> = full.box_centres().collect();
    let board = close_boxes(&full, Two, &centres[..2]);
    let board = close_boxes(&board, One, &centres[2..]);

    assert!(is_ended(&board));
    assert_eq!(who_won(&board), GameResult::Draw);
    assert!(!is_won_for_player(&board, One));
    assert!(!is_won_for_player(&board, Two));
}

/// Test a majority decides the game before the last line.
#[test]
fn test_early_majority() {
    // 4×2 dots: three boxes in a row.
    let mut board = create_board(4, 2).unwrap();
    for (row, col) in [(0, 1), (2, 1), (1, 0), (0, 3), (2, 3)] {
        board = play(&board, PlayerId::Two, row, col).unwrap().board;
    }
    // Closes (1,1); then (1,4) closes (1,3).
    board = play(&board, PlayerId::One, 1, 2).unwrap().board;
    board = play(&board, PlayerId::One, 1, 4).unwrap().board;

    assert!(!is_ended(&board));
    assert_eq!(player_score(&board, PlayerId::One), 2);
    assert!(is_won_for_player(&board, PlayerId::One));
    assert_eq!(who_won(&board), GameResult::Winner(PlayerId::One));
}

/// Test boards from earlier plies are never modified.
#[test]
fn test_old_boards_survive() {
    let empty = create_board(3, 3).unwrap();
    let first = play(&empty, PlayerId::One, 0, 1).unwrap().board;
    let second = play(&first, PlayerId::Two, 1, 0).unwrap().board;

    assert_eq!(spaces_left(&empty), 12);
    assert_eq!(spaces_left(&first), 11);
    assert_eq!(spaces_left(&second), 10);
    assert_eq!(empty, create_board(3, 3).unwrap());
}

/// Test board snapshots survive JSON.
#[test]
fn test_board_json_roundtrip() {
    let board = create_board(3, 3).unwrap();
    let board = fill_all_lines(&board);
    let found = find_newly_closed_boxes(&board);
    let board = close_boxes(&board, PlayerId::One, &found);

    let json = serde_json::to_string(&board).unwrap();
    let restored: Board = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, board);
    assert_eq!(player_score(&restored, PlayerId::One), 4);
}
