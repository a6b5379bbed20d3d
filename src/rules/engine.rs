//! Move legality and board transitions.
//!
//! Every function here is pure: it reads the board it is given and, for
//! transitions, returns a new one. A rejected move returns an error and no
//! board at all, so there is nothing a caller could mistake for a result.
//!
//! A ply is three steps, each exposed on its own:
//!
//! 1. [`place_line`] fills the line slot.
//! 2. [`find_newly_closed_boxes`] lists the unclaimed boxes that are now
//!    enclosed.
//! 3. [`close_boxes`] writes the player into those box-centres.
//!
//! [`play`] runs all three and reports whether the player moves again.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{Board, Cell, CellKind, Coord, EngineError, IllegalMoveReason, Move, PlayerId};

/// Result of a legal ply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    /// The board after the line was drawn and any boxes claimed.
    pub board: Board,

    /// Box-centres closed by this ply, row-major.
    pub closed_boxes: SmallVec<[Coord; 2]>,

    /// True when at least one box was closed: the same player moves again.
    pub extra_turn: bool,
}

/// Create an empty board of `width × height` dots.
pub fn create_board(width: usize, height: usize) -> Result<Board, EngineError> {
    Board::new(width, height)
}

/// Play one line for `player`.
///
/// On success returns the new board with the line drawn and every newly
/// enclosed box claimed by `player`, plus the extra-turn signal. Fails with
/// `IllegalMove` if (row, col) is off the board, is not a line slot, or is
/// already drawn.
///
/// ```
/// use dots_boxes::core::PlayerId;
/// use dots_boxes::rules::{create_board, play};
///
/// let board = create_board(2, 2).unwrap();
/// let outcome = play(&board, PlayerId::One, 0, 1).unwrap();
/// assert!(!outcome.extra_turn);
///
/// // The original board is untouched.
/// assert!(play(&board, PlayerId::Two, 0, 1).is_ok());
/// assert!(play(&outcome.board, PlayerId::Two, 0, 1).is_err());
/// ```
pub fn play(
    board: &Board,
    player: PlayerId,
    row: usize,
    col: usize,
) -> Result<PlayOutcome, EngineError> {
    let placed = place_line(board, row, col)?;
    let closed_boxes = find_newly_closed_boxes(&placed);
    let board = close_boxes(&placed, player, &closed_boxes);
    let extra_turn = !closed_boxes.is_empty();

    debug!(%player, row, col, closed = closed_boxes.len(), extra_turn, "line played");

    Ok(PlayOutcome {
        board,
        closed_boxes,
        extra_turn,
    })
}

/// Draw the line at (row, col) without claiming any boxes.
pub fn place_line(board: &Board, row: usize, col: usize) -> Result<Board, EngineError> {
    let coord = Coord::new(row, col);
    let illegal = |reason: IllegalMoveReason| {
        trace!(row, col, %reason, "move rejected");
        EngineError::IllegalMove { row, col, reason }
    };

    match board.get(coord) {
        None => Err(illegal(IllegalMoveReason::OutOfRange)),
        Some(Cell::Line {
            orientation,
            filled: false,
        }) => Ok(board.with_cell(
            coord,
            Cell::Line {
                orientation,
                filled: true,
            },
        )),
        Some(Cell::Line { filled: true, .. }) => Err(illegal(IllegalMoveReason::AlreadyFilled)),
        Some(cell) => Err(illegal(IllegalMoveReason::NotALine(cell.kind()))),
    }
}

/// List every unclaimed box-centre whose four sides are all drawn.
///
/// Claimed boxes are never reported, so calling this twice on the same
/// board gives the same answer, and calling it after [`close_boxes`] gives
/// an empty one.
#[must_use]
pub fn find_newly_closed_boxes(board: &Board) -> SmallVec<[Coord; 2]> {
    let closed: SmallVec<[Coord; 2]> = board
        .box_centres()
        .filter(|&centre| board.get(centre) == Some(Cell::Box(None)))
        .filter(|&centre| is_enclosed(board, centre))
        .collect();

    trace!(found = closed.len(), "scanned for closed boxes");
    closed
}

/// Claim the given box-centres for `player`.
///
/// Coordinates that are not unclaimed, fully enclosed box-centres are
/// skipped: claims never move between players and an open box can't be
/// owned.
#[must_use]
pub fn close_boxes(board: &Board, player: PlayerId, boxes: &[Coord]) -> Board {
    boxes.iter().fold(board.clone(), |acc, &centre| {
        if acc.get(centre) == Some(Cell::Box(None)) && is_enclosed(&acc, centre) {
            debug!(%player, %centre, "box closed");
            acc.with_cell(centre, Cell::Box(Some(player)))
        } else {
            acc
        }
    })
}

/// All lines that can still be drawn, row-major.
#[must_use]
pub fn legal_moves(board: &Board) -> Vec<Move> {
    board
        .cells()
        .filter(|(_, cell)| cell.is_empty_line())
        .map(|(coord, _)| Move::from(coord))
        .collect()
}

/// Check if all four sides of a box-centre are drawn.
fn is_enclosed(board: &Board, centre: Coord) -> bool {
    CellKind::at(centre) == CellKind::Box
        && centre
            .box_sides()
            .iter()
            .all(|&side| board.get(side).is_some_and(Cell::is_filled_line))
}
