//! Moves and move records.
//!
//! A move is nothing more than the grid coordinate of the line being drawn;
//! the player is supplied separately when the move is played. A
//! `MoveRecord` is what a session keeps once a move has been accepted.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::coord::Coord;
use super::player::PlayerId;

/// A line to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The line slot to fill.
    pub line: Coord,
}

impl Move {
    /// Create a move for the line slot at (row, col).
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self {
            line: Coord::new(row, col),
        }
    }

    /// Grid row of the line.
    #[must_use]
    pub const fn row(self) -> usize {
        self.line.row
    }

    /// Grid column of the line.
    #[must_use]
    pub const fn col(self) -> usize {
        self.line.col
    }
}

impl From<Coord> for Move {
    fn from(line: Coord) -> Self {
        Self { line }
    }
}

/// An accepted move with its consequences, for history tracking.
///
/// Used for:
/// - Deriving whose turn it is
/// - Replay/debugging
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who drew the line.
    pub player: PlayerId,

    /// The line drawn.
    pub mv: Move,

    /// Box-centres claimed by this move. A line closes at most two boxes,
    /// but enclosed boxes left unclaimed by a bare `place_line` are swept up
    /// by the next play as well.
    pub closed_boxes: SmallVec<[Coord; 2]>,

    /// Position in the game, starting at 0.
    pub sequence: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(player: PlayerId, mv: Move, closed_boxes: &[Coord], sequence: u32) -> Self {
        Self {
            player,
            mv,
            closed_boxes: SmallVec::from_slice(closed_boxes),
            sequence,
        }
    }

    /// Did this move earn its player another turn?
    #[must_use]
    pub fn earned_extra_turn(&self) -> bool {
        !self.closed_boxes.is_empty()
    }
}
