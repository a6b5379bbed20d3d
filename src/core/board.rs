//! The board value.
//!
//! ## Layout
//!
//! A board of `width × height` dots is a `(2·height − 1) × (2·width − 1)`
//! grid stored row-major. A 3×3-dot board looks like this (`+` dots, `.`
//! line slots, `#` box-centres):
//!
//! ```text
//! + . + . +
//! . # . # .
//! + . + . +
//! . # . # .
//! + . + . +
//! ```
//!
//! ## Immutability
//!
//! Cells live in an `im::Vector`, so cloning a board is O(1) and every
//! transition builds a new board that shares structure with the old one.
//! A `Board` handed out by the engine is never modified afterwards; callers
//! may keep old boards around for inspection or replay.

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cell::{Cell, CellKind, Orientation};
use super::coord::Coord;
use super::error::EngineError;

/// Smallest number of dots allowed on either axis.
pub const MIN_DOTS: usize = 2;

/// Largest number of dots allowed on either axis.
pub const MAX_DOTS: usize = 1024;

/// A Dots and Boxes board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vector<Cell>,
}

impl Board {
    /// Create an empty board of `width × height` dots.
    ///
    /// ```
    /// use dots_boxes::core::Board;
    ///
    /// let board = Board::new(3, 2).unwrap();
    /// assert_eq!(board.rows(), 3);
    /// assert_eq!(board.cols(), 5);
    ///
    /// assert!(Board::new(1, 4).is_err());
    /// ```
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        check_dimensions(width, height)?;
        Ok(Self::blank(width, height))
    }

    /// Build an empty board without validating dimensions.
    fn blank(width: usize, height: usize) -> Self {
        let rows = 2 * height - 1;
        let cols = 2 * width - 1;
        let kind_at = |i: usize| CellKind::at(Coord::new(i / cols, i % cols));
        let cells = (0..rows * cols).map(|i| Cell::empty(kind_at(i))).collect();

        Self {
            width,
            height,
            cells,
        }
    }

    /// Width in dots.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in dots.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of grid rows (`2·height − 1`).
    #[must_use]
    pub fn rows(&self) -> usize {
        2 * self.height - 1
    }

    /// Number of grid columns (`2·width − 1`).
    #[must_use]
    pub fn cols(&self) -> usize {
        2 * self.width - 1
    }

    /// Total number of line slots, filled or not.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.width * (self.height - 1) + self.height * (self.width - 1)
    }

    /// Total number of box-centres.
    #[must_use]
    pub fn box_count(&self) -> usize {
        (self.width - 1) * (self.height - 1)
    }

    /// Check if a coordinate lies inside the grid.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows() && coord.col < self.cols()
    }

    /// Get the cell at a coordinate, or `None` if off the board.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        if !self.contains(coord) {
            return None;
        }
        self.cells.get(self.index(coord)).copied()
    }

    /// Iterate over every cell with its coordinate, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let cols = self.cols();
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Coord::new(i / cols, i % cols), *cell))
    }

    /// Iterate over the coordinates of all box-centres, row-major.
    pub fn box_centres(&self) -> impl Iterator<Item = Coord> + '_ {
        let per_row = self.width - 1;
        (0..self.box_count()).map(move |i| {
            let (row, col) = (i / per_row, i % per_row);
            Coord::new(2 * row + 1, 2 * col + 1)
        })
    }

    /// Return a new board with one cell replaced.
    ///
    /// The receiver is left untouched. Callers must pass an in-range
    /// coordinate and a cell of the matching kind.
    pub(crate) fn with_cell(&self, coord: Coord, cell: Cell) -> Self {
        debug_assert!(self.contains(coord));
        debug_assert_eq!(cell.kind(), CellKind::at(coord));
        Self {
            width: self.width,
            height: self.height,
            cells: self.cells.update(self.index(coord), cell),
        }
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row * self.cols() + coord.col
    }
}

impl Default for Board {
    /// The standard 3×3-dot board.
    fn default() -> Self {
        Self::blank(3, 3)
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<(), EngineError> {
    let valid = |n: usize| (MIN_DOTS..=MAX_DOTS).contains(&n);
    if valid(width) && valid(height) {
        Ok(())
    } else {
        Err(EngineError::InvalidDimension { width, height })
    }
}

impl std::fmt::Display for Board {
    /// Render the grid as text: `+` dots, `-`/`|` drawn lines, blanks for
    /// empty slots and `1`/`2` for claimed boxes.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cols = self.cols();
        for (coord, cell) in self.cells() {
            let ch = match cell {
                Cell::Dot => '+',
                Cell::Line { filled: false, .. } | Cell::Box(None) => ' ',
                Cell::Line {
                    orientation: Orientation::Horizontal,
                    ..
                } => '-',
                Cell::Line {
                    orientation: Orientation::Vertical,
                    ..
                } => '|',
                Cell::Box(Some(player)) => char::from(b'0' + player.number()),
            };
            write!(f, "{ch}")?;
            if coord.col + 1 == cols {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

// === Snapshot validation ===

/// Serialized shape of a board, checked before it becomes a `Board`.
#[derive(Deserialize)]
struct RawBoard {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

/// A deserialized board that violates the board invariants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidSnapshot {
    /// Dimensions out of range.
    #[error(transparent)]
    Dimensions(#[from] EngineError),

    /// Wrong number of cells for the dimensions.
    #[error("expected {expected} cells, found {found}")]
    CellCount {
        /// Cells required by the dimensions.
        expected: usize,
        /// Cells present in the snapshot.
        found: usize,
    },

    /// A cell whose kind does not match its grid parity.
    #[error("cell {coord} should be a {expected}, found a {found}")]
    KindMismatch {
        /// Offending position.
        coord: Coord,
        /// Kind implied by parity.
        expected: CellKind,
        /// Kind stored in the snapshot.
        found: CellKind,
    },

    /// A claimed box with at least one undrawn side.
    #[error("box {0} is claimed but not enclosed")]
    UnenclosedClaim(Coord),
}

impl TryFrom<RawBoard> for Board {
    type Error = InvalidSnapshot;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        check_dimensions(raw.width, raw.height)?;

        let board = Board {
            width: raw.width,
            height: raw.height,
            cells: raw.cells.into_iter().collect(),
        };

        let expected = board.rows() * board.cols();
        if board.cells.len() != expected {
            return Err(InvalidSnapshot::CellCount {
                expected,
                found: board.cells.len(),
            });
        }

        for (coord, cell) in board.cells() {
            let kind = CellKind::at(coord);
            if cell.kind() != kind {
                return Err(InvalidSnapshot::KindMismatch {
                    coord,
                    expected: kind,
                    found: cell.kind(),
                });
            }
        }

        for coord in board.box_centres() {
            let claimed = board.get(coord).and_then(Cell::owner).is_some();
            let enclosed = coord
                .box_sides()
                .iter()
                .all(|&side| board.get(side).is_some_and(Cell::is_filled_line));
            if claimed && !enclosed {
                return Err(InvalidSnapshot::UnenclosedClaim(coord));
            }
        }

        Ok(board)
    }
}
