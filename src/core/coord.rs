//! Grid coordinates.
//!
//! A board of `w × h` dots is stored as a `(2h-1) × (2w-1)` grid. Every cell
//! of that grid is addressed by a `Coord`; what the cell *is* (dot, line slot
//! or box-centre) follows from the parity of its row and column alone. See
//! [`CellKind::at`](super::CellKind::at).

use serde::{Deserialize, Serialize};

/// A (row, col) position in the board grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Grid row (0-based, top to bottom).
    pub row: usize,
    /// Grid column (0-based, left to right).
    pub col: usize,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The four line slots around a box-centre, as north, south, west, east.
    ///
    /// Only meaningful for box-centres (odd row, odd col), which always have
    /// all four neighbours inside the grid.
    #[must_use]
    pub const fn box_sides(self) -> [Coord; 4] {
        [
            Coord::new(self.row - 1, self.col),
            Coord::new(self.row + 1, self.col),
            Coord::new(self.row, self.col - 1),
            Coord::new(self.row, self.col + 1),
        ]
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
