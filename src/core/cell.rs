//! Cell kinds and cell values.
//!
//! The grid mixes three kinds of cell, decided purely by parity:
//!
//! | row  | col  | kind                       |
//! |------|------|----------------------------|
//! | even | even | dot                        |
//! | even | odd  | horizontal line slot       |
//! | odd  | even | vertical line slot         |
//! | odd  | odd  | box-centre                 |
//!
//! `CellKind` is that static classification; `Cell` is the value stored at a
//! position, which carries the mutable-by-transition part (filled / owner).

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::player::PlayerId;

/// Direction of a line slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Connects two dots on the same row.
    Horizontal,
    /// Connects two dots in the same column.
    Vertical,
}

/// What a grid position is, independent of game progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    /// A dot. Never holds a move.
    Dot,
    /// A line slot between two dots.
    Line(Orientation),
    /// The centre of a box.
    Box,
}

impl CellKind {
    /// Classify a grid position by parity.
    ///
    /// ```
    /// use dots_boxes::core::{CellKind, Coord, Orientation};
    ///
    /// assert_eq!(CellKind::at(Coord::new(0, 0)), CellKind::Dot);
    /// assert_eq!(CellKind::at(Coord::new(0, 1)), CellKind::Line(Orientation::Horizontal));
    /// assert_eq!(CellKind::at(Coord::new(1, 0)), CellKind::Line(Orientation::Vertical));
    /// assert_eq!(CellKind::at(Coord::new(1, 1)), CellKind::Box);
    /// ```
    #[must_use]
    pub const fn at(coord: Coord) -> Self {
        match (coord.row % 2 == 1, coord.col % 2 == 1) {
            (false, false) => CellKind::Dot,
            (false, true) => CellKind::Line(Orientation::Horizontal),
            (true, false) => CellKind::Line(Orientation::Vertical),
            (true, true) => CellKind::Box,
        }
    }

    /// Check if this is a line slot of either orientation.
    #[must_use]
    pub const fn is_line(self) -> bool {
        matches!(self, CellKind::Line(_))
    }
}

impl std::fmt::Display for CellKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellKind::Dot => write!(f, "dot"),
            CellKind::Line(Orientation::Horizontal) => write!(f, "horizontal line"),
            CellKind::Line(Orientation::Vertical) => write!(f, "vertical line"),
            CellKind::Box => write!(f, "box-centre"),
        }
    }
}

/// The value held at one grid position.
///
/// Line slots are not owned by a player; only box-centres record who
/// closed them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// A dot marker.
    Dot,
    /// A line slot and whether it has been drawn.
    Line {
        /// Horizontal or vertical.
        orientation: Orientation,
        /// Drawn yet?
        filled: bool,
    },
    /// A box-centre and the player who closed it, if any.
    Box(Option<PlayerId>),
}

impl Cell {
    /// The initial value for a position of the given kind.
    #[must_use]
    pub const fn empty(kind: CellKind) -> Self {
        match kind {
            CellKind::Dot => Cell::Dot,
            CellKind::Line(orientation) => Cell::Line {
                orientation,
                filled: false,
            },
            CellKind::Box => Cell::Box(None),
        }
    }

    /// The static kind of this cell.
    #[must_use]
    pub const fn kind(self) -> CellKind {
        match self {
            Cell::Dot => CellKind::Dot,
            Cell::Line { orientation, .. } => CellKind::Line(orientation),
            Cell::Box(_) => CellKind::Box,
        }
    }

    /// Check if this is a line slot that has not been drawn.
    #[must_use]
    pub const fn is_empty_line(self) -> bool {
        matches!(self, Cell::Line { filled: false, .. })
    }

    /// Check if this is a drawn line.
    #[must_use]
    pub const fn is_filled_line(self) -> bool {
        matches!(self, Cell::Line { filled: true, .. })
    }

    /// The owner of a box-centre. `None` for unclaimed boxes and non-boxes.
    #[must_use]
    pub const fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Box(owner) => owner,
            _ => None,
        }
    }
}
