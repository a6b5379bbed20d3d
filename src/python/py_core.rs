//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Board, Coord, PlayerId};
use crate::rules;

/// Parse a player number (1 or 2) coming from Python.
pub(crate) fn player_from_number(number: u8) -> PyResult<PlayerId> {
    PlayerId::from_number(number)
        .ok_or_else(|| PyValueError::new_err(format!("player must be 1 or 2, got {number}")))
}

/// Python wrapper for PlayerId.
#[pyclass(name = "PlayerId")]
#[derive(Clone, Debug)]
pub struct PyPlayerId(pub PlayerId);

#[pymethods]
impl PyPlayerId {
    /// Create a player ID from its number (1 or 2).
    #[new]
    fn new(number: u8) -> PyResult<Self> {
        player_from_number(number).map(Self)
    }

    /// The player's number.
    #[getter]
    fn number(&self) -> u8 {
        self.0.number()
    }

    /// The opponent.
    fn other(&self) -> Self {
        Self(self.0.other())
    }

    fn __repr__(&self) -> String {
        format!("PlayerId({})", self.0.number())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.number() as u64
    }
}

/// Read-only Python view of a board.
#[pyclass(name = "Board")]
#[derive(Clone, Debug)]
pub struct PyBoard(pub Board);

#[pymethods]
impl PyBoard {
    /// Create an empty board of `width × height` dots.
    #[new]
    #[pyo3(signature = (width = 3, height = 3))]
    fn new(width: usize, height: usize) -> PyResult<Self> {
        Ok(Self(rules::create_board(width, height)?))
    }

    /// Width in dots.
    #[getter]
    fn width(&self) -> usize {
        self.0.width()
    }

    /// Height in dots.
    #[getter]
    fn height(&self) -> usize {
        self.0.height()
    }

    /// Grid rows.
    #[getter]
    fn rows(&self) -> usize {
        self.0.rows()
    }

    /// Grid columns.
    #[getter]
    fn cols(&self) -> usize {
        self.0.cols()
    }

    /// Whether the line at (row, col) is drawn. False for non-lines.
    fn is_filled(&self, row: usize, col: usize) -> bool {
        self.0
            .get(Coord::new(row, col))
            .is_some_and(|cell| cell.is_filled_line())
    }

    /// Owner of the box at (row, col), or None.
    fn owner(&self, row: usize, col: usize) -> Option<u8> {
        self.0
            .get(Coord::new(row, col))
            .and_then(|cell| cell.owner())
            .map(PlayerId::number)
    }

    /// Lines that can still be drawn, as (row, col) pairs.
    fn legal_moves(&self) -> Vec<(usize, usize)> {
        rules::legal_moves(&self.0)
            .into_iter()
            .map(|mv| (mv.row(), mv.col()))
            .collect()
    }

    /// Number of empty line slots.
    fn spaces_left(&self) -> usize {
        rules::spaces_left(&self.0)
    }

    /// Boxes owned by a player (1 or 2).
    fn score(&self, player: u8) -> PyResult<usize> {
        Ok(rules::player_score(&self.0, player_from_number(player)?))
    }

    /// Whether every line is drawn.
    fn is_ended(&self) -> bool {
        rules::is_ended(&self.0)
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "Board({}x{}, spaces_left={})",
            self.0.width(),
            self.0.height(),
            rules::spaces_left(&self.0)
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
