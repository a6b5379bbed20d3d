//! Game session bindings for Python.

use pyo3::prelude::*;

use crate::core::{GameConfig, PlayerId};
use crate::rules::GameResult;
use crate::session::{random_playout, GameSession};

use super::py_core::{player_from_number, PyBoard, PyPlayerId};

/// Python wrapper for GameSession.
///
/// Tracks whose turn it is from the extra-turn rule.
#[pyclass(name = "Game")]
pub struct PyGame {
    session: GameSession,
}

#[pymethods]
impl PyGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - width: Board width in dots
    /// - height: Board height in dots
    /// - first_player: Opening player (1 or 2)
    #[new]
    #[pyo3(signature = (width = 3, height = 3, first_player = 1))]
    fn new(width: usize, height: usize, first_player: u8) -> PyResult<Self> {
        let config = GameConfig::default()
            .with_width(width)
            .with_height(height)
            .with_first_player(player_from_number(first_player)?);
        Ok(Self {
            session: GameSession::new(&config)?,
        })
    }

    /// Play a whole random game from a seed.
    #[staticmethod]
    #[pyo3(signature = (width = 3, height = 3, seed = 42))]
    fn random(width: usize, height: usize, seed: u64) -> PyResult<Self> {
        let config = GameConfig::default().with_width(width).with_height(height);
        Ok(Self {
            session: random_playout(&config, seed)?,
        })
    }

    /// Draw the line at (row, col) for the player to move.
    ///
    /// Returns True if the same player moves again.
    /// Raises ValueError on an illegal move.
    fn play(&mut self, row: usize, col: usize) -> PyResult<bool> {
        Ok(self.session.play(row, col)?.extra_turn)
    }

    /// The player whose turn it is.
    #[getter]
    fn player_to_move(&self) -> PyPlayerId {
        PyPlayerId(self.session.player_to_move())
    }

    /// Snapshot of the current board.
    #[getter]
    fn board(&self) -> PyBoard {
        PyBoard(self.session.board().clone())
    }

    /// Number of moves played.
    #[getter]
    fn move_count(&self) -> usize {
        self.session.history().len()
    }

    /// Scores as (player 1, player 2).
    fn scores(&self) -> (usize, usize) {
        let s = self.session.scores();
        (s[PlayerId::One], s[PlayerId::Two])
    }

    /// Whether every line is drawn.
    fn is_ended(&self) -> bool {
        self.session.is_ended()
    }

    /// The winner once the game is over; None while running or on a draw.
    fn winner(&self) -> Option<PyPlayerId> {
        self.session
            .result()
            .and_then(|r| r.winner())
            .map(PyPlayerId)
    }

    /// Whether the finished game is a draw.
    fn is_draw(&self) -> bool {
        self.session.result() == Some(GameResult::Draw)
    }

    fn __repr__(&self) -> String {
        let status = match self.session.result() {
            Some(result) => result.to_string(),
            None => "ongoing".to_string(),
        };
        format!(
            "Game(moves={}, to_move={}, status={})",
            self.session.history().len(),
            self.session.player_to_move().number(),
            status
        )
    }
}
