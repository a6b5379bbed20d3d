//! Python bindings for the dots-boxes engine.
//!
//! # Quick Start
//!
//! ```python
//! import dots_boxes as db
//!
//! game = db.Game(width=3, height=3)
//! again = game.play(0, 1)      # False: turn passes
//! print(game.player_to_move)   # PlayerId(2)
//! print(game.board)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::EngineError;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

impl From<EngineError> for PyErr {
    fn from(err: EngineError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// dots_boxes: a Dots and Boxes rules engine.
#[pymodule]
fn dots_boxes(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayerId>()?;
    m.add_class::<PyBoard>()?;
    m.add_class::<PyGame>()?;

    Ok(())
}
