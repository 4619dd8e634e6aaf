//! Python bindings for the checkers engine.
//!
//! Lets a presentation layer written in Python drive the engine: it turns
//! taps into `try_move` calls and renders `snapshot()`.
//!
//! # Quick Start
//!
//! ```python
//! import checkers_engine as ce
//!
//! game = ce.CheckersGame()
//! outcome = game.try_move("light", (2, 1), (3, 2))
//! assert outcome.applied
//!
//! board = game.snapshot()  # numpy uint8 array, shape (8, 8)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// checkers_engine: a two-player checkers rules engine.
#[pymodule]
fn checkers_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMoveOutcome>()?;
    m.add_class::<PyCheckersGame>()?;

    Ok(())
}
