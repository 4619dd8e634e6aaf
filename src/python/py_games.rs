//! Game bindings for Python.

use numpy::PyArray2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{GameConfig, GameState, Side};
use crate::games::checkers::{Checkers, CheckersBuilder};
use crate::rules::RulesEngine;
use crate::snapshot::{apply_remote_snapshot, to_snapshot, Snapshot};

use super::py_core::{cell_pair, parse_side, side_name, status_name, PyMoveOutcome};

/// Python wrapper owning one game's rules engine and state.
#[pyclass(name = "CheckersGame")]
pub struct PyCheckersGame {
    rules: Checkers,
    state: GameState,
}

#[pymethods]
impl PyCheckersGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - first_to_move: "light" or "dark"
    /// - home_columns: Columns of men per side at the start (1-3)
    #[new]
    #[pyo3(signature = (first_to_move = "light", home_columns = 3))]
    fn new(first_to_move: &str, home_columns: u8) -> PyResult<Self> {
        let config = GameConfig::default()
            .with_first_to_move(parse_side(first_to_move)?)
            .try_with_home_columns(home_columns)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        let (rules, state) = CheckersBuilder::new().config(config).build();
        Ok(Self { rules, state })
    }

    /// Attempt a move for `side` between two `(column, row)` pairs.
    fn try_move(&mut self, side: &str, from: (i32, i32), to: (i32, i32)) -> PyResult<PyMoveOutcome> {
        let side = parse_side(side)?;
        Ok(match self.rules.try_move_at(&self.state, side, from, to) {
            Ok((next, outcome)) => {
                self.state = next;
                PyMoveOutcome::from_outcome(&outcome)
            }
            Err(reason) => PyMoveOutcome::from_rejection(&reason),
        })
    }

    /// Legal `((from_column, from_row), (to_column, to_row))` pairs for the
    /// side on turn.
    fn legal_moves(&self) -> Vec<((u8, u8), (u8, u8))> {
        self.rules
            .legal_moves(&self.state)
            .into_iter()
            .map(|mv| (cell_pair(mv.from), cell_pair(mv.to)))
            .collect()
    }

    /// Board codes as an 8×8 `uint8` array indexed `[column, row]`.
    fn snapshot<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let rows: Vec<Vec<u8>> = to_snapshot(&self.state)
            .into_grid()
            .into_iter()
            .map(|column| column.into_iter().map(|code| code as u8).collect())
            .collect();
        PyArray2::from_vec2_bound(py, &rows).map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Replace board and turn from a remote grid. Raises ValueError and
    /// leaves the game untouched if the grid is malformed.
    fn apply_remote_snapshot(&mut self, grid: Vec<Vec<i64>>, turn: &str) -> PyResult<()> {
        let turn = parse_side(turn)?;
        let next = apply_remote_snapshot(&self.state, &Snapshot::from_grid(grid), turn)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        self.state = next;
        Ok(())
    }

    /// Side to move.
    #[getter]
    fn turn(&self) -> &'static str {
        side_name(self.state.turn())
    }

    /// "waiting", "in_progress", or "won".
    #[getter]
    fn status(&self) -> &'static str {
        status_name(self.state.status())
    }

    #[getter]
    fn winner(&self) -> Option<&'static str> {
        self.state.status().winner().map(side_name)
    }

    /// Committed moves so far.
    #[getter]
    fn ply(&self) -> u32 {
        self.state.ply()
    }

    /// Piece count for a side.
    fn count(&self, side: &str) -> PyResult<usize> {
        let side: Side = parse_side(side)?;
        Ok(self.state.board().count(side))
    }

    fn __repr__(&self) -> String {
        format!(
            "CheckersGame(ply={}, turn={}, status={})",
            self.state.ply(),
            side_name(self.state.turn()),
            status_name(self.state.status())
        )
    }
}
