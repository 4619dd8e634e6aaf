//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Cell, GameStatus, Side};
use crate::error::IllegalMove;
use crate::rules::MoveOutcome;

/// Parse "light" / "dark" (any case).
pub(crate) fn parse_side(name: &str) -> PyResult<Side> {
    match name.to_ascii_lowercase().as_str() {
        "light" => Ok(Side::Light),
        "dark" => Ok(Side::Dark),
        _ => Err(PyValueError::new_err(format!("unknown side {name:?}"))),
    }
}

pub(crate) fn side_name(side: Side) -> &'static str {
    match side {
        Side::Light => "light",
        Side::Dark => "dark",
    }
}

pub(crate) fn status_name(status: GameStatus) -> &'static str {
    match status {
        GameStatus::WaitingForOpponent => "waiting",
        GameStatus::InProgress => "in_progress",
        GameStatus::Won(_) => "won",
    }
}

pub(crate) fn cell_pair(cell: Cell) -> (u8, u8) {
    (cell.column(), cell.row())
}

/// Result of one `try_move` call.
///
/// Rejections come back as values with `applied == False` and a `reason`;
/// the caller snaps the dragged piece back and re-renders.
#[pyclass(name = "MoveOutcome")]
#[derive(Clone, Debug)]
pub struct PyMoveOutcome {
    #[pyo3(get)]
    pub applied: bool,
    #[pyo3(get)]
    pub reason: Option<String>,
    #[pyo3(get)]
    pub captured: Option<(u8, u8)>,
    #[pyo3(get)]
    pub promoted: bool,
    #[pyo3(get)]
    pub winner: Option<String>,
}

impl PyMoveOutcome {
    pub(crate) fn from_outcome(outcome: &MoveOutcome) -> Self {
        Self {
            applied: true,
            reason: None,
            captured: outcome.captured.map(cell_pair),
            promoted: outcome.promoted,
            winner: outcome.game_over.map(|side| side_name(side).to_string()),
        }
    }

    pub(crate) fn from_rejection(reason: &IllegalMove) -> Self {
        Self {
            applied: false,
            reason: Some(reason.to_string()),
            captured: None,
            promoted: false,
            winner: None,
        }
    }
}

#[pymethods]
impl PyMoveOutcome {
    fn __bool__(&self) -> bool {
        self.applied
    }

    fn __repr__(&self) -> String {
        match &self.reason {
            Some(reason) => format!("MoveOutcome(applied=False, reason={reason:?})"),
            None => format!(
                "MoveOutcome(applied=True, captured={:?}, promoted={}, winner={:?})",
                self.captured, self.promoted, self.winner
            ),
        }
    }
}
