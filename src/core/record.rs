//! Move requests and committed-move records.
//!
//! A `MoveRequest` is what an input adapter submits: a side and two cells.
//! A `MoveRecord` is kept in the game history after the move commits, used
//! for replay and debugging.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::side::Side;

/// A proposed move. Constructed per attempt and discarded after validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRequest {
    pub side: Side,
    pub from: Cell,
    pub to: Cell,
}

impl MoveRequest {
    #[must_use]
    pub const fn new(side: Side, from: Cell, to: Cell) -> Self {
        Self { side, from, to }
    }
}

/// A committed move with its side effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The side that moved.
    pub side: Side,

    pub from: Cell,
    pub to: Cell,

    /// Cell of the piece removed by this move, if it jumped.
    pub captured: Option<Cell>,

    /// Whether the moving man became a king.
    pub promoted: bool,

    /// Committed-move count before this move (0 for the first move).
    pub ply: u32,
}
