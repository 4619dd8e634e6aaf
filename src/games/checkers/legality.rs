//! Movement rules for men and kings.
//!
//! Each function answers one geometric question against the board and
//! returns `None` when the shape is illegal. Source and destination
//! preconditions are checked by the caller before these run.

use crate::core::{Board, Cell, Piece, Side};
use crate::error::IllegalMove;

/// The shape of a legal movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Movement {
    /// No piece jumped.
    Quiet,
    /// Jumps the opposing piece on this cell.
    Capture(Cell),
}

impl Movement {
    pub(crate) fn captured(self) -> Option<Cell> {
        match self {
            Movement::Quiet => None,
            Movement::Capture(cell) => Some(cell),
        }
    }
}

/// The piece on `from`, provided it belongs to `side`.
pub(crate) fn source_piece(board: &Board, side: Side, from: Cell) -> Result<Piece, IllegalMove> {
    let piece = board.occupant_at(from).ok_or(IllegalMove::SourceEmpty(from))?;
    if piece.side != side {
        return Err(IllegalMove::SourceNotOwned(from));
    }
    Ok(piece)
}

fn delta(from: Cell, to: Cell) -> (i8, i8) {
    // Both coordinates are < 8, so the differences fit in i8.
    (
        to.column() as i8 - from.column() as i8,
        to.row() as i8 - from.row() as i8,
    )
}

/// A man steps one square diagonally forward, or jumps two squares
/// diagonally forward over an opposing piece.
///
/// Forward is along the column axis; the row may go either way. A man on
/// row 0 or row 7 only has the one diagonal that stays on the board.
pub(crate) fn man_movement(board: &Board, side: Side, from: Cell, to: Cell) -> Option<Movement> {
    let (dc, dr) = delta(from, to);
    let forward = side.forward();

    if dc == forward && dr.abs() == 1 {
        return Some(Movement::Quiet);
    }

    if dc == 2 * forward && dr.abs() == 2 {
        let middle = from.offset(forward, dr / 2)?;
        return match board.occupant_at(middle) {
            Some(jumped) if jumped.side != side => Some(Movement::Capture(middle)),
            _ => None,
        };
    }

    None
}

/// A king moves any distance along a diagonal. At most one piece may lie
/// between source and destination, and it must be an opposing piece; that
/// piece is captured.
pub(crate) fn king_movement(board: &Board, side: Side, from: Cell, to: Cell) -> Option<Movement> {
    let (dc, dr) = delta(from, to);
    if dc == 0 || dc.abs() != dr.abs() {
        return None;
    }

    let (step_c, step_r) = (dc.signum(), dr.signum());
    let mut jumped = None;

    for distance in 1..dc.abs() {
        let cell = from.offset(step_c * distance, step_r * distance)?;
        if let Some(piece) = board.occupant_at(cell) {
            if piece.side == side || jumped.is_some() {
                return None;
            }
            jumped = Some(cell);
        }
    }

    Some(jumped.map_or(Movement::Quiet, Movement::Capture))
}
