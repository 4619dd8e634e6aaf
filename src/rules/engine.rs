//! Rules engine trait for the game implementation.
//!
//! The implementation defines:
//! - Whether a `(from, to)` is legal for the side on turn
//! - How a legal move transforms the state
//! - When the game is over
//!
//! Turn and status gating, move enumeration, and logging are provided here
//! on top of those three.

use tracing::debug;

use crate::core::{Board, Cell, GameState, GameStatus, MoveRequest, Piece, Side};
use crate::error::IllegalMove;

/// A validated move, ready to apply to the state it was validated against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegalMove {
    pub side: Side,
    pub from: Cell,
    pub to: Cell,

    /// The moving piece as it stood before the move.
    pub piece: Piece,

    /// Cell of the opposing piece this move jumps, if any.
    pub captured: Option<Cell>,

    /// Whether the moving man lands on its promotion column.
    pub promotes: bool,
}

/// Side effects of one committed move. Produced once per call; not stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub side: Side,
    pub from: Cell,
    pub to: Cell,

    /// Cell whose occupant was removed.
    pub captured: Option<Cell>,

    /// The moved piece became a King.
    pub promoted: bool,

    /// Winning side, if this move ended the game.
    pub game_over: Option<Side>,
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `validate`: check everything about the position; turn and status
///   gating is done by `try_move` before it is called
/// - `apply`: must be deterministic and only called with a move that
///   `validate` accepted for the same state
/// - `winner`: return None if both sides still have pieces
pub trait RulesEngine {
    /// Decide whether `from -> to` is legal for `state.turn()`.
    fn validate(&self, state: &GameState, from: Cell, to: Cell) -> Result<LegalMove, IllegalMove>;

    /// Apply a validated move, returning the successor state.
    fn apply(&self, state: &GameState, mv: &LegalMove) -> (GameState, MoveOutcome);

    /// The side that has won on `board`, if any.
    fn winner(&self, board: &Board) -> Option<Side>;

    // === Convenience Methods ===

    /// Reject requests the current status or turn does not allow.
    fn check_turn(&self, state: &GameState, side: Side) -> Result<(), IllegalMove> {
        match state.status() {
            GameStatus::Won(winner) => Err(IllegalMove::GameAlreadyOver { winner }),
            GameStatus::WaitingForOpponent => Err(IllegalMove::WaitingForOpponent),
            GameStatus::InProgress if side != state.turn() => Err(IllegalMove::NotYourTurn {
                expected: state.turn(),
                requested: side,
            }),
            GameStatus::InProgress => Ok(()),
        }
    }

    /// Validate and apply a move request in one step.
    ///
    /// On rejection the caller's state is unchanged and nothing is returned
    /// to replace it.
    fn try_move(
        &self,
        state: &GameState,
        request: MoveRequest,
    ) -> Result<(GameState, MoveOutcome), IllegalMove> {
        let validated = self
            .check_turn(state, request.side)
            .and_then(|()| self.validate(state, request.from, request.to));

        match validated {
            Ok(mv) => {
                let (next, outcome) = self.apply(state, &mv);
                debug!(
                    side = %outcome.side,
                    from = %outcome.from,
                    to = %outcome.to,
                    captured = ?outcome.captured,
                    promoted = outcome.promoted,
                    "move committed"
                );
                Ok((next, outcome))
            }
            Err(reason) => {
                debug!(
                    side = %request.side,
                    from = %request.from,
                    to = %request.to,
                    %reason,
                    "move rejected"
                );
                Err(reason)
            }
        }
    }

    /// Enumerate every legal move for the side on turn.
    ///
    /// Empty when the game is not in progress.
    fn legal_moves(&self, state: &GameState) -> Vec<LegalMove> {
        if state.status() != GameStatus::InProgress {
            return Vec::new();
        }

        let mut moves = Vec::new();
        for from in state.board().pieces_of(state.turn()) {
            for to in Cell::dark_cells().filter(|&to| on_diagonal(from, to)) {
                if let Ok(mv) = self.validate(state, from, to) {
                    moves.push(mv);
                }
            }
        }
        moves
    }
}

fn on_diagonal(from: Cell, to: Cell) -> bool {
    let dc = i16::from(to.column()) - i16::from(from.column());
    let dr = i16::from(to.row()) - i16::from(from.row());
    dc != 0 && dc.abs() == dr.abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(column: u8, row: u8) -> Cell {
        Cell::new(column, row).unwrap()
    }

    #[test]
    fn test_on_diagonal() {
        assert!(on_diagonal(cell(2, 2), cell(6, 6)));
        assert!(on_diagonal(cell(2, 5), cell(4, 3)));
        assert!(!on_diagonal(cell(2, 2), cell(2, 2)));
        assert!(!on_diagonal(cell(2, 2), cell(2, 4)));
        assert!(!on_diagonal(cell(2, 2), cell(5, 4)));
    }
}
