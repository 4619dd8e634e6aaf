//! Error types.
//!
//! Every rejection crosses the engine boundary as a value. Callers treat an
//! `IllegalMove` as a no-op and re-render the last committed state.

use crate::core::{Cell, Side};

/// Why a destination cannot receive a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DestinationFault {
    /// Coordinates outside the 8×8 grid.
    #[error("({column}, {row}) is off the board")]
    OffBoard { column: i32, row: i32 },

    /// A non-playable square.
    #[error("{0} is not a playable square")]
    LightSquare(Cell),

    /// Already holds a piece.
    #[error("{0} is occupied")]
    Occupied(Cell),
}

/// A rejected move request. The state is left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("game is already over: {winner} won")]
    GameAlreadyOver { winner: Side },

    #[error("waiting for the opponent to join")]
    WaitingForOpponent,

    #[error("not your turn: {expected} to move, {requested} requested")]
    NotYourTurn { expected: Side, requested: Side },

    #[error("no piece at {0}")]
    SourceEmpty(Cell),

    #[error("source ({column}, {row}) is off the board")]
    SourceOffBoard { column: i32, row: i32 },

    #[error("piece at {0} belongs to the other side")]
    SourceNotOwned(Cell),

    #[error("invalid destination: {0}")]
    DestinationInvalid(DestinationFault),

    #[error("illegal movement from {from} to {to}")]
    IllegalGeometry { from: Cell, to: Cell },
}

/// A piece placement that breaks the board invariants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("piece on non-playable square {0}")]
    PieceOnLightSquare(Cell),
}

/// Setup options outside their allowed range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("home columns must be 1-{max}, got {got}")]
    HomeColumnsOutOfRange { got: u8, max: u8 },
}

/// A malformed board description. Nothing is applied.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("expected 8 columns, got {0}")]
    WrongColumnCount(usize),

    #[error("column {column} has {len} cells, expected 8")]
    WrongRowCount { column: usize, len: usize },

    #[error("unknown cell code {code} at ({column}, {row})")]
    UnknownCode { column: usize, row: usize, code: i64 },

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Failures at the session boundary.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("player {0} is not registered in this session")]
    UnknownPlayer(String),

    #[error("session already has two players")]
    SessionFull,

    #[error("player {0} is already in this session")]
    AlreadyJoined(String),

    #[error(transparent)]
    Move(#[from] IllegalMove),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_move_messages() {
        let cell = Cell::new(3, 4).unwrap();

        assert_eq!(
            IllegalMove::NotYourTurn {
                expected: Side::Light,
                requested: Side::Dark
            }
            .to_string(),
            "not your turn: Light to move, Dark requested"
        );
        assert_eq!(IllegalMove::SourceEmpty(cell).to_string(), "no piece at (3, 4)");
        assert_eq!(
            IllegalMove::DestinationInvalid(DestinationFault::OffBoard { column: 1, row: 8 })
                .to_string(),
            "invalid destination: (1, 8) is off the board"
        );
    }

    #[test]
    fn test_destination_fault_messages() {
        let cell = Cell::new(3, 3).unwrap();

        assert_eq!(
            DestinationFault::LightSquare(cell).to_string(),
            "(3, 3) is not a playable square"
        );
        assert_eq!(DestinationFault::Occupied(cell).to_string(), "(3, 3) is occupied");
        assert_eq!(
            IllegalMove::DestinationInvalid(DestinationFault::Occupied(cell)).to_string(),
            "invalid destination: (3, 3) is occupied"
        );
    }

    #[test]
    fn test_config_error_message() {
        let err = ConfigError::HomeColumnsOutOfRange { got: 9, max: 3 };
        assert_eq!(err.to_string(), "home columns must be 1-3, got 9");
    }

    #[test]
    fn test_session_error_from() {
        let err: SessionError = IllegalMove::WaitingForOpponent.into();
        assert_eq!(err, SessionError::Move(IllegalMove::WaitingForOpponent));
        assert_eq!(err.to_string(), "waiting for the opponent to join");

        let err: SessionError = SnapshotError::WrongColumnCount(7).into();
        assert_eq!(err.to_string(), "expected 8 columns, got 7");

        let err: SessionError =
            SnapshotError::from(BoardError::PieceOnLightSquare(Cell::new(2, 2).unwrap())).into();
        assert_eq!(err.to_string(), "piece on non-playable square (2, 2)");
    }
}
