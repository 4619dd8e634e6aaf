//! Integer-grid board snapshots exchanged with the session synchronizer.
//!
//! ## Encoding
//!
//! One code per cell, outer index column, inner index row:
//!
//! | code | contents   |
//! |------|------------|
//! | 0    | empty      |
//! | 1    | Light man  |
//! | 2    | Dark man   |
//! | 3    | Light king |
//! | 4    | Dark king  |
//!
//! Codes are `i64` because remote stores hand integers back as 64-bit.
//!
//! ## Remote replace
//!
//! `apply_remote_snapshot` overwrites board and turn without move
//! validation; the remote side validated the move. A malformed snapshot is
//! rejected whole and the previous state stays in place.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{Board, Cell, GameState, Piece, Side, BOARD_SIZE};
use crate::error::SnapshotError;

pub const EMPTY: i64 = 0;
pub const LIGHT_MAN: i64 = 1;
pub const DARK_MAN: i64 = 2;
pub const LIGHT_KING: i64 = 3;
pub const DARK_KING: i64 = 4;

const SIZE: usize = BOARD_SIZE as usize;

/// Wire code for a cell's contents.
#[must_use]
pub fn encode_cell(occupant: Option<Piece>) -> i64 {
    match occupant {
        None => EMPTY,
        Some(piece) => match (piece.side, piece.is_king()) {
            (Side::Light, false) => LIGHT_MAN,
            (Side::Dark, false) => DARK_MAN,
            (Side::Light, true) => LIGHT_KING,
            (Side::Dark, true) => DARK_KING,
        },
    }
}

/// Cell contents for a wire code, or `None` for an unknown code.
#[must_use]
pub fn decode_cell(code: i64) -> Option<Option<Piece>> {
    match code {
        EMPTY => Some(None),
        LIGHT_MAN => Some(Some(Piece::man(Side::Light))),
        DARK_MAN => Some(Some(Piece::man(Side::Dark))),
        LIGHT_KING => Some(Some(Piece::king(Side::Light))),
        DARK_KING => Some(Some(Piece::king(Side::Dark))),
        _ => None,
    }
}

/// A board as an integer grid. May be malformed until decoded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    grid: Vec<Vec<i64>>,
}

impl Snapshot {
    /// Wrap a grid received from outside. Not validated until decoded.
    #[must_use]
    pub fn from_grid(grid: Vec<Vec<i64>>) -> Self {
        Self { grid }
    }

    #[must_use]
    pub fn grid(&self) -> &[Vec<i64>] {
        &self.grid
    }

    #[must_use]
    pub fn into_grid(self) -> Vec<Vec<i64>> {
        self.grid
    }

    /// Encode a board.
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        let grid = (0..BOARD_SIZE)
            .map(|column| {
                (0..BOARD_SIZE)
                    .filter_map(|row| Cell::new(column, row))
                    .map(|cell| encode_cell(board.occupant_at(cell)))
                    .collect()
            })
            .collect();
        Self { grid }
    }

    /// Decode into a board, checking dimensions, codes, and that every
    /// piece sits on a playable square.
    pub fn to_board(&self) -> Result<Board, SnapshotError> {
        if self.grid.len() != SIZE {
            return Err(SnapshotError::WrongColumnCount(self.grid.len()));
        }

        let mut pieces = Vec::new();
        for (column, cells) in self.grid.iter().enumerate() {
            if cells.len() != SIZE {
                return Err(SnapshotError::WrongRowCount {
                    column,
                    len: cells.len(),
                });
            }
            for (row, &code) in cells.iter().enumerate() {
                let occupant =
                    decode_cell(code).ok_or(SnapshotError::UnknownCode { column, row, code })?;
                if let Some(piece) = occupant {
                    // Dimensions are checked above, so the cell is in range.
                    if let Some(cell) = Cell::new(column as u8, row as u8) {
                        pieces.push((cell, piece));
                    }
                }
            }
        }

        Ok(Board::with_pieces(pieces)?)
    }
}

impl From<&Board> for Snapshot {
    fn from(board: &Board) -> Self {
        Self::from_board(board)
    }
}

impl TryFrom<&Snapshot> for Board {
    type Error = SnapshotError;

    fn try_from(snapshot: &Snapshot) -> Result<Self, Self::Error> {
        snapshot.to_board()
    }
}

/// Snapshot of the state's board, for pushing to the remote store.
#[must_use]
pub fn to_snapshot(state: &GameState) -> Snapshot {
    Snapshot::from_board(state.board())
}

/// Replace board and turn from a remote snapshot.
///
/// Returns the successor state; on error the caller keeps `state`.
pub fn apply_remote_snapshot(
    state: &GameState,
    snapshot: &Snapshot,
    turn: Side,
) -> Result<GameState, SnapshotError> {
    let board = snapshot.to_board().map_err(|err| {
        warn!(error = %err, "rejected remote snapshot");
        err
    })?;

    let mut next = state.clone();
    next.replace(board, turn);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, GameStatus};
    use crate::error::BoardError;

    fn cell(column: u8, row: u8) -> Cell {
        Cell::new(column, row).unwrap()
    }

    #[test]
    fn test_cell_codes() {
        for code in EMPTY..=DARK_KING {
            let occupant = decode_cell(code).unwrap();
            assert_eq!(encode_cell(occupant), code);
        }
        assert_eq!(decode_cell(5), None);
        assert_eq!(decode_cell(-1), None);
    }

    #[test]
    fn test_initial_snapshot_layout() {
        let snapshot = Snapshot::from_board(&Board::initial(3));
        let grid = snapshot.grid();

        assert_eq!(grid.len(), 8);
        assert_eq!(grid[0], vec![0, 1, 0, 1, 0, 1, 0, 1]);
        assert_eq!(grid[1], vec![1, 0, 1, 0, 1, 0, 1, 0]);
        assert_eq!(grid[3], vec![0; 8]);
        assert_eq!(grid[4], vec![0; 8]);
        assert_eq!(grid[7], vec![2, 0, 2, 0, 2, 0, 2, 0]);
    }

    #[test]
    fn test_wrong_column_count() {
        let snapshot = Snapshot::from_grid(vec![vec![0; 8]; 7]);
        assert_eq!(snapshot.to_board(), Err(SnapshotError::WrongColumnCount(7)));
    }

    #[test]
    fn test_wrong_row_count() {
        let mut grid = vec![vec![0; 8]; 8];
        grid[5].push(0);
        let snapshot = Snapshot::from_grid(grid);
        assert_eq!(
            snapshot.to_board(),
            Err(SnapshotError::WrongRowCount { column: 5, len: 9 })
        );
    }

    #[test]
    fn test_unknown_code() {
        let mut grid = vec![vec![0; 8]; 8];
        grid[2][3] = 9;
        assert_eq!(
            Snapshot::from_grid(grid).to_board(),
            Err(SnapshotError::UnknownCode {
                column: 2,
                row: 3,
                code: 9
            })
        );
    }

    #[test]
    fn test_piece_on_light_square() {
        let mut grid = vec![vec![0; 8]; 8];
        grid[2][2] = LIGHT_MAN;
        assert_eq!(
            Snapshot::from_grid(grid).to_board(),
            Err(SnapshotError::Board(BoardError::PieceOnLightSquare(cell(2, 2))))
        );
    }

    #[test]
    fn test_apply_remote_snapshot() {
        let state = GameState::new(&GameConfig::default());
        let mut grid = Snapshot::from_board(state.board()).into_grid();
        grid[2][1] = EMPTY;
        grid[3][2] = LIGHT_MAN;

        let next = apply_remote_snapshot(&state, &Snapshot::from_grid(grid), Side::Dark).unwrap();

        assert_eq!(next.turn(), Side::Dark);
        assert!(next.board().is_empty_at(cell(2, 1)));
        assert_eq!(next.board().occupant_at(cell(3, 2)), Some(Piece::man(Side::Light)));
        assert_eq!(next.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_apply_remote_snapshot_detects_win() {
        let state = GameState::new(&GameConfig::default());
        let mut grid = vec![vec![EMPTY; 8]; 8];
        grid[4][5] = DARK_KING;

        let next = apply_remote_snapshot(&state, &Snapshot::from_grid(grid), Side::Light).unwrap();
        assert_eq!(next.status(), GameStatus::Won(Side::Dark));
    }

    #[test]
    fn test_json_shape() {
        let board = Board::with_pieces([(cell(0, 1), Piece::king(Side::Light))]).unwrap();
        let json = serde_json::to_string(&Snapshot::from_board(&board)).unwrap();

        assert!(json.starts_with("[[0,3,0,0,0,0,0,0],[0,"));
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_board().unwrap(), board);
    }
}
