//! The 8×8 board: canonical piece placement.
//!
//! The board is a passive data holder. It answers structural queries
//! (occupant, pieces per side) but decides nothing about legality; all
//! mutation goes through the rules engine.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::{Cell, BOARD_SIZE};
use super::piece::Piece;
use super::side::{Side, SideMap};
use crate::error::BoardError;

const SIZE: usize = BOARD_SIZE as usize;

/// Raw `[column][row]` slots, as serialized.
type Grid = [[Option<Piece>; SIZE]; SIZE];

/// Cells held by one side. Twelve covers a full starting army inline.
pub type PieceCells = SmallVec<[Cell; 12]>;

/// Piece placement indexed `[column][row]`.
///
/// Serialized as the bare grid. Deserializing rejects pieces on light
/// squares, like `with_pieces`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Grid", into = "Grid")]
pub struct Board {
    grid: Grid,
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Starting layout: Light men fill the first `home_columns` columns,
    /// Dark men the last `home_columns`, on playable squares only.
    #[must_use]
    pub fn initial(home_columns: u8) -> Self {
        let mut board = Self::empty();
        for cell in Cell::dark_cells() {
            if cell.column() < home_columns {
                board.place(cell, Piece::man(Side::Light));
            } else if cell.column() >= BOARD_SIZE - home_columns {
                board.place(cell, Piece::man(Side::Dark));
            }
        }
        board
    }

    /// Build a board from explicit placements.
    ///
    /// Fails if any piece sits on a light square. Later placements on the
    /// same cell replace earlier ones.
    pub fn with_pieces(
        pieces: impl IntoIterator<Item = (Cell, Piece)>,
    ) -> Result<Self, BoardError> {
        let mut board = Self::empty();
        for (cell, piece) in pieces {
            if !cell.is_dark() {
                return Err(BoardError::PieceOnLightSquare(cell));
            }
            board.place(cell, piece);
        }
        Ok(board)
    }

    /// The piece on `cell`, if any.
    #[must_use]
    pub fn occupant_at(&self, cell: Cell) -> Option<Piece> {
        self.grid[usize::from(cell.column())][usize::from(cell.row())]
    }

    #[must_use]
    pub fn is_empty_at(&self, cell: Cell) -> bool {
        self.occupant_at(cell).is_none()
    }

    /// Iterate over occupied cells, column-major.
    pub fn occupied(&self) -> impl Iterator<Item = (Cell, Piece)> + '_ {
        Cell::all().filter_map(|cell| self.occupant_at(cell).map(|piece| (cell, piece)))
    }

    /// Cells holding a piece of `side`.
    #[must_use]
    pub fn pieces_of(&self, side: Side) -> PieceCells {
        self.occupied()
            .filter(|(_, piece)| piece.side == side)
            .map(|(cell, _)| cell)
            .collect()
    }

    /// Number of pieces `side` has on the board.
    #[must_use]
    pub fn count(&self, side: Side) -> usize {
        self.occupied().filter(|(_, piece)| piece.side == side).count()
    }

    /// Piece counts for both sides.
    #[must_use]
    pub fn counts(&self) -> SideMap<usize> {
        let mut counts = SideMap::with_value(0);
        for (_, piece) in self.occupied() {
            counts[piece.side] += 1;
        }
        counts
    }

    // === Mutation (engine only) ===

    /// Put `piece` on `cell`, returning whatever was there.
    pub(crate) fn place(&mut self, cell: Cell, piece: Piece) -> Option<Piece> {
        self.slot_mut(cell).replace(piece)
    }

    /// Clear `cell`, returning its occupant.
    pub(crate) fn remove(&mut self, cell: Cell) -> Option<Piece> {
        self.slot_mut(cell).take()
    }

    fn slot_mut(&mut self, cell: Cell) -> &mut Option<Piece> {
        &mut self.grid[usize::from(cell.column())][usize::from(cell.row())]
    }
}

impl TryFrom<Grid> for Board {
    type Error = BoardError;

    fn try_from(grid: Grid) -> Result<Self, Self::Error> {
        Self::with_pieces(Cell::all().filter_map(|cell| {
            grid[usize::from(cell.column())][usize::from(cell.row())].map(|piece| (cell, piece))
        }))
    }
}

impl From<Board> for Grid {
    fn from(board: Board) -> Self {
        board.grid
    }
}

impl std::fmt::Display for Board {
    /// One line per column; `l`/`d` for men, `L`/`D` for kings.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for column in &self.grid {
            for slot in column {
                let c = match slot {
                    None => '.',
                    Some(piece) => match (piece.side, piece.is_king()) {
                        (Side::Light, false) => 'l',
                        (Side::Light, true) => 'L',
                        (Side::Dark, false) => 'd',
                        (Side::Dark, true) => 'D',
                    },
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(column: u8, row: u8) -> Cell {
        Cell::new(column, row).unwrap()
    }

    #[test]
    fn test_initial_layout() {
        let board = Board::initial(3);

        assert_eq!(board.count(Side::Light), 12);
        assert_eq!(board.count(Side::Dark), 12);
        assert_eq!(board.occupant_at(cell(0, 1)), Some(Piece::man(Side::Light)));
        assert_eq!(board.occupant_at(cell(0, 0)), None);
        assert_eq!(board.occupant_at(cell(7, 0)), Some(Piece::man(Side::Dark)));
        assert_eq!(board.occupant_at(cell(5, 0)), Some(Piece::man(Side::Dark)));

        for row in 0..8 {
            assert!(board.is_empty_at(cell(3, row)));
            assert!(board.is_empty_at(cell(4, row)));
        }
    }

    #[test]
    fn test_initial_pieces_on_dark_squares_only() {
        let board = Board::initial(3);
        assert!(board.occupied().all(|(cell, _)| cell.is_dark()));
    }

    #[test]
    fn test_initial_single_home_column() {
        let board = Board::initial(1);
        assert_eq!(board.counts(), SideMap::with_value(4));
    }

    #[test]
    fn test_with_pieces_rejects_light_square() {
        let err = Board::with_pieces([(cell(0, 0), Piece::man(Side::Light))]).unwrap_err();
        assert_eq!(err, BoardError::PieceOnLightSquare(cell(0, 0)));
    }

    #[test]
    fn test_serde_round_trip() {
        let board = Board::initial(3);
        let json = serde_json::to_string(&board).unwrap();
        assert!(json.starts_with("[[null,{"));

        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn test_deserialize_rejects_light_square() {
        let mut json = serde_json::to_value(Board::empty()).unwrap();
        json[0][0] = serde_json::to_value(Piece::man(Side::Light)).unwrap();

        let err = serde_json::from_value::<Board>(json).unwrap_err();
        assert!(err.to_string().contains("piece on non-playable square (0, 0)"));
    }

    #[test]
    fn test_pieces_of() {
        let board = Board::with_pieces([
            (cell(3, 4), Piece::man(Side::Light)),
            (cell(4, 5), Piece::king(Side::Dark)),
            (cell(2, 1), Piece::king(Side::Light)),
        ])
        .unwrap();

        let light = board.pieces_of(Side::Light);
        assert_eq!(light.as_slice(), &[cell(2, 1), cell(3, 4)]);
        assert_eq!(board.pieces_of(Side::Dark).as_slice(), &[cell(4, 5)]);
    }

    #[test]
    fn test_place_and_remove() {
        let mut board = Board::empty();
        assert_eq!(board.place(cell(2, 3), Piece::man(Side::Dark)), None);
        assert_eq!(board.count(Side::Dark), 1);
        assert_eq!(board.remove(cell(2, 3)), Some(Piece::man(Side::Dark)));
        assert_eq!(board.remove(cell(2, 3)), None);
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn test_display() {
        let board = Board::with_pieces([(cell(0, 1), Piece::king(Side::Light))]).unwrap();
        let text = board.to_string();
        assert_eq!(text.lines().next(), Some(".L......"));
        assert_eq!(text.lines().count(), 8);
    }
}
