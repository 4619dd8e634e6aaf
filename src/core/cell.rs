//! Board coordinates.
//!
//! A `Cell` is a `(column, row)` pair, both in `0..8`. The column is the
//! axis men advance along; it is also the outer index of the snapshot grid.
//!
//! ```
//! use checkers_engine::core::Cell;
//!
//! let cell = Cell::new(2, 3).unwrap();
//! assert!(cell.is_dark());
//! assert_eq!(cell.offset(1, -1), Cell::new(3, 2));
//! assert_eq!(Cell::new(8, 0), None);
//! ```

use serde::{Deserialize, Serialize};

/// Width and height of the board.
pub const BOARD_SIZE: u8 = 8;

/// A square on the board. Always in range.
///
/// Serialized as a `[column, row]` pair; out-of-range pairs fail to
/// deserialize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Cell {
    column: u8,
    row: u8,
}

impl Cell {
    /// Create a cell, or `None` if either coordinate is off the board.
    #[must_use]
    pub const fn new(column: u8, row: u8) -> Option<Self> {
        if column < BOARD_SIZE && row < BOARD_SIZE {
            Some(Self { column, row })
        } else {
            None
        }
    }

    /// Create a cell from signed coordinates, as produced by hit-testing.
    #[must_use]
    pub fn from_coords(column: i32, row: i32) -> Option<Self> {
        let column = u8::try_from(column).ok()?;
        let row = u8::try_from(row).ok()?;
        Self::new(column, row)
    }

    #[must_use]
    pub const fn column(self) -> u8 {
        self.column
    }

    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Playable squares have odd `column + row`.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        (self.column + self.row) % 2 == 1
    }

    /// The cell `dc` columns and `dr` rows away, if it is on the board.
    #[must_use]
    pub fn offset(self, dc: i8, dr: i8) -> Option<Self> {
        Self::from_coords(
            i32::from(self.column) + i32::from(dc),
            i32::from(self.row) + i32::from(dr),
        )
    }

    /// Iterate over all 64 cells, column-major.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..BOARD_SIZE).flat_map(|column| (0..BOARD_SIZE).map(move |row| Cell { column, row }))
    }

    /// Iterate over the 32 playable cells, column-major.
    pub fn dark_cells() -> impl Iterator<Item = Cell> {
        Self::all().filter(|cell| cell.is_dark())
    }
}

/// Coordinates that do not name a square on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("({column}, {row}) is off the board")]
pub struct OffBoard {
    pub column: u8,
    pub row: u8,
}

impl TryFrom<(u8, u8)> for Cell {
    type Error = OffBoard;

    fn try_from((column, row): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(column, row).ok_or(OffBoard { column, row })
    }
}

impl From<Cell> for (u8, u8) {
    fn from(cell: Cell) -> Self {
        (cell.column, cell.row)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}
