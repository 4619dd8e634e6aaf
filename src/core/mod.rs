//! Core data model: sides, cells, pieces, board, configuration, state.
//!
//! Nothing here decides legality. These are passive values with cheap
//! structural queries; the rules engine in `games::checkers` is the only
//! authority that mutates them.

pub mod side;
pub mod cell;
pub mod piece;
pub mod board;
pub mod config;
pub mod record;
pub mod state;

pub use side::{Side, SideMap};
pub use cell::{Cell, OffBoard, BOARD_SIZE};
pub use piece::{Piece, Rank};
pub use board::{Board, PieceCells};
pub use config::{GameConfig, MAX_HOME_COLUMNS};
pub use record::{MoveRecord, MoveRequest};
pub use state::{BoardView, GameState, GameStatus};
