//! Two-player checkers on an 8×8 board.
//!
//! - Light men start on columns 0-2 and advance toward column 7
//! - Dark men start on columns 5-7 and advance toward column 0
//! - Men step one square diagonally forward or jump two over an opponent
//! - Men promote to kings on the far column as part of the same move
//! - Kings move any distance diagonally, jumping at most one opponent
//! - One capture per move; no chained jumps and no forced captures
//! - A side with no pieces left loses

mod game;
mod legality;

pub use game::{Checkers, CheckersBuilder};
