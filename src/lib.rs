//! # checkers-engine
//!
//! A rules engine for two-player checkers on an 8×8 board.
//!
//! ## Design Principles
//!
//! 1. **One Authority**: Every change to the board goes through the rules
//!    engine. Input adapters submit `(from, to)` intents; the engine accepts
//!    or rejects them with a reason.
//!
//! 2. **Value State**: `GameState` is an immutable value. Operations take a
//!    state and return its successor, so a rejected move leaves the caller's
//!    state untouched.
//!
//! 3. **Configuration Over Convention**: First mover, home columns, history
//!    recording, and opponent waiting are set via `GameConfig`.
//!
//! ## Architecture
//!
//! - **Session Orchestration**: `GameSession` binds player ids to sides,
//!   publishes a `SessionRecord` after each local commit, and folds remote
//!   updates back in. `SharedSession` serializes both paths behind a lock.
//!
//! - **Persistent Data Structures**: Move history lives in an `im::Vector`,
//!   so cloning a state is cheap.
//!
//! ## Modules
//!
//! - `core`: Sides, cells, pieces, board, configuration, state
//! - `rules`: RulesEngine trait with turn gating and move enumeration
//! - `games`: The checkers rules implementation
//! - `snapshot`: Integer-grid encoding for remote synchronization
//! - `session`: Player registration and remote sync orchestration
//! - `error`: Rejection reasons and error types

pub mod core;
pub mod error;
pub mod rules;
pub mod games;
pub mod snapshot;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Side, SideMap,
    Cell, BOARD_SIZE,
    Piece, Rank, Board,
    GameConfig,
    MoveRequest, MoveRecord,
    BoardView, GameState, GameStatus,
};

pub use crate::error::{
    BoardError, ConfigError, DestinationFault, IllegalMove, SessionError, SnapshotError,
};

pub use crate::rules::{LegalMove, MoveOutcome, RulesEngine};

pub use crate::games::checkers::{Checkers, CheckersBuilder};

pub use crate::snapshot::{apply_remote_snapshot, to_snapshot, Snapshot};

pub use crate::session::{GameSession, MemorySync, SessionRecord, SessionSync, SharedSession};
