//! Session synchronization boundary.
//!
//! The remote store and its transport are outside this crate. This module
//! defines the record exchanged with it, the `SessionSync` trait it is
//! reached through, and the `GameSession` that owns a game's state on this
//! side of the boundary.

pub mod manager;
pub mod shared;
pub mod sync;

pub use manager::GameSession;
pub use shared::SharedSession;
pub use sync::{MemorySync, SessionRecord, SessionSync};
