//! Rules engine trait for the game implementation.
//!
//! `RulesEngine` defines:
//! - Move legality for the side on turn
//! - How a legal move produces the successor state
//! - Win conditions
//!
//! Callers hold the `GameState` and pass it in; the engine never stores it.

pub mod engine;

pub use engine::{LegalMove, MoveOutcome, RulesEngine};
