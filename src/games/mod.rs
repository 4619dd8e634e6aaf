//! Game implementations of `RulesEngine`.

pub mod checkers;
