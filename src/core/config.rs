//! Game configuration.
//!
//! `GameConfig` controls setup only. Movement rules are fixed; there are no
//! rule-set variants.
//!
//! Every `GameConfig` value is in range: fields are private, the builder
//! methods assert, and deserialization goes through `TryFrom`.

use serde::{Deserialize, Serialize};

use super::cell::BOARD_SIZE;
use super::side::Side;
use crate::error::ConfigError;

/// Most home columns a side may fill while leaving the middle empty.
pub const MAX_HOME_COLUMNS: u8 = BOARD_SIZE / 2 - 1;

/// Setup options for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConfigFields")]
pub struct GameConfig {
    /// Side that moves first (default: Light, the session host).
    first_to_move: Side,

    /// Columns of men each side starts with (default: 3).
    home_columns: u8,

    /// Append a `MoveRecord` to the state on every committed move.
    record_history: bool,

    /// Start in `WaitingForOpponent` until the second player joins.
    await_opponent: bool,
}

/// Unchecked wire form of `GameConfig`.
#[derive(Deserialize)]
struct ConfigFields {
    first_to_move: Side,
    home_columns: u8,
    record_history: bool,
    await_opponent: bool,
}

impl TryFrom<ConfigFields> for GameConfig {
    type Error = ConfigError;

    fn try_from(fields: ConfigFields) -> Result<Self, Self::Error> {
        Ok(Self {
            first_to_move: fields.first_to_move,
            home_columns: check_home_columns(fields.home_columns)?,
            record_history: fields.record_history,
            await_opponent: fields.await_opponent,
        })
    }
}

fn check_home_columns(columns: u8) -> Result<u8, ConfigError> {
    if (1..=MAX_HOME_COLUMNS).contains(&columns) {
        Ok(columns)
    } else {
        Err(ConfigError::HomeColumnsOutOfRange {
            got: columns,
            max: MAX_HOME_COLUMNS,
        })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_to_move: Side::Light,
            home_columns: MAX_HOME_COLUMNS,
            record_history: true,
            await_opponent: false,
        }
    }
}

impl GameConfig {
    // === Accessors ===

    #[must_use]
    pub fn first_to_move(&self) -> Side {
        self.first_to_move
    }

    #[must_use]
    pub fn home_columns(&self) -> u8 {
        self.home_columns
    }

    #[must_use]
    pub fn record_history(&self) -> bool {
        self.record_history
    }

    #[must_use]
    pub fn await_opponent(&self) -> bool {
        self.await_opponent
    }

    // === Builder ===

    /// Set the side that moves first.
    pub fn with_first_to_move(mut self, side: Side) -> Self {
        self.first_to_move = side;
        self
    }

    /// Set the number of home columns (1-3).
    ///
    /// # Panics
    /// If `columns` is out of range. Use `try_with_home_columns` for
    /// untrusted input.
    pub fn with_home_columns(mut self, columns: u8) -> Self {
        assert!(
            (1..=MAX_HOME_COLUMNS).contains(&columns),
            "Home columns must be 1-{MAX_HOME_COLUMNS}"
        );
        self.home_columns = columns;
        self
    }

    /// Set the number of home columns, rejecting values outside 1-3.
    pub fn try_with_home_columns(mut self, columns: u8) -> Result<Self, ConfigError> {
        self.home_columns = check_home_columns(columns)?;
        Ok(self)
    }

    /// Enable or disable move history.
    pub fn with_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// Start the game waiting for a second player.
    pub fn with_await_opponent(mut self, wait: bool) -> Self {
        self.await_opponent = wait;
        self
    }
}
