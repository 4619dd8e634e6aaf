//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! The two competing players. Light starts on the low columns and advances
//! toward column 7; Dark starts on the high columns and advances toward
//! column 0.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side` for O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::cell::BOARD_SIZE;

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Light,
    Dark,
}

impl Side {
    /// Both sides, Light first.
    pub const ALL: [Side; 2] = [Side::Light, Side::Dark];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Light => Side::Dark,
            Side::Dark => Side::Light,
        }
    }

    /// Column delta of a single forward step for a man of this side.
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Side::Light => 1,
            Side::Dark => -1,
        }
    }

    /// The far column where men of this side promote.
    #[must_use]
    pub const fn promotion_column(self) -> u8 {
        match self {
            Side::Light => BOARD_SIZE - 1,
            Side::Dark => 0,
        }
    }

    /// Storage slot (0 for Light, 1 for Dark).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Light => 0,
            Side::Dark => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Light => write!(f, "Light"),
            Side::Dark => write!(f, "Dark"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use checkers_engine::core::{Side, SideMap};
///
/// let mut counts: SideMap<u32> = SideMap::with_value(12);
/// counts[Side::Dark] -= 1;
///
/// assert_eq!(counts[Side::Light], 12);
/// assert_eq!(counts[Side::Dark], 11);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Light), factory(Side::Dark)],
        }
    }

    /// Create a new SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs, Light first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
