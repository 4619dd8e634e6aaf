//! Pieces: a side plus a rank.
//!
//! A piece has no identity beyond the cell it occupies on the `Board`.
//! Promotion is a rank change on the same value, not a replacement.

use serde::{Deserialize, Serialize};

use super::side::Side;

/// Promotion level of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Man,
    King,
}

/// A piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub side: Side,
    pub rank: Rank,
}

impl Piece {
    #[must_use]
    pub const fn man(side: Side) -> Self {
        Self {
            side,
            rank: Rank::Man,
        }
    }

    #[must_use]
    pub const fn king(side: Side) -> Self {
        Self {
            side,
            rank: Rank::King,
        }
    }

    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self.rank, Rank::King)
    }

    /// This piece with its rank raised to King.
    #[must_use]
    pub const fn promoted(self) -> Self {
        Self::king(self.side)
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.rank {
            Rank::Man => write!(f, "{} man", self.side),
            Rank::King => write!(f, "{} king", self.side),
        }
    }
}
