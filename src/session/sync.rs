//! The boundary to the remote session store.
//!
//! A `SessionSync` receives the canonical `SessionRecord` after every local
//! change. Transport, retries, and storage are the implementor's concern.

use serde::{Deserialize, Serialize};

use crate::snapshot::Snapshot;

/// The shared session document: registered players, whose turn it is, and
/// the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Host; plays Light.
    pub player1_id: Option<String>,

    /// Guest; plays Dark. `None` until someone joins.
    pub player2_id: Option<String>,

    /// Player id of the side to move. `None` while that side's player has
    /// not joined.
    pub current_turn: Option<String>,

    pub board_state: Snapshot,
}

/// Outbound channel to the remote session store.
pub trait SessionSync {
    type Error: std::fmt::Display;

    /// Publish the latest record. The local commit stands even on error.
    fn push(&mut self, record: &SessionRecord) -> Result<(), Self::Error>;
}

/// Keeps every pushed record in memory. For embedding and tests.
#[derive(Clone, Debug, Default)]
pub struct MemorySync {
    records: Vec<SessionRecord>,
}

impl MemorySync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every record pushed so far, oldest first.
    pub fn records(&self) -> &[SessionRecord] {
        &self.records
    }

    /// The most recent record.
    pub fn latest(&self) -> Option<&SessionRecord> {
        self.records.last()
    }
}

impl SessionSync for MemorySync {
    type Error = std::convert::Infallible;

    fn push(&mut self, record: &SessionRecord) -> Result<(), Self::Error> {
        self.records.push(record.clone());
        Ok(())
    }
}
