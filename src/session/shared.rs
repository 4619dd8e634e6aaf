//! A session handle shared between the input thread and the thread that
//! receives remote updates.
//!
//! The engine does read-modify-write on the session's `GameState` with no
//! atomicity of its own, so every call goes through one exclusive lock.
//! Each operation swaps in a complete successor state, so a poisoned lock
//! still guards a consistent session and is recovered rather than
//! propagated.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::manager::GameSession;
use super::sync::{SessionRecord, SessionSync};
use crate::core::{BoardView, Cell, Side};
use crate::error::SessionError;
use crate::rules::MoveOutcome;

/// Cloneable, lock-serialized access to one `GameSession`.
pub struct SharedSession<S: SessionSync> {
    inner: Arc<Mutex<GameSession<S>>>,
}

impl<S: SessionSync> Clone for SharedSession<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: SessionSync> SharedSession<S> {
    pub fn new(session: GameSession<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, GameSession<S>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn join(&self, player_id: impl Into<String>) -> Result<Side, SessionError> {
        self.lock().join(player_id)
    }

    pub fn try_move(&self, player_id: &str, from: Cell, to: Cell) -> Result<MoveOutcome, SessionError> {
        self.lock().try_move(player_id, from, to)
    }

    /// Move given raw hit-test coordinates.
    pub fn try_move_at(
        &self,
        player_id: &str,
        from: (i32, i32),
        to: (i32, i32),
    ) -> Result<MoveOutcome, SessionError> {
        self.lock().try_move_at(player_id, from, to)
    }

    pub fn on_remote_update(&self, record: &SessionRecord) -> Result<(), SessionError> {
        self.lock().on_remote_update(record)
    }

    pub fn view(&self) -> BoardView {
        self.lock().view()
    }

    /// Run `f` with the session locked.
    pub fn with<R>(&self, f: impl FnOnce(&GameSession<S>) -> R) -> R {
        f(&self.lock())
    }
}
