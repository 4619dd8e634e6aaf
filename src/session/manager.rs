//! GameSession: one game between two registered players.
//!
//! The session owns the single `GameState` for its game and the rules
//! engine that advances it. Players are addressed by opaque id strings;
//! the host plays Light and the guest who joins plays Dark.
//!
//! ## Flow
//! - `create`: host registers, the game waits for an opponent
//! - `join`: guest registers, the game opens
//! - `try_move`: local move by a player id, pushed on success
//! - `on_remote_update`: record from the store replaces board and turn

use tracing::{info, warn};

use super::sync::{SessionRecord, SessionSync};
use crate::core::{BoardView, Cell, GameConfig, GameState, MoveRequest, Side, SideMap};
use crate::error::SessionError;
use crate::games::checkers::{Checkers, CheckersBuilder};
use crate::rules::{LegalMove, MoveOutcome, RulesEngine};
use crate::snapshot::{apply_remote_snapshot, to_snapshot};

/// A game session bound to a synchronizer.
pub struct GameSession<S: SessionSync> {
    game_id: String,
    rules: Checkers,
    state: GameState,
    players: SideMap<Option<String>>,
    sync: S,
}

impl<S: SessionSync> GameSession<S> {
    /// Create a session hosted by `host_id`, who plays Light.
    ///
    /// The game waits for an opponent regardless of `config.await_opponent`.
    /// The initial record is pushed immediately.
    pub fn create(
        game_id: impl Into<String>,
        host_id: impl Into<String>,
        config: GameConfig,
        sync: S,
    ) -> Self {
        let (rules, state) = CheckersBuilder::new()
            .config(config.with_await_opponent(true))
            .build();

        let mut players = SideMap::default();
        players[Side::Light] = Some(host_id.into());

        let mut session = Self {
            game_id: game_id.into(),
            rules,
            state,
            players,
            sync,
        };
        info!(game_id = %session.game_id, host = ?session.players[Side::Light], "session created");
        session.publish();
        session
    }

    // === Accessors ===

    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    pub fn rules(&self) -> &Checkers {
        &self.rules
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn view(&self) -> BoardView {
        self.state.view()
    }

    pub fn sync(&self) -> &S {
        &self.sync
    }

    pub fn sync_mut(&mut self) -> &mut S {
        &mut self.sync
    }

    /// Player id registered for `side`.
    pub fn player_id(&self, side: Side) -> Option<&str> {
        self.players[side].as_deref()
    }

    /// Player id of the side to move, if that player has joined.
    pub fn current_turn_player(&self) -> Option<&str> {
        self.player_id(self.state.turn())
    }

    /// The side a registered player controls.
    pub fn side_of(&self, player_id: &str) -> Result<Side, SessionError> {
        side_in(&self.players, player_id)
    }

    /// Legal moves for the side on turn.
    pub fn legal_moves(&self) -> Vec<LegalMove> {
        self.rules.legal_moves(&self.state)
    }

    /// The record describing the current state.
    pub fn record(&self) -> SessionRecord {
        SessionRecord {
            player1_id: self.players[Side::Light].clone(),
            player2_id: self.players[Side::Dark].clone(),
            current_turn: self.current_turn_player().map(str::to_string),
            board_state: to_snapshot(&self.state),
        }
    }

    // === Operations ===

    /// Register the guest as Dark and open the game.
    pub fn join(&mut self, player_id: impl Into<String>) -> Result<Side, SessionError> {
        let player_id = player_id.into();
        if self.players.iter().any(|(_, id)| id.as_deref() == Some(player_id.as_str())) {
            return Err(SessionError::AlreadyJoined(player_id));
        }
        if self.players[Side::Dark].is_some() {
            return Err(SessionError::SessionFull);
        }

        info!(game_id = %self.game_id, guest = %player_id, "player joined");
        self.players[Side::Dark] = Some(player_id);
        self.state.open();
        self.publish();
        Ok(Side::Dark)
    }

    /// Move on behalf of `player_id`. On success the new state is pushed.
    pub fn try_move(
        &mut self,
        player_id: &str,
        from: Cell,
        to: Cell,
    ) -> Result<MoveOutcome, SessionError> {
        let side = self.side_of(player_id)?;
        let (next, outcome) = self
            .rules
            .try_move(&self.state, MoveRequest::new(side, from, to))?;
        self.commit(next);
        Ok(outcome)
    }

    /// Move on behalf of `player_id` given raw hit-test coordinates.
    pub fn try_move_at(
        &mut self,
        player_id: &str,
        from: (i32, i32),
        to: (i32, i32),
    ) -> Result<MoveOutcome, SessionError> {
        let side = self.side_of(player_id)?;
        let (next, outcome) = self.rules.try_move_at(&self.state, side, from, to)?;
        self.commit(next);
        Ok(outcome)
    }

    /// Apply a record received from the remote store.
    ///
    /// Newly seen player ids are registered (a guest who joined elsewhere).
    /// The turn id must name a registered player. Nothing changes unless
    /// the whole record is valid.
    pub fn on_remote_update(&mut self, record: &SessionRecord) -> Result<(), SessionError> {
        let mut players = self.players.clone();
        for (side, incoming) in [
            (Side::Light, &record.player1_id),
            (Side::Dark, &record.player2_id),
        ] {
            let Some(id) = incoming else { continue };
            if players[side].is_none() {
                players[side] = Some(id.clone());
            } else if players[side].as_deref() != Some(id.as_str()) {
                warn!(game_id = %self.game_id, %side, remote = %id, "ignoring player change");
            }
        }

        let turn = match &record.current_turn {
            Some(id) => side_in(&players, id)?,
            None => self.state.turn(),
        };

        let mut next = apply_remote_snapshot(&self.state, &record.board_state, turn)?;
        if players[Side::Dark].is_some() {
            next.open();
        }

        self.players = players;
        self.state = next;
        Ok(())
    }

    fn commit(&mut self, next: GameState) {
        self.state = next;
        self.publish();
    }

    fn publish(&mut self) {
        let record = self.record();
        if let Err(err) = self.sync.push(&record) {
            warn!(game_id = %self.game_id, error = %err, "failed to push session record");
        }
    }
}

fn side_in(players: &SideMap<Option<String>>, player_id: &str) -> Result<Side, SessionError> {
    players
        .iter()
        .find(|(_, id)| id.as_deref() == Some(player_id))
        .map(|(side, _)| side)
        .ok_or_else(|| SessionError::UnknownPlayer(player_id.to_string()))
}
