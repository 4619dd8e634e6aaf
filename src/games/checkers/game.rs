//! Checkers rules implementation.

use tracing::info;

use super::legality::{king_movement, man_movement, source_piece};
use crate::core::{
    Board, Cell, GameConfig, GameState, MoveRecord, MoveRequest, Rank, Side,
};
use crate::error::{DestinationFault, IllegalMove};
use crate::rules::{LegalMove, MoveOutcome, RulesEngine};

/// The checkers rules engine.
///
/// Holds only configuration; every operation takes the `GameState` it acts
/// on and returns the successor.
#[derive(Clone, Debug, Default)]
pub struct Checkers {
    config: GameConfig,
}

/// Builder for creating a Checkers engine and its starting state.
pub struct CheckersBuilder {
    config: GameConfig,
}

impl Default for CheckersBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
        }
    }
}

impl CheckersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn first_to_move(mut self, side: Side) -> Self {
        self.config = self.config.with_first_to_move(side);
        self
    }

    pub fn home_columns(mut self, columns: u8) -> Self {
        self.config = self.config.with_home_columns(columns);
        self
    }

    pub fn record_history(mut self, record: bool) -> Self {
        self.config = self.config.with_history(record);
        self
    }

    pub fn await_opponent(mut self, wait: bool) -> Self {
        self.config = self.config.with_await_opponent(wait);
        self
    }

    /// Build the engine and initial state.
    pub fn build(self) -> (Checkers, GameState) {
        let state = GameState::new(&self.config);
        (Checkers { config: self.config }, state)
    }
}

impl Checkers {
    /// Get the configuration this engine was built with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// A fresh starting state under this engine's configuration.
    pub fn new_game(&self) -> GameState {
        GameState::new(&self.config)
    }

    /// Try a move given raw coordinates from an input adapter.
    ///
    /// Off-board coordinates are rejected in the same order as on-board
    /// problems: source before destination.
    pub fn try_move_at(
        &self,
        state: &GameState,
        side: Side,
        from: (i32, i32),
        to: (i32, i32),
    ) -> Result<(GameState, MoveOutcome), IllegalMove> {
        self.check_turn(state, side)?;

        let from_cell = Cell::from_coords(from.0, from.1).ok_or(IllegalMove::SourceOffBoard {
            column: from.0,
            row: from.1,
        })?;

        match Cell::from_coords(to.0, to.1) {
            Some(to_cell) => self.try_move(state, MoveRequest::new(side, from_cell, to_cell)),
            None => {
                source_piece(state.board(), state.turn(), from_cell)?;
                Err(IllegalMove::DestinationInvalid(DestinationFault::OffBoard {
                    column: to.0,
                    row: to.1,
                }))
            }
        }
    }
}

impl RulesEngine for Checkers {
    fn validate(&self, state: &GameState, from: Cell, to: Cell) -> Result<LegalMove, IllegalMove> {
        let board = state.board();
        let side = state.turn();

        let piece = source_piece(board, side, from)?;
        if !to.is_dark() {
            return Err(IllegalMove::DestinationInvalid(DestinationFault::LightSquare(to)));
        }
        // Also covers from == to, since the source is occupied.
        if !board.is_empty_at(to) {
            return Err(IllegalMove::DestinationInvalid(DestinationFault::Occupied(to)));
        }

        let movement = match piece.rank {
            Rank::Man => man_movement(board, side, from, to),
            Rank::King => king_movement(board, side, from, to),
        }
        .ok_or(IllegalMove::IllegalGeometry { from, to })?;

        Ok(LegalMove {
            side,
            from,
            to,
            piece,
            captured: movement.captured(),
            promotes: piece.rank == Rank::Man && to.column() == side.promotion_column(),
        })
    }

    fn apply(&self, state: &GameState, mv: &LegalMove) -> (GameState, MoveOutcome) {
        let mut board = *state.board();
        board.remove(mv.from);
        if let Some(captured) = mv.captured {
            board.remove(captured);
        }
        let landed = if mv.promotes { mv.piece.promoted() } else { mv.piece };
        board.place(mv.to, landed);

        let record = MoveRecord {
            side: mv.side,
            from: mv.from,
            to: mv.to,
            captured: mv.captured,
            promoted: mv.promotes,
            ply: state.ply(),
        };

        let mut next = state.clone();
        next.commit(board, record);

        // Piece counts only shrink on a capture, so nothing else can end the game.
        let game_over = mv.captured.and_then(|_| self.winner(next.board()));
        if let Some(winner) = game_over {
            next.finish(winner);
            info!(%winner, ply = next.ply(), "game over");
        }

        let outcome = MoveOutcome {
            side: mv.side,
            from: mv.from,
            to: mv.to,
            captured: mv.captured,
            promoted: mv.promotes,
            game_over,
        };

        (next, outcome)
    }

    fn winner(&self, board: &Board) -> Option<Side> {
        let counts = board.counts();
        match (counts[Side::Light], counts[Side::Dark]) {
            (0, 0) => None,
            (_, 0) => Some(Side::Light),
            (0, _) => Some(Side::Dark),
            _ => None,
        }
    }
}
