//! Game state: board, turn, status, and history.
//!
//! ## GameState
//!
//! The single source of truth for one game. It is an explicit value: the
//! rules engine takes a `&GameState` and returns the successor, and the
//! orchestrating session owns the current instance. Cloning is cheap (the
//! board is a plain array and the history is an `im::Vector`).
//!
//! ## BoardView
//!
//! The read-only projection handed to presentation code.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::config::GameConfig;
use super::record::MoveRecord;
use super::side::Side;

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// The second player has not joined; no moves are accepted.
    WaitingForOpponent,
    /// Moves are accepted from the side on turn.
    InProgress,
    /// Terminal: the opposing side has no pieces left.
    Won(Side),
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Won(_))
    }

    /// The winning side, once the game is over.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            GameStatus::Won(side) => Some(side),
            _ => None,
        }
    }
}

/// Complete state of one game.
///
/// Deserialization validates the board and recomputes the status from it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StateFields")]
pub struct GameState {
    board: Board,
    turn: Side,
    status: GameStatus,

    /// Committed moves so far.
    ply: u32,

    /// Append a record per committed move.
    record_history: bool,

    history: Vector<MoveRecord>,
}

impl GameState {
    /// Create the starting state for `config`.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let status = if config.await_opponent() {
            GameStatus::WaitingForOpponent
        } else {
            GameStatus::InProgress
        };

        let mut state = Self {
            board: Board::initial(config.home_columns()),
            turn: config.first_to_move(),
            status,
            ply: 0,
            record_history: config.record_history(),
            history: Vector::new(),
        };
        state.status = state.status_for_board();
        state
    }

    /// Create an in-progress state from an arbitrary position.
    ///
    /// Used for setting up puzzles and tests. If one side already has no
    /// pieces the status is `Won` for the other.
    #[must_use]
    pub fn from_position(board: Board, turn: Side) -> Self {
        let mut state = Self {
            board,
            turn,
            status: GameStatus::InProgress,
            ply: 0,
            record_history: true,
            history: Vector::new(),
        };
        state.status = state.status_for_board();
        state
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move.
    #[must_use]
    pub fn turn(&self) -> Side {
        self.turn
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Committed moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Read-only projection for rendering.
    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView {
            board: self.board,
            turn: self.turn,
            status: self.status,
        }
    }

    // === Transitions (engine and session only) ===

    /// Leave `WaitingForOpponent` once the second player is present.
    pub(crate) fn open(&mut self) {
        if self.status == GameStatus::WaitingForOpponent {
            self.status = GameStatus::InProgress;
        }
    }

    /// Commit a move: install the new board, pass the turn, and record it.
    pub(crate) fn commit(&mut self, board: Board, record: MoveRecord) {
        self.board = board;
        self.turn = self.turn.opponent();
        self.ply += 1;
        if self.record_history {
            self.history.push_back(record);
        }
    }

    pub(crate) fn finish(&mut self, winner: Side) {
        self.status = GameStatus::Won(winner);
    }

    /// Overwrite board and turn from an external source of truth.
    ///
    /// Status follows the new board: `Won` if exactly one side has pieces,
    /// otherwise a finished game reopens and a waiting game keeps waiting.
    pub(crate) fn replace(&mut self, board: Board, turn: Side) {
        self.board = board;
        self.turn = turn;
        self.status = self.status_for_board();
    }

    fn status_for_board(&self) -> GameStatus {
        let counts = self.board.counts();
        match (counts[Side::Light], counts[Side::Dark]) {
            (0, 0) => self.status_without_winner(),
            (_, 0) => GameStatus::Won(Side::Light),
            (0, _) => GameStatus::Won(Side::Dark),
            _ => self.status_without_winner(),
        }
    }

    fn status_without_winner(&self) -> GameStatus {
        match self.status {
            GameStatus::WaitingForOpponent => GameStatus::WaitingForOpponent,
            GameStatus::InProgress | GameStatus::Won(_) => GameStatus::InProgress,
        }
    }
}

/// Wire form of `GameState`; the board has already been validated.
#[derive(Deserialize)]
struct StateFields {
    board: Board,
    turn: Side,
    status: GameStatus,
    ply: u32,
    record_history: bool,
    history: Vector<MoveRecord>,
}

impl From<StateFields> for GameState {
    fn from(fields: StateFields) -> Self {
        let mut state = Self {
            board: fields.board,
            turn: fields.turn,
            status: fields.status,
            ply: fields.ply,
            record_history: fields.record_history,
            history: fields.history,
        };
        state.status = state.status_for_board();
        state
    }
}

/// What presentation code renders: cell contents, turn, and status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub board: Board,
    pub turn: Side,
    pub status: GameStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, Piece};

    fn cell(column: u8, row: u8) -> Cell {
        Cell::new(column, row).unwrap()
    }

    fn record(side: Side, ply: u32) -> MoveRecord {
        MoveRecord {
            side,
            from: cell(2, 1),
            to: cell(3, 2),
            captured: None,
            promoted: false,
            ply,
        }
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new(&GameConfig::default());

        assert_eq!(state.turn(), Side::Light);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.ply(), 0);
        assert!(state.history().is_empty());
        assert_eq!(state.board(), &Board::initial(3));
    }

    #[test]
    fn test_new_state_waiting() {
        let mut state = GameState::new(&GameConfig::default().with_await_opponent(true));
        assert_eq!(state.status(), GameStatus::WaitingForOpponent);

        state.open();
        assert_eq!(state.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_commit_alternates_turn_and_records() {
        let mut state = GameState::new(&GameConfig::default());
        let board = *state.board();

        state.commit(board, record(Side::Light, 0));
        assert_eq!(state.turn(), Side::Dark);
        assert_eq!(state.ply(), 1);

        state.commit(board, record(Side::Dark, 1));
        assert_eq!(state.turn(), Side::Light);
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.history()[1].side, Side::Dark);
    }

    #[test]
    fn test_commit_without_history() {
        let mut state = GameState::new(&GameConfig::default().with_history(false));
        let board = *state.board();

        state.commit(board, record(Side::Light, 0));
        assert_eq!(state.ply(), 1);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_from_position_detects_winner() {
        let board = Board::with_pieces([(cell(3, 4), Piece::man(Side::Dark))]).unwrap();
        let state = GameState::from_position(board, Side::Light);
        assert_eq!(state.status(), GameStatus::Won(Side::Dark));
    }

    #[test]
    fn test_replace_reopens_finished_game() {
        let lone = Board::with_pieces([(cell(3, 4), Piece::man(Side::Light))]).unwrap();
        let mut state = GameState::from_position(lone, Side::Dark);
        assert!(state.status().is_over());

        state.replace(Board::initial(3), Side::Dark);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.turn(), Side::Dark);
    }

    #[test]
    fn test_new_state_has_both_sides_for_every_home_column_count() {
        for columns in 1..=3 {
            let state = GameState::new(&GameConfig::default().with_home_columns(columns));
            let expected = 4 * usize::from(columns);

            assert_eq!(state.board().count(Side::Light), expected);
            assert_eq!(state.board().count(Side::Dark), expected);
            assert_eq!(state.status(), GameStatus::InProgress);
            for row in 0..8 {
                assert!(state.board().is_empty_at(cell(3, row)));
                assert!(state.board().is_empty_at(cell(4, row)));
            }
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let mut state = GameState::new(&GameConfig::default());
        let board = *state.board();
        state.commit(board, record(Side::Light, 0));

        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_deserialize_recomputes_status() {
        let lone = Board::with_pieces([(cell(3, 4), Piece::man(Side::Light))]).unwrap();
        let mut json = serde_json::to_value(GameState::from_position(lone, Side::Dark)).unwrap();
        json["status"] = serde_json::json!("InProgress");

        let state: GameState = serde_json::from_value(json).unwrap();
        assert_eq!(state.status(), GameStatus::Won(Side::Light));
    }

    #[test]
    fn test_deserialize_rejects_piece_on_light_square() {
        let mut json = serde_json::to_value(GameState::new(&GameConfig::default())).unwrap();
        json["board"][0][0] = serde_json::to_value(Piece::man(Side::Light)).unwrap();

        assert!(serde_json::from_value::<GameState>(json).is_err());
    }

    #[test]
    fn test_status_winner() {
        assert_eq!(GameStatus::Won(Side::Dark).winner(), Some(Side::Dark));
        assert_eq!(GameStatus::InProgress.winner(), None);
        assert!(!GameStatus::WaitingForOpponent.is_over());
    }

    #[test]
    fn test_view() {
        let state = GameState::new(&GameConfig::default());
        let view = state.view();
        assert_eq!(view.board, *state.board());
        assert_eq!(view.turn, Side::Light);
        assert_eq!(view.status, GameStatus::InProgress);
    }
}
