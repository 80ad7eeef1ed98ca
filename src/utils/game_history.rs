//! Caller-side game record with undo.
//!
//! `GameHistory` keeps every snapshot the game has passed through, so undo is
//! a pop that hands back the previous `GameState` verbatim. Move strings and
//! captured pieces are derived from the stored `MoveRecord`s.

use tracing::debug;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::{GameState, MoveRecord};
use crate::game_state::rules_config::RulesConfig;
use crate::move_generation::legal_move_apply::play_move;
use crate::utils::algebraic::move_record_to_notation;

#[derive(Debug, Clone)]
pub struct GameHistory {
    /// Snapshot before each played move; the live state is kept separately.
    snapshots: Vec<GameState>,
    current: GameState,
    records: Vec<MoveRecord>,
    config: RulesConfig,
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl GameHistory {
    /// A new game from the standard starting position.
    pub fn new() -> Self {
        Self::from_state(GameState::new(), RulesConfig::default())
    }

    /// Start recording from an arbitrary position.
    pub fn from_state(start: GameState, config: RulesConfig) -> Self {
        Self {
            snapshots: Vec::new(),
            current: start,
            records: Vec::new(),
            config,
        }
    }

    #[inline]
    pub fn current(&self) -> &GameState {
        &self.current
    }

    /// Play a move on the current position. On error nothing is recorded.
    pub fn play(
        &mut self,
        from: Position,
        to: Position,
        promotion: Option<PieceKind>,
    ) -> ChessResult<MoveRecord> {
        let applied = play_move(&self.current, from, to, promotion, &self.config)?;
        self.snapshots.push(self.current);
        self.current = applied.state;
        self.records.push(applied.record);
        Ok(applied.record)
    }

    /// Step back one ply, returning the record of the move taken back.
    pub fn undo(&mut self) -> ChessResult<MoveRecord> {
        let (Some(previous), Some(record)) = (self.snapshots.pop(), self.records.pop()) else {
            debug!("undo requested with no moves played");
            return Err(ChessError::NothingToUndo);
        };
        self.current = previous;
        debug!(from = %record.from, to = %record.to, "undid move");
        Ok(record)
    }

    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// Move strings in play order.
    pub fn notation(&self) -> Vec<String> {
        self.records.iter().map(move_record_to_notation).collect()
    }

    /// Pieces taken by `color`, in the order they were captured.
    pub fn captured_by(&self, color: Color) -> Vec<Piece> {
        self.records
            .iter()
            .filter(|record| record.piece.color == color)
            .filter_map(|record| record.captured)
            .collect()
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    /// Full-move number, starting at 1 and advancing after Black moves.
    #[inline]
    pub fn move_number(&self) -> usize {
        1 + self.records.len() / 2
    }
}
