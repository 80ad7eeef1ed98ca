//! Immutable rules snapshot.
//!
//! `GameState` is everything the rules need to continue a game: the board,
//! the side to move, castling rights, the en-passant target, and the derived
//! check flag and terminal status. It is built by [`GameState::new`] or
//! [`GameState::from_parts`], which derive the check flag and status, and is
//! otherwise only replaced by the output of the move applier. Fields are
//! read-only from outside this module. Selection,
//! drag state and undo stacks belong to the caller (see
//! [`crate::utils::game_history::GameHistory`]).

use crate::game_state::board::{create_initial_board, Board};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::legal_moves_for;
use crate::move_generation::terminal_state::classify_status;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    current_player: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Position>,
    in_check: bool,
    status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard starting position with White to move.
    pub fn new() -> Self {
        Self::from_parts(create_initial_board(), Color::White, CastlingRights::ALL, None)
    }

    /// Assemble a state and derive its check flag and terminal status.
    pub fn from_parts(
        board: Board,
        current_player: Color,
        castling_rights: CastlingRights,
        en_passant_target: Option<Position>,
    ) -> Self {
        Self {
            board,
            current_player,
            castling_rights,
            en_passant_target,
            in_check: is_in_check(&board, current_player),
            status: classify_status(&board, current_player, castling_rights, en_passant_target),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Position> {
        self.en_passant_target
    }

    /// Whether the side to move is in check.
    #[inline]
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    /// Legal destinations of the piece on `from`, if it belongs to the side
    /// to move. Empty otherwise.
    pub fn legal_moves_from(&self, from: Position) -> Vec<Position> {
        match self.board.piece_at(from) {
            Some(piece) if piece.color == self.current_player => legal_moves_for(
                &self.board,
                from,
                piece,
                self.castling_rights,
                self.en_passant_target,
            ),
            _ => Vec::new(),
        }
    }
}

/// What a single applied move did, for history and notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRecord {
    pub piece: Piece,
    pub from: Position,
    pub to: Position,
    /// Piece removed from the board, including a pawn taken en passant.
    pub captured: Option<Piece>,
    pub promotion: Option<PieceKind>,
    pub castle: Option<CastleSide>,
    pub en_passant: bool,
    pub gives_check: bool,
    pub checkmate: bool,
}

impl MoveRecord {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}
