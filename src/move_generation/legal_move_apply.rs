//! Move applier: the state transition from one `GameState` to the next.
//!
//! `play_move` validates the request against the legal move set, then builds
//! the next board (capture, promotion, castling rook, en-passant removal),
//! updates castling rights and the en-passant target, and derives the next
//! player's check flag and terminal status. The input state is borrowed, so
//! a rejected request leaves the caller's snapshot untouched.

use tracing::{debug, trace};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{castling_lane, KING_HOME_COL};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::{GameState, MoveRecord};
use crate::game_state::rules_config::RulesConfig;
use crate::move_generation::legal_move_generator::legal_moves_for;
use crate::move_generation::pseudo_moves_pawn::en_passant_victim;

/// The next state together with the record of the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub state: GameState,
    pub record: MoveRecord,
}

/// Apply a move with the default rules configuration.
pub fn apply_move(
    game_state: &GameState,
    from: Position,
    to: Position,
    promotion: Option<PieceKind>,
) -> ChessResult<GameState> {
    play_move(game_state, from, to, promotion, &RulesConfig::default()).map(|applied| applied.state)
}

pub fn play_move(
    game_state: &GameState,
    from: Position,
    to: Position,
    promotion: Option<PieceKind>,
    config: &RulesConfig,
) -> ChessResult<AppliedMove> {
    let Some(piece) = game_state.board().piece_at(from) else {
        debug!(%from, %to, "rejected move: origin square is empty");
        return Err(ChessError::NoPieceAtSquare(from));
    };

    if piece.color != game_state.current_player() {
        debug!(%from, %to, color = %piece.color, "rejected move: not this side's turn");
        return Err(ChessError::WrongSideToMove {
            square: from,
            color: piece.color,
        });
    }

    let legal = legal_moves_for(
        game_state.board(),
        from,
        piece,
        game_state.castling_rights(),
        game_state.en_passant_target(),
    );
    if !legal.contains(&to) {
        debug!(%from, %to, "rejected move: destination is not legal");
        return Err(ChessError::IllegalMove { from, to });
    }

    transition(game_state, from, to, promotion, config)
}

/// Build the next state without re-checking legality. `from` must hold a
/// piece of the side to move and `to` must be one of its legal destinations.
pub(crate) fn transition(
    game_state: &GameState,
    from: Position,
    to: Position,
    promotion: Option<PieceKind>,
    config: &RulesConfig,
) -> ChessResult<AppliedMove> {
    let board = game_state.board();
    let piece = board
        .piece_at(from)
        .ok_or(ChessError::NoPieceAtSquare(from))?;
    let mover = piece.color;

    let promotion = if is_promotion(piece, to) {
        let kind = promotion.unwrap_or(config.default_promotion);
        if !kind.is_promotion_choice() {
            return Err(ChessError::InvalidPromotion(kind));
        }
        Some(kind)
    } else {
        None
    };

    let en_passant = is_en_passant_capture(board, from, to, piece, game_state.en_passant_target());
    let captured = if en_passant {
        Some(Piece::new(PieceKind::Pawn, mover.opposite()))
    } else {
        board.piece_at(to)
    };
    let castle = castle_side(piece, from, to);

    let next_board = board_after_move(
        board,
        from,
        to,
        piece,
        game_state.en_passant_target(),
        promotion,
    );

    let mut castling_rights = game_state.castling_rights();
    update_castling_rights(&mut castling_rights, piece, from, to);

    let double_step = piece.kind == PieceKind::Pawn && from.row().abs_diff(to.row()) == 2;
    let en_passant_target = if double_step {
        from.offset(mover.pawn_direction(), 0)
    } else {
        None
    };

    let state = GameState::from_parts(
        next_board,
        mover.opposite(),
        castling_rights,
        en_passant_target,
    );
    trace!(
        %from,
        %to,
        next_player = %state.current_player(),
        status = %state.status(),
        "applied move"
    );

    let record = MoveRecord {
        piece,
        from,
        to,
        captured,
        promotion,
        castle,
        en_passant,
        gives_check: state.in_check(),
        checkmate: state.status() == GameStatus::Checkmate,
    };

    Ok(AppliedMove { state, record })
}

/// The board after `piece` moves `from` -> `to`: the piece (or its
/// promotion) lands on `to`, a castling rook jumps next to the king, and a
/// pawn captured en passant is removed. The source board is not modified.
pub fn board_after_move(
    board: &Board,
    from: Position,
    to: Position,
    piece: Piece,
    en_passant_target: Option<Position>,
    promotion: Option<PieceKind>,
) -> Board {
    let mut next = board.with_piece_moved(from, to);

    if let Some(kind) = promotion.filter(|_| is_promotion(piece, to)) {
        next.set(to, Some(Piece::new(kind, piece.color)));
    }

    if let Some(side) = castle_side(piece, from, to) {
        let lane = castling_lane(side);
        if let (Some(rook_from), Some(rook_to)) = (
            Position::new(from.row(), lane.rook_from_col),
            Position::new(from.row(), lane.rook_to_col),
        ) {
            next = next.with_piece_moved(rook_from, rook_to);
        }
    }

    if let Some(victim) = en_passant_victim_of(board, from, to, piece, en_passant_target) {
        next.set(victim, None);
    }

    next
}

#[inline]
pub(crate) fn is_promotion(piece: Piece, to: Position) -> bool {
    piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row()
}

fn is_en_passant_capture(
    board: &Board,
    from: Position,
    to: Position,
    piece: Piece,
    en_passant_target: Option<Position>,
) -> bool {
    en_passant_victim_of(board, from, to, piece, en_passant_target).is_some()
}

/// Square of the pawn removed when this move is an en-passant capture.
fn en_passant_victim_of(
    board: &Board,
    from: Position,
    to: Position,
    piece: Piece,
    en_passant_target: Option<Position>,
) -> Option<Position> {
    if piece.kind != PieceKind::Pawn || en_passant_target != Some(to) || from.col() == to.col() {
        return None;
    }
    en_passant_victim(board, to, piece.color)
}

fn castle_side(piece: Piece, from: Position, to: Position) -> Option<CastleSide> {
    if piece.kind != PieceKind::King
        || from.row() != to.row()
        || from.col() != KING_HOME_COL
        || from.col().abs_diff(to.col()) != 2
    {
        return None;
    }
    if to.col() > from.col() {
        Some(CastleSide::KingSide)
    } else {
        Some(CastleSide::QueenSide)
    }
}

fn update_castling_rights(rights: &mut CastlingRights, piece: Piece, from: Position, to: Position) {
    if piece.kind == PieceKind::King {
        rights.revoke_all(piece.color);
    }

    // A rook leaving its corner, or anything landing on a corner (capturing
    // the rook there), ends castling on that side.
    for square in [from, to] {
        for color in [Color::White, Color::Black] {
            if square.row() != color.home_row() {
                continue;
            }
            for side in [CastleSide::KingSide, CastleSide::QueenSide] {
                if square.col() == castling_lane(side).rook_from_col {
                    rights.revoke(color, side);
                }
            }
        }
    }
}
