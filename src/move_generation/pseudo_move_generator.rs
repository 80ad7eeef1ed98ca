//! Pseudo-legal move generation.
//!
//! Destinations consistent with each piece's movement pattern and board
//! occupancy. Whether the move leaves the mover's king in check is left to
//! the legality filter.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::pseudo_moves_king::king_moves;
use crate::move_generation::pseudo_moves_pawn::pawn_moves;
use crate::moves::bishop_moves::bishop_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::queen_moves::queen_targets;
use crate::moves::rook_moves::rook_targets;

pub fn pseudo_legal_moves(
    board: &Board,
    from: Position,
    piece: Piece,
    castling_rights: CastlingRights,
    en_passant_target: Option<Position>,
) -> Vec<Position> {
    let color = piece.color;
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, color, en_passant_target),
        PieceKind::Knight => knight_targets(board, from, color),
        PieceKind::Bishop => bishop_targets(board, from, color),
        PieceKind::Rook => rook_targets(board, from, color),
        PieceKind::Queen => queen_targets(board, from, color),
        PieceKind::King => king_moves(board, from, color, castling_rights),
    }
}
