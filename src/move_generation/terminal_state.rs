//! Checkmate / stalemate classification.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;

pub fn is_checkmate(
    board: &Board,
    color: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Position>,
) -> bool {
    is_in_check(board, color)
        && !has_any_legal_move(board, color, castling_rights, en_passant_target)
}

pub fn is_stalemate(
    board: &Board,
    color: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Position>,
) -> bool {
    !is_in_check(board, color)
        && !has_any_legal_move(board, color, castling_rights, en_passant_target)
}

/// Status for `color` to move. Runs the move scan once rather than once per
/// predicate.
pub fn classify_status(
    board: &Board,
    color: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Position>,
) -> GameStatus {
    if has_any_legal_move(board, color, castling_rights, en_passant_target) {
        GameStatus::Playing
    } else if is_in_check(board, color) {
        GameStatus::Checkmate
    } else {
        GameStatus::Stalemate
    }
}
