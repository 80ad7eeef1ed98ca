//! Legality filter.
//!
//! Each pseudo-legal destination is played on a scratch copy of the board
//! (with the same piece relocations the move applier performs, including the
//! en-passant removal and the castling rook) and dropped if the mover's king
//! is attacked afterward.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::board_after_move;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::pseudo_move_generator::pseudo_legal_moves;

pub fn legal_moves_for(
    board: &Board,
    from: Position,
    piece: Piece,
    castling_rights: CastlingRights,
    en_passant_target: Option<Position>,
) -> Vec<Position> {
    pseudo_legal_moves(board, from, piece, castling_rights, en_passant_target)
        .into_iter()
        .filter(|to| {
            let scratch = board_after_move(board, from, *to, piece, en_passant_target, None);
            !is_in_check(&scratch, piece.color)
        })
        .collect()
}

/// Short-circuits on the first piece of `color` with a legal move.
pub fn has_any_legal_move(
    board: &Board,
    color: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Position>,
) -> bool {
    board.pieces_of(color).any(|(from, piece)| {
        !legal_moves_for(board, from, piece, castling_rights, en_passant_target).is_empty()
    })
}

/// Every `(from, to)` pair the side to move may play.
pub fn all_legal_moves(game_state: &GameState) -> Vec<(Position, Position)> {
    let board = game_state.board();
    board
        .pieces_of(game_state.current_player())
        .flat_map(|(from, piece)| {
            legal_moves_for(
                board,
                from,
                piece,
                game_state.castling_rights(),
                game_state.en_passant_target(),
            )
            .into_iter()
            .map(move |to| (from, to))
        })
        .collect()
}
