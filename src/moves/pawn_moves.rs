//! Pawn movement patterns.
//!
//! Pushes and captures are split because only the diagonal squares count as
//! attacks when testing whether a square is under fire.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};

/// The (up to two) diagonal squares a pawn of `color` on `from` attacks.
pub fn pawn_capture_squares(from: Position, color: Color) -> impl Iterator<Item = Position> {
    let d_row = color.pawn_direction();
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |d_col| from.offset(d_row, d_col))
}

/// Forward pushes: one square if empty, two from the starting row if both
/// squares are empty.
pub fn pawn_push_targets(board: &Board, from: Position, color: Color) -> Vec<Position> {
    let d_row = color.pawn_direction();
    let mut targets = Vec::with_capacity(2);

    let Some(one_step) = from.offset(d_row, 0) else {
        return targets;
    };
    if !board.is_empty_at(one_step) {
        return targets;
    }
    targets.push(one_step);

    if from.row() == color.pawn_start_row() {
        if let Some(two_step) = one_step.offset(d_row, 0) {
            if board.is_empty_at(two_step) {
                targets.push(two_step);
            }
        }
    }

    targets
}
