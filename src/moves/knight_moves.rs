//! Knight jumps.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::moves::sliding::step_targets;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[inline]
pub fn knight_targets(board: &Board, from: Position, color: Color) -> Vec<Position> {
    step_targets(board, from, color, &KNIGHT_OFFSETS)
}
