//! Bishop movement: the four diagonal rays.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::moves::sliding::slide_targets;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[inline]
pub fn bishop_targets(board: &Board, from: Position, color: Color) -> Vec<Position> {
    slide_targets(board, from, color, &BISHOP_DIRECTIONS)
}
