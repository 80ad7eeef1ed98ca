//! King single-step movement. Castling is generated separately because it
//! depends on rights and attack information, not just occupancy.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::moves::sliding::step_targets;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[inline]
pub fn king_step_targets(board: &Board, from: Position, color: Color) -> Vec<Position> {
    step_targets(board, from, color, &KING_OFFSETS)
}
